use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::analytics::adapters::inbound::http_error::failure;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordClickResponse {
    pub success: bool,
    pub total_clicks: u64,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.analytics.record_click().await {
        Ok(total_clicks) => Json(RecordClickResponse {
            success: true,
            total_clicks,
        })
        .into_response(),
        Err(e) => failure(e),
    }
}
