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
pub struct RecordVisitorResponse {
    pub success: bool,
    pub total_visitors: u64,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.analytics.record_visitor().await {
        Ok(total_visitors) => Json(RecordVisitorResponse {
            success: true,
            total_visitors,
        })
        .into_response(),
        Err(e) => failure(e),
    }
}
