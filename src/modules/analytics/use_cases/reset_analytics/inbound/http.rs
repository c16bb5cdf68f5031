use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::analytics::adapters::inbound::http_error::failure;
use crate::shell::state::AppState;

pub const RESET_MESSAGE: &str = "Analytics reset";

#[derive(Serialize)]
pub struct ResetAnalyticsResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.analytics.reset_all().await {
        Ok(_) => Json(ResetAnalyticsResponse {
            success: true,
            message: RESET_MESSAGE,
        })
        .into_response(),
        Err(e) => failure(e),
    }
}
