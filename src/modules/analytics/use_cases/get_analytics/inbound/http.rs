use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::analytics::adapters::inbound::http_error::failure;
use crate::shell::state::AppState;

/// Every caller gets the same shared aggregate.
pub async fn handle(State(state): State<AppState>) -> Response {
    match state.analytics.snapshot().await {
        Ok(aggregate) => Json(aggregate).into_response(),
        Err(e) => failure(e),
    }
}
