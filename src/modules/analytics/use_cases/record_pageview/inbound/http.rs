use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::analytics::adapters::inbound::http_error::failure;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPageviewResponse {
    pub success: bool,
    pub total_page_views: u64,
}

/// A body that is missing, not JSON, or carries a non-string `page` counts as the default page.
fn requested_page(body: &Result<Json<Value>, JsonRejection>) -> Option<&str> {
    match body {
        Ok(Json(value)) => value.get("page").and_then(Value::as_str),
        Err(_) => None,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    match state.analytics.record_pageview(requested_page(&body)).await {
        Ok(total_page_views) => Json(RecordPageviewResponse {
            success: true,
            total_page_views,
        })
        .into_response(),
        Err(e) => failure(e),
    }
}
