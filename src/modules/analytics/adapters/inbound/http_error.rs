use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::analytics::application::tracking_handler::ApplicationError;

#[derive(Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

/// A store failure never produces a success body; the caller gets a 500.
pub fn failure(err: ApplicationError) -> Response {
    error!(error = %err, "analytics request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse {
            success: false,
            error: err.to_string(),
        }),
    )
        .into_response()
}
