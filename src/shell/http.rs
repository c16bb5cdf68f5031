use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::analytics::use_cases::get_analytics::inbound::http as get_http;
use crate::modules::analytics::use_cases::record_click::inbound::http as click_http;
use crate::modules::analytics::use_cases::record_pageview::inbound::http as pageview_http;
use crate::modules::analytics::use_cases::record_visitor::inbound::http as visitor_http;
use crate::modules::analytics::use_cases::reset_analytics::inbound::http as reset_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analytics", get(get_http::handle))
        .route("/api/analytics/visitor", post(visitor_http::handle))
        .route("/api/analytics/pageview", post(pageview_http::handle))
        .route("/api/analytics/click", post(click_http::handle))
        .route("/api/analytics/reset", post(reset_http::handle))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
