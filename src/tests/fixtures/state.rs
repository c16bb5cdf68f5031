// Shared AppState fixtures backed by the in-memory record slot.

use crate::shared::infrastructure::record_slot::in_memory::InMemoryRecordSlot;
use crate::shell::state::AppState;
use axum::{body::Body, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    state_over(InMemoryRecordSlot::new())
}

pub fn make_offline_state() -> AppState {
    let mut slot = InMemoryRecordSlot::new();
    slot.toggle_offline();
    state_over(slot)
}

pub fn make_read_only_state() -> AppState {
    let mut slot = InMemoryRecordSlot::new();
    slot.toggle_read_only();
    state_over(slot)
}

pub fn state_over(slot: InMemoryRecordSlot) -> AppState {
    AppState::new(Arc::new(slot))
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
