use crate::modules::analytics::application::tracking_handler::AnalyticsHandler;
use crate::shared::infrastructure::record_slot::RecordSlot;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analytics: Arc<AnalyticsHandler<dyn RecordSlot>>,
}

impl AppState {
    pub fn new(slot: Arc<dyn RecordSlot>) -> Self {
        Self {
            analytics: Arc::new(AnalyticsHandler::new(slot)),
        }
    }
}
