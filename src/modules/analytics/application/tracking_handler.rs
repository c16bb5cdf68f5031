use crate::modules::analytics::adapters::outbound::aggregate_store::{AggregateStore, StoreError};
use crate::modules::analytics::core::aggregate::Aggregate;
use crate::modules::analytics::core::mutation::{AnalyticsMutation, apply};
use crate::shared::infrastructure::record_slot::RecordSlot;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Runs every tracking operation as one load -> apply -> save transaction.
///
/// Mutating operations are serialized through `write_lock`, so concurrent requests cannot
/// lose each other's updates. `snapshot` reads without the lock: the slot replaces the record
/// atomically, so a reader sees either the previous or the next committed record.
pub struct AnalyticsHandler<TSlot>
where
    TSlot: RecordSlot + ?Sized,
{
    store: AggregateStore<TSlot>,
    write_lock: Mutex<()>,
}

impl<TSlot> AnalyticsHandler<TSlot>
where
    TSlot: RecordSlot + ?Sized,
{
    pub fn new(slot: Arc<TSlot>) -> Self {
        Self {
            store: AggregateStore::new(slot),
            write_lock: Mutex::new(()),
        }
    }

    pub async fn snapshot(&self) -> Result<Aggregate, ApplicationError> {
        Ok(self.store.load().await?)
    }

    pub async fn record_visitor(&self) -> Result<u64, ApplicationError> {
        self.track(AnalyticsMutation::Visitor).await
    }

    pub async fn record_pageview(&self, page: Option<&str>) -> Result<u64, ApplicationError> {
        self.track(AnalyticsMutation::pageview(page)).await
    }

    pub async fn record_click(&self) -> Result<u64, ApplicationError> {
        self.track(AnalyticsMutation::Click).await
    }

    pub async fn reset_all(&self) -> Result<Aggregate, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let reset = self.store.reset().await?;
        info!("analytics reset");
        Ok(reset)
    }

    async fn track(&self, mutation: AnalyticsMutation) -> Result<u64, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let loaded = self.store.load().await?;
        let saved = self.store.save(apply(loaded, &mutation)).await?;
        let tally = mutation.tally(&saved);
        debug!(?mutation, tally, "analytics mutation committed");
        Ok(tally)
    }
}
