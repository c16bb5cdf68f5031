use crate::modules::analytics::core::aggregate::{Aggregate, MAX_TOTAL_VISITORS};
use crate::shared::infrastructure::record_slot::{RecordSlot, SlotError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("cannot serialize aggregate: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save access to the single persisted Aggregate.
pub struct AggregateStore<TSlot>
where
    TSlot: RecordSlot + ?Sized,
{
    slot: Arc<TSlot>,
}

impl<TSlot> AggregateStore<TSlot>
where
    TSlot: RecordSlot + ?Sized,
{
    pub fn new(slot: Arc<TSlot>) -> Self {
        Self { slot }
    }

    pub fn initialize(&self) -> Aggregate {
        Aggregate::initialize(Utc::now())
    }

    /// A missing or undecodable record loads as a fresh aggregate. Any other slot failure is
    /// returned to the caller.
    pub async fn load(&self) -> Result<Aggregate, StoreError> {
        let Some(bytes) = self.slot.read().await? else {
            debug!(slot = %self.slot.describe(), "no persisted analytics yet");
            return Ok(self.initialize());
        };
        match serde_json::from_slice::<Aggregate>(&bytes) {
            Ok(mut aggregate) => {
                aggregate.total_visitors = aggregate.total_visitors.min(MAX_TOTAL_VISITORS);
                Ok(aggregate)
            }
            Err(error) => {
                warn!(
                    slot = %self.slot.describe(),
                    %error,
                    "persisted analytics unreadable, starting from a fresh aggregate"
                );
                Ok(self.initialize())
            }
        }
    }

    /// Full overwrite of the persisted record.
    pub async fn save(&self, mut aggregate: Aggregate) -> Result<Aggregate, StoreError> {
        aggregate.stamp(Utc::now());
        let bytes = serde_json::to_vec_pretty(&aggregate)?;
        self.slot.write(bytes).await?;
        Ok(aggregate)
    }

    /// Saves a zeroed aggregate; the stamp goes through `save` like any other write.
    pub async fn reset(&self) -> Result<Aggregate, StoreError> {
        self.save(self.initialize()).await
    }
}
