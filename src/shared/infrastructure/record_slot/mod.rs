use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A single named location holding exactly one serialized record.
///
/// `read` returns `Ok(None)` while nothing has been written yet. `write` replaces the whole
/// record; a reader never observes a partially written one.
#[async_trait]
pub trait RecordSlot: Send + Sync {
    async fn read(&self) -> Result<Option<Vec<u8>>, SlotError>;
    async fn write(&self, bytes: Vec<u8>) -> Result<(), SlotError>;
    fn describe(&self) -> String;
}

pub mod file;
pub mod in_memory;
