use crate::shared::infrastructure::record_slot::{RecordSlot, SlotError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordSlot {
    bytes: RwLock<Option<Vec<u8>>>,
    offline: bool,
    read_only: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryRecordSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RwLock::new(Some(bytes.into())),
            ..Self::default()
        }
    }

    /// Fails both reads and writes.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Reads keep working, writes fail.
    pub fn toggle_read_only(&mut self) {
        self.read_only = !self.read_only;
    }

    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.bytes.read().await.clone()
    }
}

#[async_trait::async_trait]
impl RecordSlot for InMemoryRecordSlot {
    async fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        if self.offline {
            return Err(SlotError::Backend("Record slot offline".into()));
        }
        Ok(self.bytes.read().await.clone())
    }

    async fn write(&self, bytes: Vec<u8>) -> Result<(), SlotError> {
        if self.offline {
            return Err(SlotError::Backend("Record slot offline".into()));
        }
        if self.read_only {
            return Err(SlotError::Backend("Record slot is read-only".into()));
        }
        let delay = self.delay_write_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        *self.bytes.write().await = Some(bytes);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
