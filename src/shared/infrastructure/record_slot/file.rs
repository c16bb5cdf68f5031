// File implementation of the RecordSlot port.
//
// Responsibilities
// - Keep the record as one file at a fixed path.
// - Replace it atomically: write a sibling temp file, fsync it, then rename over the target.
// - Report a missing file as "nothing written yet"; every other i/o failure is an error.

use crate::shared::infrastructure::record_slot::{RecordSlot, SlotError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "record".to_string());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()))
    }

    async fn write_temp(temp: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await
    }
}

#[async_trait::async_trait]
impl RecordSlot for JsonFileSlot {
    async fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::Io(e)),
        }
    }

    async fn write(&self, bytes: Vec<u8>) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let temp = self.temp_path();
        if let Err(e) = Self::write_temp(&temp, &bytes).await {
            let _ = fs::remove_file(&temp).await;
            return Err(SlotError::Io(e));
        }
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(SlotError::Io(e));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
