//! JSON snapshot storage for the flashcard collection.

use std::path::{Path, PathBuf};

use quickcache_core::FlashcardRecord;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reads and writes the ordered list of flashcard records.
///
/// Without a path the service is disabled: loads return nothing and saves
/// are no-ops.
#[derive(Debug, Clone)]
pub struct StorageService {
    path: Option<PathBuf>,
}

impl StorageService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Load all records. A missing file is an empty collection.
    pub async fn load(&self) -> Result<Vec<FlashcardRecord>, StorageError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };

        match fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No snapshot at {}, starting empty", path.display());
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Save all records, replacing the previous snapshot.
    ///
    /// Writes to a sibling temp file first and renames it over the target.
    pub async fn save(&self, records: &[FlashcardRecord]) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, path).await?;

        tracing::debug!(count = records.len(), "Saved snapshot to {}", path.display());
        Ok(())
    }
}
