//! Shared application state.

use std::sync::Arc;

use quickcache_core::QuickCache;
use tokio::sync::Mutex;

use crate::error::{ApiError, Result};
use crate::services::storage::StorageService;

/// Shared application state
///
/// The model sits behind a single mutex: every command holds the lock
/// from target resolution through the snapshot save, so commands run one
/// at a time in arrival order.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<Mutex<QuickCache>>,
    pub storage: Arc<StorageService>,
}

impl AppState {
    pub fn new(model: QuickCache, storage: StorageService) -> Self {
        Self {
            model: Arc::new(Mutex::new(model)),
            storage: Arc::new(storage),
        }
    }

    /// Run a mutating command and persist the result.
    ///
    /// If the snapshot cannot be saved the model, display filter included,
    /// is restored to its state before the command.
    pub async fn apply<T, F>(&self, command: F) -> Result<T>
    where
        F: FnOnce(&mut QuickCache) -> quickcache_core::Result<T>,
    {
        let mut model = self.model.lock().await;
        let before = model.clone();

        let value = command(&mut *model).map_err(|err| {
            tracing::warn!(kind = err.kind(), "Command rejected: {}", err);
            ApiError::from(err)
        })?;

        if let Err(err) = self.storage.save(&model.snapshot()).await {
            tracing::error!("Failed to save snapshot: {}", err);
            *model = before;
            return Err(err.into());
        }

        Ok(value)
    }
}
