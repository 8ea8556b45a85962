//! Common test utilities and fixtures for integration tests.
//!
//! Each `TestContext` owns its own in-memory model. Contexts created with
//! [`TestContext::with_storage`] also persist snapshots to a scratch file
//! that is removed on drop.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use axum_test::TestServer;
use quickcache_backend::services::storage::StorageService;
use quickcache_backend::{router, AppState};
use quickcache_core::QuickCache;

pub struct TestContext {
    pub state: AppState,
    pub data_path: Option<PathBuf>,
    app: Router,
}

impl TestContext {
    /// Create a context that keeps flashcards in memory only.
    pub fn new() -> Self {
        Self::build(QuickCache::new(), StorageService::disabled(), None)
    }

    /// Create a context that saves every change to a fresh data file.
    pub async fn with_storage() -> Self {
        Self::from_path(fixtures::unique_data_path()).await
    }

    /// Create a context backed by an existing data file.
    pub async fn from_path(path: PathBuf) -> Self {
        let storage = StorageService::new(Some(path.clone()));
        let records = storage.load().await.expect("Failed to load data file");
        let model = QuickCache::from_records(records).expect("Invalid data file");
        Self::build(model, storage, Some(path))
    }

    fn build(model: QuickCache, storage: StorageService, data_path: Option<PathBuf>) -> Self {
        let state = AppState::new(model, storage);
        let app = router(state.clone());
        Self {
            state,
            data_path,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(path) = &self.data_path {
            if let Some(dir) = path.parent() {
                let _ = std::fs::remove_dir_all(dir);
            }
        }
    }
}
