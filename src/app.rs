//! Application state and initialization
//!
//! All services are initialized here and made available through AppState.
//! The storage handle is passed explicitly to every service so tests can
//! substitute a store rooted in a temp directory.

use crate::error::{AppError, Result};
use crate::services::{HistoryService, PinService, SkipService};
use crate::storage::{KvStore, Repository};
use std::path::PathBuf;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub repository: Repository,
    pub history: HistoryService,
    pub skips: SkipService,
    pub pin: PinService,
}

impl AppState {
    /// Initialize storage and services rooted at the given data directory
    pub async fn initialize(data_dir: PathBuf) -> Result<Self> {
        tracing::info!("Initializing application (data dir: {:?})", data_dir);

        let store = KvStore::new(data_dir.clone());
        store.initialize().await?;

        let repository = Repository::new(store);
        let history = HistoryService::new(repository.clone());
        let skips = SkipService::new(repository.clone());
        let pin = PinService::new(repository.store().clone());

        tracing::info!("Application initialized successfully");

        Ok(Self {
            data_dir,
            repository,
            history,
            skips,
            pin,
        })
    }
}

/// Platform app-data directory for the application
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("medremind"))
        .ok_or_else(|| AppError::Generic("Could not determine app data directory".to_string()))
}
