pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::{api::JobBoardApi, http_api::HttpJobBoardApi};
use crate::stores::{ApplicationStore, JobStore, ProfileStore, SessionStore};

/// The four stores, sharing one backend connection (and its session cookie).
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub jobs: JobStore,
    pub applications: ApplicationStore,
    pub profile: ProfileStore,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let api = HttpJobBoardApi::new(config)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn JobBoardApi>) -> Self {
        Self {
            session: SessionStore::new(api.clone()),
            jobs: JobStore::new(api.clone()),
            applications: ApplicationStore::new(api.clone()),
            profile: ProfileStore::new(api),
        }
    }
}
