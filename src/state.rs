// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
