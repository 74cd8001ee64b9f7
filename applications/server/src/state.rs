/// Shared application state
use crate::config::ConfigSource;
use reverb_core::MusicStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MusicStore>,
    pub config: Arc<dyn ConfigSource>,
}

impl AppState {
    pub fn new(store: Arc<dyn MusicStore>, config: Arc<dyn ConfigSource>) -> Self {
        Self { store, config }
    }
}
