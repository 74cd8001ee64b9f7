/// Shared helpers for server integration tests
use async_trait::async_trait;
use axum::Router;
use reverb_core::{
    error::{CoreError, Result as CoreResult},
    types::{Album, Artist, Folder, Song},
    MusicStore,
};
use reverb_server::{
    config::{ConfigSource, ServerConfig, StaticConfig},
    create_router,
    error::{Result, ServerError},
    AppState,
};
use std::sync::{Arc, Mutex};

/// Store stub with canned results, recording calls and failing on demand
pub struct StubStore {
    calls: Mutex<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl StubStore {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        })
    }

    pub fn failing_on(op: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(op),
        })
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) -> CoreResult<()> {
        self.calls.lock().unwrap().push(op);
        if self.fail_on == Some(op) {
            return Err(CoreError::Database("connection lost".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MusicStore for StubStore {
    async fn search_artists(&self, _query: &str) -> CoreResult<Vec<Artist>> {
        self.record("artists")?;
        Ok(vec![Artist {
            id: 1,
            name: "The Beatles".to_string(),
        }])
    }

    async fn search_albums(&self, _query: &str) -> CoreResult<Vec<Album>> {
        self.record("albums")?;
        Ok(vec![Album {
            id: 1,
            artist_id: 1,
            artist: Some("The Beatles".to_string()),
            title: "Abbey Road".to_string(),
            year: Some(1969),
        }])
    }

    async fn search_songs(&self, _query: &str) -> CoreResult<Vec<Song>> {
        self.record("songs")?;
        Ok(vec![Song {
            id: 1,
            artist_id: 1,
            artist: Some("The Beatles".to_string()),
            album_id: 1,
            album: Some("Abbey Road".to_string()),
            title: "Come Together".to_string(),
            track_number: Some(1),
            year: Some(1969),
            duration_secs: Some(259),
            file_path: "/music/beatles/abbey-road/01.flac".to_string(),
        }])
    }

    async fn search_folders(&self, _query: &str) -> CoreResult<Vec<Folder>> {
        self.record("folders")?;
        Ok(vec![Folder {
            id: 1,
            parent_id: None,
            title: "beatles".to_string(),
            path: "/music/beatles".to_string(),
        }])
    }
}

/// Config source that always fails to load
pub struct FailingConfig;

impl ConfigSource for FailingConfig {
    fn load(&self) -> Result<ServerConfig> {
        Err(ServerError::Config("config unavailable".to_string()))
    }
}

/// Test configuration with a fixed media folder
pub fn test_config(media_folder: &str) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.storage.media_folder = media_folder.to_string();
    config
}

/// Build a router over the given store with a default config
pub fn create_test_app(store: Arc<StubStore>) -> Router {
    let config = Arc::new(StaticConfig::new(test_config("/srv/media/Music/")));
    create_router(AppState::new(store, config))
}

/// Build a router with an explicit config source
pub fn create_test_app_with_config(
    store: Arc<StubStore>,
    config: Arc<dyn ConfigSource>,
) -> Router {
    create_router(AppState::new(store, config))
}
