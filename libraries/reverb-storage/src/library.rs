use crate::{albums, artists, folders, songs};
use async_trait::async_trait;
use reverb_core::{
    error::Result,
    store::MusicStore,
    types::{Album, Artist, Folder, Song},
};
use sqlx::SqlitePool;

/// `SQLite`-backed music library
pub struct SqliteLibrary {
    pool: SqlitePool,
}

impl SqliteLibrary {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl MusicStore for SqliteLibrary {
    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>> {
        Ok(artists::search(&self.pool, query).await?)
    }

    async fn search_albums(&self, query: &str) -> Result<Vec<Album>> {
        Ok(albums::search(&self.pool, query).await?)
    }

    async fn search_songs(&self, query: &str) -> Result<Vec<Song>> {
        Ok(songs::search(&self.pool, query).await?)
    }

    async fn search_folders(&self, query: &str) -> Result<Vec<Folder>> {
        Ok(folders::search(&self.pool, query).await?)
    }
}
