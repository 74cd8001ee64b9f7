//! Store trait for the music-library data boundary

use crate::error::Result;
use crate::types::{Album, Artist, Folder, Song};
use async_trait::async_trait;

/// Data-access boundary for library searches
///
/// This trait abstracts the backing store so the server can run against the
/// `SQLite` implementation in `reverb-storage` or any other backend. Each
/// operation takes a free-text query and returns matching records in
/// store-defined order.
#[async_trait]
pub trait MusicStore: Send + Sync {
    /// Search artists matching the query
    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>>;

    /// Search albums matching the query
    async fn search_albums(&self, query: &str) -> Result<Vec<Album>>;

    /// Search songs matching the query
    async fn search_songs(&self, query: &str) -> Result<Vec<Song>>;

    /// Search folders matching the query
    async fn search_folders(&self, query: &str) -> Result<Vec<Folder>>;
}
