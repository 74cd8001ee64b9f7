//! Song types

use super::{AlbumId, ArtistId};
use serde::{Deserialize, Serialize};

pub type SongId = i64;

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub artist_id: ArtistId,
    pub artist: Option<String>, // Denormalized
    pub album_id: AlbumId,
    pub album: Option<String>, // Denormalized
    pub title: String,
    pub track_number: Option<u32>,
    pub year: Option<i32>,
    pub duration_secs: Option<u32>,
    pub file_path: String,
}
