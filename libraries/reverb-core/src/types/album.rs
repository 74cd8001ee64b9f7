//! Album types

use super::ArtistId;
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub artist_id: ArtistId,
    pub artist: Option<String>, // Denormalized
    pub title: String,
    pub year: Option<i32>,
}
