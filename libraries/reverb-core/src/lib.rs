//! Reverb Core
//!
//! Domain types, the music-store abstraction, and the search dispatch logic
//! shared by the server and storage crates.
//!
//! The core crate defines:
//! - **Domain Types**: `Artist`, `Album`, `Song`, `Folder`
//! - **Store Trait**: `MusicStore`, the data-access boundary for searches
//! - **Search Logic**: `TypeSet` selection and the fail-fast dispatcher
//! - **Error Handling**: unified `CoreError` and `Result` types

#![forbid(unsafe_code)]

pub mod error;
pub mod search;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use search::{search_library, SearchKind, SearchResults, TypeSet};
pub use store::MusicStore;
pub use types::{Album, AlbumId, Artist, ArtistId, Folder, FolderId, Song, SongId};
