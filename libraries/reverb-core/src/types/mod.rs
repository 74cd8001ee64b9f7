mod album;
mod artist;
mod folder;
mod song;

pub use album::{Album, AlbumId};
pub use artist::{Artist, ArtistId};
pub use folder::{Folder, FolderId};
pub use song::{Song, SongId};
