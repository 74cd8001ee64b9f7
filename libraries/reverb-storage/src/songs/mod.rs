use crate::error::Result;
use reverb_core::types::{AlbumId, ArtistId, Song};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct SongRow {
    id: i64,
    artist_id: i64,
    artist_name: Option<String>,
    album_id: i64,
    album_title: Option<String>,
    title: String,
    track_number: Option<i64>,
    year: Option<i32>,
    duration_secs: Option<i64>,
    file_path: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            artist_id: row.artist_id,
            artist: row.artist_name,
            album_id: row.album_id,
            album: row.album_title,
            title: row.title,
            track_number: row.track_number.and_then(|n| u32::try_from(n).ok()),
            year: row.year,
            duration_secs: row.duration_secs.and_then(|n| u32::try_from(n).ok()),
            file_path: row.file_path,
        }
    }
}

pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Song>> {
    let pattern = format!("%{query}%");

    let rows = sqlx::query_as::<_, SongRow>(
        "SELECT s.id, s.artist_id, s.album_id, s.title, s.track_number,
                s.year, s.duration_secs, s.file_path,
                ar.name AS artist_name,
                al.title AS album_title
         FROM songs s
         LEFT JOIN artists ar ON s.artist_id = ar.id
         LEFT JOIN albums al ON s.album_id = al.id
         WHERE s.title LIKE ? OR ar.name LIKE ? OR al.title LIKE ?
         ORDER BY s.title",
    )
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Song::from).collect())
}

/// Data for inserting a new song
#[derive(Debug, Clone)]
pub struct NewSong {
    pub artist_id: ArtistId,
    pub album_id: AlbumId,
    pub title: String,
    pub track_number: Option<u32>,
    pub year: Option<i32>,
    pub duration_secs: Option<u32>,
    pub file_path: String,
}

pub async fn create(pool: &SqlitePool, song: NewSong) -> Result<Song> {
    let result = sqlx::query(
        "INSERT INTO songs (artist_id, album_id, title, track_number, year, duration_secs, file_path)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(song.artist_id)
    .bind(song.album_id)
    .bind(&song.title)
    .bind(song.track_number.map(i64::from))
    .bind(song.year)
    .bind(song.duration_secs.map(i64::from))
    .bind(&song.file_path)
    .execute(pool)
    .await?;

    Ok(Song {
        id: result.last_insert_rowid(),
        artist_id: song.artist_id,
        artist: None,
        album_id: song.album_id,
        album: None,
        title: song.title,
        track_number: song.track_number,
        year: song.year,
        duration_secs: song.duration_secs,
        file_path: song.file_path,
    })
}
