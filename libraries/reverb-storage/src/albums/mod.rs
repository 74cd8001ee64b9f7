use crate::error::Result;
use reverb_core::types::{Album, ArtistId};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct AlbumRow {
    id: i64,
    artist_id: i64,
    artist_name: Option<String>,
    title: String,
    year: Option<i32>,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Album {
            id: row.id,
            artist_id: row.artist_id,
            artist: row.artist_name,
            title: row.title,
            year: row.year,
        }
    }
}

pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Album>> {
    let pattern = format!("%{query}%");

    let rows = sqlx::query_as::<_, AlbumRow>(
        "SELECT al.id, al.artist_id, al.title, al.year,
                ar.name AS artist_name
         FROM albums al
         LEFT JOIN artists ar ON al.artist_id = ar.id
         WHERE al.title LIKE ? OR ar.name LIKE ?
         ORDER BY al.title",
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Album::from).collect())
}

pub async fn create(
    pool: &SqlitePool,
    artist_id: ArtistId,
    title: &str,
    year: Option<i32>,
) -> Result<Album> {
    let result = sqlx::query("INSERT INTO albums (artist_id, title, year) VALUES (?, ?, ?)")
        .bind(artist_id)
        .bind(title)
        .bind(year)
        .execute(pool)
        .await?;

    Ok(Album {
        id: result.last_insert_rowid(),
        artist_id,
        artist: None,
        title: title.to_string(),
        year,
    })
}
