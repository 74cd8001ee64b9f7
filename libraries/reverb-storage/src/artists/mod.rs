use crate::error::Result;
use reverb_core::types::Artist;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Artist {
            id: row.id,
            name: row.name,
        }
    }
}

pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Artist>> {
    let pattern = format!("%{query}%");

    let rows = sqlx::query_as::<_, ArtistRow>(
        "SELECT id, name
         FROM artists
         WHERE name LIKE ?
         ORDER BY name",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Artist::from).collect())
}

pub async fn create(pool: &SqlitePool, name: &str) -> Result<Artist> {
    let result = sqlx::query("INSERT INTO artists (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(Artist {
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}
