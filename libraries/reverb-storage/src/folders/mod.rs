use crate::error::Result;
use reverb_core::types::{Folder, FolderId};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct FolderRow {
    id: i64,
    parent_id: Option<i64>,
    title: String,
    path: String,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Folder {
            id: row.id,
            parent_id: row.parent_id,
            title: row.title,
            path: row.path,
        }
    }
}

pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Folder>> {
    let pattern = format!("%{query}%");

    let rows = sqlx::query_as::<_, FolderRow>(
        "SELECT id, parent_id, title, path
         FROM folders
         WHERE title LIKE ?
         ORDER BY title",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Folder::from).collect())
}

pub async fn create(
    pool: &SqlitePool,
    parent_id: Option<FolderId>,
    title: &str,
    path: &str,
) -> Result<Folder> {
    let result = sqlx::query("INSERT INTO folders (parent_id, title, path) VALUES (?, ?, ?)")
        .bind(parent_id)
        .bind(title)
        .bind(path)
        .execute(pool)
        .await?;

    Ok(Folder {
        id: result.last_insert_rowid(),
        parent_id,
        title: title.to_string(),
        path: path.to_string(),
    })
}
