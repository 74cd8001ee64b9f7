//! Reverb Storage
//!
//! `SQLite` persistence layer for the Reverb library. Implements the
//! [`reverb_core::MusicStore`] search boundary on top of a `sqlx` pool.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity kind owns its own queries
//! - **Embedded Migrations**: schema is applied at startup via `sqlx::migrate!`
//!
//! # Example
//!
//! ```rust,no_run
//! use reverb_core::MusicStore;
//! use reverb_storage::{create_pool, run_migrations, SqliteLibrary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://reverb.db").await?;
//! run_migrations(&pool).await?;
//!
//! let library = SqliteLibrary::new(pool);
//! let artists = library.search_artists("beatles").await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod library;

// Vertical slices
pub mod albums;
pub mod artists;
pub mod folders;
pub mod songs;

pub use error::StorageError;
pub use library::SqliteLibrary;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup to bring the schema up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await.map_err(StorageError::Migration)
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://reverb.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
