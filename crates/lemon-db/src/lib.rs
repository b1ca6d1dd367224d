//! # lemon-db
//!
//! Local persistence for the Little Lemon app.
//! Manages the single SQLite database holding the cached menu and the
//! user profile blob.
//!
//! ## Layout
//!
//! - `menu` table: one row per dish, filled from exactly one catalog batch
//! - `kv_store` table: opaque JSON blobs keyed by name (the user profile)
//!
//! Tables are created lazily by the operations that own them; opening a
//! database never creates the menu table.

pub mod filter;
pub mod queries;
pub mod schema;

use rusqlite::Connection;
use std::path::Path;

pub use filter::MenuFilter;

/// Database error types. Every variant is a storage fault.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Open or create the database at the given path.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    tracing::debug!("Opened database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database (for testing).
pub fn open_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure SQLite pragmas.
fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA busy_timeout = 5000;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}
