//! # lemon-ingest
//!
//! Fills the local menu store from the remote catalog exactly once and
//! serves search + section filter queries against it.
//!
//! The flow on first activation:
//! 1. create the menu table if needed
//! 2. read the store; if it has rows, use them
//! 3. otherwise fetch the catalog once, insert it as one batch, read back

pub mod coordinator;
pub mod source;
pub mod store;

use std::time::Duration;

use lemon_db::DbError;

pub use coordinator::{active_categories, Coordinator, IngestState};
pub use source::{CatalogSource, HttpCatalog};
pub use store::MenuStore;

/// Default bound on a single catalog fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure to obtain the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog server returned status {0}")]
    Status(u16),

    #[error("catalog payload is malformed: {0}")]
    Parse(String),

    #[error("catalog fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors surfaced by the coordinator. Neither kind is retried here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Storage fault: the local database could not be opened, read or written.
    #[error("storage fault: {0}")]
    Storage(#[from] DbError),

    /// Fetch fault: the catalog could not be fetched or parsed. Nothing was written.
    #[error("fetch fault: {0}")]
    Fetch(#[from] FetchError),
}

impl IngestError {
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_fetch_fault(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
