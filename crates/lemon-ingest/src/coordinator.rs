//! Ingestion coordinator: single population of the store plus menu queries.

use std::sync::Arc;
use std::time::Duration;

use lemon_types::MenuItem;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::source::CatalogSource;
use crate::store::MenuStore;
use crate::{FetchError, Result};

/// Where the store is in its population lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngestState {
    /// `ensure_populated` has not run yet.
    Uninitialized,
    /// The menu table exists; contents not yet checked.
    SchemaReady,
    /// The table exists and holds no rows.
    Empty,
    /// The table holds one full catalog batch.
    Populated,
}

/// Guarantees the store is filled from the catalog at most once and serves
/// queries against it.
///
/// Population holds the write side of an internal lock for the whole
/// check-fetch-insert sequence; queries hold the read side. Concurrent
/// `ensure_populated` callers therefore wait for the first one and then find
/// the store populated.
pub struct Coordinator {
    store: MenuStore,
    source: Arc<dyn CatalogSource>,
    fetch_timeout: Duration,
    state: RwLock<IngestState>,
}

impl Coordinator {
    pub fn new(store: MenuStore, source: Arc<dyn CatalogSource>, fetch_timeout: Duration) -> Self {
        Self {
            store,
            source,
            fetch_timeout,
            state: RwLock::new(IngestState::Uninitialized),
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Last observed lifecycle state. Waits while a population is in flight.
    pub async fn state(&self) -> IngestState {
        *self.state.read().await
    }

    /// Return the stored menu, fetching and inserting the catalog first if the
    /// store is empty.
    ///
    /// On a fetch fault nothing is written and the store stays empty, so the
    /// call can simply be repeated.
    pub async fn ensure_populated(&self) -> Result<Vec<MenuItem>> {
        let mut state = self.state.write().await;

        self.store.ensure_schema().await?;
        *state = IngestState::SchemaReady;

        let existing = self.store.get_all().await?;
        if !existing.is_empty() {
            debug!("Menu store already holds {} items, skipping fetch", existing.len());
            *state = IngestState::Populated;
            return Ok(existing);
        }
        *state = IngestState::Empty;

        info!("Menu store is empty, fetching catalog");
        let items = match tokio::time::timeout(self.fetch_timeout, self.source.fetch()).await {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                warn!("Catalog fetch failed: {e}");
                return Err(e.into());
            }
            Err(_) => {
                warn!("Catalog fetch timed out after {:?}", self.fetch_timeout);
                return Err(FetchError::Timeout(self.fetch_timeout).into());
            }
        };

        self.store.insert_batch(&items).await?;
        let stored = self.store.get_all().await?;
        *state = if stored.is_empty() {
            IngestState::Empty
        } else {
            IngestState::Populated
        };

        info!("Menu store populated with {} items", stored.len());
        Ok(stored)
    }

    /// Delete every menu row. The next `ensure_populated` fetches again.
    pub async fn clear_all(&self) -> Result<usize> {
        let mut state = self.state.write().await;
        let deleted = self.store.clear_all().await?;
        *state = IngestState::Empty;
        Ok(deleted)
    }

    /// Remove the menu table. Queries fail until `ensure_populated` recreates it.
    pub async fn drop_schema(&self) -> Result<()> {
        let mut state = self.state.write().await;
        self.store.drop_schema().await?;
        *state = IngestState::Uninitialized;
        Ok(())
    }

    /// Search + section filter.
    ///
    /// `selections[i]` toggles `sections[i]`. When nothing is selected every
    /// section is active.
    pub async fn query<S: AsRef<str>>(
        &self,
        search_text: &str,
        selections: &[bool],
        sections: &[S],
    ) -> Result<Vec<MenuItem>> {
        let active = active_categories(selections, sections);
        let _population = self.state.read().await;
        let rows = self.store.filter(search_text, active.as_slice()).await?;
        debug!(
            "Query {:?} over {} sections returned {} items",
            search_text,
            active.len(),
            rows.len()
        );
        Ok(rows)
    }
}

/// Sections whose selection flag is set, or all of them if none is.
///
/// A section with no corresponding flag counts as unselected.
pub fn active_categories<'a, S: AsRef<str>>(selections: &[bool], sections: &'a [S]) -> Vec<&'a str> {
    let any_selected = sections
        .iter()
        .enumerate()
        .any(|(i, _)| selections.get(i).copied().unwrap_or(false));

    sections
        .iter()
        .enumerate()
        .filter(|(i, _)| !any_selected || selections.get(*i).copied().unwrap_or(false))
        .map(|(_, s)| s.as_ref())
        .collect()
}
