//! Explicit menu store handle.

use std::path::Path;
use std::sync::Arc;

use lemon_db::queries::menu;
use lemon_db::{DbError, MenuFilter};
use lemon_types::{MenuItem, NewMenuItem};
use rusqlite::Connection;
use tokio::sync::Mutex;

type DbResult<T> = std::result::Result<T, DbError>;

/// Shared handle to the menu database.
///
/// Cloning is cheap; all clones use the same connection, and each method is
/// one serialized statement (or one transaction for [`MenuStore::insert_batch`]).
#[derive(Clone)]
pub struct MenuStore {
    db: Arc<Mutex<Connection>>,
}

impl MenuStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open the database file at `path`.
    pub fn open(path: &Path) -> DbResult<Self> {
        lemon_db::open(path).map(Self::new)
    }

    /// In-memory store (for testing).
    pub fn open_memory() -> DbResult<Self> {
        lemon_db::open_memory().map(Self::new)
    }

    /// The underlying connection, for collaborators with their own tables.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.db.clone()
    }

    pub async fn ensure_schema(&self) -> DbResult<()> {
        let db = self.db.lock().await;
        menu::ensure_schema(&db)
    }

    pub async fn drop_schema(&self) -> DbResult<()> {
        let db = self.db.lock().await;
        menu::drop_schema(&db)
    }

    pub async fn insert_batch(&self, items: &[NewMenuItem]) -> DbResult<usize> {
        let db = self.db.lock().await;
        menu::insert_batch(&db, items)
    }

    pub async fn get_all(&self) -> DbResult<Vec<MenuItem>> {
        let db = self.db.lock().await;
        menu::get_all(&db)
    }

    /// Rows in one of `active_categories` whose name contains `query`.
    ///
    /// An empty category set returns no rows.
    pub async fn filter<S: AsRef<str>>(
        &self,
        query: &str,
        active_categories: &[S],
    ) -> DbResult<Vec<MenuItem>> {
        let menu_filter = MenuFilter::new()
            .categories(active_categories)
            .name_contains(query);
        let db = self.db.lock().await;
        menu::filter(&db, &menu_filter)
    }

    pub async fn count(&self) -> DbResult<u64> {
        let db = self.db.lock().await;
        menu::count(&db)
    }

    pub async fn clear_all(&self) -> DbResult<usize> {
        let db = self.db.lock().await;
        menu::clear_all(&db)
    }
}
