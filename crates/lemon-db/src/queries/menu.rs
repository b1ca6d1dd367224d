//! Menu query functions.

use lemon_types::{MenuItem, NewMenuItem};
use rusqlite::{Connection, Row};

use crate::filter::MenuFilter;
use crate::schema::{DROP_MENU_TABLE, MENU_COLUMNS, MENU_TABLE};
use crate::{DbError, Result};

/// Create the menu table if it does not exist.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(MENU_TABLE)?;
    Ok(())
}

/// Remove the menu table. Every other menu function fails until
/// [`ensure_schema`] runs again.
pub fn drop_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(DROP_MENU_TABLE)?;
    tracing::info!("Dropped menu table");
    Ok(())
}

/// Append every item as a new row. Returns the number of rows written.
///
/// The batch is one transaction: a failing row rolls back the whole batch.
/// This is not an upsert; inserting the same items twice duplicates them.
pub fn insert_batch(conn: &Connection, items: &[NewMenuItem]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "insert into menu (name, price, description, image, category) values (?1, ?2, ?3, ?4, ?5)",
        )?;
        for item in items {
            stmt.execute(rusqlite::params![
                item.name,
                item.price,
                item.description,
                item.image,
                item.category,
            ])?;
        }
    }
    tx.commit()?;

    tracing::info!("Inserted {} menu items", items.len());
    Ok(items.len())
}

/// Every stored row, in storage order.
pub fn get_all(conn: &Connection) -> Result<Vec<MenuItem>> {
    let mut stmt = conn.prepare(&format!("SELECT {MENU_COLUMNS} FROM menu"))?;
    let rows = stmt
        .query_map([], row_to_item)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Rows matching the filter. See [`MenuFilter`] for the predicate.
pub fn filter(conn: &Connection, filter: &MenuFilter) -> Result<Vec<MenuItem>> {
    let (sql, params) = filter.to_sql();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(params), row_to_item)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Filter by free text and a set of active categories.
pub fn filter_by_query_and_categories<S: AsRef<str>>(
    conn: &Connection,
    query: &str,
    active_categories: &[S],
) -> Result<Vec<MenuItem>> {
    let menu_filter = MenuFilter::new()
        .categories(active_categories)
        .name_contains(query);
    filter(conn, &menu_filter)
}

/// Number of stored rows.
pub fn count(conn: &Connection) -> Result<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))
        .map_err(DbError::Sqlite)?;
    u64::try_from(count).map_err(|e| DbError::Serialization(e.to_string()))
}

/// Delete every row. The table stays.
pub fn clear_all(conn: &Connection) -> Result<usize> {
    let deleted = conn.execute("delete from menu", [])?;
    tracing::info!("Cleared {deleted} menu items");
    Ok(deleted)
}

// Older tables allow NULL in every text column.
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        price: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        image: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
