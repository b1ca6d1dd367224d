//! SQL schema definitions.

/// Menu table. Column names, order and types match tables written by earlier
/// app versions, which `IF NOT EXISTS` leaves untouched.
pub const MENU_TABLE: &str = "create table if not exists menu (id integer primary key autoincrement not null, name text, price text, description text, image text, category text);";

pub const DROP_MENU_TABLE: &str = "drop table if exists menu";

/// Column list shared by every menu read.
pub const MENU_COLUMNS: &str = "id, name, price, description, image, category";

/// Key-value blobs owned by the profile layer.
pub const KV_TABLE: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";
