//! User profile blob storage.
//!
//! The profile lives under a single key as JSON, independent of the menu
//! table. Its presence marks onboarding as complete.

use lemon_types::UserProfile;
use rusqlite::Connection;

use crate::schema::KV_TABLE;
use crate::{DbError, Result};

/// Key the profile blob is stored under.
pub const USER_KEY: &str = "user";

fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(KV_TABLE)?;
    Ok(())
}

/// Get a raw blob by key.
pub fn get(conn: &Connection, key: &str) -> Result<String> {
    ensure_schema(conn)?;
    conn.query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
        row.get(0)
    })
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("key '{key}'")),
        other => DbError::Sqlite(other),
    })
}

/// Set a raw blob.
pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    ensure_schema(conn)?;
    conn.execute(
        "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
        rusqlite::params![key, value],
    )?;
    Ok(())
}

/// Remove a blob. Missing keys are not an error.
pub fn remove(conn: &Connection, key: &str) -> Result<()> {
    ensure_schema(conn)?;
    conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
    Ok(())
}

/// The stored profile, or `None` before onboarding.
pub fn load_profile(conn: &Connection) -> Result<Option<UserProfile>> {
    match get(conn, USER_KEY) {
        Ok(blob) => serde_json::from_str(&blob)
            .map(Some)
            .map_err(|e| DbError::Serialization(e.to_string())),
        Err(DbError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Overwrite the stored profile.
pub fn save_profile(conn: &Connection, profile: &UserProfile) -> Result<()> {
    let blob = serde_json::to_string(profile).map_err(|e| DbError::Serialization(e.to_string()))?;
    set(conn, USER_KEY, &blob)
}

/// Complete onboarding: store a fresh profile with the collected fields.
pub fn sign_in(conn: &Connection, first_name: &str, email: &str) -> Result<UserProfile> {
    let profile = UserProfile::onboarded(first_name, email);
    save_profile(conn, &profile)?;
    tracing::info!("Onboarding completed");
    Ok(profile)
}

/// Forget the profile. The next launch starts at onboarding.
pub fn sign_out(conn: &Connection) -> Result<()> {
    remove(conn, USER_KEY)?;
    tracing::info!("Signed out");
    Ok(())
}

pub fn is_onboarded(conn: &Connection) -> Result<bool> {
    Ok(load_profile(conn)?.is_some())
}
