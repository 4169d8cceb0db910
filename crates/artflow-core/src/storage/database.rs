//! Snapshot persistence for user records.
//!
//! One SQLite `kv` table holds everything: each user is a single JSON blob
//! under `user:{id}`, overwritten whole on every mutation, alongside an
//! `email:{email}` index entry and the `active_user` pointer. There is no
//! partial-update path and no migration story beyond re-serializing the
//! blob; a missing or unreadable snapshot reads back as absent, never as an
//! error.

use rusqlite::{params, Connection};

use crate::error::StorageError;
use crate::profile::UserProfile;

use super::data_dir;

const ACTIVE_USER_KEY: &str = "active_user";

/// SQLite-backed key-value store for user snapshots.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/artflow/artflow.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("artflow.db");
        let conn =
            Connection::open(&path).map_err(|source| StorageError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests and dry runs).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn user_key(id: &str) -> String {
        format!("user:{id}")
    }

    fn email_key(email: &str) -> String {
        format!("email:{}", email.to_ascii_lowercase())
    }

    /// Overwrite the user's snapshot and refresh the email index.
    pub fn save_user(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(profile).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.kv_set(&Self::user_key(&profile.id), &json)?;
        self.kv_set(&Self::email_key(&profile.email), &profile.id)
    }

    /// Load a user snapshot. A corrupt blob reads back as absent.
    pub fn load_user(&self, id: &str) -> Result<Option<UserProfile>, StorageError> {
        match self.kv_get(&Self::user_key(id))? {
            Some(json) => Ok(serde_json::from_str(&json).ok()),
            None => Ok(None),
        }
    }

    /// Look up a user through the email index.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<UserProfile>, StorageError> {
        match self.kv_get(&Self::email_key(email))? {
            Some(id) => self.load_user(&id),
            None => Ok(None),
        }
    }

    pub fn set_active_user(&self, id: &str) -> Result<(), StorageError> {
        self.kv_set(ACTIVE_USER_KEY, id)
    }

    pub fn active_user(&self) -> Result<Option<String>, StorageError> {
        self.kv_get(ACTIVE_USER_KEY)
    }

    pub fn clear_active_user(&self) -> Result<(), StorageError> {
        self.kv_delete(ACTIVE_USER_KEY)
    }
}
