use async_trait::async_trait;

use super::errors::RepositoryError;

/// Key-value storage interface injected into the repository layer.
///
/// Any backend that can get, set, and remove string values by key can be
/// substituted without touching the repositories built on top of it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Remove the value stored under `key`. Returns true if a value existed.
    async fn remove(&self, key: &str) -> Result<bool, RepositoryError>;
}

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "sqlite")]
mod sqlite {
    use std::path::Path;

    use async_trait::async_trait;
    use r2d2::Pool;
    use r2d2_sqlite::SqliteConnectionManager;
    use rusqlite::params;
    use tracing::debug;

    use super::super::errors::RepositoryError;
    use super::KeyValueStore;

    /// SQLite-backed key-value store using a single `app_state` table
    #[derive(Debug, Clone)]
    pub struct SqliteStore {
        pool: Pool<SqliteConnectionManager>,
    }

    impl SqliteStore {
        /// Open (or create) a store at the given database path
        pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
            let manager = SqliteConnectionManager::file(path);
            Self::with_pool(Pool::new(manager)?)
        }

        /// Open an in-memory store, useful for tests.
        /// Each pooled connection would get its own memory database, so the
        /// pool is capped at a single connection.
        pub fn open_in_memory() -> Result<Self, RepositoryError> {
            let manager = SqliteConnectionManager::memory();
            let pool = Pool::builder().max_size(1).build(manager)?;
            Self::with_pool(pool)
        }

        fn with_pool(pool: Pool<SqliteConnectionManager>) -> Result<Self, RepositoryError> {
            let conn = pool.get()?;
            conn.execute(
                "CREATE TABLE IF NOT EXISTS app_state (
                     key   TEXT PRIMARY KEY,
                     value TEXT NOT NULL
                 )",
                [],
            )?;
            Ok(Self { pool })
        }
    }

    #[async_trait]
    impl KeyValueStore for SqliteStore {
        async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            let conn = self.pool.get()?;

            let mut stmt = conn.prepare("SELECT value FROM app_state WHERE key = ?1")?;
            let value = stmt.query_row([key], |row| row.get(0));

            match value {
                Ok(value) => Ok(Some(value)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(RepositoryError::Sqlite(e)),
            }
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            debug!("Storing value in SQLite store: key={}", key);

            let conn = self.pool.get()?;
            conn.execute(
                "INSERT INTO app_state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;

            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<bool, RepositoryError> {
            debug!("Removing value from SQLite store: key={}", key);

            let conn = self.pool.get()?;
            let rows = conn.execute("DELETE FROM app_state WHERE key = ?1", [key])?;

            Ok(rows > 0)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_set_get_roundtrip() {
            let store = SqliteStore::open_in_memory().unwrap();

            store.set("nutrifyd.user", "{\"name\":\"test\"}").await.unwrap();
            let value = store.get("nutrifyd.user").await.unwrap();

            assert_eq!(value.as_deref(), Some("{\"name\":\"test\"}"));
        }

        #[tokio::test]
        async fn test_set_replaces_existing_value() {
            let store = SqliteStore::open_in_memory().unwrap();

            store.set("key", "first").await.unwrap();
            store.set("key", "second").await.unwrap();

            assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
        }

        #[tokio::test]
        async fn test_remove_reports_presence() {
            let store = SqliteStore::open_in_memory().unwrap();

            store.set("key", "value").await.unwrap();
            assert!(store.remove("key").await.unwrap());
            assert!(!store.remove("key").await.unwrap());
            assert_eq!(store.get("key").await.unwrap(), None);
        }
    }
}
