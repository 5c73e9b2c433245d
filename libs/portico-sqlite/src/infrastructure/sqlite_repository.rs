//! SQLite Item Repository Implementation
//!
//! This module implements the `ItemRepository` trait using SQLite as the backend.
//! Items live in a single `items` table; rows are returned in insertion order.
//! All sqlx errors are converted to `ItemError::StorageFailure`.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use portico_domain::{
    item::{Item, ItemError},
    ports::ItemRepository,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

use super::schema::ensure_schema;
use crate::error::SqliteError;

static MEMDB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// SQLite-based implementation of the ItemRepository port
///
/// ## Configuration
///
/// The repository is built from a database URL (`sqlite://items.db`,
/// `sqlite::memory:`) or from an existing pool. Either way the `items`
/// table is created before the repository is handed out.
///
/// ## In-memory databases
///
/// Each `sqlite::memory:` repository gets its own uniquely named
/// shared-cache database, so parallel tests never see each other's rows.
#[derive(Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Connection acquire timeout
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Maximum pool size for file databases
    const MAX_FILE_CONNECTIONS: u32 = 5;

    /// Open a pool for `url` and prepare the schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use portico_sqlite::infrastructure::SqliteItemRepository;
    ///
    /// # async fn example() -> portico_sqlite::Result<()> {
    /// let repo = SqliteItemRepository::connect("sqlite://items.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - `SqliteError::InvalidUrl` if `url` is not a SQLite URL
    /// - `SqliteError::Connect` if the pool cannot be opened
    /// - `SqliteError::Schema` if the table cannot be created
    pub async fn connect(url: &str) -> crate::Result<Self> {
        let pool = if is_memory_url(url) {
            let id = MEMDB_COUNTER.fetch_add(1, Ordering::Relaxed);
            let memdb_uri = format!(
                "file:portico-memdb-{}-{}?mode=memory&cache=shared",
                std::process::id(),
                id
            );

            let options = SqliteConnectOptions::new()
                .filename(&memdb_uri)
                .shared_cache(true)
                .create_if_missing(true);

            // The database vanishes with its last connection, so keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await
                .map_err(SqliteError::Connect)?
        } else {
            if !url.starts_with("sqlite:") {
                return Err(SqliteError::InvalidUrl {
                    url: url.to_string(),
                    reason: "expected a sqlite: scheme".to_string(),
                });
            }

            let options = SqliteConnectOptions::from_str(url)
                .map_err(|err| SqliteError::InvalidUrl {
                    url: url.to_string(),
                    reason: err.to_string(),
                })?
                .create_if_missing(true);

            SqlitePoolOptions::new()
                .max_connections(Self::MAX_FILE_CONNECTIONS)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await
                .map_err(SqliteError::Connect)?
        };

        info!(url = %url, "Database connected");
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and prepare the schema
    pub async fn from_pool(pool: SqlitePool) -> crate::Result<Self> {
        ensure_schema(&pool).await?;
        info!("Initializing SqliteItemRepository");
        Ok(Self { pool })
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    matches!(url.trim(), "sqlite::memory:" | "sqlite://:memory:" | ":memory:")
}

impl ItemRepository for SqliteItemRepository {
    #[instrument(skip(self))]
    fn find_all(&self) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send {
        let pool = self.pool.clone();

        async move {
            debug!("Selecting all items");

            match sqlx::query_as::<_, (i64, String)>("SELECT user_id, text FROM items ORDER BY id")
                .fetch_all(&pool)
                .await
            {
                Ok(rows) => {
                    debug!(count = rows.len(), "Loaded items from SQLite");
                    Ok(rows
                        .into_iter()
                        .map(|(user_id, text)| Item::new(user_id, text))
                        .collect())
                }
                Err(err) => {
                    error!(error = ?err, "Failed to select items");
                    Err(ItemError::StorageFailure(format!(
                        "SELECT from items failed: {}",
                        err
                    )))
                }
            }
        }
    }

    #[instrument(skip(self, item), fields(user_id = %item.user_id()))]
    fn save(&self, item: &Item) -> impl std::future::Future<Output = Result<(), ItemError>> + Send {
        let pool = self.pool.clone();
        let user_id = item.user_id().get();
        let text = item.text().to_string();

        async move {
            match sqlx::query("INSERT INTO items (user_id, text) VALUES (?, ?)")
                .bind(user_id)
                .bind(text)
                .execute(&pool)
                .await
            {
                Ok(result) => {
                    debug!(row_id = result.last_insert_rowid(), "Inserted item into SQLite");
                    Ok(())
                }
                Err(err) => {
                    error!(error = ?err, "Failed to insert item");
                    Err(ItemError::StorageFailure(format!(
                        "INSERT into items failed: {}",
                        err
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_url_detection() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url(":memory:"));
        assert!(!is_memory_url("sqlite://items.db"));
    }

    #[tokio::test]
    async fn test_memory_databases_are_isolated() {
        let a = SqliteItemRepository::connect("sqlite::memory:").await.unwrap();
        let b = SqliteItemRepository::connect("sqlite::memory:").await.unwrap();

        a.save(&Item::new(1, "only in a")).await.unwrap();

        assert_eq!(a.find_all().await.unwrap().len(), 1);
        assert!(b.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let result = SqliteItemRepository::connect("postgres://localhost/items").await;

        assert!(matches!(result, Err(SqliteError::InvalidUrl { .. })));
    }
}
