//! Runtime selection of the item repository
//!
//! [`ItemBackend`] wraps every repository implementation the server knows about.
//! The backend is chosen from configuration at startup while calls still go
//! through static dispatch.

use std::future::Future;

use anyhow::{Context, Result};
use portico_domain::{Item, ItemError, ItemRepository};
use portico_memory::infrastructure::InMemoryItemRepository;
use portico_sqlite::infrastructure::SqliteItemRepository;
use tracing::info;

use crate::config::{BackendKind, ServerConfig};

/// Unified repository enum
#[derive(Clone)]
pub enum ItemBackend {
    /// Vec-backed storage, lost on exit
    Memory(InMemoryItemRepository),
    /// SQLite-backed storage
    Sqlite(SqliteItemRepository),
}

impl ItemBackend {
    /// Create a fresh in-memory backend
    pub fn memory() -> Self {
        Self::Memory(InMemoryItemRepository::new())
    }

    /// Build the backend named by the configuration
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        match config.backend {
            BackendKind::Memory => {
                info!("Using in-memory item repository");
                Ok(Self::memory())
            }
            BackendKind::Sqlite => {
                info!(url = %config.database_url, "Using SQLite item repository");
                let repo = SqliteItemRepository::connect(&config.database_url)
                    .await
                    .context("failed to open SQLite item repository")?;
                Ok(Self::Sqlite(repo))
            }
        }
    }

    /// Short backend name for logs and health output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl ItemRepository for ItemBackend {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Item>, ItemError>> + Send {
        async move {
            match self {
                Self::Memory(repo) => repo.find_all().await,
                Self::Sqlite(repo) => repo.find_all().await,
            }
        }
    }

    fn save(&self, item: &Item) -> impl Future<Output = Result<(), ItemError>> + Send {
        async move {
            match self {
                Self::Memory(repo) => repo.save(item).await,
                Self::Sqlite(repo) => repo.save(item).await,
            }
        }
    }
}
