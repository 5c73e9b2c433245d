//! Schema bootstrap for the items table

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{Result, SqliteError};

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        text TEXT NOT NULL
    )
"#;

/// Create the items table if it does not exist yet. Safe to run repeatedly.
pub(crate) async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_ITEMS_TABLE)
        .execute(pool)
        .await
        .map_err(SqliteError::Schema)?;

    debug!("Items schema ready");
    Ok(())
}
