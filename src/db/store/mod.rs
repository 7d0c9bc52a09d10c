use crate::db::schema::{REQUIRED_TABLES, SQLITE_INIT};
use crate::error::StockroomError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

mod assets;
mod contracts;
mod licenses;
mod users;

pub type SqlitePool = Pool<Sqlite>;

/// Open the connection pool. The pool is the only shared resource;
/// it is acquired here at startup and released when the last handle
/// (held by the router state) drops on shutdown.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StockroomError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Record store for the four inventory entities. One round trip to the
/// database per call, no explicit transactions, no in-process caching.
#[derive(Clone)]
pub struct InventoryStore {
    pool: SqlitePool,
}

impl InventoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL, then confirm
    /// every table exists. Safe to invoke repeatedly.
    pub async fn init_schema(&self) -> Result<(), StockroomError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        self.verify_schema().await
    }

    /// Query the catalog and fail if any required table is missing.
    pub async fn verify_schema(&self) -> Result<(), StockroomError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
                .fetch_all(&self.pool)
                .await?;
        for required in REQUIRED_TABLES {
            if !rows.iter().any(|(name,)| name == required) {
                return Err(StockroomError::Init(format!(
                    "table `{required}` missing after initialization"
                )));
            }
        }
        Ok(())
    }
}
