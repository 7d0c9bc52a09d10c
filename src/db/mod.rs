//! Database module: models, schema, and the record store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows plus create/update field bags
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store/`: per-entity CRUD, search, and stats against the pool

pub mod models;
pub mod schema;
pub mod store;

pub use models::{Asset, AssetStats, Contract, License, User};
pub use schema::SQLITE_INIT;
pub use store::{InventoryStore, SqlitePool, connect};
