pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;

pub use db::InventoryStore;
pub use error::StockroomError;
