//! Database module: models, schema and pool bootstrap for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `pool.rs`: connection options and schema application

pub mod models;
pub mod pool;
pub mod schema;

pub use models::{Address, Contact};
pub use pool::{apply_schema, connect};
pub use schema::SQLITE_INIT;
