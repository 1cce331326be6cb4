//! Infrastructure Database Layer
//!
//! Record store adapters for the inference pipeline. Both adapters implement
//! `core_kernel::RecordStore` and are append-only: every `store` call adds a
//! row, and lookups return the most recent row for a key.
//!
//! - [`InMemoryRecordStore`]: process-local store for tests and single-node runs
//! - [`PgRecordStore`]: PostgreSQL store keeping each record as a JSONB payload
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgRecordStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/pipeline")).await?;
//! let store = PgRecordStore::new(pool);
//! store.ensure_schema().await?;
//! ```

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;

pub use error::DatabaseError;
pub use memory::InMemoryRecordStore;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use postgres::PgRecordStore;
