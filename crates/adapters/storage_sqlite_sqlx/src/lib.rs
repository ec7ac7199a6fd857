//! # hometic-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `DevicePairing` port from `hometic-app::ports`
//! - Define the narrow `StatementExecutor` seam the pairing insert runs through
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//!
//! ## Dependency rule
//! Depends on `hometic-app` (for port traits) and `hometic-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod executor;
pub mod pair_repo;
pub mod pool;

pub use error::StorageError;
pub use executor::StatementExecutor;
pub use pair_repo::PairRepository;
pub use pool::{Config, Database};
