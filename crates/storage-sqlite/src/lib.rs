//! SQLite storage implementation for the pairlist service.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the [`SnapshotStore`](pairlist_core::snapshots::SnapshotStore) trait
//! defined in `pairlist-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The daily snapshot repository
//!
//! ```text
//! core (domain) ──► SnapshotStore trait
//!                        │
//!                        ▼
//!          storage-sqlite (this crate)
//!                        │
//!                        ▼
//!                    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod snapshots;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from pairlist-core for convenience
pub use pairlist_core::errors::{DatabaseError, Error, Result};
