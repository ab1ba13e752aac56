//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `categories.rs` - Category lookups and inserts
//! - `questions.rs` - Question listing, search, insert, delete and quiz pool
//! - `seed.rs` - Loading the default dataset into an empty store

mod categories;
mod questions;
mod seed;

use sqlx::sqlite::SqlitePool;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }
}
