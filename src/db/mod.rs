//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema setup
//! - SQLite pragma configuration
//! - The default seed dataset
//! - Repository layer for category and question queries

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
