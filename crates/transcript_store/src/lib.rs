//! # Transcript Store
//!
//! This module provides functionality for interacting with a SQLite database
//! that caches YouTube video transcripts keyed by video id.
//!
//! The module uses sqlx for database operations and provides an abstraction
//! layer so callers can swap the cache out in tests.

mod datastore;

pub use datastore::sqlite::SqliteDataStore;
pub use datastore::DataStore;
