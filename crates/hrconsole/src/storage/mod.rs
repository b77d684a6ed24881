//! Storage backend implementations.
//!
//! The console talks to storage only through
//! [`hrconsole_core::storage::ConsoleRepository`]. SQLite is the only backend.

pub mod sqlite;

pub use sqlite::SqliteRepository;
