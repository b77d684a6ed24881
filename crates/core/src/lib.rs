//! Functional core of the HR console.
//!
//! Pure types and functions: the table catalog, SQL script splitting, grid
//! edits, row reconciliation and notifications. The only I/O-facing item is
//! the [`storage::ConsoleRepository`] trait, implemented by the server crate.

pub mod catalog;
pub mod grid;
pub mod notification;
pub mod reconcile;
pub mod script;
pub mod storage;
