//! MoneyFlow Core Library
//!
//! Shared functionality for the MoneyFlow personal finance tracker:
//! - Database access and migrations (the transaction ledger)
//! - Transaction CRUD with validation
//! - Statistics aggregation over date ranges

pub mod db;
pub mod error;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
