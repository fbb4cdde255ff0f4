//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use moneyflow_core::db::Database;

/// Open the database, creating it (and running migrations) if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let count = db.count_transactions()?;

    println!("✅ Database initialized successfully!");
    if count > 0 {
        println!("   Existing transactions: {}", count);
    }
    println!();
    println!("Next steps:");
    println!("  1. Record a transaction: moneyflow transactions add --date 2024-06-01 --type expense --amount 12.50");
    println!("  2. Start the API server: moneyflow serve");

    Ok(())
}
