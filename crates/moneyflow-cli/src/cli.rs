//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// MoneyFlow - Track income and expenses from the terminal or the web
#[derive(Parser)]
#[command(name = "moneyflow")]
#[command(about = "Personal finance tracker with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "moneyflow.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeat for multiple origins)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Manage transactions (list, add, delete)
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Show income/expense statistics
    Stats {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        action: Option<StatsAction>,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List recent transactions
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Filter by type: income, expense, adjustment
        #[arg(short, long)]
        r#type: Option<String>,
    },

    /// Record a new transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Transaction type: income, expense, adjustment
        #[arg(short, long)]
        r#type: String,

        /// Amount (positive for income/expense; any sign for adjustment)
        #[arg(short, long)]
        amount: f64,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Statistics for an explicit date range
    Period {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Statistics for a single day
    Daily {
        /// Date (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Statistics for the calendar week containing a date
    Weekly {
        /// Date (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Statistics for the calendar month containing a date
    Monthly {
        /// Date (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Statistics over the entire ledger
    Summary,
}
