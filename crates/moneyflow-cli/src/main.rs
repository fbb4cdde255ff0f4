//! MoneyFlow CLI - Personal finance tracker
//!
//! Usage:
//!   moneyflow init                     Initialize database
//!   moneyflow transactions add ...     Record a transaction
//!   moneyflow stats monthly            Show this month's statistics
//!   moneyflow serve --port 8000        Start the REST API server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            cors_origins,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, cors_origins, static_dir.as_deref()).await,
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_transactions_list(&db, 20, None),
                Some(TransactionsAction::List { limit, r#type }) => {
                    commands::cmd_transactions_list(&db, limit, r#type.as_deref())
                }
                Some(TransactionsAction::Add {
                    date,
                    r#type,
                    amount,
                    category,
                    description,
                }) => commands::cmd_transactions_add(&db, date, &r#type, amount, category, description),
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Stats { json, action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(StatsAction::Summary) => commands::cmd_stats_summary(&db, json),
                Some(StatsAction::Period { start, end }) => {
                    commands::cmd_stats_period(&db, start, end, json)
                }
                Some(StatsAction::Daily { date }) => commands::cmd_stats_daily(&db, date, json),
                Some(StatsAction::Weekly { date }) => commands::cmd_stats_weekly(&db, date, json),
                Some(StatsAction::Monthly { date }) => {
                    commands::cmd_stats_monthly(&db, date, json)
                }
            }
        }
    }
}
