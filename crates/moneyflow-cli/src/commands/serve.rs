//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use moneyflow_server::ServerConfig;

use super::open_db;

/// Reject non-UTF-8 static paths up front rather than silently serving
/// the API without the frontend
pub(crate) fn static_dir_str(dir: &Path) -> Result<&str> {
    dir.to_str().context("Static files path is not valid UTF-8")
}

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    cors_origins: Vec<String>,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting MoneyFlow API server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if cors_origins.is_empty() {
        println!("   CORS: same-origin only (pass --cors-origin to allow a frontend)");
    } else {
        println!("   CORS: {}", cors_origins.join(", "));
    }

    let db = open_db(db_path)?;
    let config = ServerConfig {
        allowed_origins: cors_origins,
    };

    let static_dir = static_dir.map(static_dir_str).transpose()?;
    moneyflow_server::serve(db, host, port, static_dir, config).await
}
