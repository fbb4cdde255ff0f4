//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db)
//! - `serve` - Web server command
//! - `stats` - Statistics commands (period, daily, weekly, monthly, summary)
//! - `transactions` - Transaction commands (list, add, delete)

pub mod core;
pub mod serve;
pub mod stats;
pub mod transactions;

// Re-export command functions for main.rs
pub use core::*;
pub use serve::*;
pub use stats::*;
pub use transactions::*;

/// Truncate a string to a maximum byte length, adding "..." if truncated.
/// The cut backs up to a char boundary so multibyte text never splits.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max.saturating_sub(3);
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
