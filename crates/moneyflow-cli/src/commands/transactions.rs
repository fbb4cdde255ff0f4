//! Transaction command implementations

use anyhow::Result;
use chrono::NaiveDate;
use moneyflow_core::db::Database;
use moneyflow_core::models::{NewTransaction, TransactionType};

use super::truncate;

/// Same pagination clamp the HTTP layer applies; a negative limit would
/// otherwise reach SQLite as LIMIT -N, which means unlimited
pub(crate) fn clamp_limit(limit: i64) -> i64 {
    limit.max(1).min(moneyflow_server::MAX_PAGE_LIMIT)
}

pub fn cmd_transactions_list(db: &Database, limit: i64, kind: Option<&str>) -> Result<()> {
    let kind = kind
        .map(|s| s.parse::<TransactionType>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let transactions = db.list_transactions(0, clamp_limit(limit), None, None, kind)?;

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  moneyflow transactions add --date 2024-06-01 --type expense --amount 12.50");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = match tx.kind {
            TransactionType::Expense => format!("\x1b[31m${:.2}\x1b[0m", tx.amount),
            TransactionType::Income => format!("\x1b[32m+${:.2}\x1b[0m", tx.amount),
            TransactionType::Adjustment => format!("\x1b[33m~${:.2}\x1b[0m", tx.amount),
        };

        println!(
            "   [{}] {} │ {:>10} │ {:<12} │ {}",
            tx.id,
            tx.date,
            amount_str,
            tx.category.as_deref().unwrap_or("-"),
            truncate(tx.description.as_deref().unwrap_or(""), 40)
        );
    }

    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    date: NaiveDate,
    kind: &str,
    amount: f64,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let kind = kind
        .parse::<TransactionType>()
        .map_err(|e| anyhow::anyhow!(e))?;

    let tx = db.insert_transaction(&NewTransaction {
        date,
        kind,
        amount,
        category,
        description,
    })?;

    println!("✅ Recorded {} of ${:.2} on {}", tx.kind, tx.amount, tx.date);
    println!("   id: {}", tx.id);

    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    let tx = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    db.delete_transaction(id)?;

    println!("✅ Deleted transaction {}:", id);
    println!("   {} │ {} │ ${:.2}", tx.date, tx.kind, tx.amount);

    Ok(())
}
