//! Statistics command implementations

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use moneyflow_core::db::Database;
use moneyflow_core::models::PeriodStatistics;

pub fn cmd_stats_period(db: &Database, start: NaiveDate, end: NaiveDate, json: bool) -> Result<()> {
    if start > end {
        anyhow::bail!("--start must not be after --end");
    }
    let stats = db.period_statistics(start, end)?;
    print_statistics("Period", &stats, json)
}

pub fn cmd_stats_daily(db: &Database, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let stats = db.daily_statistics_for(date)?;
    print_statistics("Daily", &stats, json)
}

pub fn cmd_stats_weekly(db: &Database, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let stats = db.weekly_statistics_for(date)?;
    print_statistics("Weekly", &stats, json)
}

pub fn cmd_stats_monthly(db: &Database, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let stats = db.monthly_statistics_for(date)?;
    print_statistics("Monthly", &stats, json)
}

pub fn cmd_stats_summary(db: &Database, json: bool) -> Result<()> {
    let stats = db.summary_statistics()?;
    print_statistics("Summary", &stats, json)
}

fn print_statistics(label: &str, stats: &PeriodStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!();
    println!(
        "📊 {} Statistics ({} to {})",
        label, stats.period_start, stats.period_end
    );
    println!("   ─────────────────────────────────────────────");
    println!("   Income:  \x1b[32m+${:.2}\x1b[0m", stats.total_income);
    println!("   Expense: \x1b[31m${:.2}\x1b[0m", stats.total_expense);
    println!("   Balance: ${:.2}", stats.balance);

    if stats.daily_statistics.is_empty() {
        println!();
        println!("   No activity in this period.");
        return Ok(());
    }

    println!();
    println!(
        "   {:<12} {:>10} {:>10} {:>10}",
        "Date", "Income", "Expense", "Balance"
    );
    for day in &stats.daily_statistics {
        println!(
            "   {:<12} {:>10.2} {:>10.2} {:>10.2}",
            day.date.to_string(),
            day.income,
            day.expense,
            day.balance
        );
    }

    Ok(())
}
