//! Daily and period statistics over the transaction ledger

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};

use super::Database;
use crate::error::Result;
use crate::models::{DailyStatistic, PeriodStatistics, TransactionType};

/// Monday-to-Sunday week containing `date`, derived purely from the
/// calendar regardless of data presence
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("first of month is always valid");
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
    .expect("first of next month is always valid");
    (start, next_month.pred_opt().expect("month end exists"))
}

impl Database {
    /// Aggregate statistics over an inclusive date range.
    ///
    /// Income and expense transactions accumulate into per-day and period
    /// totals; adjustments are skipped entirely (they exist in the ledger
    /// but are invisible to statistics).
    pub fn period_statistics(&self, start: NaiveDate, end: NaiveDate) -> Result<PeriodStatistics> {
        let transactions = self.transactions_in_range(start, end)?;

        // Day-keyed accumulator of (income, expense); BTreeMap keeps the
        // daily output sorted ascending by date
        let mut daily: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        let mut total_income = 0.0;
        let mut total_expense = 0.0;

        for tx in &transactions {
            match tx.kind {
                TransactionType::Income => {
                    daily.entry(tx.date).or_insert((0.0, 0.0)).0 += tx.amount;
                    total_income += tx.amount;
                }
                TransactionType::Expense => {
                    daily.entry(tx.date).or_insert((0.0, 0.0)).1 += tx.amount;
                    total_expense += tx.amount;
                }
                TransactionType::Adjustment => {}
            }
        }

        let daily_statistics = daily
            .into_iter()
            .map(|(date, (income, expense))| DailyStatistic {
                date,
                income,
                expense,
                balance: income - expense,
            })
            .collect();

        Ok(PeriodStatistics {
            period_start: start,
            period_end: end,
            total_income,
            total_expense,
            balance: total_income - total_expense,
            daily_statistics,
        })
    }

    /// Statistics for a single day
    pub fn daily_statistics_for(&self, date: NaiveDate) -> Result<PeriodStatistics> {
        self.period_statistics(date, date)
    }

    /// Statistics for the Monday-to-Sunday week containing `date`
    pub fn weekly_statistics_for(&self, date: NaiveDate) -> Result<PeriodStatistics> {
        let (start, end) = week_bounds(date);
        self.period_statistics(start, end)
    }

    /// Statistics for the calendar month containing `date`
    pub fn monthly_statistics_for(&self, date: NaiveDate) -> Result<PeriodStatistics> {
        let (start, end) = month_bounds(date);
        self.period_statistics(start, end)
    }

    /// Statistics over the entire ledger, from the earliest to the latest
    /// transaction date. An empty ledger yields zero totals with
    /// `period_start = period_end = today`.
    pub fn summary_statistics(&self) -> Result<PeriodStatistics> {
        match self.date_bounds()? {
            Some((start, end)) => self.period_statistics(start, end),
            None => {
                let today = Utc::now().date_naive();
                Ok(PeriodStatistics::empty(today, today))
            }
        }
    }
}
