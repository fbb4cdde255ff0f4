//! Domain models for MoneyFlow

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
    /// Balance correction, excluded from all statistics
    Adjustment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Adjustment => "adjustment",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "adjustment" => Ok(Self::Adjustment),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded money movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Set once by the store at creation, never mutated
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a transaction
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    /// Check the amount invariant: income and expense must be strictly
    /// positive; adjustment amounts are unconstrained in sign.
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.kind, self.amount)
    }
}

/// Partial update payload. Absent fields retain their prior values.
/// `id` and `created_at` are not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransaction {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl UpdateTransaction {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Validate the amount invariant for a given transaction type
pub fn validate_amount(kind: TransactionType, amount: f64) -> Result<()> {
    match kind {
        TransactionType::Income | TransactionType::Expense if amount <= 0.0 => {
            Err(Error::InvalidData(format!(
                "amount must be strictly positive for {} transactions (got {})",
                kind, amount
            )))
        }
        _ => Ok(()),
    }
}

/// Income/expense/balance totals for a single day with at least one
/// qualifying transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistic {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Aggregated statistics over an inclusive date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStatistics {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    /// Ascending by date; days with no income/expense activity are omitted,
    /// so callers must not assume a contiguous sequence.
    pub daily_statistics: Vec<DailyStatistic>,
}

impl PeriodStatistics {
    /// Zero-valued statistics for a range (used for an empty ledger)
    pub fn empty(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            period_start: start,
            period_end: end,
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
            daily_statistics: Vec::new(),
        }
    }
}
