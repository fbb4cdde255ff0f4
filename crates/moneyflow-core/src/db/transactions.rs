//! Transaction ledger operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::{validate_amount, NewTransaction, Transaction, TransactionType, UpdateTransaction};

impl Database {
    /// Insert a transaction, assigning its id and created_at.
    /// Returns the stored record as read back from the ledger.
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        tx.validate()?;

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO transactions (date, type, amount, category, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.to_string(),
                tx.kind.as_str(),
                tx.amount,
                tx.category,
                tx.description,
            ],
        )?;
        let id = conn.last_insert_rowid();

        // Read back so the caller sees the assigned id and created_at
        self.get_transaction(id)?.ok_or_else(|| {
            crate::error::Error::NotFound(format!("Transaction {} not found after insert", id))
        })
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, type, amount, category, description, created_at
             FROM transactions WHERE id = ?",
        )?;

        let transaction = stmt
            .query_row(params![id], |row| Self::row_to_transaction(row))
            .optional()?;

        Ok(transaction)
    }

    /// List transactions with optional date-range and type filters,
    /// sorted by date descending, paginated by skip/limit
    pub fn list_transactions(
        &self,
        skip: i64,
        limit: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        // Build dynamic WHERE clause
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(start) = start_date {
            conditions.push("date >= ?".to_string());
            params.push(Box::new(start.to_string()));
        }

        if let Some(end) = end_date {
            conditions.push("date <= ?".to_string());
            params.push(Box::new(end.to_string()));
        }

        if let Some(k) = kind {
            conditions.push("type = ?".to_string());
            params.push(Box::new(k.as_str()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT id, date, type, amount, category, description, created_at
            FROM transactions
            {}
            ORDER BY date DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
            where_clause
        );

        params.push(Box::new(limit));
        params.push(Box::new(skip));

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let transactions = stmt
            .query_map(params_refs.as_slice(), |row| Self::row_to_transaction(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Apply the present fields of `update` to an existing transaction.
    /// Returns the updated record, or `None` when the id is absent.
    /// `id` and `created_at` are never touched.
    pub fn update_transaction(
        &self,
        id: i64,
        update: &UpdateTransaction,
    ) -> Result<Option<Transaction>> {
        let Some(existing) = self.get_transaction(id)? else {
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(existing));
        }

        // Merge present fields over the stored record, then re-check the
        // amount invariant against the merged result
        let date = update.date.unwrap_or(existing.date);
        let kind = update.kind.unwrap_or(existing.kind);
        let amount = update.amount.unwrap_or(existing.amount);
        let category = update.category.clone().or(existing.category);
        let description = update.description.clone().or(existing.description);

        validate_amount(kind, amount)?;

        let conn = self.conn()?;
        conn.execute(
            r#"
            UPDATE transactions
            SET date = ?, type = ?, amount = ?, category = ?, description = ?
            WHERE id = ?
            "#,
            params![
                date.to_string(),
                kind.as_str(),
                amount,
                category,
                description,
                id,
            ],
        )?;

        self.get_transaction(id)
    }

    /// Delete a transaction. Returns false when the id is absent.
    pub fn delete_transaction(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    /// All transactions with `start <= date <= end`, sorted by date
    /// ascending. Aggregator input, no pagination.
    pub fn transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, type, amount, category, description, created_at
            FROM transactions
            WHERE date BETWEEN ? AND ?
            ORDER BY date ASC, id ASC
            "#,
        )?;

        let transactions = stmt
            .query_map(params![start.to_string(), end.to_string()], |row| {
                Self::row_to_transaction(row)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Earliest and latest transaction dates over the whole ledger,
    /// or None when the ledger is empty
    pub fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let conn = self.conn()?;
        let bounds: Option<(String, String)> = conn
            .query_row(
                "SELECT MIN(date), MAX(date) FROM transactions",
                [],
                |row| {
                    let min: Option<String> = row.get(0)?;
                    let max: Option<String> = row.get(1)?;
                    Ok(min.zip(max))
                },
            )
            .optional()?
            .flatten();

        Ok(bounds.and_then(|(min, max)| {
            let min = NaiveDate::parse_from_str(&min, "%Y-%m-%d").ok()?;
            let max = NaiveDate::parse_from_str(&max, "%Y-%m-%d").ok()?;
            Some((min, max))
        }))
    }

    /// Count total transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Helper to convert a row to Transaction
    /// Column order: id, date, type, amount, category, description, created_at
    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(1)?;
        let kind_str: String = row.get(2)?;
        let created_at_str: String = row.get(6)?;

        let kind = kind_str.parse::<TransactionType>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(Transaction {
            id: row.get(0)?,
            date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            kind,
            amount: row.get(3)?,
            category: row.get(4)?,
            description: row.get(5)?,
            created_at: super::parse_datetime(&created_at_str),
        })
    }
}
