//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_tx(date: &str, kind: TransactionType, amount: f64) -> NewTransaction {
        NewTransaction {
            date: d(date),
            kind,
            amount,
            category: None,
            description: None,
        }
    }

    #[test]
    fn test_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('transactions') WHERE name IN ('id', 'date', 'type', 'amount', 'category', 'description', 'created_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 7, "transactions table should have 7 expected columns");
    }

    #[test]
    fn test_insert_assigns_id_and_created_at() {
        let db = Database::in_memory().unwrap();

        let tx = db
            .insert_transaction(&NewTransaction {
                date: d("2024-06-01"),
                kind: TransactionType::Income,
                amount: 1200.0,
                category: Some("salary".to_string()),
                description: Some("June paycheck".to_string()),
            })
            .unwrap();

        assert!(tx.id > 0);
        assert_eq!(tx.date, d("2024-06-01"));
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.amount, 1200.0);
        assert_eq!(tx.category.as_deref(), Some("salary"));

        let fetched = db.get_transaction(tx.id).unwrap().unwrap();
        assert_eq!(fetched.id, tx.id);
        assert_eq!(fetched.created_at, tx.created_at);
    }

    #[test]
    fn test_insert_rejects_non_positive_income_expense() {
        let db = Database::in_memory().unwrap();

        let err = db
            .insert_transaction(&new_tx("2024-06-01", TransactionType::Income, 0.0))
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidData(_)));

        let err = db
            .insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, -10.0))
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidData(_)));

        assert_eq!(db.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_insert_adjustment_any_sign() {
        let db = Database::in_memory().unwrap();

        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Adjustment, -250.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Adjustment, 0.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Adjustment, 500.0))
            .unwrap();

        assert_eq!(db.count_transactions().unwrap(), 3);
    }

    #[test]
    fn test_get_missing_transaction() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_transaction(42).unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_date_descending() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, 10.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-03", TransactionType::Expense, 30.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-02", TransactionType::Expense, 20.0))
            .unwrap();

        let list = db.list_transactions(0, 100, None, None, None).unwrap();
        let dates: Vec<_> = list.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![d("2024-06-03"), d("2024-06-02"), d("2024-06-01")]);
    }

    #[test]
    fn test_list_pagination() {
        let db = Database::in_memory().unwrap();
        for day in 1..=5 {
            db.insert_transaction(&new_tx(
                &format!("2024-06-0{}", day),
                TransactionType::Expense,
                day as f64,
            ))
            .unwrap();
        }

        let page = db.list_transactions(1, 2, None, None, None).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].date, d("2024-06-04"));
        assert_eq!(page[1].date, d("2024-06-03"));
    }

    #[test]
    fn test_list_date_and_type_filters() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Income, 100.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-02", TransactionType::Expense, 40.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-10", TransactionType::Expense, 60.0))
            .unwrap();

        let in_range = db
            .list_transactions(0, 100, Some(d("2024-06-01")), Some(d("2024-06-05")), None)
            .unwrap();
        assert_eq!(in_range.len(), 2);

        let expenses = db
            .list_transactions(0, 100, None, None, Some(TransactionType::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|t| t.kind == TransactionType::Expense));

        let both = db
            .list_transactions(
                0,
                100,
                Some(d("2024-06-05")),
                None,
                Some(TransactionType::Expense),
            )
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].date, d("2024-06-10"));
    }

    #[test]
    fn test_update_partial_fields_only() {
        let db = Database::in_memory().unwrap();
        let tx = db
            .insert_transaction(&NewTransaction {
                date: d("2024-06-01"),
                kind: TransactionType::Expense,
                amount: 40.0,
                category: Some("food".to_string()),
                description: Some("groceries".to_string()),
            })
            .unwrap();

        let updated = db
            .update_transaction(
                tx.id,
                &UpdateTransaction {
                    amount: Some(55.0),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        // Only amount changed; everything else is retained
        assert_eq!(updated.amount, 55.0);
        assert_eq!(updated.date, d("2024-06-01"));
        assert_eq!(updated.kind, TransactionType::Expense);
        assert_eq!(updated.category.as_deref(), Some("food"));
        assert_eq!(updated.description.as_deref(), Some("groceries"));
        assert_eq!(updated.created_at, tx.created_at);
    }

    #[test]
    fn test_update_validates_merged_record() {
        let db = Database::in_memory().unwrap();
        let tx = db
            .insert_transaction(&new_tx("2024-06-01", TransactionType::Adjustment, -100.0))
            .unwrap();

        // Flipping type to expense while the stored amount is negative
        // must fail the invariant on the merged record
        let err = db
            .update_transaction(
                tx.id,
                &UpdateTransaction {
                    kind: Some(TransactionType::Expense),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidData(_)));

        // Record unchanged after the rejected update
        let fetched = db.get_transaction(tx.id).unwrap().unwrap();
        assert_eq!(fetched.kind, TransactionType::Adjustment);
        assert_eq!(fetched.amount, -100.0);
    }

    #[test]
    fn test_update_missing_transaction() {
        let db = Database::in_memory().unwrap();
        let result = db
            .update_transaction(
                999,
                &UpdateTransaction {
                    amount: Some(1.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_then_get() {
        let db = Database::in_memory().unwrap();
        let tx = db
            .insert_transaction(&new_tx("2024-06-01", TransactionType::Income, 100.0))
            .unwrap();

        assert!(db.delete_transaction(tx.id).unwrap());
        assert!(db.get_transaction(tx.id).unwrap().is_none());

        // Second delete reports absence
        assert!(!db.delete_transaction(tx.id).unwrap());
    }

    #[test]
    fn test_transactions_in_range_ascending_inclusive() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-05", TransactionType::Expense, 5.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, 1.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-10", TransactionType::Expense, 10.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-11", TransactionType::Expense, 11.0))
            .unwrap();

        let range = db
            .transactions_in_range(d("2024-06-01"), d("2024-06-10"))
            .unwrap();
        let dates: Vec<_> = range.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![d("2024-06-01"), d("2024-06-05"), d("2024-06-10")]);
    }

    #[test]
    fn test_date_bounds() {
        let db = Database::in_memory().unwrap();
        assert!(db.date_bounds().unwrap().is_none());

        db.insert_transaction(&new_tx("2024-03-15", TransactionType::Income, 100.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-01-02", TransactionType::Expense, 40.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-05-20", TransactionType::Adjustment, -5.0))
            .unwrap();

        let (min, max) = db.date_bounds().unwrap().unwrap();
        assert_eq!(min, d("2024-01-02"));
        assert_eq!(max, d("2024-05-20"));
    }

    // ========== Statistics ==========

    #[test]
    fn test_period_statistics_single_day() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Income, 100.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, 40.0))
            .unwrap();

        let stats = db.period_statistics(d("2024-06-01"), d("2024-06-01")).unwrap();
        assert_eq!(stats.period_start, d("2024-06-01"));
        assert_eq!(stats.period_end, d("2024-06-01"));
        assert_eq!(stats.total_income, 100.0);
        assert_eq!(stats.total_expense, 40.0);
        assert_eq!(stats.balance, 60.0);
        assert_eq!(
            stats.daily_statistics,
            vec![DailyStatistic {
                date: d("2024-06-01"),
                income: 100.0,
                expense: 40.0,
                balance: 60.0,
            }]
        );
    }

    #[test]
    fn test_period_statistics_skips_adjustments() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Adjustment, 500.0))
            .unwrap();

        let stats = db.period_statistics(d("2024-06-01"), d("2024-06-30")).unwrap();
        assert!(stats.daily_statistics.is_empty());
        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.total_expense, 0.0);
        assert_eq!(stats.balance, 0.0);
    }

    #[test]
    fn test_period_statistics_omits_inactive_days() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Income, 100.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-03", TransactionType::Expense, 25.0))
            .unwrap();

        let stats = db.period_statistics(d("2024-06-01"), d("2024-06-07")).unwrap();

        // 2024-06-02 and 2024-06-04..07 have no activity and are omitted
        let dates: Vec<_> = stats.daily_statistics.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![d("2024-06-01"), d("2024-06-03")]);
    }

    #[test]
    fn test_period_statistics_sums_same_day_same_type() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, 10.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-06-01", TransactionType::Expense, 15.0))
            .unwrap();

        let stats = db.daily_statistics_for(d("2024-06-01")).unwrap();
        assert_eq!(stats.daily_statistics.len(), 1);
        assert_eq!(stats.daily_statistics[0].expense, 25.0);
        assert_eq!(stats.total_expense, 25.0);
    }

    #[test]
    fn test_weekly_statistics_range_is_calendar_week() {
        let db = Database::in_memory().unwrap();

        // 2024-06-12 is a Wednesday; the week is 06-10..06-16 regardless
        // of data presence
        let stats = db.weekly_statistics_for(d("2024-06-12")).unwrap();
        assert_eq!(stats.period_start, d("2024-06-10"));
        assert_eq!(stats.period_end, d("2024-06-16"));
        assert!(stats.daily_statistics.is_empty());
    }

    #[test]
    fn test_weekly_statistics_excludes_neighboring_weeks() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-06-09", TransactionType::Expense, 1.0))
            .unwrap(); // Sunday before
        db.insert_transaction(&new_tx("2024-06-10", TransactionType::Expense, 2.0))
            .unwrap(); // Monday
        db.insert_transaction(&new_tx("2024-06-16", TransactionType::Expense, 3.0))
            .unwrap(); // Sunday
        db.insert_transaction(&new_tx("2024-06-17", TransactionType::Expense, 4.0))
            .unwrap(); // Monday after

        let stats = db.weekly_statistics_for(d("2024-06-12")).unwrap();
        assert_eq!(stats.total_expense, 5.0);
        assert_eq!(stats.daily_statistics.len(), 2);
    }

    #[test]
    fn test_monthly_statistics_leap_february() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-02-29", TransactionType::Income, 100.0))
            .unwrap();

        let stats = db.monthly_statistics_for(d("2024-02-15")).unwrap();
        assert_eq!(stats.period_start, d("2024-02-01"));
        assert_eq!(stats.period_end, d("2024-02-29"));
        assert_eq!(stats.total_income, 100.0);
    }

    #[test]
    fn test_summary_statistics_empty_ledger() {
        let db = Database::in_memory().unwrap();
        let today = chrono::Utc::now().date_naive();

        let stats = db.summary_statistics().unwrap();
        assert_eq!(stats.period_start, today);
        assert_eq!(stats.period_end, today);
        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.total_expense, 0.0);
        assert_eq!(stats.balance, 0.0);
        assert!(stats.daily_statistics.is_empty());
    }

    #[test]
    fn test_summary_statistics_spans_full_ledger() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx("2024-01-05", TransactionType::Income, 300.0))
            .unwrap();
        db.insert_transaction(&new_tx("2024-03-20", TransactionType::Expense, 120.0))
            .unwrap();

        let stats = db.summary_statistics().unwrap();
        assert_eq!(stats.period_start, d("2024-01-05"));
        assert_eq!(stats.period_end, d("2024-03-20"));
        assert_eq!(stats.total_income, 300.0);
        assert_eq!(stats.total_expense, 120.0);
        assert_eq!(stats.balance, 180.0);
    }
}
