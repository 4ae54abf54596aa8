use std::collections::BTreeMap;

use super::ReportStrategy;
use crate::domain::Transaction;

/// Sums signed amounts per `YYYY-MM` month. Keys sort lexicographically,
/// which for this format is chronological order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthlyReport;

impl ReportStrategy for MonthlyReport {
    fn aggregate(&self, transactions: &[Transaction]) -> String {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for txn in transactions {
            let month = txn.date().format("%Y-%m").to_string();
            *totals.entry(month).or_insert(0.0) += txn.signed_amount();
        }

        let mut output = String::from("=== Report by Month ===\n");
        for (month, total) in totals {
            output.push_str(&format!("{}: {:.2}\n", month, total));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::{DateTime, Utc};

    fn dated(kind: TransactionKind, amount: f64, category: &str, raw: &str) -> Transaction {
        let date: DateTime<Utc> = raw.parse().unwrap();
        Transaction::with_date(kind, amount, category, date).unwrap()
    }

    #[test]
    fn months_are_listed_chronologically() {
        let log = vec![
            dated(TransactionKind::Expense, 100.0, "Food", "2023-02-15T00:00:00Z"),
            dated(TransactionKind::Income, 1000.0, "Salary", "2023-01-01T00:00:00Z"),
            dated(TransactionKind::Expense, 500.0, "Rent", "2023-01-20T00:00:00Z"),
        ];
        assert_eq!(
            MonthlyReport.aggregate(&log),
            "=== Report by Month ===\n2023-01: 500.00\n2023-02: -100.00\n"
        );
    }

    #[test]
    fn empty_log_yields_header_only() {
        assert_eq!(MonthlyReport.aggregate(&[]), "=== Report by Month ===\n");
    }
}
