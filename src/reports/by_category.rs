use super::ReportStrategy;
use crate::domain::Transaction;

/// Sums signed amounts per category, listing each category in the order it
/// first appears in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryReport;

impl ReportStrategy for CategoryReport {
    fn aggregate(&self, transactions: &[Transaction]) -> String {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for txn in transactions {
            match totals.iter_mut().find(|entry| entry.0 == txn.category()) {
                Some(entry) => entry.1 += txn.signed_amount(),
                None => totals.push((txn.category().to_string(), txn.signed_amount())),
            }
        }

        let mut output = String::from("=== Report by Category ===\n");
        for (category, total) in totals {
            output.push_str(&format!("{}: {:.2}\n", category, total));
        }
        output
    }
}
