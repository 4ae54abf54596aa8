//! Presentation helpers rendering transactions as single-line rows.

use crate::domain::Transaction;

/// Renders one entry as `[KIND] amount currency - category (date)`.
pub fn format_transaction(txn: &Transaction, currency: &str) -> String {
    format!(
        "[{}] {:.2} {} - {} ({})",
        txn.kind().as_str().to_uppercase(),
        txn.amount(),
        currency,
        txn.category(),
        txn.date().format("%Y-%m-%d")
    )
}

/// Renders the whole log as index-numbered rows, one per line. Indexes match
/// the positions accepted by `LedgerManager::remove`.
pub fn format_transaction_list(transactions: &[Transaction], currency: &str) -> String {
    transactions
        .iter()
        .enumerate()
        .map(|(index, txn)| format!("{:>3}. {}", index, format_transaction(txn, currency)))
        .collect::<Vec<_>>()
        .join("\n")
}
