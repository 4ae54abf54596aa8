use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::LedgerError;

/// Builds transactions from the string tags carried by user input.
pub struct TransactionFactory;

impl TransactionFactory {
    /// Creates an entry dated now from a lowercase kind tag.
    ///
    /// Accepts exactly `income` and `expense`; anything else is rejected
    /// before validation runs.
    pub fn create(kind: &str, amount: f64, category: &str) -> Result<Transaction, LedgerError> {
        let kind = kind.parse::<TransactionKind>()?;
        Transaction::new(kind, amount, category)
    }
}
