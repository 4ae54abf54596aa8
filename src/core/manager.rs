use crate::domain::Transaction;
use crate::errors::LedgerError;
use crate::reports::ReportStrategy;
use crate::storage::StorageAdapter;

/// Facade that owns the in-memory transaction log and coordinates persistence.
///
/// The storage backend is injected at construction, so callers decide where
/// the log lives; everything else operates on the in-memory state.
pub struct LedgerManager {
    transactions: Vec<Transaction>,
    storage: Box<dyn StorageAdapter>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn StorageAdapter>) -> Self {
        Self {
            transactions: Vec::new(),
            storage,
        }
    }

    /// Appends an already-validated entry to the log.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Removes the entry at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.transactions.len() {
            self.transactions.remove(index);
        }
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Writes the current log through the storage adapter.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.transactions)
    }

    /// Replaces the in-memory log with the persisted one.
    pub fn load(&mut self) -> Result<(), LedgerError> {
        self.transactions = self.storage.load()?;
        Ok(())
    }

    /// Runs a report strategy over the current log.
    pub fn generate_report(&self, strategy: &dyn ReportStrategy) -> String {
        strategy.aggregate(&self.transactions)
    }
}
