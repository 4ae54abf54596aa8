pub mod json_backend;

use crate::domain::Transaction;
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the transaction log.
///
/// `save` replaces whatever the backend holds with the given log; `load`
/// returns the full persisted log, empty when nothing was stored yet.
pub trait StorageAdapter: Send + Sync {
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    fn load(&self) -> Result<Vec<Transaction>>;
}

pub use json_backend::{default_store_path, JsonStorage};
