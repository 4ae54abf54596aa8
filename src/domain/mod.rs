pub mod factory;
pub mod transaction;

pub use factory::TransactionFactory;
pub use transaction::{Transaction, TransactionKind};
