use thiserror::Error;

/// Error type that captures ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(f64),
    #[error("Category must not be empty")]
    InvalidCategory,
    #[error("Unknown transaction kind: {0}")]
    UnknownKind(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
