use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Whether an entry adds to or draws from the ledger balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase tag accepted by user input and the factory.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Applies the kind's sign to an amount for balance sums.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::UnknownKind(other.to_string())),
        }
    }
}

/// A single dated ledger entry. Construction validates the amount and
/// category, so every held value is well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: f64,
    category: String,
    date: DateTime<Utc>,
}

impl Transaction {
    /// Validates and creates an entry dated now.
    pub fn new(kind: TransactionKind, amount: f64, category: &str) -> Result<Self, LedgerError> {
        Self::with_date(kind, amount, category, Utc::now())
    }

    /// Validates and creates an entry with an explicit date.
    pub fn with_date(
        kind: TransactionKind,
        amount: f64,
        category: &str,
        date: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::InvalidCategory);
        }
        Ok(Self {
            kind,
            amount,
            category: category.to_string(),
            date,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Amount with the kind's sign applied.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}
