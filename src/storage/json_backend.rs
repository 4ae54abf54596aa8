use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::app_data_dir;
use crate::domain::{Transaction, TransactionKind};

use super::{Result, StorageAdapter};

const STORE_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Default transaction store location inside the application data directory.
pub fn default_store_path() -> PathBuf {
    app_data_dir().join(STORE_FILE)
}

/// File-backed adapter persisting the whole transaction log as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn new_default() -> Self {
        Self::new(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageAdapter for JsonStorage {
    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let records: Vec<StoredRecord> = transactions.iter().map(StoredRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            tracing::warn!(
                "transaction store {} not found, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let records: Vec<StoredRecord> = serde_json::from_str(&data)?;
        records
            .into_iter()
            .map(StoredRecord::into_transaction)
            .collect()
    }
}

/// Wire layout of one persisted entry: `{type, amount, category, date}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: f64,
    category: String,
    date: DateTime<Utc>,
}

impl From<&Transaction> for StoredRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            kind: txn.kind(),
            amount: txn.amount(),
            category: txn.category().to_string(),
            date: txn.date(),
        }
    }
}

impl StoredRecord {
    /// Rebuilds the domain value through its validating constructor, so
    /// hand-edited stores cannot smuggle in invalid entries.
    fn into_transaction(self) -> Result<Transaction> {
        Transaction::with_date(self.kind, self.amount, &self.category, self.date)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("transactions.json"));
        (storage, temp)
    }

    fn sample_log() -> Vec<Transaction> {
        vec![
            Transaction::with_date(
                TransactionKind::Income,
                1000.0,
                "Salary",
                "2023-01-01T00:00:00Z".parse().unwrap(),
            )
            .unwrap(),
            Transaction::with_date(
                TransactionKind::Expense,
                800.0,
                "Food",
                "2023-01-05T00:00:00Z".parse().unwrap(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let log = sample_log();
        storage.save(&log).expect("save log");
        let loaded = storage.load().expect("load log");
        assert_eq!(loaded, log);
    }

    #[test]
    fn missing_store_loads_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load missing store");
        assert!(loaded.is_empty());
    }

    #[test]
    fn persisted_records_use_type_tag() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample_log()).expect("save log");
        let raw = fs::read_to_string(storage.path()).expect("read store");
        assert!(raw.contains("\"type\": \"Income\""));
        assert!(raw.contains("\"type\": \"Expense\""));
        assert!(raw.contains("\"category\": \"Salary\""));
    }

    #[test]
    fn invalid_stored_amount_is_rejected_on_load() {
        let (storage, _guard) = storage_with_temp_dir();
        let raw = r#"[{"type": "Income", "amount": -3.0, "category": "Salary", "date": "2023-01-01T00:00:00Z"}]"#;
        fs::write(storage.path(), raw).expect("write store");
        let err = storage.load().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(value) if value == -3.0));
    }

    #[test]
    fn corrupt_store_surfaces_serde_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.path(), "{ not json").expect("write store");
        let err = storage.load().unwrap_err();
        assert!(matches!(err, LedgerError::Serde(_)));
    }
}
