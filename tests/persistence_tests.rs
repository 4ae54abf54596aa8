use std::fs;
use std::path::{Path, PathBuf};

use finance_core::{
    domain::{Transaction, TransactionKind},
    errors::LedgerError,
    storage::{JsonStorage, StorageAdapter},
};
use tempfile::tempdir;

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(TransactionKind::Income, 1000.0, "Salary").expect("valid income"),
        Transaction::new(TransactionKind::Expense, 800.0, "Rent").expect("valid expense"),
        Transaction::new(TransactionKind::Income, 200.0, "Bonus").expect("valid income"),
    ]
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn save_then_load_roundtrips_order_and_fields() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("transactions.json"));

    let original = sample_transactions();
    storage.save(&original).expect("save transactions");
    let loaded = storage.load().expect("load transactions");

    assert_eq!(loaded, original);
}

#[test]
fn load_missing_file_returns_empty_ledger() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("missing.json"));

    let loaded = storage.load().expect("load from missing file");
    assert!(loaded.is_empty());
}

#[test]
fn save_replaces_previous_content() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("transactions.json"));

    storage.save(&sample_transactions()).expect("first save");
    let single =
        vec![Transaction::new(TransactionKind::Expense, 12.5, "Coffee").expect("valid expense")];
    storage.save(&single).expect("second save");

    let loaded = storage.load().expect("load after overwrite");
    assert_eq!(loaded, single);
}

#[test]
fn non_ascii_categories_roundtrip_intact() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("transactions.json"));

    let log =
        vec![Transaction::new(TransactionKind::Expense, 4.2, "Café").expect("valid expense")];
    storage.save(&log).expect("save log");

    let loaded = storage.load().expect("load log");
    assert_eq!(loaded[0].category(), "Café");
}

#[test]
fn corrupt_store_surfaces_serde_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("transactions.json");
    fs::write(&path, "{ not json").unwrap();

    let storage = JsonStorage::new(path);
    let err = storage.load().expect_err("corrupt file must fail");
    assert!(matches!(err, LedgerError::Serde(_)));
}

#[test]
fn load_unreadable_store_surfaces_io_error() {
    let temp = tempdir().unwrap();

    // The store path is a directory, so the read itself fails.
    let storage = JsonStorage::new(temp.path());
    let err = storage.load().expect_err("directory store must fail");
    assert!(matches!(err, LedgerError::Io(_)));
}

#[test]
fn stored_invalid_amount_fails_validation_on_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("transactions.json");
    fs::write(
        &path,
        r#"[{"type": "Expense", "amount": -3.0, "category": "Food", "date": "2023-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let storage = JsonStorage::new(path);
    let err = storage.load().expect_err("negative stored amount must fail");
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("transactions.json");
    let storage = JsonStorage::new(path.clone());

    storage.save(&sample_transactions()).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // Create a directory that collides with the temp file name to force File::create to fail.
    fs::create_dir_all(tmp_path_for(&path)).unwrap();

    let replacement =
        vec![Transaction::new(TransactionKind::Income, 99.0, "Refund").expect("valid income")];
    let result = storage.save(&replacement);
    assert!(
        result.is_err(),
        "expected save to fail when temp path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );
}
