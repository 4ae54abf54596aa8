use std::path::PathBuf;
use std::sync::Mutex;

use finance_core::{core::LedgerManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique store file for each test.
pub fn setup_manager() -> (LedgerManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let store_path = temp.path().join("transactions.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let manager = LedgerManager::new(Box::new(JsonStorage::new(store_path.clone())));
    (manager, store_path)
}
