//! Common test utilities and fixtures
#![allow(dead_code)]

use std::sync::Arc;
use technotes_server::{PasswordHasher, UserAccountService};
use technotes_storage::{MemoryStore, SqliteStore};
use tempfile::TempDir;

/// Cheapest bcrypt cost, keeps the suites fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Account service over a fresh in-memory store
pub fn memory_accounts() -> (UserAccountService, MemoryStore) {
    let store = MemoryStore::new();
    let accounts = UserAccountService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        PasswordHasher::new(TEST_BCRYPT_COST),
    );
    (accounts, store)
}

/// Create a test database file with migrations applied
///
/// The `TempDir` must be kept alive for as long as the store is used.
pub async fn create_test_database() -> (Arc<SqliteStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let store = technotes_storage::open(&db_url).await.unwrap();
    (Arc::new(store), temp_dir)
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_PASSWORD: &str = "TestPassword123!";

    pub const OTHER_USERNAME: &str = "bob";
    pub const OTHER_PASSWORD: &str = "OtherPassword456!";
}
