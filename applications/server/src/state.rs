/// Shared application state
use crate::{config::ServerConfig, error::Result, services::UserAccountService};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<UserAccountService>,
}

impl AppState {
    pub fn new(accounts: Arc<UserAccountService>) -> Self {
        Self { accounts }
    }

    /// Connect to the configured database, run migrations, and build the services
    pub async fn open(config: &ServerConfig) -> Result<Self> {
        let store = Arc::new(technotes_storage::open(&config.storage.database_url).await?);
        tracing::info!("Database connected");

        let accounts = UserAccountService::new(store.clone(), store, config.password_hasher());
        Ok(Self::new(Arc::new(accounts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;

    #[tokio::test]
    async fn test_open_creates_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.storage.database_url =
            format!("sqlite://{}", temp_dir.path().join("technotes.db").display());
        config.security.bcrypt_cost = 4;

        let state = AppState::open(&config).await.unwrap();

        // Fresh database, no users yet
        assert!(state.accounts.list().await.is_err());
        assert!(temp_dir.path().join("technotes.db").exists());
    }

    #[tokio::test]
    async fn test_open_reports_storage_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.storage.database_url = format!(
            "sqlite://{}",
            temp_dir.path().join("missing-dir").join("technotes.db").display()
        );

        let result = AppState::open(&config).await;
        assert!(matches!(result, Err(ServerError::Storage(_))));
    }
}
