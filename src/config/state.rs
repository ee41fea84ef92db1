// Application state shared across request handlers

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::environment::EnvironmentVariables;
use crate::database::EmployeeStore;

// AppState singleton
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub database: EmployeeStore,
}

impl AppState {
    /// Creates a new AppState instance
    pub fn new() -> anyhow::Result<Self> {
        let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);
        let database: EmployeeStore = EmployeeStore::new(environment.clone());

        Ok(Self {
            environment,
            database,
        })
    }

    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(|| {
            AppState::new().expect("Failed to initialize AppState")
        });
        &INSTANCE
    }

    /// Connects the employee store and prepares its schema
    pub async fn init_database(&self) -> anyhow::Result<()> {
        self.database.initialize().await?;
        tracing::info!("Employee store initialized successfully");
        Ok(())
    }

    /// Gracefully shuts down database connections
    pub async fn shutdown(&self) {
        self.database.shutdown().await;
    }
}
