// =============================================================================
// EMPLOYEE STORE - SQLite-backed read access to the directory
// =============================================================================

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::environment::EnvironmentVariables;
use crate::models::employee::Employee;

/// Single initialization SQL script
const INIT_SCHEMA_SQL: &str = include_str!("sql/schema_init.sql");

/// Data access for the employee directory.
/// Note: The pool is not initialized until `initialize()` is called.
#[derive(Clone, Debug)]
pub struct EmployeeStore {
    /// Single connection pool for the application
    pool: Arc<OnceCell<SqlitePool>>,
    /// Environment configuration
    config: Arc<EnvironmentVariables>,
}

impl EmployeeStore {
    /// Creates a new EmployeeStore instance.
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        Self {
            pool: Arc::new(OnceCell::new()),
            config,
        }
    }

    /// Initializes the store by creating the pool and applying the schema.
    pub async fn initialize(&self) -> Result<()> {
        info!("Initializing EmployeeStore...");

        // Initialize the pool if not already initialized
        self.pool.get_or_try_init(|| async {
            self.create_pool().await
        }).await?;

        let pool: &SqlitePool = self.get_pool()?;
        self.initialize_schema(pool).await?;

        info!("EmployeeStore initialized successfully");
        Ok(())
    }

    /// Gracefully shuts down the store.
    pub async fn shutdown(&self) {
        info!("Initiating EmployeeStore shutdown...");
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection pool closed");
        } else {
            debug!("Database pool was not initialized, nothing to close");
        }
    }

    /// Returns the connection pool.
    /// Errors if the pool has not been initialized.
    pub fn get_pool(&self) -> Result<&SqlitePool> {
        self.pool.get().ok_or_else(|| anyhow::anyhow!("Database pool not initialized"))
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl EmployeeStore {
    /// Fetches every employee, ordered by primary key.
    pub async fn fetch_all(&self) -> Result<Vec<Employee>> {
        let pool: &SqlitePool = self.get_pool()?;

        let employees: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, title, email, department, hired_on
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to load employee list")?;

        Ok(employees)
    }

    /// Looks up one employee by primary key. Absence is `Ok(None)`, not an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let pool: &SqlitePool = self.get_pool()?;

        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, title, email, department, hired_on
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("Failed to look up employee {id}"))?;

        Ok(employee)
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

impl EmployeeStore {
    /// Creates the connection pool based on environment config
    async fn create_pool(&self) -> Result<SqlitePool> {
        let options: SqliteConnectOptions = SqliteConnectOptions::from_str(&self.config.database_url)
            .context("Invalid DATABASE_URL")?
            .create_if_missing(true);

        let pool: SqlitePool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("Failed to create database connection pool")?;

        Ok(pool)
    }

    /// Runs the initialization SQL
    async fn initialize_schema(&self, pool: &SqlitePool) -> Result<()> {
        pool.execute(INIT_SCHEMA_SQL)
            .await
            .context("Failed to execute schema initialization SQL")?;

        Ok(())
    }
}
