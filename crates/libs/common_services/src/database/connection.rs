use crate::database::DbError;
use app_state::DatabaseSettings;
use common_types::Dialect;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::{Any, AnyPool, Transaction};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Shared handle to the Lychee database: a bounded pool, the detected dialect and the
/// per-request query budget.
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
    query_timeout: Duration,
}

impl Database {
    /// Opens a connection pool for `database_url` using the dialect validated into
    /// `settings`.
    pub async fn connect(database_url: &str, settings: &DatabaseSettings) -> Result<Self, DbError> {
        install_default_drivers();
        let dialect = settings.dialect;

        info!("Connecting to {dialect} database.");
        let pool = AnyPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .max_lifetime(settings.max_lifetime)
            .idle_timeout(settings.idle_timeout)
            .acquire_timeout(settings.acquire_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self::from_pool(pool, dialect, settings.query_timeout))
    }

    #[must_use]
    pub const fn from_pool(pool: AnyPool, dialect: Dialect, query_timeout: Duration) -> Self {
        Self {
            pool,
            dialect,
            query_timeout,
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &AnyPool {
        &self.pool
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Any>, DbError> {
        Ok(self.pool.begin().await?)
    }

    /// Runs `future` under the query budget, abandoning it with [`DbError::Timeout`]
    /// once the budget is spent.
    pub async fn timed<T, F>(&self, operation: &'static str, future: F) -> Result<T, DbError>
    where
        F: Future<Output = Result<T, DbError>>,
    {
        if let Ok(result) = tokio::time::timeout(self.query_timeout, future).await {
            result
        } else {
            warn!(operation, timeout = ?self.query_timeout, "Database call timed out");
            Err(DbError::Timeout {
                operation,
                after: self.query_timeout,
            })
        }
    }

    /// Cheap round trip used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.timed("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }
}
