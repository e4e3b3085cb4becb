//! Repository trait for the analytical data warehouse.

use crate::domain::analytics::{AnalyticsQuery, CountRow};
use crate::error::AppError;
use async_trait::async_trait;

/// Executes read-only analytics queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsWarehouse`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAnalyticsWarehouse`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsWarehouse: Send + Sync {
    /// Runs a count query and returns its rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on warehouse errors.
    async fn run_count_query(&self, query: &AnalyticsQuery) -> Result<Vec<CountRow>, AppError>;
}
