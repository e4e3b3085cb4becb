//! PostgreSQL implementation of the analytics warehouse.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::analytics::{AnalyticsQuery, CountRow, QueryParam};
use crate::domain::repositories::AnalyticsWarehouse;
use crate::error::AppError;

/// Runs analytics queries against the `analytics_events` table.
pub struct PgAnalyticsWarehouse {
    pool: Arc<PgPool>,
}

impl PgAnalyticsWarehouse {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsWarehouse for PgAnalyticsWarehouse {
    async fn run_count_query(&self, query: &AnalyticsQuery) -> Result<Vec<CountRow>, AppError> {
        let mut statement = sqlx::query_scalar::<_, i64>(query.sql);

        for param in &query.params {
            statement = match param {
                QueryParam::Int(v) => statement.bind(*v),
                QueryParam::Text(v) => statement.bind(v.clone()),
            };
        }

        let counts = statement.fetch_all(self.pool.as_ref()).await?;

        tracing::debug!(query = query.query.name(), rows = counts.len(), "Analytics query finished");

        Ok(counts.into_iter().map(|count| CountRow { count }).collect())
    }
}
