//! Analytics queries against the data warehouse.

use std::sync::Arc;

use crate::domain::analytics::{
    ActiveUsersParams, build_active_users_query, process_active_users_results,
};
use crate::domain::repositories::AnalyticsWarehouse;
use crate::error::AppError;
use crate::logging::Logger;

pub struct AnalyticsService {
    warehouse: Arc<dyn AnalyticsWarehouse>,
    logger: Arc<dyn Logger>,
}

impl AnalyticsService {
    pub fn new(warehouse: Arc<dyn AnalyticsWarehouse>, logger: Arc<dyn Logger>) -> Self {
        Self { warehouse, logger }
    }

    /// Number of distinct members active in the trailing `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a zero or oversized `days`.
    /// Returns [`AppError::Internal`] on warehouse errors.
    pub async fn active_users(&self, days: u32) -> Result<i64, AppError> {
        let query = build_active_users_query(ActiveUsersParams { days })?;
        let rows = self.warehouse.run_count_query(&query).await?;
        let count = process_active_users_results(&rows);

        self.logger
            .info(&format!("{} active users in the last {} days", count, days));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{CountRow, QueryParam};
    use crate::domain::repositories::MockAnalyticsWarehouse;
    use crate::logging::NullLogger;

    #[tokio::test]
    async fn test_active_users_count() {
        let mut mock_warehouse = MockAnalyticsWarehouse::new();
        mock_warehouse
            .expect_run_count_query()
            .withf(|query| query.params == vec![QueryParam::Int(7)])
            .times(1)
            .returning(|_| Ok(vec![CountRow { count: 5 }]));

        let service = AnalyticsService::new(Arc::new(mock_warehouse), Arc::new(NullLogger));

        assert_eq!(service.active_users(7).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_active_users_empty_result() {
        let mut mock_warehouse = MockAnalyticsWarehouse::new();
        mock_warehouse
            .expect_run_count_query()
            .returning(|_| Ok(vec![]));

        let service = AnalyticsService::new(Arc::new(mock_warehouse), Arc::new(NullLogger));

        assert_eq!(service.active_users(30).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_days_never_reaches_warehouse() {
        let mut mock_warehouse = MockAnalyticsWarehouse::new();
        mock_warehouse.expect_run_count_query().times(0);

        let service = AnalyticsService::new(Arc::new(mock_warehouse), Arc::new(NullLogger));

        assert!(matches!(
            service.active_users(0).await,
            Err(AppError::Validation { .. })
        ));
    }
}
