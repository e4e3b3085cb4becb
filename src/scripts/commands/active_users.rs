use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::AnalyticsService;
use crate::domain::repositories::AnalyticsWarehouse;
use crate::logging::Logger;
use crate::scripts::command::Command;

/// Trailing window reported by the command.
pub const ACTIVE_USER_WINDOW_DAYS: u32 = 30;

/// Reports distinct active members over the trailing window.
pub struct ActiveUsersCommand {
    service: AnalyticsService,
}

impl ActiveUsersCommand {
    pub fn new(warehouse: Arc<dyn AnalyticsWarehouse>, logger: Arc<dyn Logger>) -> Self {
        Self {
            service: AnalyticsService::new(warehouse, logger),
        }
    }
}

#[async_trait]
impl Command for ActiveUsersCommand {
    fn name(&self) -> &'static str {
        "active-users"
    }

    fn description(&self) -> &'static str {
        "Count members active in the last 30 days"
    }

    async fn start(&self) -> anyhow::Result<()> {
        self.service.active_users(ACTIVE_USER_WINDOW_DAYS).await?;
        Ok(())
    }
}
