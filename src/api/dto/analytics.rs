//! DTOs for analytics endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ActiveUsersQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub days: Option<u32>,
}

impl ActiveUsersQuery {
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn days_or_default(&self) -> u32 {
        self.days.unwrap_or(Self::DEFAULT_DAYS)
    }
}

#[derive(Debug, Serialize)]
pub struct ActiveUsersResponse {
    pub days: u32,
    pub count: i64,
}
