//! In-process analytics warehouse over recorded events.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::domain::analytics::{AnalyticsQuery, CountRow, QueryParam, QueryString};
use crate::domain::repositories::AnalyticsWarehouse;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct AnalyticsEvent {
    member_id: String,
    occurred_at: DateTime<Utc>,
}

/// Evaluates named analytics queries against events held in memory.
#[derive(Default)]
pub struct MemoryAnalyticsWarehouse {
    events: RwLock<Vec<AnalyticsEvent>>,
}

impl MemoryAnalyticsWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_event(&self, member_id: impl Into<String>, occurred_at: DateTime<Utc>) {
        self.events.write().await.push(AnalyticsEvent {
            member_id: member_id.into(),
            occurred_at,
        });
    }
}

fn int_param(query: &AnalyticsQuery, index: usize) -> Result<i32, AppError> {
    match query.params.get(index) {
        Some(QueryParam::Int(v)) => Ok(*v),
        other => Err(AppError::internal(
            "Unexpected analytics parameter",
            json!({ "query": query.query.name(), "index": index, "found": format!("{:?}", other) }),
        )),
    }
}

#[async_trait]
impl AnalyticsWarehouse for MemoryAnalyticsWarehouse {
    async fn run_count_query(&self, query: &AnalyticsQuery) -> Result<Vec<CountRow>, AppError> {
        let events = self.events.read().await;

        match query.query {
            QueryString::ActiveUsers => {
                let days = int_param(query, 0)?;
                let since = Utc::now() - Duration::days(i64::from(days));
                let members: HashSet<&str> = events
                    .iter()
                    .filter(|e| e.occurred_at >= since)
                    .map(|e| e.member_id.as_str())
                    .collect();

                Ok(vec![CountRow {
                    count: members.len() as i64,
                }])
            }
        }
    }
}
