//! Read-only analytics queries and their result processing.
//!
//! Each named query maps to a fixed SQL template. Arguments are always
//! passed as bound parameters, never spliced into the SQL text.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Named analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryString {
    ActiveUsers,
}

impl QueryString {
    pub const ALL: [QueryString; 1] = [QueryString::ActiveUsers];

    /// SQL template for the query. `$n` placeholders are bound from
    /// [`AnalyticsQuery::params`] in order.
    pub fn template(&self) -> &'static str {
        match self {
            QueryString::ActiveUsers => {
                "SELECT COUNT(DISTINCT member_id)::BIGINT AS count \
                 FROM analytics_events \
                 WHERE occurred_at >= NOW() - make_interval(days => $1)"
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryString::ActiveUsers => "active_users",
        }
    }
}

/// Bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Int(i32),
    Text(String),
}

/// A ready-to-run analytics query.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsQuery {
    pub query: QueryString,
    pub sql: &'static str,
    pub params: Vec<QueryParam>,
}

/// One row of a count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActiveUsersParams {
    pub days: u32,
}

/// Builds the active-users query for the trailing `days` days.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `days` is zero or does not fit the
/// database interval argument.
pub fn build_active_users_query(params: ActiveUsersParams) -> Result<AnalyticsQuery, AppError> {
    if params.days == 0 {
        return Err(AppError::bad_request(
            "days must be greater than 0",
            json!({ "days": params.days }),
        ));
    }

    let days = i32::try_from(params.days).map_err(|_| {
        AppError::bad_request("days is too large", json!({ "days": params.days }))
    })?;

    Ok(AnalyticsQuery {
        query: QueryString::ActiveUsers,
        sql: QueryString::ActiveUsers.template(),
        params: vec![QueryParam::Int(days)],
    })
}

/// Extracts the active-user count; an empty result set counts as zero.
pub fn process_active_users_results(rows: &[CountRow]) -> i64 {
    rows.first().map(|row| row.count).unwrap_or(0)
}
