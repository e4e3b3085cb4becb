//! Handler for warehouse analytics.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::analytics::{ActiveUsersQuery, ActiveUsersResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Counts distinct active members over a trailing window.
///
/// # Endpoint
///
/// `GET /api/analytics/active-users?days=<n>` (default 30 days)
///
/// # Errors
///
/// Returns 400 Bad Request if `days` is zero.
pub async fn active_users_handler(
    State(state): State<AppState>,
    Query(params): Query<ActiveUsersQuery>,
) -> Result<Json<ActiveUsersResponse>, AppError> {
    let days = params.days_or_default();
    let count = state.analytics_service.active_users(days).await?;

    Ok(Json(ActiveUsersResponse { days, count }))
}
