//! Handlers for member data exports.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::data_export::{
    CreateDataExportRequest, DataExportListQuery, DataExportListResponse, DataExportResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Records a new data export for a member.
///
/// # Endpoint
///
/// `POST /api/data-exports`
///
/// # Request Body
///
/// ```json
/// { "memberId": "abc123", "email": "member@kinecho.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `memberId` is empty or `email` is malformed.
pub async fn create_data_export_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDataExportRequest>,
) -> Result<(StatusCode, Json<DataExportResponse>), AppError> {
    payload.validate()?;

    let export = state
        .data_export_service
        .create_export(&payload.member_id)
        .await?;

    if let Some(email) = &payload.email {
        tracing::info!(member_id = %payload.member_id, %email, "Data export requested");
    }

    Ok((StatusCode::CREATED, Json(export.into())))
}

/// Lists live exports, newest first.
///
/// # Endpoint
///
/// `GET /api/data-exports?memberId=<id>&limit=<n>`
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside `1..=100`.
pub async fn list_data_exports_handler(
    State(state): State<AppState>,
    Query(params): Query<DataExportListQuery>,
) -> Result<Json<DataExportListResponse>, AppError> {
    let limit = params
        .validated_limit()
        .map_err(|e| AppError::bad_request(e, json!({ "limit": params.limit })))?;

    let exports = state
        .data_export_service
        .list_exports(params.member_id.as_deref(), Some(limit))
        .await?;

    let items: Vec<DataExportResponse> = exports.into_iter().map(Into::into).collect();

    Ok(Json(DataExportListResponse {
        total: items.len(),
        items,
    }))
}

/// Counts a download of an export and returns the updated record.
///
/// # Endpoint
///
/// `POST /api/data-exports/{id}/download`
///
/// # Errors
///
/// Returns 404 Not Found if the export does not exist or was deleted.
pub async fn download_data_export_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataExportResponse>, AppError> {
    let export = state.data_export_service.record_download(&id).await?;
    Ok(Json(export.into()))
}
