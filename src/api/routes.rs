//! API route configuration.

use crate::api::handlers::{
    active_users_handler, create_data_export_handler, download_data_export_handler,
    get_sent_campaign_handler, list_data_exports_handler, record_sent_campaign_handler,
    record_webhook_event_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /data-exports`                         - List exports (newest first)
/// - `POST /data-exports`                         - Record a new export
/// - `POST /data-exports/{id}/download`           - Count a download
/// - `POST /sent-campaigns`                       - Record a sent campaign
/// - `GET  /sent-campaigns/{id}`                  - Fetch a sent campaign
/// - `POST /sent-campaigns/{id}/webhook-events`   - Attach a webhook event
/// - `GET  /analytics/active-users`               - Distinct active members
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/data-exports",
            get(list_data_exports_handler).post(create_data_export_handler),
        )
        .route(
            "/data-exports/{id}/download",
            post(download_data_export_handler),
        )
        .route("/sent-campaigns", post(record_sent_campaign_handler))
        .route("/sent-campaigns/{id}", get(get_sent_campaign_handler))
        .route(
            "/sent-campaigns/{id}/webhook-events",
            post(record_webhook_event_handler),
        )
        .route("/analytics/active-users", get(active_users_handler))
}
