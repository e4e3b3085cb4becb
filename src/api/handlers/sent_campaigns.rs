//! Handlers for sent campaign records.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::sent_campaign::{RecordSentCampaignRequest, SentCampaignResponse};
use crate::domain::entities::WebhookEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a sent campaign under its Mailchimp campaign id.
///
/// # Endpoint
///
/// `POST /api/sent-campaigns`
///
/// # Errors
///
/// Returns 400 Bad Request if the campaign id is empty.
pub async fn record_sent_campaign_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecordSentCampaignRequest>,
) -> Result<(StatusCode, Json<SentCampaignResponse>), AppError> {
    let sent = state
        .sent_campaign_service
        .record_sent(payload.campaign, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(sent.into())))
}

/// `GET /api/sent-campaigns/{id}`
pub async fn get_sent_campaign_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SentCampaignResponse>, AppError> {
    let sent = state.sent_campaign_service.get(&id).await?;
    Ok(Json(sent.into()))
}

/// Attaches a Mailchimp webhook event to a sent campaign.
///
/// # Endpoint
///
/// `POST /api/sent-campaigns/{id}/webhook-events`
///
/// # Errors
///
/// Returns 404 Not Found if no campaign was recorded under `id`.
pub async fn record_webhook_event_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<WebhookEvent>,
) -> Result<Json<SentCampaignResponse>, AppError> {
    let sent = state
        .sent_campaign_service
        .record_webhook_event(&id, event)
        .await?;
    Ok(Json(sent.into()))
}
