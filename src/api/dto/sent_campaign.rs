//! DTOs for sent campaign endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Campaign, CampaignContent, SentCampaign, WebhookEvent};
use crate::domain::model::BaseModel;

/// A campaign that has just been sent, as reported by Mailchimp.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSentCampaignRequest {
    pub campaign: Campaign,
    #[serde(default)]
    pub content: Option<CampaignContent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentCampaignResponse {
    pub id: String,
    pub campaign: Option<Campaign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CampaignContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_event: Option<WebhookEvent>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SentCampaign> for SentCampaignResponse {
    fn from(sent: SentCampaign) -> Self {
        Self {
            id: sent.id().unwrap_or_default().to_string(),
            created_at: sent.meta.created_at,
            updated_at: sent.meta.updated_at,
            campaign: sent.campaign,
            content: sent.content,
            webhook_event: sent.webhook_event,
        }
    }
}
