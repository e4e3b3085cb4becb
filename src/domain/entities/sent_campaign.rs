//! SentCampaign entity and the Mailchimp payload types it stores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::collection::Collection;
use crate::domain::model::{BaseModel, ModelMeta};

/// Campaign settings as reported by Mailchimp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Campaign summary. Field names follow the Mailchimp API (snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub campaign_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails_sent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<CampaignSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_html: Option<String>,
}

/// Mailchimp webhook event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEventType {
    Subscribe,
    Unsubscribe,
    Profile,
    Upemail,
    Cleaned,
    Campaign,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    pub fired_at: String,
    #[serde(default)]
    pub data: Value,
}

/// Record of a campaign send, updated as webhook events arrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentCampaign {
    #[serde(skip)]
    pub meta: ModelMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<Campaign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CampaignContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_event: Option<WebhookEvent>,
}

impl SentCampaign {
    pub fn new(campaign: Campaign, content: Option<CampaignContent>) -> Self {
        Self {
            meta: ModelMeta::default(),
            campaign: Some(campaign),
            content,
            webhook_event: None,
        }
    }

    /// Mailchimp campaign id, if the campaign payload is present.
    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign.as_ref().map(|c| c.id.as_str())
    }
}

impl BaseModel for SentCampaign {
    const COLLECTION: Collection = Collection::SentCampaigns;

    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ModelMeta {
        &mut self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_event_from_mailchimp_payload() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "type": "campaign",
            "fired_at": "2019-06-01 09:06:31",
            "data": { "id": "c-1", "status": "sent" }
        }))
        .unwrap();

        assert_eq!(event.event_type, WebhookEventType::Campaign);
        assert_eq!(event.data["status"], "sent");
    }

    #[test]
    fn test_unknown_webhook_type_is_tolerated() {
        let event: WebhookEvent =
            serde_json::from_value(json!({ "type": "brand-new", "fired_at": "x" })).unwrap();
        assert_eq!(event.event_type, WebhookEventType::Unknown);
    }

    #[test]
    fn test_sent_campaign_wire_layout() {
        let campaign = Campaign {
            id: "c-1".to_string(),
            web_id: None,
            campaign_type: "regular".to_string(),
            status: "sent".to_string(),
            send_time: None,
            emails_sent: Some(120),
            settings: None,
        };
        let sent = SentCampaign::new(campaign, None);

        let data = sent.to_data().unwrap();
        assert_eq!(data["campaign"]["type"], "regular");
        assert_eq!(data["campaign"]["emails_sent"], 120);
        assert!(data.get("webhookEvent").is_none());
        assert_eq!(sent.campaign_id(), Some("c-1"));
        assert_eq!(sent.collection(), Collection::SentCampaigns);
    }
}
