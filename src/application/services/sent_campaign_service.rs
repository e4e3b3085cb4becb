//! Sent campaign records and their webhook updates.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::ModelRepository;
use crate::domain::entities::{Campaign, CampaignContent, SentCampaign, WebhookEvent};
use crate::domain::model::BaseModel;
use crate::domain::query_options::GetOptions;
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;
use crate::logging::Logger;

/// Service recording campaign sends.
///
/// A sent campaign is stored under the Mailchimp campaign id, so webhook
/// events can be matched back without a lookup query.
pub struct SentCampaignService {
    repository: ModelRepository<SentCampaign>,
    logger: Arc<dyn Logger>,
}

impl SentCampaignService {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository: ModelRepository::new(store, logger.clone()),
            logger,
        }
    }

    /// Stores a campaign that has just been sent.
    ///
    /// Recording the same campaign again refreshes its campaign data and
    /// replaces the content only when new content is given. A stored webhook
    /// event is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the campaign id is empty.
    pub async fn record_sent(
        &self,
        campaign: Campaign,
        content: Option<CampaignContent>,
    ) -> Result<SentCampaign, AppError> {
        if campaign.id.trim().is_empty() {
            return Err(AppError::bad_request(
                "Campaign id must not be empty",
                json!({}),
            ));
        }

        let existing = self
            .repository
            .get_by_id(&campaign.id, GetOptions::default())
            .await?;
        let sent = match existing {
            Some(mut sent) => {
                sent.campaign = Some(campaign);
                if content.is_some() {
                    sent.content = content;
                }
                sent
            }
            None => {
                let mut sent = SentCampaign::new(campaign, content);
                sent.meta_mut().id = sent.campaign_id().map(str::to_string);
                sent
            }
        };

        let sent = self.repository.save(sent).await?;
        self.logger
            .info(&format!("Recorded sent campaign {}", sent.id().unwrap_or_default()));
        Ok(sent)
    }

    /// Attaches the latest webhook event to a sent campaign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no sent campaign has this id.
    pub async fn record_webhook_event(
        &self,
        campaign_id: &str,
        event: WebhookEvent,
    ) -> Result<SentCampaign, AppError> {
        let mut sent = self.repository.find_by_id(campaign_id).await?;
        self.logger.debug(&format!(
            "Webhook {:?} for campaign {}",
            event.event_type, campaign_id
        ));
        sent.webhook_event = Some(event);
        self.repository.save(sent).await
    }

    pub async fn get(&self, campaign_id: &str) -> Result<SentCampaign, AppError> {
        self.repository.find_by_id(campaign_id).await
    }
}
