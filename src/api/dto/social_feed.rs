//! Social activity feed contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::avatar::avatar_for;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialFeedRequest {
    pub member_id: String,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// One entry in a member's social feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialFeedEvent {
    pub member_id: String,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    pub avatar_url: String,
}

impl SocialFeedEvent {
    /// Builds an event, assigning the member's deterministic avatar.
    pub fn new(member_id: impl Into<String>, event_type: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        let member_id = member_id.into();
        Self {
            avatar_url: avatar_for(&member_id).to_string(),
            member_id,
            event_type: event_type.into(),
            occurred_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialFeedResponse {
    pub success: bool,
    pub events: Vec<SocialFeedEvent>,
}
