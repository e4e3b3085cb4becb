//! Checkout session contract shared with the front-end.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::email::email_rule;

/// Request to open a hosted checkout session for a subscription plan.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[validate(length(min = 1))]
    pub price_id: String,

    #[validate(url)]
    pub success_url: String,

    #[validate(url)]
    pub cancel_url: String,

    pub member_id: Option<String>,

    #[validate(custom(function = "email_rule"))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
