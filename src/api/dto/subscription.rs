//! Mailing list subscription contract.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::email::email_rule;

/// Where on the site a signup form was submitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionLocation {
    pub page: String,
    pub form_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[validate(custom(function = "email_rule"))]
    pub email: String,

    #[validate(custom(function = "email_rule"))]
    pub referred_by_email: Option<String>,

    pub subscription_location: Option<SubscriptionLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    NewUser,
    ExistingUser,
    Unknown,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResult {
    pub success: bool,
    pub status: SubscriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_referrer_email_is_validated_when_present() {
        let request: SubscriptionRequest = serde_json::from_value(json!({
            "email": "neil@kinecho.com",
            "referredByEmail": "friend@kinecho.info"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("referred_by_email"));
        assert!(!errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_result_wire_format() {
        let result = SubscriptionResult {
            success: true,
            status: SubscriptionStatus::NewUser,
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "status": "new_user" })
        );
    }
}
