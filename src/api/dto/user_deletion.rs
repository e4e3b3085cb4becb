//! User deletion contract.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::email::email_rule;

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[validate(custom(function = "email_rule"))]
    pub email: String,
    pub member_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub success: bool,
    #[serde(default)]
    pub documents_deleted: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
