//! DTOs for data export endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::DataExport;
use crate::domain::model::BaseModel;
use crate::utils::email::email_rule;

/// Request to export a member's data.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataExportRequest {
    #[validate(length(min = 1, max = 128, message = "memberId must not be empty"))]
    pub member_id: String,

    /// Address the export link should be sent to.
    #[validate(custom(function = "email_rule"))]
    pub email: Option<String>,
}

/// Listing filter. Query strings carry numbers as text.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExportListQuery {
    pub member_id: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl DataExportListQuery {
    pub const DEFAULT_LIMIT: u32 = 25;
    pub const MAX_LIMIT: u32 = 100;

    /// Validates the limit and applies the default.
    pub fn validated_limit(&self) -> Result<i64, String> {
        let limit = self.limit.unwrap_or(Self::DEFAULT_LIMIT);
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", Self::MAX_LIMIT));
        }
        Ok(limit as i64)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExportResponse {
    pub id: String,
    pub member_id: String,
    pub download_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DataExport> for DataExportResponse {
    fn from(export: DataExport) -> Self {
        Self {
            id: export.id().unwrap_or_default().to_string(),
            created_at: export.meta.created_at,
            updated_at: export.meta.updated_at,
            member_id: export.member_id,
            download_count: export.download_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataExportListResponse {
    pub total: usize,
    pub items: Vec<DataExportResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_validation() {
        let ok: CreateDataExportRequest = serde_json::from_value(json!({
            "memberId": "member-1",
            "email": "neil@kinecho.com"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad_email: CreateDataExportRequest = serde_json::from_value(json!({
            "memberId": "member-1",
            "email": "neil@kinecho.info"
        }))
        .unwrap();
        assert!(bad_email.validate().is_err());

        let empty_member: CreateDataExportRequest =
            serde_json::from_value(json!({ "memberId": "" })).unwrap();
        assert!(empty_member.validate().is_err());
    }

    #[test]
    fn test_list_query_limit() {
        let query = DataExportListQuery::default();
        assert_eq!(query.validated_limit().unwrap(), 25);

        let query = DataExportListQuery {
            member_id: None,
            limit: Some(0),
        };
        assert!(query.validated_limit().is_err());

        let query = DataExportListQuery {
            member_id: None,
            limit: Some(101),
        };
        assert!(query.validated_limit().is_err());
    }
}
