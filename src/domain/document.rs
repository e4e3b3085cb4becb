//! Raw documents as stored by a [`DocumentStore`](crate::domain::repositories::DocumentStore).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::collection::Collection;

/// A stored document: untyped domain fields plus store-managed metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub collection: Collection,
    pub id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Returns true if the document has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
