//! The `BaseModel` contract shared by every persisted entity.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::collection::Collection;
use crate::domain::document::Document;

/// Store-managed metadata carried by every model instance.
///
/// Kept out of the serialized domain fields; populated from the
/// [`Document`] on read and by the store on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMeta {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Document> for ModelMeta {
    fn from(doc: &Document) -> Self {
        Self {
            id: Some(doc.id.clone()),
            created_at: Some(doc.created_at),
            updated_at: Some(doc.updated_at),
            deleted: doc.is_deleted(),
            deleted_at: doc.deleted_at,
        }
    }
}

/// Common contract for every persisted entity.
///
/// The collection tag is an associated constant: an entity type cannot exist
/// without one, and it cannot change over an instance's lifetime.
pub trait BaseModel: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn meta(&self) -> &ModelMeta;
    fn meta_mut(&mut self) -> &mut ModelMeta;

    fn collection(&self) -> Collection {
        Self::COLLECTION
    }

    fn id(&self) -> Option<&str> {
        self.meta().id.as_deref()
    }

    fn is_deleted(&self) -> bool {
        self.meta().deleted
    }

    /// Serializes the domain fields (metadata excluded).
    fn to_data(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuilds a model from a stored document.
    fn from_document(doc: Document) -> Result<Self, serde_json::Error> {
        let meta = ModelMeta::from(&doc);
        let mut model: Self = serde_json::from_value(doc.data)?;
        *model.meta_mut() = meta;
        Ok(model)
    }
}
