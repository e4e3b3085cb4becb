//! TestModel entity used by fixtures and the seeding scripts.

use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;
use crate::domain::model::{BaseModel, ModelMeta};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestModel {
    #[serde(skip)]
    pub meta: ModelMeta,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TestModel {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            meta: ModelMeta::default(),
            name: name.into(),
            description,
        }
    }
}

impl BaseModel for TestModel {
    const COLLECTION: Collection = Collection::TestModels;

    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ModelMeta {
        &mut self.meta
    }
}
