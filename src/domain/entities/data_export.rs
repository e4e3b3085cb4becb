//! DataExport entity: a member's requested export of their data.

use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;
use crate::domain::model::{BaseModel, ModelMeta};

/// Record of a data export requested by a member.
///
/// Created when the export is requested; each download bumps `download_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    #[serde(skip)]
    pub meta: ModelMeta,
    pub member_id: String,
    #[serde(default)]
    pub download_count: u32,
}

impl DataExport {
    pub fn new(member_id: impl Into<String>) -> Self {
        Self {
            meta: ModelMeta::default(),
            member_id: member_id.into(),
            download_count: 0,
        }
    }

    /// Records one more download, saturating at `u32::MAX`.
    pub fn increment_download_count(&mut self) {
        self.download_count = self.download_count.saturating_add(1);
    }
}

impl BaseModel for DataExport {
    const COLLECTION: Collection = Collection::DataExports;

    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ModelMeta {
        &mut self.meta
    }
}
