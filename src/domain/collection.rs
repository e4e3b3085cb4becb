//! Collection tags naming the storage partition of each entity type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named partition of the document store holding all documents of one entity type.
///
/// The string form is what gets persisted in the `collection` column, so
/// variants must never be renamed once data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    DataExports,
    SentCampaigns,
    TestModels,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::DataExports,
        Collection::SentCampaigns,
        Collection::TestModels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::DataExports => "dataExports",
            Collection::SentCampaigns => "sentCampaigns",
            Collection::TestModels => "testModels",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_are_unique_and_parse_back() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>().unwrap(), collection);
        }

        let mut names: Vec<_> = Collection::ALL.iter().map(|c| c.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Collection::ALL.len());
    }

    #[test]
    fn test_serde_matches_storage_name() {
        let json = serde_json::to_string(&Collection::SentCampaigns).unwrap();
        assert_eq!(json, "\"sentCampaigns\"");
    }

    #[test]
    fn test_unknown_collection() {
        assert!("members".parse::<Collection>().is_err());
    }
}
