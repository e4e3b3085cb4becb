//! Read and query modifiers applied by the document store.
//!
//! Defaults follow the soft-delete convention: a plain read or query only
//! sees documents that have not been deleted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

use crate::domain::model::BaseModel;

/// Which documents a read may see with respect to soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionFilter {
    #[default]
    ExcludeDeleted,
    IncludeDeleted,
    OnlyDeleted,
}

impl DeletionFilter {
    /// `only_deleted` wins over `include_deleted` when both are set.
    pub fn from_flags(include_deleted: bool, only_deleted: bool) -> Self {
        if only_deleted {
            DeletionFilter::OnlyDeleted
        } else if include_deleted {
            DeletionFilter::IncludeDeleted
        } else {
            DeletionFilter::ExcludeDeleted
        }
    }

    pub fn admits(&self, deleted: bool) -> bool {
        match self {
            DeletionFilter::ExcludeDeleted => !deleted,
            DeletionFilter::IncludeDeleted => true,
            DeletionFilter::OnlyDeleted => deleted,
        }
    }
}

/// Options for reading a single document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOptions {
    #[serde(default)]
    pub include_deleted: bool,
    #[serde(default)]
    pub only_deleted: bool,
}

impl GetOptions {
    pub fn include_deleted() -> Self {
        Self {
            include_deleted: true,
            only_deleted: false,
        }
    }

    pub fn only_deleted() -> Self {
        Self {
            include_deleted: false,
            only_deleted: true,
        }
    }

    pub fn deletion_filter(&self) -> DeletionFilter {
        DeletionFilter::from_flags(self.include_deleted, self.only_deleted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Field a query is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    /// A top-level domain field, by its wire name.
    Data(String),
}

impl SortField {
    pub fn parse(field: &str) -> Self {
        match field {
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            other => SortField::Data(other.to_string()),
        }
    }
}

/// Equality filter on a top-level domain field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

/// Untyped query handed to the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentQuery {
    pub deletion: DeletionFilter,
    pub filters: Vec<FieldFilter>,
    pub order_by: Option<(SortField, SortDirection)>,
    pub limit: Option<i64>,
}

/// Query options typed by the model being queried.
///
/// ```rust,ignore
/// let opts = QueryOptions::<DataExport>::new()
///     .where_eq("memberId", "member-1")
///     .order_by("createdAt", SortDirection::Desc)
///     .limit(10);
/// ```
#[derive(Debug, Clone)]
pub struct QueryOptions<M> {
    pub include_deleted: bool,
    pub only_deleted: bool,
    pub sort_direction: Option<SortDirection>,
    pub order_by: Option<String>,
    pub filters: Vec<FieldFilter>,
    pub limit: Option<i64>,
    _model: PhantomData<fn() -> M>,
}

impl<M> Default for QueryOptions<M> {
    fn default() -> Self {
        Self {
            include_deleted: false,
            only_deleted: false,
            sort_direction: None,
            order_by: None,
            filters: Vec::new(),
            limit: None,
            _model: PhantomData,
        }
    }
}

impl<M: BaseModel> QueryOptions<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    pub fn only_deleted(mut self, only: bool) -> Self {
        self.only_deleted = only;
        self
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(field.into());
        self.sort_direction = Some(direction);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Lowers the typed options into the store-level query.
    ///
    /// A direction without a field orders by `createdAt`.
    pub fn to_document_query(&self) -> DocumentQuery {
        let order_by = match (&self.order_by, self.sort_direction) {
            (Some(field), direction) => {
                Some((SortField::parse(field), direction.unwrap_or_default()))
            }
            (None, Some(direction)) => Some((SortField::CreatedAt, direction)),
            (None, None) => None,
        };

        DocumentQuery {
            deletion: DeletionFilter::from_flags(self.include_deleted, self.only_deleted),
            filters: self.filters.clone(),
            order_by,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DataExport;

    #[test]
    fn test_default_get_options_exclude_deleted() {
        let opts = GetOptions::default();
        assert_eq!(opts.deletion_filter(), DeletionFilter::ExcludeDeleted);
        assert!(opts.deletion_filter().admits(false));
        assert!(!opts.deletion_filter().admits(true));
    }

    #[test]
    fn test_only_deleted_takes_precedence() {
        let filter = DeletionFilter::from_flags(true, true);
        assert_eq!(filter, DeletionFilter::OnlyDeleted);
        assert!(filter.admits(true));
        assert!(!filter.admits(false));

        assert!(GetOptions::include_deleted().deletion_filter().admits(true));
        assert!(GetOptions::include_deleted().deletion_filter().admits(false));
    }

    #[test]
    fn test_query_options_lowering() {
        let query = QueryOptions::<DataExport>::new()
            .where_eq("memberId", "m-1")
            .order_by("downloadCount", SortDirection::Desc)
            .limit(5)
            .to_document_query();

        assert_eq!(query.deletion, DeletionFilter::ExcludeDeleted);
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].field, "memberId");
        assert_eq!(query.filters[0].value, Value::from("m-1"));
        assert_eq!(
            query.order_by,
            Some((SortField::Data("downloadCount".to_string()), SortDirection::Desc))
        );
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_direction_without_field_orders_by_created_at() {
        let mut opts = QueryOptions::<DataExport>::new();
        opts.sort_direction = Some(SortDirection::Desc);

        let query = opts.to_document_query();
        assert_eq!(query.order_by, Some((SortField::CreatedAt, SortDirection::Desc)));
    }

    #[test]
    fn test_sort_direction_wire_format() {
        let dir: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(dir, SortDirection::Desc);
        assert_eq!(dir.as_sql(), "DESC");
    }
}
