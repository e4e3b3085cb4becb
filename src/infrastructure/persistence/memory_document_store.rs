//! In-process document store.
//!
//! Used by tests and local runs without a database. Semantics match
//! [`PgDocumentStore`](super::PgDocumentStore), including soft deletion and
//! JSON value ordering. A missing sort field behaves like SQL `NULL`: last
//! when ascending, first when descending.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::collection::Collection;
use crate::domain::document::Document;
use crate::domain::query_options::{DocumentQuery, GetOptions, SortDirection, SortField};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<(Collection, String), Document>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        debug!("Using in-memory document store");
        Self::default()
    }
}

/// Orders JSON values the way Postgres orders JSONB:
/// null < string < number < boolean, arrays and objects last.
fn compare_json(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::String(_) => 1,
            Value::Number(_) => 2,
            Value::Bool(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// `None` for a missing field, which ranks above every JSON value.
fn sort_key(doc: &Document, field: &SortField) -> Option<Value> {
    match field {
        SortField::CreatedAt => Some(Value::from(doc.created_at.timestamp_micros())),
        SortField::UpdatedAt => Some(Value::from(doc.updated_at.timestamp_micros())),
        SortField::Data(name) => doc.data.get(name).cloned(),
    }
}

fn compare_sort_keys(a: &Option<Value>, b: &Option<Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_json(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
        options: GetOptions,
    ) -> Result<Option<Document>, AppError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection, id.to_string()))
            .filter(|doc| options.deletion_filter().admits(doc.is_deleted()))
            .cloned())
    }

    async fn query(
        &self,
        collection: Collection,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, AppError> {
        let documents = self.documents.read().await;

        let mut matched: Vec<Document> = documents
            .values()
            .filter(|doc| doc.collection == collection)
            .filter(|doc| query.deletion.admits(doc.is_deleted()))
            .filter(|doc| {
                query
                    .filters
                    .iter()
                    .all(|f| doc.data.get(&f.field) == Some(&f.value))
            })
            .cloned()
            .collect();

        let (field, direction) = query
            .order_by
            .clone()
            .unwrap_or((SortField::CreatedAt, SortDirection::Asc));

        matched.sort_by(|a, b| {
            let primary = compare_sort_keys(&sort_key(a, &field), &sort_key(b, &field));
            let primary = match direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        if let Some(limit) = query.limit {
            matched.truncate(limit.max(0) as usize);
        }

        Ok(matched)
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        data: Value,
    ) -> Result<Document, AppError> {
        let mut documents = self.documents.write().await;
        let now = Utc::now();

        let doc = documents
            .entry((collection, id.to_string()))
            .and_modify(|doc| {
                doc.data = data.clone();
                doc.updated_at = now;
            })
            .or_insert_with(|| Document {
                collection,
                id: id.to_string(),
                data: data.clone(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            });

        Ok(doc.clone())
    }

    async fn soft_delete(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&(collection, id.to_string())) {
            Some(doc) if !doc.is_deleted() => {
                let now = Utc::now();
                doc.deleted_at = Some(now);
                doc.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&(collection, id.to_string())) {
            Some(doc) if doc.is_deleted() => {
                doc.deleted_at = None;
                doc.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(&(collection, id.to_string())).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
