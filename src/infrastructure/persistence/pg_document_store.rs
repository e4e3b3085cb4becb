//! PostgreSQL implementation of the document store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::collection::Collection;
use crate::domain::document::Document;
use crate::domain::query_options::{DeletionFilter, DocumentQuery, GetOptions, SortField};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

const SELECT_COLUMNS: &str = "SELECT collection, id, data, created_at, updated_at, deleted_at FROM documents";

/// Document store backed by a single `documents` table.
///
/// Domain fields live in a JSONB `data` column; the primary key is
/// `(collection, id)`.
pub struct PgDocumentStore {
    pool: Arc<PgPool>,
}

impl PgDocumentStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    collection: String,
    id: String,
    data: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = AppError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let collection = row.collection.parse::<Collection>().map_err(|e| {
            AppError::internal("Corrupt document row", json!({ "reason": e.to_string() }))
        })?;

        Ok(Document {
            collection,
            id: row.id,
            data: row.data,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

fn deletion_clause(filter: DeletionFilter) -> &'static str {
    match filter {
        DeletionFilter::ExcludeDeleted => " AND deleted_at IS NULL",
        DeletionFilter::IncludeDeleted => "",
        DeletionFilter::OnlyDeleted => " AND deleted_at IS NOT NULL",
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
        options: GetOptions,
    ) -> Result<Option<Document>, AppError> {
        let sql = format!(
            "{} WHERE collection = $1 AND id = $2{}",
            SELECT_COLUMNS,
            deletion_clause(options.deletion_filter())
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(collection.as_str())
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Document::try_from).transpose()
    }

    async fn query(
        &self,
        collection: Collection,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        qb.push(" WHERE collection = ");
        qb.push_bind(collection.as_str());
        qb.push(deletion_clause(query.deletion));

        for filter in &query.filters {
            qb.push(" AND data -> ");
            qb.push_bind(filter.field.clone());
            qb.push("::text = ");
            qb.push_bind(filter.value.clone());
        }

        match &query.order_by {
            Some((SortField::CreatedAt, direction)) => {
                qb.push(" ORDER BY created_at ");
                qb.push(direction.as_sql());
            }
            Some((SortField::UpdatedAt, direction)) => {
                qb.push(" ORDER BY updated_at ");
                qb.push(direction.as_sql());
            }
            Some((SortField::Data(field), direction)) => {
                qb.push(" ORDER BY data -> ");
                qb.push_bind(field.clone());
                qb.push("::text ");
                qb.push(direction.as_sql());
                qb.push(", created_at ASC");
            }
            None => {
                qb.push(" ORDER BY created_at ASC");
            }
        }
        qb.push(", id ASC");

        if let Some(limit) = query.limit {
            qb.push(" LIMIT ");
            qb.push_bind(limit.max(0));
        }

        let rows = qb
            .build_query_as::<DocumentRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        data: Value,
    ) -> Result<Document, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            RETURNING collection, id, data, created_at, updated_at, deleted_at
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(data)
        .fetch_one(self.pool.as_ref())
        .await?;

        Document::try_from(row)
    }

    async fn soft_delete(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE collection = $1 AND id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn restore(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET deleted_at = NULL, updated_at = NOW()
            WHERE collection = $1 AND id = $2 AND deleted_at IS NOT NULL
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
