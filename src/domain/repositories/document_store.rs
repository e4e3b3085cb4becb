//! Repository trait for the document store.

use crate::domain::collection::Collection;
use crate::domain::document::Document;
use crate::domain::query_options::{DocumentQuery, GetOptions};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Document store keyed by collection and document id.
///
/// Soft-deleted documents stay physically stored; [`GetOptions`] and
/// [`DocumentQuery::deletion`] decide whether a read sees them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDocumentStore`] - PostgreSQL (JSONB) implementation
/// - [`crate::infrastructure::persistence::MemoryDocumentStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_documents.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads one document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))` if found and admitted by `options`
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(
        &self,
        collection: Collection,
        id: &str,
        options: GetOptions,
    ) -> Result<Option<Document>, AppError>;

    /// Runs a filtered, ordered query over one collection.
    ///
    /// Without an explicit order, documents come back oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn query(
        &self,
        collection: Collection,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, AppError>;

    /// Creates or replaces a document's data.
    ///
    /// `created_at` is kept for existing documents; `updated_at` is refreshed.
    /// The deletion state is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn set(&self, collection: Collection, id: &str, data: Value)
    -> Result<Document, AppError>;

    /// Soft-deletes a document.
    ///
    /// Returns `Ok(true)` if a live document was marked deleted, `Ok(false)` if
    /// it was missing or already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn soft_delete(&self, collection: Collection, id: &str) -> Result<bool, AppError>;

    /// Clears the soft-delete mark.
    ///
    /// Returns `Ok(true)` if a deleted document was restored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn restore(&self, collection: Collection, id: &str) -> Result<bool, AppError>;

    /// Physically removes a document.
    ///
    /// Returns `Ok(true)` if a document was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, AppError>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
