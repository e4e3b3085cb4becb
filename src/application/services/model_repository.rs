//! Typed CRUD over the document store.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::json;

use crate::domain::model::BaseModel;
use crate::domain::query_options::{GetOptions, QueryOptions};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;
use crate::logging::Logger;
use crate::utils::document_id::generate_document_id;

/// Reads and writes models of type `M` in `M::COLLECTION`.
///
/// Converts between typed models and raw documents; all persistence
/// guarantees come from the underlying [`DocumentStore`].
pub struct ModelRepository<M: BaseModel> {
    store: Arc<dyn DocumentStore>,
    logger: Arc<dyn Logger>,
    _model: PhantomData<fn() -> M>,
}

impl<M: BaseModel> Clone for ModelRepository<M> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            logger: self.logger.clone(),
            _model: PhantomData,
        }
    }
}

impl<M: BaseModel> ModelRepository<M> {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            store,
            logger,
            _model: PhantomData,
        }
    }

    /// Reads a model by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage or decoding errors.
    pub async fn get_by_id(&self, id: &str, options: GetOptions) -> Result<Option<M>, AppError> {
        let doc = self.store.get(M::COLLECTION, id, options).await?;
        Ok(doc.map(M::from_document).transpose()?)
    }

    /// Reads a live model by id, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live document has this id.
    pub async fn find_by_id(&self, id: &str) -> Result<M, AppError> {
        self.get_by_id(id, GetOptions::default())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Document not found",
                    json!({ "collection": M::COLLECTION.as_str(), "id": id }),
                )
            })
    }

    /// Runs a typed query over the model's collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage or decoding errors.
    pub async fn query(&self, options: &QueryOptions<M>) -> Result<Vec<M>, AppError> {
        let docs = self
            .store
            .query(M::COLLECTION, &options.to_document_query())
            .await?;

        docs.into_iter()
            .map(|doc| M::from_document(doc).map_err(AppError::from))
            .collect()
    }

    /// All live models in the collection, oldest first.
    pub async fn get_all(&self) -> Result<Vec<M>, AppError> {
        self.query(&QueryOptions::new()).await
    }

    /// Creates or updates a model.
    ///
    /// A model without an id gets a freshly generated one. The returned model
    /// carries the metadata assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage or encoding errors.
    pub async fn save(&self, model: M) -> Result<M, AppError> {
        let id = match model.id() {
            Some(id) => id.to_string(),
            None => generate_document_id(),
        };
        let data = model.to_data()?;

        let doc = self.store.set(M::COLLECTION, &id, data).await?;
        self.logger
            .debug(&format!("Saved {}/{}", M::COLLECTION, id));

        Ok(M::from_document(doc)?)
    }

    /// Soft-deletes a model. Returns `false` if it was missing or already deleted.
    pub async fn soft_delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.store.soft_delete(M::COLLECTION, id).await?;
        if deleted {
            self.logger
                .info(&format!("Soft-deleted {}/{}", M::COLLECTION, id));
        }
        Ok(deleted)
    }

    /// Restores a soft-deleted model. Returns `false` if nothing was restored.
    pub async fn restore(&self, id: &str) -> Result<bool, AppError> {
        self.store.restore(M::COLLECTION, id).await
    }

    /// Physically removes a model. Returns `false` if it did not exist.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.store.delete(M::COLLECTION, id).await?;
        if deleted {
            self.logger
                .warn(&format!("Hard-deleted {}/{}", M::COLLECTION, id));
        }
        Ok(deleted)
    }
}
