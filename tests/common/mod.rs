#![allow(dead_code)]

use async_trait::async_trait;
use cactus::domain::collection::Collection;
use cactus::domain::document::Document;
use cactus::domain::query_options::{DocumentQuery, GetOptions};
use cactus::domain::repositories::DocumentStore;
use cactus::error::AppError;
use cactus::infrastructure::persistence::{MemoryAnalyticsWarehouse, MemoryDocumentStore};
use cactus::state::AppState;
use serde_json::Value;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    create_test_state_with_warehouse(Arc::new(MemoryAnalyticsWarehouse::new()))
}

pub fn create_test_state_with_warehouse(warehouse: Arc<MemoryAnalyticsWarehouse>) -> AppState {
    AppState::new(Arc::new(MemoryDocumentStore::new()), warehouse)
}

/// Store whose backend is unreachable.
pub struct UnreachableStore;

fn unreachable() -> AppError {
    AppError::internal("Document store unreachable", serde_json::json!({}))
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn get(
        &self,
        _collection: Collection,
        _id: &str,
        _options: GetOptions,
    ) -> Result<Option<Document>, AppError> {
        Err(unreachable())
    }

    async fn query(
        &self,
        _collection: Collection,
        _query: &DocumentQuery,
    ) -> Result<Vec<Document>, AppError> {
        Err(unreachable())
    }

    async fn set(
        &self,
        _collection: Collection,
        _id: &str,
        _data: Value,
    ) -> Result<Document, AppError> {
        Err(unreachable())
    }

    async fn soft_delete(&self, _collection: Collection, _id: &str) -> Result<bool, AppError> {
        Err(unreachable())
    }

    async fn restore(&self, _collection: Collection, _id: &str) -> Result<bool, AppError> {
        Err(unreachable())
    }

    async fn delete(&self, _collection: Collection, _id: &str) -> Result<bool, AppError> {
        Err(unreachable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_unhealthy_state() -> AppState {
    AppState::new(
        Arc::new(UnreachableStore),
        Arc::new(MemoryAnalyticsWarehouse::new()),
    )
}
