//! Data export request tracking.

use std::sync::Arc;

use crate::application::services::ModelRepository;
use crate::domain::entities::DataExport;
use crate::domain::model::BaseModel;
use crate::domain::query_options::{QueryOptions, SortDirection};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;
use crate::logging::Logger;

/// Service recording member data exports and their downloads.
pub struct DataExportService {
    repository: ModelRepository<DataExport>,
    logger: Arc<dyn Logger>,
}

impl DataExportService {
    /// Creates a new data export service.
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository: ModelRepository::new(store, logger.clone()),
            logger,
        }
    }

    /// Records a new export request for `member_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_export(&self, member_id: &str) -> Result<DataExport, AppError> {
        let export = self.repository.save(DataExport::new(member_id)).await?;
        self.logger.info(&format!(
            "Created data export {} for member {}",
            export.id().unwrap_or_default(),
            member_id
        ));
        Ok(export)
    }

    /// Loads a live export by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the export is missing or soft-deleted.
    pub async fn get_export(&self, id: &str) -> Result<DataExport, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Increments the download count of an export and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the export is missing or soft-deleted.
    pub async fn record_download(&self, id: &str) -> Result<DataExport, AppError> {
        let mut export = self.repository.find_by_id(id).await?;
        export.increment_download_count();
        let export = self.repository.save(export).await?;

        self.logger.log(&format!(
            "Data export {} downloaded {} time(s)",
            id, export.download_count
        ));
        Ok(export)
    }

    /// Lists live exports, newest first, optionally for a single member.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_exports(
        &self,
        member_id: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<DataExport>, AppError> {
        let mut options = QueryOptions::<DataExport>::new().order_by("createdAt", SortDirection::Desc);
        if let Some(member_id) = member_id {
            options = options.where_eq("memberId", member_id);
        }
        if let Some(limit) = limit {
            options = options.limit(limit);
        }

        self.repository.query(&options).await
    }

    /// Soft-deletes an export.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if there was no live export with this id.
    pub async fn delete_export(&self, id: &str) -> Result<(), AppError> {
        if self.repository.soft_delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Data export not found",
                serde_json::json!({ "id": id }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::Collection;
    use crate::domain::repositories::MockDocumentStore;
    use crate::infrastructure::persistence::MemoryDocumentStore;
    use crate::logging::NullLogger;
    use crate::logging::test_support::RecordingLogger;

    fn service() -> DataExportService {
        DataExportService::new(Arc::new(MemoryDocumentStore::new()), Arc::new(NullLogger))
    }

    #[tokio::test]
    async fn test_create_export_starts_at_zero() {
        let service = service();

        let export = service.create_export("member-1").await.unwrap();

        assert_eq!(export.member_id, "member-1");
        assert_eq!(export.download_count, 0);
        assert!(export.id().is_some());
    }

    #[tokio::test]
    async fn test_record_download_increments() {
        let service = service();
        let export = service.create_export("member-1").await.unwrap();
        let id = export.id().unwrap().to_string();

        service.record_download(&id).await.unwrap();
        let export = service.record_download(&id).await.unwrap();

        assert_eq!(export.download_count, 2);
        assert_eq!(service.get_export(&id).await.unwrap().download_count, 2);
    }

    #[tokio::test]
    async fn test_record_download_missing_export() {
        let result = service().record_download("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_deleted_export_cannot_be_downloaded() {
        let service = service();
        let export = service.create_export("member-1").await.unwrap();
        let id = export.id().unwrap().to_string();

        service.delete_export(&id).await.unwrap();

        assert!(matches!(
            service.record_download(&id).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete_export(&id).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_exports_filters_by_member() {
        let service = service();
        service.create_export("member-1").await.unwrap();
        service.create_export("member-2").await.unwrap();
        service.create_export("member-1").await.unwrap();

        let exports = service.list_exports(Some("member-1"), None).await.unwrap();
        assert_eq!(exports.len(), 2);
        assert!(exports.iter().all(|e| e.member_id == "member-1"));

        let limited = service.list_exports(None, Some(1)).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_list_exports_newest_first() {
        let service = service();
        let mut created = Vec::new();
        for _ in 0..3 {
            let export = service.create_export("member-1").await.unwrap();
            created.push(export.id().unwrap().to_string());
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let listed: Vec<String> = service
            .list_exports(None, None)
            .await
            .unwrap()
            .iter()
            .map(|e| e.id().unwrap().to_string())
            .collect();

        created.reverse();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_create_export_logs_through_injected_logger() {
        let logger = Arc::new(RecordingLogger::default());
        let service = DataExportService::new(Arc::new(MemoryDocumentStore::new()), logger.clone());

        service.create_export("member-9").await.unwrap();

        let infos = logger.messages("info");
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("member-9"));
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_store = MockDocumentStore::new();
        mock_store
            .expect_set()
            .withf(|collection, _, data| {
                *collection == Collection::DataExports && data["memberId"] == "member-1"
            })
            .times(1)
            .returning(|_, _, _| {
                Err(AppError::internal("Database error", serde_json::json!({})))
            });

        let service = DataExportService::new(Arc::new(mock_store), Arc::new(NullLogger));
        let result = service.create_export("member-1").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
