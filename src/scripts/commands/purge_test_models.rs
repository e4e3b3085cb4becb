use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::ModelRepository;
use crate::domain::entities::TestModel;
use crate::domain::model::BaseModel;
use crate::domain::query_options::QueryOptions;
use crate::domain::repositories::DocumentStore;
use crate::logging::Logger;
use crate::scripts::command::Command;

/// Hard-deletes every `testModels` document, including soft-deleted ones.
pub struct PurgeTestModelsCommand {
    repository: ModelRepository<TestModel>,
    logger: Arc<dyn Logger>,
}

impl PurgeTestModelsCommand {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository: ModelRepository::new(store, logger.clone()),
            logger,
        }
    }
}

#[async_trait]
impl Command for PurgeTestModelsCommand {
    fn name(&self) -> &'static str {
        "purge-test-models"
    }

    fn description(&self) -> &'static str {
        "Permanently remove all documents in the testModels collection"
    }

    async fn start(&self) -> anyhow::Result<()> {
        let models = self
            .repository
            .query(&QueryOptions::new().include_deleted(true))
            .await?;

        let mut purged = 0;
        for model in &models {
            if let Some(id) = model.id()
                && self.repository.delete(id).await?
            {
                purged += 1;
            }
        }

        self.logger.info(&format!("Purged {} test models", purged));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query_options::GetOptions;
    use crate::infrastructure::persistence::MemoryDocumentStore;
    use crate::logging::NullLogger;

    #[tokio::test]
    async fn test_purge_removes_live_and_deleted_models() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let repo = ModelRepository::<TestModel>::new(store.clone(), Arc::new(NullLogger));

        let kept = repo.save(TestModel::new("live", None)).await.unwrap();
        let gone = repo.save(TestModel::new("deleted", None)).await.unwrap();
        repo.soft_delete(gone.id().unwrap()).await.unwrap();

        PurgeTestModelsCommand::new(store, Arc::new(NullLogger))
            .start()
            .await
            .unwrap();

        for id in [kept.id().unwrap(), gone.id().unwrap()] {
            let found = repo
                .get_by_id(id, GetOptions::include_deleted())
                .await
                .unwrap();
            assert!(found.is_none());
        }
    }
}
