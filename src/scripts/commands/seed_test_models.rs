use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::ModelRepository;
use crate::domain::entities::TestModel;
use crate::domain::repositories::DocumentStore;
use crate::logging::Logger;
use crate::scripts::command::Command;

const SEED_COUNT: usize = 3;

/// Writes a handful of `testModels` fixtures.
pub struct SeedTestModelsCommand {
    repository: ModelRepository<TestModel>,
    logger: Arc<dyn Logger>,
}

impl SeedTestModelsCommand {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository: ModelRepository::new(store, logger.clone()),
            logger,
        }
    }
}

#[async_trait]
impl Command for SeedTestModelsCommand {
    fn name(&self) -> &'static str {
        "seed-test-models"
    }

    fn description(&self) -> &'static str {
        "Create sample documents in the testModels collection"
    }

    async fn start(&self) -> anyhow::Result<()> {
        for n in 1..=SEED_COUNT {
            let model = TestModel::new(
                format!("Test Model {}", n),
                Some("Created by seed-test-models".to_string()),
            );
            let saved = self.repository.save(model).await?;
            self.logger.log(&format!(
                "Seeded test model {}",
                saved.meta.id.as_deref().unwrap_or_default()
            ));
        }

        self.logger
            .info(&format!("Seeded {} test models", SEED_COUNT));
        Ok(())
    }
}
