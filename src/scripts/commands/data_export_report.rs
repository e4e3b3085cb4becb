use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::services::DataExportService;
use crate::domain::repositories::DocumentStore;
use crate::logging::Logger;
use crate::scripts::command::Command;
use crate::utils::date::mailchimp_date_string;

/// Summarizes live data exports and their downloads.
pub struct DataExportReportCommand {
    service: DataExportService,
    logger: Arc<dyn Logger>,
}

impl DataExportReportCommand {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            service: DataExportService::new(store, logger.clone()),
            logger,
        }
    }
}

#[async_trait]
impl Command for DataExportReportCommand {
    fn name(&self) -> &'static str {
        "data-export-report"
    }

    fn description(&self) -> &'static str {
        "Report the number of data exports and total downloads"
    }

    async fn start(&self) -> anyhow::Result<()> {
        let exports = self.service.list_exports(None, None).await?;
        let downloads: u64 = exports.iter().map(|e| u64::from(e.download_count)).sum();
        let never_downloaded = exports.iter().filter(|e| e.download_count == 0).count();

        self.logger.info(&format!(
            "Data exports as of {}: {} exports, {} downloads, {} never downloaded",
            mailchimp_date_string(Some(Utc::now())),
            exports.len(),
            downloads,
            never_downloaded
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryDocumentStore;
    use crate::logging::NullLogger;
    use crate::logging::test_support::RecordingLogger;

    #[tokio::test]
    async fn test_report_counts_downloads() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let service = DataExportService::new(store.clone(), Arc::new(NullLogger));

        let first = service.create_export("member-1").await.unwrap();
        service.create_export("member-2").await.unwrap();
        let id = first.meta.id.clone().unwrap();
        service.record_download(&id).await.unwrap();
        service.record_download(&id).await.unwrap();

        let logger = Arc::new(RecordingLogger::default());
        DataExportReportCommand::new(store, logger.clone())
            .start()
            .await
            .unwrap();

        let info = logger.messages("info");
        assert_eq!(info.len(), 1);
        assert!(info[0].ends_with("2 exports, 2 downloads, 1 never downloaded"));
    }
}
