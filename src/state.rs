//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, DataExportService, SentCampaignService};
use crate::domain::repositories::{AnalyticsWarehouse, DocumentStore};
use crate::logging::TracingLogger;

/// Services and stores shared across requests.
///
/// Cloned per request by Axum; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub data_export_service: Arc<DataExportService>,
    pub sent_campaign_service: Arc<SentCampaignService>,
    pub analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    /// Wires the services over the given store and warehouse.
    ///
    /// Each service logs through its own [`TracingLogger`] component.
    pub fn new(store: Arc<dyn DocumentStore>, warehouse: Arc<dyn AnalyticsWarehouse>) -> Self {
        Self {
            data_export_service: Arc::new(DataExportService::new(
                store.clone(),
                TracingLogger::shared("data_exports"),
            )),
            sent_campaign_service: Arc::new(SentCampaignService::new(
                store.clone(),
                TracingLogger::shared("sent_campaigns"),
            )),
            analytics_service: Arc::new(AnalyticsService::new(
                warehouse,
                TracingLogger::shared("analytics"),
            )),
            store,
        }
    }
}
