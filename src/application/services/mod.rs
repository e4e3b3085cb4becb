//! Business logic services for the application layer.

pub mod analytics_service;
pub mod data_export_service;
pub mod model_repository;
pub mod sent_campaign_service;

pub use analytics_service::AnalyticsService;
pub use data_export_service::DataExportService;
pub use model_repository::ModelRepository;
pub use sent_campaign_service::SentCampaignService;
