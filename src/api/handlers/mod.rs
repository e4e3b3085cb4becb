//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod data_exports;
pub mod health;
pub mod hello;
pub mod sent_campaigns;

pub use analytics::active_users_handler;
pub use data_exports::{
    create_data_export_handler, download_data_export_handler, list_data_exports_handler,
};
pub use health::health_handler;
pub use hello::hello_handler;
pub use sent_campaigns::{
    get_sent_campaign_handler, record_sent_campaign_handler, record_webhook_event_handler,
};
