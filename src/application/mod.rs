//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose a clean API for HTTP
//! handlers and operational commands. Each receives its storage and its
//! [`Logger`](crate::logging::Logger) at construction.
//!
//! # Available Services
//!
//! - [`services::ModelRepository`] - Typed CRUD over the document store
//! - [`services::DataExportService`] - Data export requests and downloads
//! - [`services::SentCampaignService`] - Sent campaigns and webhook events
//! - [`services::AnalyticsService`] - Warehouse analytics

pub mod services;
