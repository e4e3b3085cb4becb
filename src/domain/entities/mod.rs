//! Persisted entities.
//!
//! Every entity implements [`BaseModel`](crate::domain::model::BaseModel) and
//! carries its store metadata in a `meta` field that is skipped on the wire.
//!
//! - [`DataExport`] - A member's data export request
//! - [`SentCampaign`] - A sent email campaign and its latest webhook event
//! - [`TestModel`] - Fixture entity

pub mod data_export;
pub mod sent_campaign;
pub mod test_model;

pub use data_export::DataExport;
pub use sent_campaign::{
    Campaign, CampaignContent, CampaignSettings, SentCampaign, WebhookEvent, WebhookEventType,
};
pub use test_model::TestModel;
