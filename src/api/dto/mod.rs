//! Data Transfer Objects for API requests and responses.
//!
//! These are the request/response contracts shared with the front-end.
//! All DTOs use Serde (camelCase on the wire) and validator for input
//! validation.

pub mod analytics;
pub mod checkout;
pub mod data_export;
pub mod health;
pub mod hello;
pub mod sent_campaign;
pub mod social_feed;
pub mod subscription;
pub mod user_deletion;
