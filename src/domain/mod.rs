//! Domain layer: entities, the model contract and storage interfaces.
//!
//! # Architecture
//!
//! - [`collection`] - Collection tags (storage partition keys)
//! - [`model`] - The [`model::BaseModel`] contract and store metadata
//! - [`document`] - Raw stored documents
//! - [`query_options`] - Read/query modifiers and soft-delete filtering
//! - [`entities`] - Persisted entities
//! - [`analytics`] - Named analytics queries and result processing
//! - [`milestone`] - Reflection milestones
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependency on infrastructure. Repository traits are
//! implemented in [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].

pub mod analytics;
pub mod collection;
pub mod document;
pub mod entities;
pub mod milestone;
pub mod model;
pub mod query_options;
pub mod repositories;
