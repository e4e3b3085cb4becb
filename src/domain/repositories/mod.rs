//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contracts; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`DocumentStore`] - Collection-keyed document CRUD with soft delete
//! - [`AnalyticsWarehouse`] - Read-only analytics queries

pub mod analytics_warehouse;
pub mod document_store;

pub use analytics_warehouse::AnalyticsWarehouse;
pub use document_store::DocumentStore;

#[cfg(test)]
pub use analytics_warehouse::MockAnalyticsWarehouse;
#[cfg(test)]
pub use document_store::MockDocumentStore;
