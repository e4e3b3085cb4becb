//! Storage implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! - [`PgDocumentStore`] - Documents in a PostgreSQL JSONB table
//! - [`MemoryDocumentStore`] - In-process documents for tests and local runs
//! - [`PgAnalyticsWarehouse`] - Analytics queries over PostgreSQL
//! - [`MemoryAnalyticsWarehouse`] - Analytics queries over in-process events

pub mod memory_analytics_warehouse;
pub mod memory_document_store;
pub mod pg_analytics_warehouse;
pub mod pg_document_store;

pub use memory_analytics_warehouse::MemoryAnalyticsWarehouse;
pub use memory_document_store::MemoryDocumentStore;
pub use pg_analytics_warehouse::PgAnalyticsWarehouse;
pub use pg_document_store::PgDocumentStore;
