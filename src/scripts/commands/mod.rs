//! Shipped operational commands.

pub mod active_users;
pub mod data_export_report;
pub mod purge_test_models;
pub mod seed_test_models;

pub use active_users::ActiveUsersCommand;
pub use data_export_report::DataExportReportCommand;
pub use purge_test_models::PurgeTestModelsCommand;
pub use seed_test_models::SeedTestModelsCommand;
