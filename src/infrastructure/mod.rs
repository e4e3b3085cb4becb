//! Infrastructure layer implementing the domain storage interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory store implementations

pub mod persistence;
