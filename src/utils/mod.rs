//! Utility functions used across the application:
//!
//! - [`date`] - Denver-local calendar dates
//! - [`email`] - Email syntax validation
//! - [`avatar`] - Avatar selection by hash
//! - [`document_id`] - Document id generation

pub mod avatar;
pub mod date;
pub mod document_id;
pub mod email;
