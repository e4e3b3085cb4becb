//! Operational commands run by the `scripts` binary.
//!
//! Commands are registered explicitly in a [`CommandRegistry`] and looked up
//! by their kebab-case name.
//!
//! - [`command`] - The [`Command`] trait
//! - [`registry`] - Name-keyed registry and dispatch
//! - [`commands`] - Shipped commands

pub mod command;
pub mod commands;
pub mod registry;

pub use command::Command;
pub use registry::{CommandRegistry, RegistryError, default_registry};
