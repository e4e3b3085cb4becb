//! Static command registry.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::domain::repositories::{AnalyticsWarehouse, DocumentStore};
use crate::logging::Logger;
use crate::scripts::command::Command;
use crate::scripts::commands::{
    ActiveUsersCommand, DataExportReportCommand, PurgeTestModelsCommand, SeedTestModelsCommand,
};

static COMMAND_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").expect("Invalid command name regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command name '{0}' must be kebab-case")]
    InvalidName(String),

    #[error("command '{0}' is already registered")]
    Duplicate(String),

    #[error("unknown command '{0}'")]
    Unknown(String),
}

/// Returns `true` if `name` is a well-formed command name.
pub fn is_valid_command_name(name: &str) -> bool {
    COMMAND_NAME_REGEX.is_match(name)
}

/// Commands keyed by name, iterated in name order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for a name that is not
    /// kebab-case and [`RegistryError::Duplicate`] if the name is taken.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name();
        if !is_valid_command_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.commands.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.commands.insert(name, command);
        Ok(())
    }

    /// Registered command names, sorted.
    pub fn get_all_commands(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    /// `true` only for registered names.
    pub fn validate_command_exists(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Runs the named command to completion.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] for an unregistered name, or the
    /// command's own error.
    pub async fn run(&self, name: &str) -> anyhow::Result<()> {
        let command = self
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        command.start().await
    }
}

/// Registry with every shipped command, wired to the given backends.
pub fn default_registry(
    store: Arc<dyn DocumentStore>,
    warehouse: Arc<dyn AnalyticsWarehouse>,
    logger: Arc<dyn Logger>,
) -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(SeedTestModelsCommand::new(
        store.clone(),
        logger.clone(),
    )))?;
    registry.register(Arc::new(PurgeTestModelsCommand::new(
        store.clone(),
        logger.clone(),
    )))?;
    registry.register(Arc::new(DataExportReportCommand::new(store, logger.clone())))?;
    registry.register(Arc::new(ActiveUsersCommand::new(warehouse, logger)))?;
    Ok(registry)
}
