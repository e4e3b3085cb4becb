//! Logging setup and the injectable [`Logger`] capability.
//!
//! Services never reach for a process-wide logger. They receive an
//! `Arc<dyn Logger>` at construction; the production implementation
//! forwards to `tracing` with the owning component attached to every event.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Logging capability injected into services and commands.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    /// General progress output, one level above debug.
    fn log(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`Logger`] that forwards to `tracing`, tagged with a component name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    /// Convenience constructor returning a shareable trait object.
    pub fn shared(component: &'static str) -> Arc<dyn Logger> {
        Arc::new(Self::new(component))
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(component = self.component, "{}", message);
    }

    fn log(&self, message: &str) {
        tracing::debug!(component = self.component, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(component = self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(component = self.component, "{}", message);
    }
}

/// [`Logger`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}
    fn log(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Installs the global `tracing` subscriber.
///
/// `log_level` is an `EnvFilter` directive string; `log_format` is `text` or `json`.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
