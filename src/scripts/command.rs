//! The operational command capability.

use async_trait::async_trait;

/// A named, single-shot operational action.
///
/// Implementations run to completion or return an error; the runner does
/// not retry.
#[async_trait]
pub trait Command: Send + Sync {
    /// Kebab-case name used to select the command, e.g. `active-users`.
    fn name(&self) -> &'static str;

    /// One-line summary shown by `scripts --list`.
    fn description(&self) -> &'static str;

    async fn start(&self) -> anyhow::Result<()>;
}
