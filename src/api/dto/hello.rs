//! Query parameters for the greeting endpoint.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct HelloQuery {
    pub name: Option<String>,
}

impl HelloQuery {
    /// Name to greet; falls back to `there`.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("there")
    }
}
