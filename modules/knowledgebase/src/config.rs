//! Configuration for the knowledgebase module

use serde::Deserialize;

/// Knowledgebase module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the admin settings page, used when building redirect targets
    #[serde(default = "default_admin_path")]
    pub admin_path: String,

    /// Seed default settings on init when none are stored
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_path: default_admin_path(),
            seed_defaults: true,
        }
    }
}

fn default_admin_path() -> String {
    "/settings".to_string()
}

fn default_true() -> bool {
    true
}
