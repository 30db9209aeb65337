//! Resource link configuration

use serde::Deserialize;

use crate::domain::life_area::DEFAULT_RESOURCES_BASE_URL;

/// Where outbound resource links point after results are shown.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResourcesConfig {
    /// Prefix for `<base_url>/<category-slug>` links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_RESOURCES_BASE_URL.to_string()
}
