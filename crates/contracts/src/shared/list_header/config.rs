use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// CSS class on the root container while the search box is shown
pub const SEARCH_ACTIVE_CLASS: &str = "search-component-flex";

/// CSS class always present on the root container
pub const ROOT_CLASS: &str = "che-list-header";

/// Mount-time configuration of a list header
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ListHeaderConfig {
    /// Hint text of the search input
    pub placeholder: String,
    /// Initial search text
    pub search_value: String,
    /// Initial visibility of the search box
    pub is_shown: bool,
}

impl ListHeaderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
