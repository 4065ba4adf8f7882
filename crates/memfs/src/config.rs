//! Namespace configuration.

use serde::{Deserialize, Serialize};

use crate::error::{NamespaceError, Result};

pub const DEFAULT_ROOT_NAME: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Internal name of the root folder. Paths never render it.
    pub root_name: String,
    /// Folder created under the root at startup; the cursor starts inside it.
    pub home_folder: Option<String>,
    /// Drop a folder's tree-index entry once its last child is removed.
    pub prune_empty_child_sets: bool,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            home_folder: None,
            prune_empty_child_sets: false,
        }
    }
}

impl NamespaceConfig {
    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|error| NamespaceError::Config(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            NamespaceConfig::from_json("{}").unwrap(),
            NamespaceConfig::default()
        );
    }

    #[test]
    fn fields_override_defaults() {
        let config =
            NamespaceConfig::from_json(r#"{"home_folder":"BaseFolder","prune_empty_child_sets":true}"#)
                .unwrap();
        assert_eq!(config.root_name, DEFAULT_ROOT_NAME);
        assert_eq!(config.home_folder.as_deref(), Some("BaseFolder"));
        assert!(config.prune_empty_child_sets);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            NamespaceConfig::from_json("{not json"),
            Err(NamespaceError::Config(_))
        ));
    }
}
