use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where plugin manifests are looked for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Plugins", inline)]
#[serde(default)]
pub struct PluginOptions {
    /// Directories scanned in order, before the environment variable's
    /// entries.
    #[schemars(title = "Search Paths")]
    pub search_paths: Vec<PathBuf>,
    /// Environment variable holding extra `:`-separated directories.
    #[schemars(title = "Environment Variable")]
    pub env_var: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            search_paths: vec![
                PathBuf::from("/usr/lib/molstyle"),
                PathBuf::from("/usr/local/lib/molstyle"),
            ],
            env_var: "MOLSTYLE_PLUGINS".to_owned(),
        }
    }
}
