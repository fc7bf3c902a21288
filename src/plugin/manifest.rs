//! Plugin manifest files.
//!
//! A manifest is a small TOML file in a plugin directory:
//!
//! ```toml
//! name = "thick-lines"
//! kind = "engine"
//! factory = "wireframe"
//! enabled = true
//!
//! [style]
//! bond_width = 3.0
//! selected_bond_width = 4.0
//! ```

use std::fmt;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::StyleOverrides;
use crate::error::StyleError;

/// Capability a plugin provides.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    /// A rendering engine.
    Engine,
    /// A menu-driven extension.
    Extension,
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine => write!(f, "engine"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

const fn enabled_by_default() -> bool {
    true
}

/// Parsed contents of one manifest file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PluginManifest {
    /// Instance name; must be unique among engines (or extensions).
    pub name: String,
    /// Which capability the plugin provides.
    pub kind: PluginKind,
    /// Key into the factory table.
    pub factory: String,
    /// Initial enabled flag for engines.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Style overrides for engines.
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub style: StyleOverrides,
}

impl PluginManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StyleError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest text; `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, StyleError> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| StyleError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if manifest.name.trim().is_empty() {
            return Err(StyleError::Manifest {
                path: path.to_path_buf(),
                reason: "empty plugin name".to_owned(),
            });
        }
        if manifest.kind == PluginKind::Extension && !manifest.style.is_empty()
        {
            return Err(StyleError::Manifest {
                path: path.to_path_buf(),
                reason: "extensions take no [style] table".to_owned(),
            });
        }
        Ok(manifest)
    }

    /// Generate JSON Schema describing manifest files.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PluginManifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<PluginManifest, StyleError> {
        PluginManifest::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn engine_manifest_with_style() {
        let manifest = parse(
            r#"
name = "thick"
kind = "engine"
factory = "wireframe"

[style]
bond_width = 3.0
selected_bond_width = 4.0
"#,
        )
        .unwrap();
        assert_eq!(manifest.kind, PluginKind::Engine);
        assert!(manifest.enabled);
        assert_eq!(manifest.style.bond_width, Some(3.0));
        assert_eq!(manifest.style.selected_scale, None);
    }

    #[test]
    fn malformed_manifests_name_the_file() {
        let err = parse("name = \"x\"\nkind = \"shader\"\nfactory = \"y\"\n")
            .unwrap_err();
        match err {
            StyleError::Manifest { path, .. } => {
                assert_eq!(path, Path::new("test.toml"));
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(parse("kind = \"engine\"\nfactory = \"y\"\n").is_err());
        assert!(parse(
            "name = \" \"\nkind = \"engine\"\nfactory = \"wireframe\"\n"
        )
        .is_err());
        assert!(parse(
            "name = \"s\"\nkind = \"extension\"\nfactory = \"center\"\n\
             [style]\nbond_width = 1.0\n"
        )
        .is_err());
    }

    #[test]
    fn serialized_manifest_parses_back() {
        let manifest = PluginManifest {
            name: "sel".to_owned(),
            kind: PluginKind::Extension,
            factory: "selection".to_owned(),
            enabled: false,
            style: StyleOverrides::default(),
        };
        let text = toml::to_string(&manifest).unwrap();
        assert!(!text.contains("[style]"));
        assert_eq!(parse(&text).unwrap(), manifest);
    }
}
