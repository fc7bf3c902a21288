//! TOML-backed engine style, plugin and picking settings.
//!
//! Every section uses `#[serde(default)]` so partial files (e.g. only a
//! `[styles.wireframe]` table) work. Style sections hold overrides only;
//! fields left out keep the engine's built-in defaults.

mod picking;
mod plugins;

use std::collections::BTreeMap;
use std::path::Path;

pub use picking::PickingOptions;
pub use plugins::PluginOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::{EngineSet, PrimitiveStyle, StyleOverrides};
use crate::error::StyleError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Style overrides keyed by engine name.
    pub styles: BTreeMap<String, StyleOverrides>,
    /// Plugin search configuration.
    pub plugins: PluginOptions,
    /// Pick query parameters.
    pub picking: PickingOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path).map_err(StyleError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| StyleError::OptionsParse(e.to_string()))?;
        log::info!(
            "loaded options from {} ({} style overrides)",
            path.display(),
            options.styles.len()
        );
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StyleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StyleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StyleError::Io)?;
        }
        std::fs::write(path, content).map_err(StyleError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// `base` with the overrides configured for `engine` applied.
    #[must_use]
    pub fn style_for(
        &self,
        engine: &str,
        base: PrimitiveStyle,
    ) -> PrimitiveStyle {
        self.styles
            .get(engine)
            .map_or(base, |overrides| overrides.apply(base))
    }

    /// Reject settings no engine could draw with.
    ///
    /// Overrides for built-in engine names are checked against that engine's
    /// defaults; any other name is checked against the wireframe defaults.
    pub fn validate(&self) -> Result<(), StyleError> {
        let tolerance = self.picking.tolerance_px;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(StyleError::InvalidStyle(format!(
                "picking.tolerance_px must be a non-negative number, got \
                 {tolerance}"
            )));
        }
        for (name, overrides) in &self.styles {
            let base = PrimitiveStyle::builtin(name).unwrap_or_default();
            overrides.apply(base).validate().map_err(|e| {
                StyleError::InvalidStyle(format!("styles.{name}: {e}"))
            })?;
        }
        Ok(())
    }

    /// Push configured styles into every matching engine of `engines`.
    /// Names without a registered engine are ignored.
    pub fn apply_styles(
        &self,
        engines: &mut EngineSet,
    ) -> Result<(), StyleError> {
        for (name, overrides) in &self.styles {
            let Some(engine) = engines.get_mut(name) else {
                log::debug!("no engine named '{name}' for style overrides");
                continue;
            };
            let style = overrides.apply(engine.style());
            engine.set_style(style)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[styles.wireframe]
selected_scale = 5.0

[picking]
tolerance_px = 6.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.picking.tolerance_px, 6.0);
        assert_eq!(opts.plugins, PluginOptions::default());
        let style = opts.style_for("wireframe", PrimitiveStyle::wireframe());
        assert_eq!(style.selected_scale, 5.0);
        assert_eq!(style.unselected_scale, 3.0);
        assert_eq!(
            opts.style_for("space_fill", PrimitiveStyle::space_fill()),
            PrimitiveStyle::space_fill()
        );
    }

    #[test]
    fn validate_checks_styles_against_their_engine() {
        let mut opts = Options::default();
        let _ = opts.styles.insert(
            "ball_and_stick".to_owned(),
            StyleOverrides {
                selected_scale: Some(0.35),
                ..Default::default()
            },
        );
        assert!(opts.validate().is_ok());

        let _ = opts.styles.insert(
            "wireframe".to_owned(),
            StyleOverrides {
                selected_scale: Some(2.0),
                ..Default::default()
            },
        );
        assert!(matches!(opts.validate(), Err(StyleError::InvalidStyle(_))));

        let opts = Options {
            picking: PickingOptions { tolerance_px: -1.0 },
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn apply_styles_updates_registered_engines() {
        let mut opts = Options::default();
        let _ = opts.styles.insert(
            "space_fill".to_owned(),
            StyleOverrides {
                selected_scale: Some(1.5),
                ..Default::default()
            },
        );
        let _ = opts
            .styles
            .insert("cartoon".to_owned(), StyleOverrides::default());
        let mut engines = EngineSet::builtin();
        opts.apply_styles(&mut engines).unwrap();
        let engine = engines.get("space_fill").unwrap();
        assert_eq!(engine.style().selected_scale, 1.5);
    }

    #[test]
    fn save_load_and_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.picking.tolerance_px = 8.0;
        opts.save(&dir.path().join("presets/wide.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("presets/default.toml"))
            .unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "x").unwrap();

        let loaded =
            Options::load(&dir.path().join("presets/wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            ["default", "wide"]
        );
        assert!(matches!(
            Options::load(&dir.path().join("missing.toml")),
            Err(StyleError::Io(_))
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("styles"));
        assert!(props.contains_key("plugins"));
        assert!(props.contains_key("picking"));
        let picking = &props["picking"]["properties"];
        assert!(picking.get("tolerance_px").is_some());
    }
}
