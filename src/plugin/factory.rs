//! Compile-time registration table that manifests resolve against.

use rustc_hash::FxHashMap;

use super::extension::{CenterExtension, Extension, SelectionExtension};
use super::manifest::{PluginKind, PluginManifest};
use crate::engine::{
    BallAndStickEngine, Engine, SpaceFillEngine, WireframeEngine,
};
use crate::error::StyleError;

/// Builds an engine registered under the given instance name.
pub type EngineFactory = fn(name: &str) -> Box<dyn Engine>;

/// Builds an extension registered under the given instance name.
pub type ExtensionFactory = fn(name: &str) -> Box<dyn Extension>;

/// An instantiated plugin.
pub enum Plugin {
    /// A rendering engine.
    Engine(Box<dyn Engine>),
    /// A menu-driven extension.
    Extension(Box<dyn Extension>),
}

impl Plugin {
    /// Which capability this plugin provides.
    #[must_use]
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Engine(_) => PluginKind::Engine,
            Self::Extension(_) => PluginKind::Extension,
        }
    }

    /// Instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Engine(e) => e.name(),
            Self::Extension(e) => e.name(),
        }
    }
}

/// Factories keyed by the `factory` field of a manifest.
#[derive(Debug, Clone, Default)]
pub struct PluginFactoryTable {
    engines: FxHashMap<String, EngineFactory>,
    extensions: FxHashMap<String, ExtensionFactory>,
}

impl PluginFactoryTable {
    /// Table with no factories.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table with the built-in engines and extensions.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.register_engine(WireframeEngine::NAME, |name| {
            Box::new(WireframeEngine::new().with_name(name))
        });
        table.register_engine(BallAndStickEngine::NAME, |name| {
            Box::new(BallAndStickEngine::new().with_name(name))
        });
        table.register_engine(SpaceFillEngine::NAME, |name| {
            Box::new(SpaceFillEngine::new().with_name(name))
        });
        table.register_extension(SelectionExtension::NAME, |name| {
            Box::new(SelectionExtension::new().with_name(name))
        });
        table.register_extension(CenterExtension::NAME, |name| {
            Box::new(CenterExtension::new().with_name(name))
        });
        table
    }

    /// Add or replace an engine factory.
    pub fn register_engine(&mut self, key: &str, factory: EngineFactory) {
        if self.engines.insert(key.to_owned(), factory).is_some() {
            log::debug!("replaced engine factory '{key}'");
        }
    }

    /// Add or replace an extension factory.
    pub fn register_extension(
        &mut self,
        key: &str,
        factory: ExtensionFactory,
    ) {
        if self.extensions.insert(key.to_owned(), factory).is_some() {
            log::debug!("replaced extension factory '{key}'");
        }
    }

    /// Registered engine factory keys, sorted.
    #[must_use]
    pub fn engine_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> =
            self.engines.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Registered extension factory keys, sorted.
    #[must_use]
    pub fn extension_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> =
            self.extensions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Instantiate the plugin a manifest describes, with its enabled flag
    /// and style overrides applied.
    pub fn build(
        &self,
        manifest: &PluginManifest,
    ) -> Result<Plugin, StyleError> {
        let unknown = || {
            StyleError::UnknownFactory(format!(
                "{} factory '{}'",
                manifest.kind, manifest.factory
            ))
        };
        match manifest.kind {
            PluginKind::Engine => {
                let factory =
                    self.engines.get(&manifest.factory).ok_or_else(unknown)?;
                let mut engine = factory(&manifest.name);
                let style = manifest.style.apply(engine.style());
                engine.set_style(style)?;
                engine.set_enabled(manifest.enabled);
                Ok(Plugin::Engine(engine))
            }
            PluginKind::Extension => {
                let factory = self
                    .extensions
                    .get(&manifest.factory)
                    .ok_or_else(unknown)?;
                Ok(Plugin::Extension(factory(&manifest.name)))
            }
        }
    }
}
