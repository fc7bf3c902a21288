//! Engine and extension plugins.
//!
//! Plugins are described by TOML manifests found on a search path and
//! instantiated through a [`PluginFactoryTable`]; nothing is loaded
//! dynamically. Discovered engines go into an [`EngineSet`], extensions
//! into a [`ToolsMenu`] whose entries call back into the extension with
//! the current molecule and a [`MessageSink`].
//!
//! [`EngineSet`]: crate::engine::EngineSet

mod discovery;
mod extension;
mod factory;
mod manifest;
mod menu;
mod message;

pub use discovery::{
    discover, load_plugins, search_paths, search_paths_with, Discovery,
    DiscoveryReport, LoadedPlugin, SkippedCandidate,
};
pub use extension::{
    CenterExtension, Extension, ExtensionAction, SelectionExtension,
};
pub use factory::{EngineFactory, ExtensionFactory, Plugin, PluginFactoryTable};
pub use manifest::{PluginKind, PluginManifest};
pub use menu::{MenuEntry, ToolsMenu};
pub use message::{MessageLog, MessageSink};
