//! The tools menu that discovered extensions hang their actions off.

use std::fmt;

use super::extension::{Extension, ExtensionAction};
use super::message::MessageSink;
use crate::error::StyleError;
use crate::molecule::Molecule;

/// One menu item: an action and the extension that performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Name of the owning extension.
    pub extension: String,
    /// The action itself.
    pub action: ExtensionAction,
}

/// Extensions plus the flat list of their actions, in registration order.
#[derive(Default)]
pub struct ToolsMenu {
    extensions: Vec<Box<dyn Extension>>,
    entries: Vec<MenuEntry>,
}

impl ToolsMenu {
    /// Empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension and one entry per action it offers.
    pub fn add_extension(
        &mut self,
        extension: Box<dyn Extension>,
    ) -> Result<(), StyleError> {
        let name = extension.name().to_owned();
        if self.extension(&name).is_some() {
            return Err(StyleError::Extension(format!(
                "extension '{name}' is already registered"
            )));
        }
        for action in extension.actions() {
            self.entries.push(MenuEntry {
                extension: name.clone(),
                action,
            });
        }
        log::debug!("registered extension '{name}'");
        self.extensions.push(extension);
        Ok(())
    }

    /// All menu entries.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Extension by name.
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&dyn Extension> {
        self.extensions
            .iter()
            .find(|e| e.name() == name)
            .map(AsRef::as_ref)
    }

    /// Number of registered extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether no extension is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Trigger the `index`-th menu entry.
    pub fn invoke(
        &mut self,
        index: usize,
        molecule: &mut Molecule,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StyleError> {
        let entry = self.entries.get(index).ok_or_else(|| {
            StyleError::Extension(format!("no menu entry {index}"))
        })?;
        let (extension, action) =
            (entry.extension.clone(), entry.action.id.clone());
        self.invoke_action(&extension, &action, molecule, messages)
    }

    /// Run `action` of the named extension.
    pub fn invoke_action(
        &mut self,
        extension: &str,
        action: &str,
        molecule: &mut Molecule,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StyleError> {
        let target = self
            .extensions
            .iter_mut()
            .find(|e| e.name() == extension)
            .ok_or_else(|| {
                StyleError::Extension(format!("no extension '{extension}'"))
            })?;
        log::debug!("running {extension}::{action}");
        target.perform_action(action, molecule, messages)
    }
}

impl fmt::Debug for ToolsMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolsMenu")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
