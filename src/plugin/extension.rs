//! Menu-driven extensions and the built-in ones.

use super::message::MessageSink;
use crate::error::StyleError;
use crate::molecule::Molecule;

/// One action an extension contributes to the tools menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAction {
    /// Identifier passed back to [`Extension::perform_action`].
    pub id: String,
    /// Menu label.
    pub text: String,
    /// Longer description shown as a status tip.
    pub status_tip: String,
}

impl ExtensionAction {
    /// Action with the given id, label and tip.
    #[must_use]
    pub fn new(id: &str, text: &str, status_tip: &str) -> Self {
        Self {
            id: id.to_owned(),
            text: text.to_owned(),
            status_tip: status_tip.to_owned(),
        }
    }
}

/// A plugin that edits the current molecule on request.
pub trait Extension: Send {
    /// Unique name.
    fn name(&self) -> &str;

    /// Human readable description.
    fn description(&self) -> &str;

    /// Actions to put in the tools menu.
    fn actions(&self) -> Vec<ExtensionAction>;

    /// Run `action` on `molecule`, reporting progress to `messages`.
    fn perform_action(
        &mut self,
        action: &str,
        molecule: &mut Molecule,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StyleError>;
}

fn unknown_action(extension: &str, action: &str) -> StyleError {
    StyleError::Extension(format!(
        "extension '{extension}' has no action '{action}'"
    ))
}

/// Select all, clear or invert the atom selection.
#[derive(Debug, Clone)]
pub struct SelectionExtension {
    name: String,
}

impl SelectionExtension {
    /// Factory name.
    pub const NAME: &'static str = "selection";

    /// Extension under its factory name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
        }
    }

    /// Same extension under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for SelectionExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for SelectionExtension {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Atom selection helpers"
    }

    fn actions(&self) -> Vec<ExtensionAction> {
        vec![
            ExtensionAction::new(
                "select_all",
                "Select All",
                "Select every atom",
            ),
            ExtensionAction::new(
                "clear_selection",
                "Select None",
                "Deselect every atom",
            ),
            ExtensionAction::new(
                "invert_selection",
                "Invert Selection",
                "Flip the selection state of every atom",
            ),
        ]
    }

    fn perform_action(
        &mut self,
        action: &str,
        molecule: &mut Molecule,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StyleError> {
        match action {
            "select_all" => molecule.select_all(),
            "clear_selection" => molecule.clear_selection(),
            "invert_selection" => molecule.invert_selection(),
            _ => return Err(unknown_action(&self.name, action)),
        }
        let selected = molecule.selected_atoms().count();
        messages.append(&format!(
            "{selected} of {} atoms selected",
            molecule.num_atoms()
        ));
        Ok(())
    }
}

/// Move the molecule's centroid to the origin.
#[derive(Debug, Clone)]
pub struct CenterExtension {
    name: String,
}

impl CenterExtension {
    /// Factory name.
    pub const NAME: &'static str = "center";

    /// Extension under its factory name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
        }
    }

    /// Same extension under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for CenterExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for CenterExtension {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Recenter coordinates"
    }

    fn actions(&self) -> Vec<ExtensionAction> {
        vec![ExtensionAction::new(
            "center",
            "Center Molecule",
            "Translate the molecule so its centroid is at the origin",
        )]
    }

    fn perform_action(
        &mut self,
        action: &str,
        molecule: &mut Molecule,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StyleError> {
        if action != "center" {
            return Err(unknown_action(&self.name, action));
        }
        let Some(centroid) = molecule.centroid() else {
            messages.append("nothing to center");
            return Ok(());
        };
        molecule.translate(-centroid);
        messages.append(&format!(
            "moved by ({:.3}, {:.3}, {:.3})",
            -centroid.x, -centroid.y, -centroid.z
        ));
        Ok(())
    }
}
