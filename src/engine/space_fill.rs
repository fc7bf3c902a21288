//! Van der Waals spheres.

use super::style::PrimitiveStyle;
use super::{resolve_atom, resolve_bond, Engine};
use crate::error::{RenderError, StyleError};
use crate::molecule::{AtomId, BondId, Molecule};
use crate::render::{Frame, PrimitiveKind};

/// Space-filling style: one sphere of (roughly) van der Waals radius per
/// atom. Bonds are hidden inside the spheres; their endpoints are still
/// checked so a dangling bond reports the same error as in other engines.
#[derive(Debug, Clone)]
pub struct SpaceFillEngine {
    name: String,
    enabled: bool,
    style: PrimitiveStyle,
}

impl SpaceFillEngine {
    /// Factory name.
    pub const NAME: &'static str = "space_fill";

    /// Enabled engine with the default space-fill style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
            enabled: true,
            style: PrimitiveStyle::space_fill(),
        }
    }

    /// Same engine registered under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for SpaceFillEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SpaceFillEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Van der Waals spheres"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn style(&self) -> PrimitiveStyle {
        self.style
    }

    fn set_style(&mut self, style: PrimitiveStyle) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    fn render_atom(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
        atom: AtomId,
    ) -> Result<(), RenderError> {
        let atom = resolve_atom(molecule, atom)?;
        let look = self.style.atom_appearance(atom);

        let mut scope = frame.scope();
        let mut kind = scope.named(PrimitiveKind::Atom.tag());
        let mut named = kind.named(atom.id().raw());
        look.color.apply_as_material(&mut named);
        named.sphere(atom.position(), look.size);
        Ok(())
    }

    fn render_bond(
        &self,
        _frame: &mut Frame,
        molecule: &Molecule,
        bond: BondId,
    ) -> Result<(), RenderError> {
        let _ = resolve_bond(molecule, bond)?;
        Ok(())
    }
}
