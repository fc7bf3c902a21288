//! Points for atoms, two-colored lines for bonds.

use glam::Vec3;

use super::style::PrimitiveStyle;
use super::{resolve_atom, resolve_bond, Engine};
use crate::error::{RenderError, StyleError};
use crate::molecule::{Atom, AtomId, BondId, Molecule};
use crate::render::{Frame, PrimitiveKind};

/// Wireframe style: every atom is a screen-space point scaled by its van der
/// Waals radius, every bond a line split at its midpoint.
///
/// Each bond half is named after its own endpoint atom (`[Atom, index]`),
/// so picking either half selects that atom rather than the bond.
#[derive(Debug, Clone)]
pub struct WireframeEngine {
    name: String,
    enabled: bool,
    style: PrimitiveStyle,
}

impl WireframeEngine {
    /// Factory name.
    pub const NAME: &'static str = "wireframe";

    /// Enabled engine with the default wireframe style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
            enabled: true,
            style: PrimitiveStyle::wireframe(),
        }
    }

    /// Same engine registered under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn half(&self, frame: &mut Frame, atom: &Atom, from: Vec3, to: Vec3) {
        let look = self.style.bond_half_appearance(atom);
        let mut named = frame.named(atom.id().raw());
        look.color.apply_as_material(&mut named);
        named.set_line_width(look.size);
        named.segment(from, to);
    }
}

impl Default for WireframeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for WireframeEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Points and lines"
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
        named.set_point_size(look.size);
        named.point(atom.position());
        Ok(())
    }

    fn render_bond(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
        bond: BondId,
    ) -> Result<(), RenderError> {
        let (_, begin, end) = resolve_bond(molecule, bond)?;
        let mid = begin.position().lerp(end.position(), 0.5);

        let mut scope = frame.scope();
        let mut kind = scope.named(PrimitiveKind::Atom.tag());
        self.half(&mut kind, begin, begin.position(), mid);
        self.half(&mut kind, end, mid, end.position());
        Ok(())
    }
}
