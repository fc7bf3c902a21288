//! Scaled spheres joined by two-tone cylinders.

use glam::Vec3;

use super::style::PrimitiveStyle;
use super::{resolve_atom, resolve_bond, Engine};
use crate::error::{RenderError, StyleError};
use crate::molecule::{Atom, AtomId, BondId, Molecule};
use crate::render::{Frame, PrimitiveKind};

/// Distance between parallel strokes of a multiple bond, in Ångström.
const STROKE_SPACING: f32 = 0.2;

/// Stroke radius multiple for bonds drawn with more than one stroke.
const MULTI_STROKE_SCALE: f32 = 0.5;

/// Ball-and-stick style.
///
/// Bonds are named `[Bond, index]` around both halves, so a pick anywhere on
/// the stick selects the bond. Each half still takes its color and radius
/// from its own endpoint. Double and triple bonds are drawn as thinner
/// parallel strokes.
#[derive(Debug, Clone)]
pub struct BallAndStickEngine {
    name: String,
    enabled: bool,
    style: PrimitiveStyle,
}

impl BallAndStickEngine {
    /// Factory name.
    pub const NAME: &'static str = "ball_and_stick";

    /// Enabled engine with the default ball-and-stick style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
            enabled: true,
            style: PrimitiveStyle::ball_and_stick(),
        }
    }

    /// Same engine registered under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn half(
        &self,
        frame: &mut Frame,
        atom: &Atom,
        (from, to): (Vec3, Vec3),
        offsets: &[Vec3],
    ) {
        let look = self.style.bond_half_appearance(atom);
        let radius = if offsets.len() > 1 {
            look.size * MULTI_STROKE_SCALE
        } else {
            look.size
        };
        look.color.apply_as_material(frame);
        for &offset in offsets {
            frame.cylinder(from + offset, to + offset, radius);
        }
    }
}

impl Default for BallAndStickEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Perpendicular offsets of each stroke of a bond along `axis`.
fn stroke_offsets(axis: Vec3, strokes: usize) -> Vec<Vec3> {
    let Some(dir) = axis.try_normalize() else {
        return vec![Vec3::ZERO];
    };
    if strokes <= 1 {
        return vec![Vec3::ZERO];
    }
    let side = dir.any_orthonormal_vector() * STROKE_SPACING;
    let center = (strokes - 1) as f32 * 0.5;
    (0..strokes)
        .map(|i| side * (i as f32 - center))
        .collect()
}

impl Engine for BallAndStickEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Scaled spheres and cylinders"
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
        frame: &mut Frame,
        molecule: &Molecule,
        bond: BondId,
    ) -> Result<(), RenderError> {
        let (b, begin, end) = resolve_bond(molecule, bond)?;
        let (p0, p1) = (begin.position(), end.position());
        let mid = p0.lerp(p1, 0.5);
        let offsets = stroke_offsets(p1 - p0, b.order().strokes());

        let mut scope = frame.scope();
        let mut kind = scope.named(PrimitiveKind::Bond.tag());
        let mut named = kind.named(bond.raw());
        self.half(&mut named, begin, (p0, mid), &offsets);
        self.half(&mut named, end, (mid, p1), &offsets);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::molecule::BondOrder;
    use crate::render::{Geometry, PickTarget};

    #[test]
    fn atoms_are_scaled_spheres() {
        let mut mol = Molecule::new();
        let n = mol.add_atom(7, Vec3::ONE);
        let engine = BallAndStickEngine::new();
        let mut frame = Frame::new();
        engine.render_atom(&mut frame, &mol, n).unwrap();
        mol.set_selected(n, true).unwrap();
        engine.render_atom(&mut frame, &mol, n).unwrap();

        let radii: Vec<f32> = frame
            .commands()
            .iter()
            .filter_map(|c| match c.geometry {
                Geometry::Sphere { radius, .. } => Some(radius),
                _ => None,
            })
            .collect();
        assert!((radii[0] - 1.55 * 0.3).abs() < 1e-5);
        assert!((radii[1] - 1.55 * 0.4).abs() < 1e-5);
        assert_eq!(frame.commands()[1].color, Color::SELECTION_HIGHLIGHT);
    }

    #[test]
    fn bond_picks_resolve_to_the_bond() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(6, Vec3::ZERO);
        let b = mol.add_atom(6, Vec3::new(1.5, 0.0, 0.0));
        let bond = mol.add_bond(a, b, BondOrder::Single).unwrap();
        let engine = BallAndStickEngine::new();
        let mut frame = Frame::new();
        engine.render_bond(&mut frame, &mol, bond).unwrap();

        assert_eq!(frame.commands().len(), 2);
        for cmd in frame.commands() {
            assert_eq!(
                PickTarget::from_names(&cmd.names),
                PickTarget::Bond(bond)
            );
        }
        assert!(frame.names().is_empty());
    }

    #[test]
    fn double_bond_draws_parallel_strokes() {
        let mut mol = Molecule::new();
        let c = mol.add_atom(6, Vec3::ZERO);
        let o = mol.add_atom(8, Vec3::new(0.0, 1.2, 0.0));
        let bond = mol.add_bond(c, o, BondOrder::Double).unwrap();
        let engine = BallAndStickEngine::new();
        let mut frame = Frame::new();
        engine.render_bond(&mut frame, &mol, bond).unwrap();

        let cmds = frame.commands();
        assert_eq!(cmds.len(), 4);
        let Geometry::Cylinder {
            from: a, radius, ..
        } = cmds[0].geometry
        else {
            panic!("expected a cylinder");
        };
        let Geometry::Cylinder { from: b, .. } = cmds[1].geometry else {
            panic!("expected a cylinder");
        };
        assert!((a.distance(b) - STROKE_SPACING).abs() < 1e-5);
        assert!((radius - 0.15 * MULTI_STROKE_SCALE).abs() < 1e-6);
        assert_eq!(cmds[0].color, Color::from_atomic_number(6));
        assert_eq!(cmds[3].color, Color::from_atomic_number(8));
    }

    #[test]
    fn coincident_endpoints_fall_back_to_one_stroke() {
        assert_eq!(stroke_offsets(Vec3::ZERO, 3), vec![Vec3::ZERO]);
        assert_eq!(stroke_offsets(Vec3::X, 3).len(), 3);
    }
}
