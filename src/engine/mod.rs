//! The per-primitive render contract and the built-in engines.
//!
//! An [`Engine`] turns one atom or one bond into draw commands on a
//! [`Frame`]. Engines hold configuration only (an enabled flag and a
//! [`PrimitiveStyle`]); every frame re-reads the molecule.
//!
//! Each render call follows the same shape:
//!
//! 1. enter a [`Frame::scope`] (style state and name depth are saved)
//! 2. push `[kind, index]` names
//! 3. resolve color and size from the primitive's selection state
//! 4. emit geometry
//! 5. let the guards pop the names and restore the state
//!
//! Invalid ids are rejected before anything is pushed.

mod ball_and_stick;
mod set;
mod space_fill;
mod style;
mod wireframe;

pub use ball_and_stick::BallAndStickEngine;
pub use set::EngineSet;
pub use space_fill::SpaceFillEngine;
pub use style::{Appearance, PrimitiveStyle, StyleOverrides};
pub use wireframe::WireframeEngine;

use crate::error::{RenderError, StyleError};
use crate::molecule::{Atom, AtomId, Bond, BondId, Molecule, ResidueId};
use crate::render::{Frame, PrimitiveKind};

/// A rendering strategy for a molecule's primitives.
///
/// Implementations draw into the frame they are given and must leave its
/// name stack and style state as they found them, on success and on error.
/// [`Frame::scope`] does this for them.
pub trait Engine: Send {
    /// Unique name within an [`EngineSet`].
    fn name(&self) -> &str;

    /// Human readable description.
    fn description(&self) -> &str;

    /// Whether the viewport should call this engine at all.
    fn is_enabled(&self) -> bool;

    /// Enable or disable the engine for subsequent frames.
    fn set_enabled(&mut self, enabled: bool);

    /// Current style parameters.
    fn style(&self) -> PrimitiveStyle;

    /// Replace the style parameters after validating them.
    fn set_style(&mut self, style: PrimitiveStyle) -> Result<(), StyleError>;

    /// Draw one atom.
    fn render_atom(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
        atom: AtomId,
    ) -> Result<(), RenderError>;

    /// Draw one bond, each half styled by its own endpoint.
    fn render_bond(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
        bond: BondId,
    ) -> Result<(), RenderError>;

    /// Draw every member atom of a residue under `[Residue, index]`.
    fn render_residue(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
        residue: ResidueId,
    ) -> Result<(), RenderError> {
        let members = molecule
            .residue(residue)
            .ok_or(RenderError::InvalidResidue(residue))?
            .atoms();
        let mut scope = frame.scope();
        let mut kind = scope.named(PrimitiveKind::Residue.tag());
        let mut named = kind.named(residue.raw());
        for &atom in members {
            self.render_atom(&mut named, molecule, atom)?;
        }
        Ok(())
    }

    /// Draw every atom, then every bond, under `[Molecule, 0]`.
    ///
    /// Failing primitives are skipped and counted; the pass always runs to
    /// the end.
    fn render_molecule(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
    ) -> RenderReport {
        let mut report = RenderReport::default();
        let mut scope = frame.scope();
        let mut kind = scope.named(PrimitiveKind::Molecule.tag());
        let mut named = kind.named(0);
        for atom in molecule.atoms() {
            report.record(self.render_atom(&mut named, molecule, atom.id()));
        }
        for bond in molecule.bonds() {
            report.record(self.render_bond(&mut named, molecule, bond.id()));
        }
        report
    }
}

/// Outcome of rendering a batch of primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Primitives drawn successfully.
    pub rendered: usize,
    /// Errors of the primitives that were skipped, in call order.
    pub failures: Vec<RenderError>,
}

impl RenderReport {
    /// Count one render call.
    pub fn record(&mut self, result: Result<(), RenderError>) {
        match result {
            Ok(()) => self.rendered += 1,
            Err(err) => {
                log::debug!("skipped primitive: {err}");
                self.failures.push(err);
            }
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.rendered += other.rendered;
        self.failures.extend(other.failures);
    }

    /// Number of skipped primitives.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether every call succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Look up an atom for drawing.
pub(crate) fn resolve_atom(
    molecule: &Molecule,
    atom: AtomId,
) -> Result<&Atom, RenderError> {
    molecule.atom(atom).ok_or(RenderError::InvalidAtom(atom))
}

/// Look up a bond and both of its endpoints for drawing.
pub(crate) fn resolve_bond(
    molecule: &Molecule,
    bond: BondId,
) -> Result<(&Bond, &Atom, &Atom), RenderError> {
    let b = molecule.bond(bond).ok_or(RenderError::InvalidBond(bond))?;
    let endpoint = |atom: AtomId| {
        molecule
            .atom(atom)
            .ok_or(RenderError::UnresolvedEndpoint { bond, atom })
    };
    Ok((b, endpoint(b.begin())?, endpoint(b.end())?))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn report_counts_and_merges() {
        let mut report = RenderReport::default();
        report.record(Ok(()));
        report.record(Err(RenderError::InvalidAtom(AtomId(4))));
        let mut other = RenderReport::default();
        other.record(Ok(()));
        report.merge(other);
        assert_eq!(report.rendered, 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn resolve_bond_returns_both_endpoints() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(6, Vec3::ZERO);
        let b = mol.add_atom(8, Vec3::X);
        let bond = mol.add_bond(a, b, Default::default()).unwrap();
        let (_, begin, end) = resolve_bond(&mol, bond).unwrap();
        assert_eq!((begin.id(), end.id()), (a, b));
        assert_eq!(
            resolve_bond(&mol, BondId(9)).unwrap_err(),
            RenderError::InvalidBond(BondId(9))
        );
        assert_eq!(
            resolve_atom(&mol, AtomId(2)).unwrap_err(),
            RenderError::InvalidAtom(AtomId(2))
        );
    }

    #[test]
    fn residue_default_pushes_residue_names() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(7, Vec3::ZERO);
        let b = mol.add_atom(6, Vec3::X);
        let res = mol.add_residue("GLY", vec![a, b]).unwrap();
        let engine = WireframeEngine::new();
        let mut frame = Frame::new();
        engine.render_residue(&mut frame, &mol, res).unwrap();

        let names: Vec<_> =
            frame.commands().iter().map(|c| c.names.clone()).collect();
        assert_eq!(names, vec![vec![4, 0, 2, 0], vec![4, 0, 2, 1]]);
        assert!(frame.names().is_empty());
        assert_eq!(
            engine.render_residue(&mut frame, &mol, ResidueId(3)),
            Err(RenderError::InvalidResidue(ResidueId(3)))
        );
    }

    #[test]
    fn molecule_default_continues_past_failures() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(6, Vec3::ZERO);
        let b = mol.add_atom(8, Vec3::X);
        let _ = mol.add_bond(a, b, Default::default()).unwrap();

        let engine = WireframeEngine::new();
        let mut frame = Frame::new();
        let report = engine.render_molecule(&mut frame, &mol);
        assert_eq!(report.rendered, 3);
        assert!(report.is_clean());
        assert!(frame.commands().iter().all(|c| c.names[..2] == [1, 0]));
        assert!(frame.names().is_empty());
    }
}
