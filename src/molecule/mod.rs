//! Molecule graph: atoms, bonds and residues in slot arenas.
//!
//! Atoms, bonds and residues are addressed by stable integer ids. Removing
//! an atom vacates its slot (ids are not reused) and drops every bond that
//! referenced it, so a bond's endpoints always resolve inside the same
//! molecule.

mod atom;
mod bond;
mod residue;

pub use atom::{Atom, AtomId};
pub use bond::{Bond, BondId, BondOrder};
use glam::Vec3;
pub use residue::{Residue, ResidueId};

use crate::error::MoleculeError;

/// An undirected graph of atoms (nodes) and bonds (edges).
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Option<Atom>>,
    bonds: Vec<Option<Bond>>,
    residues: Vec<Residue>,
    num_atoms: usize,
    num_bonds: usize,
}

impl Molecule {
    /// Empty molecule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live atoms.
    #[must_use]
    pub const fn num_atoms(&self) -> usize {
        self.num_atoms
    }

    /// Number of live bonds.
    #[must_use]
    pub const fn num_bonds(&self) -> usize {
        self.num_bonds
    }

    /// Number of residues.
    #[must_use]
    pub fn num_residues(&self) -> usize {
        self.residues.len()
    }

    /// Whether the molecule has no atoms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_atoms == 0
    }

    /// Atom by id, `None` if it was never added or has been removed.
    #[must_use]
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.slot()).and_then(Option::as_ref)
    }

    /// Bond by id, `None` if it was never added or has been removed.
    #[must_use]
    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bonds.get(id.slot()).and_then(Option::as_ref)
    }

    /// Residue by id.
    #[must_use]
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id.slot())
    }

    /// Live atoms in id order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.atoms.iter().flatten()
    }

    /// Live bonds in id order.
    pub fn bonds(&self) -> impl Iterator<Item = &Bond> + '_ {
        self.bonds.iter().flatten()
    }

    /// Residues in id order.
    pub fn residues(&self) -> impl Iterator<Item = &Residue> + '_ {
        self.residues.iter()
    }

    /// Bonds incident to `atom`.
    pub fn bonds_of(&self, atom: AtomId) -> impl Iterator<Item = &Bond> + '_ {
        self.bonds().filter(move |b| b.involves(atom))
    }

    /// Selected atoms in id order.
    pub fn selected_atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.atoms().filter(|a| a.is_selected())
    }

    /// Add an unselected atom and return its id.
    pub fn add_atom(&mut self, atomic_number: u8, position: Vec3) -> AtomId {
        let id = AtomId(self.atoms.len() as u32);
        self.atoms.push(Some(Atom::new(id, atomic_number, position)));
        self.num_atoms += 1;
        id
    }

    /// Bond two distinct atoms of this molecule.
    pub fn add_bond(
        &mut self,
        begin: AtomId,
        end: AtomId,
        order: BondOrder,
    ) -> Result<BondId, MoleculeError> {
        if begin == end {
            return Err(MoleculeError::SelfBond(begin));
        }
        for atom in [begin, end] {
            if self.atom(atom).is_none() {
                return Err(MoleculeError::UnknownAtom(atom));
            }
        }
        let id = BondId(self.bonds.len() as u32);
        self.bonds.push(Some(Bond::new(id, begin, end, order)));
        self.num_bonds += 1;
        Ok(id)
    }

    /// Group existing atoms into a named residue.
    pub fn add_residue(
        &mut self,
        name: impl Into<String>,
        atoms: Vec<AtomId>,
    ) -> Result<ResidueId, MoleculeError> {
        if let Some(&missing) = atoms.iter().find(|&&a| self.atom(a).is_none())
        {
            return Err(MoleculeError::UnknownAtom(missing));
        }
        let id = ResidueId(self.residues.len() as u32);
        self.residues.push(Residue::new(id, name.into(), atoms));
        Ok(id)
    }

    /// Remove an atom together with every bond that references it.
    pub fn remove_atom(&mut self, id: AtomId) -> Result<Atom, MoleculeError> {
        let atom = self
            .atoms
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(MoleculeError::UnknownAtom(id))?;
        self.num_atoms -= 1;

        for slot in &mut self.bonds {
            if slot.as_ref().is_some_and(|b| b.involves(id)) {
                *slot = None;
                self.num_bonds -= 1;
            }
        }
        for residue in &mut self.residues {
            residue.forget_atom(id);
        }
        Ok(atom)
    }

    /// Remove a single bond.
    pub fn remove_bond(&mut self, id: BondId) -> Result<Bond, MoleculeError> {
        let bond = self
            .bonds
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(MoleculeError::UnknownBond(id))?;
        self.num_bonds -= 1;
        Ok(bond)
    }

    /// Move an atom.
    pub fn set_position(
        &mut self,
        id: AtomId,
        position: Vec3,
    ) -> Result<(), MoleculeError> {
        self.atom_mut(id)?.set_position(position);
        Ok(())
    }

    /// Set or clear an atom's selection flag.
    pub fn set_selected(
        &mut self,
        id: AtomId,
        selected: bool,
    ) -> Result<(), MoleculeError> {
        self.atom_mut(id)?.set_selected(selected);
        Ok(())
    }

    /// Select every atom.
    pub fn select_all(&mut self) {
        self.atoms_mut().for_each(|a| a.set_selected(true));
    }

    /// Deselect every atom.
    pub fn clear_selection(&mut self) {
        self.atoms_mut().for_each(|a| a.set_selected(false));
    }

    /// Flip the selection flag of every atom.
    pub fn invert_selection(&mut self) {
        self.atoms_mut().for_each(|a| {
            let selected = a.is_selected();
            a.set_selected(!selected);
        });
    }

    /// Shift every atom by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.atoms_mut().for_each(|a| {
            let p = a.position();
            a.set_position(p + offset);
        });
    }

    /// Mean atom position, `None` for an empty molecule.
    #[must_use]
    pub fn centroid(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        let sum: Vec3 = self.atoms().map(Atom::position).sum();
        Some(sum / self.num_atoms as f32)
    }

    /// Axis-aligned bounds `(min, max)` of the atom positions.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.atoms().map(Atom::position);
        let first = positions.next()?;
        Some(positions.fold((first, first), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        }))
    }

    fn atom_mut(&mut self, id: AtomId) -> Result<&mut Atom, MoleculeError> {
        self.atoms
            .get_mut(id.slot())
            .and_then(Option::as_mut)
            .ok_or(MoleculeError::UnknownAtom(id))
    }

    fn atoms_mut(&mut self) -> impl Iterator<Item = &mut Atom> + '_ {
        self.atoms.iter_mut().flatten()
    }
}
