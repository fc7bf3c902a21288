use std::fmt;

use super::AtomId;

/// Stable index of a residue within its molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueId(pub u32);

impl ResidueId {
    /// Raw index, as pushed onto the name stack.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of atoms (an amino acid, a nucleotide, a ligand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    id: ResidueId,
    name: String,
    atoms: Vec<AtomId>,
}

impl Residue {
    pub(crate) fn new(id: ResidueId, name: String, atoms: Vec<AtomId>) -> Self {
        Self { id, name, atoms }
    }

    /// Index within the owning molecule.
    #[must_use]
    pub const fn id(&self) -> ResidueId {
        self.id
    }

    /// Residue name, e.g. `ALA`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member atoms in insertion order.
    #[must_use]
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub(crate) fn forget_atom(&mut self, atom: AtomId) {
        self.atoms.retain(|&a| a != atom);
    }
}
