use std::fmt;

use super::AtomId;

/// Stable index of a bond within its molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondId(pub u32);

impl BondId {
    /// Raw index, as pushed onto the name stack.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bond multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondOrder {
    /// Single bond.
    #[default]
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
    /// Delocalized aromatic bond.
    Aromatic,
}

impl BondOrder {
    /// Number of parallel strokes a multi-stroke style draws for this order.
    #[must_use]
    pub const fn strokes(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double | Self::Aromatic => 2,
            Self::Triple => 3,
        }
    }
}

/// An undirected edge between two atoms of the same molecule.
///
/// Endpoints are handles into the molecule's atom table, not owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    id: BondId,
    begin: AtomId,
    end: AtomId,
    order: BondOrder,
}

impl Bond {
    pub(crate) const fn new(
        id: BondId,
        begin: AtomId,
        end: AtomId,
        order: BondOrder,
    ) -> Self {
        Self {
            id,
            begin,
            end,
            order,
        }
    }

    /// Index within the owning molecule.
    #[must_use]
    pub const fn id(&self) -> BondId {
        self.id
    }

    /// First endpoint.
    #[must_use]
    pub const fn begin(&self) -> AtomId {
        self.begin
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> AtomId {
        self.end
    }

    /// Bond order.
    #[must_use]
    pub const fn order(&self) -> BondOrder {
        self.order
    }

    /// Whether `atom` is one of the endpoints.
    #[must_use]
    pub fn involves(&self, atom: AtomId) -> bool {
        self.begin == atom || self.end == atom
    }

    /// The endpoint opposite `atom`, if `atom` is an endpoint.
    #[must_use]
    pub fn other(&self, atom: AtomId) -> Option<AtomId> {
        if atom == self.begin {
            Some(self.end)
        } else if atom == self.end {
            Some(self.begin)
        } else {
            None
        }
    }
}
