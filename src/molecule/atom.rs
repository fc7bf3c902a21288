use std::fmt;

use glam::Vec3;

/// Stable index of an atom within its molecule.
///
/// Ids are never reused while the owning molecule lives, so a stale id
/// resolves to nothing rather than to a different atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(pub u32);

impl AtomId {
    /// Raw index, as pushed onto the name stack.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single atom: element, position and selection flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    id: AtomId,
    atomic_number: u8,
    position: Vec3,
    selected: bool,
}

impl Atom {
    pub(crate) const fn new(
        id: AtomId,
        atomic_number: u8,
        position: Vec3,
    ) -> Self {
        Self {
            id,
            atomic_number,
            position,
            selected: false,
        }
    }

    /// Index within the owning molecule.
    #[must_use]
    pub const fn id(&self) -> AtomId {
        self.id
    }

    /// Atomic number (0 = dummy/unknown).
    #[must_use]
    pub const fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Position in Ångström.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the user has selected this atom.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
