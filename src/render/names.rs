//! Hierarchical pick names.

use crate::error::RenderError;

/// Tag identifying what kind of primitive a name path refers to.
///
/// The tag is pushed first, then the primitive's index within the
/// molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PrimitiveKind {
    /// The molecule as a whole.
    Molecule = 1,
    /// A single atom.
    Atom = 2,
    /// A bond between two atoms.
    Bond = 3,
    /// A residue (group of atoms).
    Residue = 4,
}

impl PrimitiveKind {
    /// Integer tag pushed onto the name stack.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Inverse of [`PrimitiveKind::tag`].
    #[must_use]
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(Self::Molecule),
            2 => Some(Self::Atom),
            3 => Some(Self::Bond),
            4 => Some(Self::Residue),
            _ => None,
        }
    }
}

/// Ordered stack of integer names active while geometry is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameStack {
    names: Vec<u32>,
}

impl NameStack {
    /// Empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a name.
    pub fn push(&mut self, name: u32) {
        self.names.push(name);
    }

    /// Pop the most recent name.
    pub fn pop(&mut self) -> Result<u32, RenderError> {
        self.names.pop().ok_or(RenderError::NameStackUnderflow)
    }

    /// Number of names on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Most recent name.
    #[must_use]
    pub fn top(&self) -> Option<u32> {
        self.names.last().copied()
    }

    /// Names from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.names
    }

    /// Drop names above `depth`.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.names.truncate(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in [
            PrimitiveKind::Molecule,
            PrimitiveKind::Atom,
            PrimitiveKind::Bond,
            PrimitiveKind::Residue,
        ] {
            assert_eq!(PrimitiveKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_tag(0), None);
        assert_eq!(PrimitiveKind::from_tag(99), None);
    }

    #[test]
    fn pop_is_lifo_and_reports_underflow() {
        let mut names = NameStack::new();
        names.push(PrimitiveKind::Atom.tag());
        names.push(7);
        assert_eq!(names.as_slice(), &[2, 7]);
        assert_eq!(names.pop(), Ok(7));
        assert_eq!(names.pop(), Ok(2));
        assert_eq!(names.pop(), Err(RenderError::NameStackUnderflow));
        assert!(names.is_empty());
    }
}
