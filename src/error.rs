//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

use crate::molecule::{AtomId, BondId, ResidueId};

/// Why a single primitive could not be rendered.
///
/// These never abort a frame: the viewport records them and moves on to the
/// next primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The atom id does not name an atom owned by the molecule.
    InvalidAtom(AtomId),
    /// The bond id does not name a bond owned by the molecule.
    InvalidBond(BondId),
    /// The residue id does not name a residue owned by the molecule.
    InvalidResidue(ResidueId),
    /// A bond refers to an endpoint atom the molecule no longer owns.
    UnresolvedEndpoint {
        /// The bond being rendered.
        bond: BondId,
        /// The endpoint that failed to resolve.
        atom: AtomId,
    },
    /// A name was popped from an empty name stack.
    NameStackUnderflow,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAtom(id) => write!(f, "no atom with index {id}"),
            Self::InvalidBond(id) => write!(f, "no bond with index {id}"),
            Self::InvalidResidue(id) => {
                write!(f, "no residue with index {id}")
            }
            Self::UnresolvedEndpoint { bond, atom } => {
                write!(f, "bond {bond} refers to missing atom {atom}")
            }
            Self::NameStackUnderflow => write!(f, "name stack underflow"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Errors produced when editing a [`Molecule`](crate::molecule::Molecule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoleculeError {
    /// The atom id does not name an atom owned by the molecule.
    UnknownAtom(AtomId),
    /// The bond id does not name a bond owned by the molecule.
    UnknownBond(BondId),
    /// Both endpoints of a new bond are the same atom.
    SelfBond(AtomId),
}

impl fmt::Display for MoleculeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAtom(id) => write!(f, "unknown atom {id}"),
            Self::UnknownBond(id) => write!(f, "unknown bond {id}"),
            Self::SelfBond(id) => {
                write!(f, "cannot bond atom {id} to itself")
            }
        }
    }
}

impl std::error::Error for MoleculeError {}

/// Errors produced while decoding a selection buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    /// The buffer ended inside the hit record starting at `offset`.
    Truncated {
        /// Word offset of the incomplete hit record.
        offset: usize,
    },
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { offset } => {
                write!(f, "selection buffer truncated at word {offset}")
            }
        }
    }
}

impl std::error::Error for PickError {}

/// Errors produced by the molstyle crate outside the per-primitive path.
#[derive(Debug)]
pub enum StyleError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A plugin manifest could not be read or understood.
    Manifest {
        /// Manifest file.
        path: PathBuf,
        /// Human-readable cause.
        reason: String,
    },
    /// No factory is registered under this name.
    UnknownFactory(String),
    /// An engine with this name is already registered.
    DuplicateEngine(String),
    /// No engine with this name is registered.
    UnknownEngine(String),
    /// A style parameter is out of range.
    InvalidStyle(String),
    /// An extension action failed.
    Extension(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Manifest { path, reason } => {
                write!(f, "bad plugin manifest {}: {reason}", path.display())
            }
            Self::UnknownFactory(name) => {
                write!(f, "no plugin factory named '{name}'")
            }
            Self::DuplicateEngine(name) => {
                write!(f, "engine '{name}' is already registered")
            }
            Self::UnknownEngine(name) => {
                write!(f, "no engine named '{name}'")
            }
            Self::InvalidStyle(msg) => write!(f, "invalid style: {msg}"),
            Self::Extension(msg) => write!(f, "extension error: {msg}"),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StyleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MoleculeError> for StyleError {
    fn from(e: MoleculeError) -> Self {
        Self::Extension(e.to_string())
    }
}
