//! Typed pick-target resolution from raw GPU pick IDs.

use rustc_hash::FxHashMap;

use super::command::DrawCommand;
use super::pick::PickTarget;

/// Maps raw GPU pick IDs to name paths and typed [`PickTarget`] values.
///
/// Pick IDs are contiguous:
/// - `0` → no hit
/// - `n` → the `n`-th distinct name path, in first-emission order
///
/// Commands that share a name path share an ID, so both halves of a bond
/// drawn under the same names read back as the same primitive.
#[derive(Debug, Clone, Default)]
pub struct PickMap {
    paths: Vec<Vec<u32>>,
    ids: Vec<u32>,
}

impl PickMap {
    /// Assign IDs to every command of a frame.
    #[must_use]
    pub fn from_commands(commands: &[DrawCommand]) -> Self {
        let mut index: FxHashMap<&[u32], u32> = FxHashMap::default();
        let mut paths = Vec::new();
        let mut ids = Vec::with_capacity(commands.len());
        for cmd in commands {
            let id = *index.entry(cmd.names.as_slice()).or_insert_with(|| {
                paths.push(cmd.names.clone());
                paths.len() as u32
            });
            ids.push(id);
        }
        Self { paths, ids }
    }

    /// Pick ID written for the `command`-th command (0 if out of range).
    #[must_use]
    pub fn id_for(&self, command: usize) -> u32 {
        self.ids.get(command).copied().unwrap_or(0)
    }

    /// Number of distinct name paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no IDs were assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Name path behind a raw pick ID.
    #[must_use]
    pub fn names(&self, raw_id: u32) -> Option<&[u32]> {
        let idx = raw_id.checked_sub(1)?; // pick IDs are 1-based
        self.paths.get(idx as usize).map(Vec::as_slice)
    }

    /// Resolve a raw pick ID (as read from the GPU picking buffer) to a typed
    /// target.
    #[must_use]
    pub fn resolve(&self, raw_id: u32) -> PickTarget {
        self.names(raw_id)
            .map_or(PickTarget::None, PickTarget::from_names)
    }
}
