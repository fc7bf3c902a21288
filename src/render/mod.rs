//! Render pass state and picking.
//!
//! A [`Frame`] owns the name stack and style state of one pass and records
//! every piece of emitted geometry together with the names active at the
//! time. Picking then works on the recorded commands: on the CPU through
//! [`pick_commands`], or on the GPU through the ids of a [`PickMap`].

mod command;
mod frame;
mod names;
mod pick;
mod pick_map;

pub use command::{DrawCommand, Geometry};
pub use frame::{Frame, NameScope, PrimitiveScope, StyleState};
pub use names::{NameStack, PrimitiveKind};
pub use pick::{
    decode_selection_buffer, nearest, pick_commands, HitRecord, PickRegion,
    PickTarget,
};
pub use pick_map::PickMap;
