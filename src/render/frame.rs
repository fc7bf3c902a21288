//! One render pass: name stack, style state and recorded geometry.

use std::ops::{Deref, DerefMut};

use glam::Vec3;

use super::command::{DrawCommand, Geometry};
use super::names::NameStack;
use crate::color::Color;
use crate::error::RenderError;

/// Style attributes that apply to subsequently emitted geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    /// Current ambient/diffuse material.
    pub material: Color,
    /// Point edge length in pixels.
    pub point_size: f32,
    /// Line width in pixels.
    pub line_width: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            material: Color::WHITE,
            point_size: 1.0,
            line_width: 1.0,
        }
    }
}

/// A render pass under construction.
///
/// Engines draw into a frame through [`Frame::scope`] and [`Frame::named`]
/// guards so that style changes and pushed names never outlive the
/// primitive that made them.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    names: NameStack,
    state: StyleState,
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Empty frame with default style state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name stack.
    #[must_use]
    pub fn names(&self) -> &NameStack {
        &self.names
    }

    /// Current style state.
    #[must_use]
    pub fn state(&self) -> StyleState {
        self.state
    }

    /// Everything drawn so far, in emission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the frame, keeping only its draw commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Drop all recorded geometry and reset names and style state.
    pub fn clear(&mut self) {
        self.names = NameStack::new();
        self.state = StyleState::default();
        self.commands.clear();
    }

    /// Push a pick name. Prefer [`Frame::named`], which pops automatically.
    pub fn push_name(&mut self, name: u32) {
        self.names.push(name);
    }

    /// Pop the most recent pick name.
    pub fn pop_name(&mut self) -> Result<u32, RenderError> {
        self.names.pop()
    }

    /// Set the material for subsequent geometry.
    pub fn set_material(&mut self, color: Color) {
        self.state.material = color;
    }

    /// Set the point size for subsequent points.
    pub fn set_point_size(&mut self, size: f32) {
        self.state.point_size = size;
    }

    /// Set the line width for subsequent segments.
    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    /// Emit a point at the current point size.
    pub fn point(&mut self, position: Vec3) {
        let size = self.state.point_size;
        self.emit(Geometry::Point { position, size });
    }

    /// Emit a line segment at the current line width.
    pub fn segment(&mut self, from: Vec3, to: Vec3) {
        let width = self.state.line_width;
        self.emit(Geometry::Segment { from, to, width });
    }

    /// Emit a sphere.
    pub fn sphere(&mut self, center: Vec3, radius: f32) {
        self.emit(Geometry::Sphere { center, radius });
    }

    /// Emit a cylinder.
    pub fn cylinder(&mut self, from: Vec3, to: Vec3, radius: f32) {
        self.emit(Geometry::Cylinder { from, to, radius });
    }

    /// Save the style state and name-stack depth; both are restored when the
    /// returned guard drops, however the scope is left.
    pub fn scope(&mut self) -> PrimitiveScope<'_> {
        PrimitiveScope {
            saved: self.state,
            depth: self.names.depth(),
            frame: self,
        }
    }

    /// Push `name` for the lifetime of the returned guard.
    pub fn named(&mut self, name: u32) -> NameScope<'_> {
        let depth = self.names.depth();
        self.names.push(name);
        NameScope { frame: self, depth }
    }

    fn emit(&mut self, geometry: Geometry) {
        self.commands.push(DrawCommand {
            geometry,
            color: self.state.material,
            names: self.names.as_slice().to_vec(),
        });
    }
}

/// Restores style state and name-stack depth on drop.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct PrimitiveScope<'a> {
    frame: &'a mut Frame,
    saved: StyleState,
    depth: usize,
}

impl Deref for PrimitiveScope<'_> {
    type Target = Frame;

    fn deref(&self) -> &Frame {
        self.frame
    }
}

impl DerefMut for PrimitiveScope<'_> {
    fn deref_mut(&mut self) -> &mut Frame {
        self.frame
    }
}

impl Drop for PrimitiveScope<'_> {
    fn drop(&mut self) {
        self.frame.state = self.saved;
        self.frame.names.truncate(self.depth);
    }
}

/// Pops its name (and anything pushed above it) on drop.
#[must_use = "the name is popped as soon as the guard is dropped"]
pub struct NameScope<'a> {
    frame: &'a mut Frame,
    depth: usize,
}

impl Deref for NameScope<'_> {
    type Target = Frame;

    fn deref(&self) -> &Frame {
        self.frame
    }
}

impl DerefMut for NameScope<'_> {
    fn deref_mut(&mut self) -> &mut Frame {
        self.frame
    }
}

impl Drop for NameScope<'_> {
    fn drop(&mut self) {
        self.frame.names.truncate(self.depth);
    }
}
