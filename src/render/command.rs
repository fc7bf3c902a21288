//! Recorded draw commands.

use glam::Vec3;

use crate::color::Color;

/// Shape of one recorded draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Screen-space square point.
    Point {
        /// Center in world space.
        position: Vec3,
        /// Edge length in pixels.
        size: f32,
    },
    /// Screen-space line segment.
    Segment {
        /// Start in world space.
        from: Vec3,
        /// End in world space.
        to: Vec3,
        /// Line width in pixels.
        width: f32,
    },
    /// World-space sphere.
    Sphere {
        /// Center in world space.
        center: Vec3,
        /// Radius in Ångström.
        radius: f32,
    },
    /// World-space capped cylinder.
    Cylinder {
        /// Start in world space.
        from: Vec3,
        /// End in world space.
        to: Vec3,
        /// Radius in Ångström.
        radius: f32,
    },
}

/// One piece of geometry with the material and pick names active when it
/// was emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// What was drawn.
    pub geometry: Geometry,
    /// Material color at emission time.
    pub color: Color,
    /// Name stack (bottom to top) at emission time.
    pub names: Vec<u32>,
}
