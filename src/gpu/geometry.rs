//! GPU-ready vertex and instance data for a recorded frame.

use crate::render::{DrawCommand, Frame, Geometry, PickMap, PickTarget};

/// Vertex of a screen-space point sprite.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    /// World-space center.
    pub position: [f32; 3],
    /// Edge length in pixels.
    pub size: f32,
    /// RGBA color.
    pub color: [f32; 4],
    /// Pick ID (see [`PickMap`]).
    pub pick_id: u32,
    _pad: [u32; 3],
}

/// Vertex of a screen-space line (two per segment, line-list topology).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Line width in pixels.
    pub width: f32,
    /// RGBA color.
    pub color: [f32; 4],
    /// Pick ID (see [`PickMap`]).
    pub pick_id: u32,
    _pad: [u32; 3],
}

/// Per-instance data for a ray-cast sphere impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = center, w = radius.
    pub center: [f32; 4],
    /// RGBA color.
    pub color: [f32; 4],
    /// Pick ID (see [`PickMap`]).
    pub pick_id: u32,
    _pad: [u32; 3],
}

/// Per-instance data for a capped cylinder impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CylinderInstance {
    /// xyz = start, w = radius.
    pub start: [f32; 4],
    /// xyz = end, w unused.
    pub end: [f32; 4],
    /// RGBA color.
    pub color: [f32; 4],
    /// Pick ID (see [`PickMap`]).
    pub pick_id: u32,
    _pad: [u32; 3],
}

const POINT_ATTRIBUTES: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32,
        2 => Float32x4,
        3 => Uint32,
    ];

const SPHERE_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Uint32,
    ];

const CYLINDER_ATTRIBUTES: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Float32x4,
        3 => Uint32,
    ];

/// Vertex buffer layout for [`PointVertex`].
#[must_use]
pub fn point_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<PointVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POINT_ATTRIBUTES,
    }
}

/// Vertex buffer layout for [`LineVertex`]. Same shape as points.
#[must_use]
pub fn line_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POINT_ATTRIBUTES,
    }
}

/// Instance buffer layout for [`SphereInstance`].
#[must_use]
pub fn sphere_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<SphereInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &SPHERE_ATTRIBUTES,
    }
}

/// Instance buffer layout for [`CylinderInstance`].
#[must_use]
pub fn cylinder_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<CylinderInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &CYLINDER_ATTRIBUTES,
    }
}

/// A frame's draw commands split by primitive type, each tagged with the
/// pick ID of its name path.
#[derive(Debug, Clone, Default)]
pub struct FrameGeometry {
    /// Point sprites.
    pub points: Vec<PointVertex>,
    /// Line-list vertices.
    pub lines: Vec<LineVertex>,
    /// Sphere instances.
    pub spheres: Vec<SphereInstance>,
    /// Cylinder instances.
    pub cylinders: Vec<CylinderInstance>,
    pick_map: PickMap,
}

impl FrameGeometry {
    /// Flatten the commands recorded in `frame`.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_commands(frame.commands())
    }

    /// Flatten `commands`, in order.
    #[must_use]
    pub fn from_commands(commands: &[DrawCommand]) -> Self {
        let pick_map = PickMap::from_commands(commands);
        let mut out = Self::default();
        for (i, cmd) in commands.iter().enumerate() {
            let pick_id = pick_map.id_for(i);
            let color = cmd.color.to_array();
            match cmd.geometry {
                Geometry::Point { position, size } => {
                    out.points.push(PointVertex {
                        position: position.to_array(),
                        size,
                        color,
                        pick_id,
                        _pad: [0; 3],
                    });
                }
                Geometry::Segment { from, to, width } => {
                    for position in [from, to] {
                        out.lines.push(LineVertex {
                            position: position.to_array(),
                            width,
                            color,
                            pick_id,
                            _pad: [0; 3],
                        });
                    }
                }
                Geometry::Sphere { center, radius } => {
                    out.spheres.push(SphereInstance {
                        center: center.extend(radius).to_array(),
                        color,
                        pick_id,
                        _pad: [0; 3],
                    });
                }
                Geometry::Cylinder { from, to, radius } => {
                    out.cylinders.push(CylinderInstance {
                        start: from.extend(radius).to_array(),
                        end: to.extend(0.0).to_array(),
                        color,
                        pick_id,
                        _pad: [0; 3],
                    });
                }
            }
        }
        out.pick_map = pick_map;
        out
    }

    /// Pick ID table for this geometry.
    #[must_use]
    pub fn pick_map(&self) -> &PickMap {
        &self.pick_map
    }

    /// Resolve an ID read back from the picking target.
    #[must_use]
    pub fn resolve(&self, raw_id: u32) -> PickTarget {
        self.pick_map.resolve(raw_id)
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.lines.is_empty()
            && self.spheres.is_empty()
            && self.cylinders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::engine::{BallAndStickEngine, Engine, WireframeEngine};
    use crate::molecule::{AtomId, BondId, BondOrder, Molecule};

    fn water_fragment() -> Molecule {
        let mut mol = Molecule::new();
        let o = mol.add_atom(8, Vec3::ZERO);
        let h = mol.add_atom(1, Vec3::new(0.96, 0.0, 0.0));
        let _ = mol.add_bond(o, h, BondOrder::Single).unwrap();
        mol
    }

    #[test]
    fn structs_have_no_implicit_padding() {
        assert_eq!(size_of::<PointVertex>(), 48);
        assert_eq!(size_of::<LineVertex>(), 48);
        assert_eq!(size_of::<SphereInstance>(), 48);
        assert_eq!(size_of::<CylinderInstance>(), 64);
        assert_eq!(point_vertex_layout().array_stride, 48);
        assert_eq!(
            cylinder_instance_layout().step_mode,
            wgpu::VertexStepMode::Instance
        );
    }

    #[test]
    fn wireframe_halves_resolve_to_their_atoms() {
        let mol = water_fragment();
        let engine = WireframeEngine::new();
        let mut frame = Frame::new();
        engine.render_bond(&mut frame, &mol, BondId(0)).unwrap();

        let geometry = FrameGeometry::from_frame(&frame);
        assert_eq!(geometry.lines.len(), 4);
        let first = geometry.resolve(geometry.lines[0].pick_id);
        let second = geometry.resolve(geometry.lines[2].pick_id);
        assert_eq!(first, PickTarget::Atom(AtomId(0)));
        assert_eq!(second, PickTarget::Atom(AtomId(1)));
        assert_eq!(geometry.lines[0].pick_id, geometry.lines[1].pick_id);
    }

    #[test]
    fn bond_cylinders_share_one_id() {
        let mol = water_fragment();
        let engine = BallAndStickEngine::new();
        let mut frame = Frame::new();
        for atom in mol.atoms() {
            engine.render_atom(&mut frame, &mol, atom.id()).unwrap();
        }
        engine.render_bond(&mut frame, &mol, BondId(0)).unwrap();

        let geometry = FrameGeometry::from_frame(&frame);
        assert_eq!(geometry.spheres.len(), 2);
        assert_eq!(geometry.cylinders.len(), 2);
        let ids: Vec<u32> =
            geometry.cylinders.iter().map(|c| c.pick_id).collect();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(geometry.resolve(ids[0]), PickTarget::Bond(BondId(0)));
        assert_eq!(geometry.pick_map().len(), 3);
        assert!(geometry.spheres[1].center[3] > 0.0);
        assert!(FrameGeometry::from_frame(&Frame::new()).is_empty());
    }
}
