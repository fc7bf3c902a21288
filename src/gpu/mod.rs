//! GPU upload of recorded frames.
//!
//! [`FrameGeometry`] flattens a [`Frame`](crate::render::Frame) into
//! `bytemuck` vertex and instance arrays, each carrying the pick ID of its
//! name path. [`GeometryBuffers`] keeps one growable wgpu buffer per
//! primitive type and re-uploads them each frame. Pipelines and shaders are
//! left to the host application.

mod buffer;
mod geometry;

pub use buffer::GrowableBuffer;
pub use geometry::{
    cylinder_instance_layout, line_vertex_layout, point_vertex_layout,
    sphere_instance_layout, CylinderInstance, FrameGeometry, LineVertex,
    PointVertex, SphereInstance,
};

/// Vertex and instance buffers for every primitive type.
#[derive(Debug)]
pub struct GeometryBuffers {
    /// Point sprite vertices.
    pub points: GrowableBuffer<PointVertex>,
    /// Line-list vertices.
    pub lines: GrowableBuffer<LineVertex>,
    /// Sphere instances.
    pub spheres: GrowableBuffer<SphereInstance>,
    /// Cylinder instances.
    pub cylinders: GrowableBuffer<CylinderInstance>,
}

impl GeometryBuffers {
    /// Empty buffers.
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let usage = wgpu::BufferUsages::VERTEX;
        Self {
            points: GrowableBuffer::with_capacity(
                device,
                "molstyle points",
                256,
                usage,
            ),
            lines: GrowableBuffer::with_capacity(
                device,
                "molstyle lines",
                512,
                usage,
            ),
            spheres: GrowableBuffer::with_capacity(
                device,
                "molstyle spheres",
                256,
                usage,
            ),
            cylinders: GrowableBuffer::with_capacity(
                device,
                "molstyle cylinders",
                256,
                usage,
            ),
        }
    }

    /// Upload `geometry`, replacing the previous frame.
    ///
    /// Returns `true` if any buffer was reallocated.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &FrameGeometry,
    ) -> bool {
        let grew = [
            self.points.write(device, queue, &geometry.points),
            self.lines.write(device, queue, &geometry.lines),
            self.spheres.write(device, queue, &geometry.spheres),
            self.cylinders.write(device, queue, &geometry.cylinders),
        ];
        grew.contains(&true)
    }
}
