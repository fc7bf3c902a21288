//! Perspective camera and world-to-window projection for picking.

use glam::{Mat4, Vec2, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Unit screen-right direction in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Update the aspect ratio from a window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Aim at the center of an axis-aligned box, backing off far enough
    /// for its bounding sphere to fit the vertical field of view.
    pub fn frame_bounds(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let radius = ((max - min).length() * 0.5).max(1.0);
        let half_fov = (self.fovy.to_radians() * 0.5).max(1e-3);
        let distance = radius / half_fov.sin();
        let back = -self.forward();
        let back = if back == Vec3::ZERO { Vec3::Z } else { back };
        self.target = center;
        self.eye = center + back * distance;
        self.zfar = self.zfar.max(distance + radius * 2.0);
    }

    /// Projector for a window of the given size.
    #[must_use]
    pub fn projector(&self, width: u32, height: u32) -> Projector {
        Projector {
            view_proj: self.build_matrix(),
            right: self.right(),
            size: Vec2::new(width as f32, height as f32),
        }
    }
}

/// A projected point in window coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixel position.
    pub pixel: Vec2,
    /// Normalized depth in `[0, 1]`.
    pub depth: f32,
}

/// Precomputed world-to-window transform for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    view_proj: Mat4,
    right: Vec3,
    size: Vec2,
}

impl Projector {
    /// Project a world-space point; `None` when it lies behind the eye.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<ScreenPoint> {
        let clip = self.view_proj * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(ScreenPoint {
            pixel: Vec2::new(
                (ndc.x * 0.5 + 0.5) * self.size.x,
                (0.5 - ndc.y * 0.5) * self.size.y,
            ),
            depth: ndc.z,
        })
    }

    /// Pixel radius of a world-space sphere at `center`.
    #[must_use]
    pub fn pixel_radius(&self, center: Vec3, radius: f32) -> Option<f32> {
        let c = self.project(center)?;
        let edge = self.project(center + self.right * radius)?;
        Some(c.pixel.distance(edge.pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_window_center() {
        let camera = Camera::default();
        let p = camera.projector(800, 600).project(Vec3::ZERO).unwrap();
        assert!((p.pixel - Vec2::new(400.0, 300.0)).length() < 1e-3);
        assert!(p.depth > 0.0 && p.depth < 1.0);
    }

    #[test]
    fn points_behind_the_eye_are_rejected() {
        let camera = Camera::default();
        let projector = camera.projector(100, 100);
        assert!(projector.project(Vec3::new(0.0, 0.0, 20.0)).is_none());
    }

    #[test]
    fn up_is_up_on_screen() {
        let camera = Camera::default();
        let projector = camera.projector(100, 100);
        let above = projector.project(Vec3::Y).unwrap();
        assert!(above.pixel.y < 50.0);
        let right = projector.project(Vec3::X).unwrap();
        assert!(right.pixel.x > 50.0);
    }

    #[test]
    fn frame_bounds_keeps_box_in_view() {
        let mut camera = Camera::default();
        let min = Vec3::new(-20.0, -5.0, -5.0);
        let max = Vec3::new(20.0, 5.0, 5.0);
        camera.frame_bounds(min, max);
        let projector = camera.projector(100, 100);
        for corner in [min, max] {
            let p = projector.project(corner).unwrap();
            assert!((0.0..=100.0).contains(&p.pixel.x), "{p:?}");
            assert!((0.0..=100.0).contains(&p.pixel.y), "{p:?}");
        }
    }

    #[test]
    fn sphere_pixel_radius_shrinks_with_distance() {
        let camera = Camera::default();
        let projector = camera.projector(500, 500);
        let near = projector.pixel_radius(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let far = projector.pixel_radius(Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!(near.unwrap() > far.unwrap());
    }
}
