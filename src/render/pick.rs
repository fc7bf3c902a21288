//! Screen-space picking over recorded draw commands, and decoding of
//! GL-style selection buffers.
//!
//! A hit record carries the name path that was active when the struck
//! geometry was emitted. [`PickTarget::from_names`] reads the innermost
//! `(kind, index)` pair of that path.

use glam::{Vec2, Vec3};

use super::command::{DrawCommand, Geometry};
use super::names::PrimitiveKind;
use crate::camera::Projector;
use crate::error::PickError;
use crate::molecule::{AtomId, BondId, ResidueId};

/// What a pick resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Nothing (background, or an unrecognized name path).
    None,
    /// The molecule as a whole.
    Molecule,
    /// A single atom.
    Atom(AtomId),
    /// A bond.
    Bond(BondId),
    /// A residue.
    Residue(ResidueId),
}

impl PickTarget {
    /// Decode the innermost `(kind, index)` pair of a name path.
    #[must_use]
    pub fn from_names(names: &[u32]) -> Self {
        let [.., kind, index] = names else {
            return Self::None;
        };
        match PrimitiveKind::from_tag(*kind) {
            Some(PrimitiveKind::Molecule) => Self::Molecule,
            Some(PrimitiveKind::Atom) => Self::Atom(AtomId(*index)),
            Some(PrimitiveKind::Bond) => Self::Bond(BondId(*index)),
            Some(PrimitiveKind::Residue) => {
                Self::Residue(ResidueId(*index))
            }
            None => Self::None,
        }
    }

    /// Returns `true` if this target is `None`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// One hit: the name path of the struck geometry and its depth range.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// Name stack (bottom to top) at emission time.
    pub names: Vec<u32>,
    /// Nearest normalized depth of the hit geometry.
    pub z_min: f32,
    /// Farthest normalized depth of the hit geometry.
    pub z_max: f32,
}

impl HitRecord {
    /// Decoded target of this hit.
    #[must_use]
    pub fn target(&self) -> PickTarget {
        PickTarget::from_names(&self.names)
    }
}

/// Axis-aligned pick rectangle in window pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRegion {
    /// Center.
    pub center: Vec2,
    /// Half extent along x and y.
    pub half_extent: Vec2,
}

impl PickRegion {
    /// Square region of half size `half` centered on `(x, y)`.
    #[must_use]
    pub fn around(x: f32, y: f32, half: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            half_extent: Vec2::splat(half.max(0.0)),
        }
    }

    /// Region spanning two corners.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            center: (a + b) * 0.5,
            half_extent: (b - a).abs() * 0.5,
        }
    }

    fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Distance from `p` to the rectangle (0 inside).
    fn distance_to(&self, p: Vec2) -> f32 {
        ((p - self.center).abs() - self.half_extent)
            .max(Vec2::ZERO)
            .length()
    }

    fn overlaps_square(&self, center: Vec2, half: f32) -> bool {
        let gap = (center - self.center).abs() - self.half_extent;
        gap.x <= half && gap.y <= half
    }

    /// Liang-Barsky clip of segment `a`-`b` against the region grown by
    /// `pad` pixels.
    fn crosses_segment(&self, a: Vec2, b: Vec2, pad: f32) -> bool {
        let min = self.min() - Vec2::splat(pad);
        let max = self.max() + Vec2::splat(pad);
        let d = b - a;
        let mut t0 = 0.0_f32;
        let mut t1 = 1.0_f32;
        for (p, q) in [
            (-d.x, a.x - min.x),
            (d.x, max.x - a.x),
            (-d.y, a.y - min.y),
            (d.y, max.y - a.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return false;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return false;
                }
                t1 = t1.min(r);
            }
        }
        t0 <= t1
    }
}

/// Depth range covered by `geometry` if it intersects `region`.
fn hit_depth(
    geometry: &Geometry,
    projector: &Projector,
    region: &PickRegion,
) -> Option<(f32, f32)> {
    match *geometry {
        Geometry::Point { position, size } => {
            let p = projector.project(position)?;
            region
                .overlaps_square(p.pixel, size * 0.5)
                .then_some((p.depth, p.depth))
        }
        Geometry::Sphere { center, radius } => {
            let p = projector.project(center)?;
            let r = projector.pixel_radius(center, radius)?;
            (region.distance_to(p.pixel) <= r).then_some((p.depth, p.depth))
        }
        Geometry::Segment { from, to, width } => {
            segment_hit(projector, region, from, to, |_| Some(width * 0.5))
        }
        Geometry::Cylinder { from, to, radius } => {
            segment_hit(projector, region, from, to, |mid| {
                projector.pixel_radius(mid, radius)
            })
        }
    }
}

fn segment_hit(
    projector: &Projector,
    region: &PickRegion,
    from: Vec3,
    to: Vec3,
    pad: impl FnOnce(Vec3) -> Option<f32>,
) -> Option<(f32, f32)> {
    let a = projector.project(from)?;
    let b = projector.project(to)?;
    let pad = pad((from + to) * 0.5)?;
    region
        .crosses_segment(a.pixel, b.pixel, pad)
        .then(|| (a.depth.min(b.depth), a.depth.max(b.depth)))
}

/// Hit-test every command against `region`.
///
/// Consecutive hits under an identical name path merge into one record, as
/// a GL selection buffer would report them.
#[must_use]
pub fn pick_commands(
    commands: &[DrawCommand],
    projector: &Projector,
    region: &PickRegion,
) -> Vec<HitRecord> {
    let mut records: Vec<HitRecord> = Vec::new();
    let mut previous_hit = false;
    for cmd in commands {
        let Some((z_min, z_max)) = hit_depth(&cmd.geometry, projector, region)
        else {
            previous_hit = false;
            continue;
        };
        match records.last_mut() {
            Some(last) if previous_hit && last.names == cmd.names => {
                last.z_min = last.z_min.min(z_min);
                last.z_max = last.z_max.max(z_max);
            }
            _ => records.push(HitRecord {
                names: cmd.names.clone(),
                z_min,
                z_max,
            }),
        }
        previous_hit = true;
    }
    records
}

/// Target of the nearest hit, or [`PickTarget::None`].
#[must_use]
pub fn nearest(hits: &[HitRecord]) -> PickTarget {
    hits.iter()
        .min_by(|a, b| a.z_min.total_cmp(&b.z_min))
        .map_or(PickTarget::None, HitRecord::target)
}

fn unit_depth(raw: u32) -> f32 {
    raw as f32 / u32::MAX as f32
}

/// Decode `hits` records from a GL-format selection buffer.
///
/// Each record is `name_count, z_min, z_max, names...`, depths scaled to the
/// full `u32` range.
pub fn decode_selection_buffer(
    buffer: &[u32],
    hits: usize,
) -> Result<Vec<HitRecord>, PickError> {
    // every record takes at least three words
    let mut records = Vec::with_capacity(hits.min(buffer.len() / 3));
    let mut offset = 0;
    for _ in 0..hits {
        let truncated = PickError::Truncated { offset };
        let names_start = offset.checked_add(3).ok_or(truncated)?;
        let header = buffer.get(offset..names_start).ok_or(truncated)?;
        let count = header[0] as usize;
        let names_end = names_start.checked_add(count).ok_or(truncated)?;
        let names =
            buffer.get(names_start..names_end).ok_or(truncated)?;
        records.push(HitRecord {
            names: names.to_vec(),
            z_min: unit_depth(header[1]),
            z_max: unit_depth(header[2]),
        });
        offset = names_end;
    }
    Ok(records)
}
