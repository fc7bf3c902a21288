//! RGBA color resolution for atoms and literal overrides.
//!
//! Resolution is pure. The single side-effecting step is
//! [`Color::apply_as_material`], which writes the color into the current
//! material of a [`Frame`].

use crate::element;
use crate::molecule::Atom;
use crate::render::Frame;

/// An RGBA color with every component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha (1 = opaque).
    pub a: f32,
}

fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl Color {
    /// Translucent light blue used to highlight selected primitives.
    pub const SELECTION_HIGHLIGHT: Self = Self {
        r: 0.3,
        g: 0.6,
        b: 1.0,
        a: 0.7,
    };

    /// Opaque white, the material a fresh frame starts with.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Literal color; components are clamped to `[0, 1]` and NaN becomes 0.
    #[must_use]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Literal color from an `[r, g, b, a]` array, clamped like
    /// [`Color::rgba`].
    #[must_use]
    pub fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }

    /// Opaque CPK color for an atomic number. Unknown numbers get the
    /// element table's fallback color.
    #[must_use]
    pub fn from_atomic_number(atomic_number: u8) -> Self {
        let [r, g, b] = element::cpk_color(atomic_number);
        Self::rgba(r, g, b, 1.0)
    }

    /// Base color of an atom, ignoring its selection state.
    #[must_use]
    pub fn from_atom(atom: &Atom) -> Self {
        Self::from_atomic_number(atom.atomic_number())
    }

    /// Same color with a different (clamped) alpha.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: unit(a), ..self }
    }

    /// Components as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Make this color the current ambient and diffuse material of `frame`.
    pub fn apply_as_material(&self, frame: &mut Frame) {
        frame.set_material(*self);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::molecule::Molecule;

    #[test]
    fn literal_components_are_clamped() {
        let c = Color::rgba(-0.5, 0.25, 3.0, f32::NAN);
        assert_eq!(c.to_array(), [0.0, 0.25, 1.0, 0.0]);
        assert_eq!(Color::from_array([0.1, 0.2, 0.3, 0.4]).g, 0.2);
    }

    #[test]
    fn atom_color_follows_element() {
        let mut mol = Molecule::new();
        let o = mol.add_atom(8, Vec3::ZERO);
        let atom = mol.atom(o).unwrap();
        assert_eq!(Color::from_atom(atom), Color::rgba(1.0, 0.05, 0.05, 1.0));
    }

    #[test]
    fn unknown_element_uses_fallback() {
        let [r, g, b] = element::UNKNOWN.color;
        assert_eq!(Color::from_atomic_number(0), Color::rgba(r, g, b, 1.0));
        assert_eq!(Color::from_atomic_number(250), Color::rgba(r, g, b, 1.0));
    }

    #[test]
    fn apply_sets_frame_material() {
        let mut frame = Frame::new();
        Color::SELECTION_HIGHLIGHT.apply_as_material(&mut frame);
        assert_eq!(frame.state().material, Color::SELECTION_HIGHLIGHT);
    }
}
