//! Per-engine style constants and appearance resolution.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::element;
use crate::error::StyleError;
use crate::molecule::Atom;

/// Resolved color and size for one primitive (or one half of a bond).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Material color.
    pub color: Color,
    /// Point size, line width or radius, depending on the engine's glyph.
    pub size: f32,
}

/// Size multiples and highlight color an engine draws with.
///
/// Atom sizes are the element's van der Waals radius times
/// `unselected_scale` or `selected_scale`. Bond halves use the fixed
/// `bond_width` / `selected_bond_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveStyle {
    /// Radius multiple for unselected atoms.
    pub unselected_scale: f32,
    /// Radius multiple for selected atoms; strictly larger than
    /// `unselected_scale`.
    pub selected_scale: f32,
    /// Width (or radius) of a bond half whose atom is unselected.
    pub bond_width: f32,
    /// Width (or radius) of a bond half whose atom is selected.
    pub selected_bond_width: f32,
    /// Color of selected primitives, `[r, g, b, a]`.
    pub highlight: [f32; 4],
}

impl PrimitiveStyle {
    /// Points at 3x / 4x the vdW radius (in pixels), 1 px lines.
    #[must_use]
    pub const fn wireframe() -> Self {
        Self {
            unselected_scale: 3.0,
            selected_scale: 4.0,
            bond_width: 1.0,
            selected_bond_width: 2.0,
            highlight: Color::SELECTION_HIGHLIGHT.to_array(),
        }
    }

    /// Spheres at 0.3x / 0.4x the vdW radius, 0.15 Å bond capsules.
    #[must_use]
    pub const fn ball_and_stick() -> Self {
        Self {
            unselected_scale: 0.3,
            selected_scale: 0.4,
            bond_width: 0.15,
            selected_bond_width: 0.2,
            highlight: Color::SELECTION_HIGHLIGHT.to_array(),
        }
    }

    /// Full vdW spheres, no bonds.
    #[must_use]
    pub const fn space_fill() -> Self {
        Self {
            unselected_scale: 1.0,
            selected_scale: 1.1,
            bond_width: 0.0,
            selected_bond_width: 0.0,
            highlight: Color::SELECTION_HIGHLIGHT.to_array(),
        }
    }

    /// Default style of a built-in engine factory.
    #[must_use]
    pub fn builtin(factory: &str) -> Option<Self> {
        match factory {
            "wireframe" => Some(Self::wireframe()),
            "ball_and_stick" => Some(Self::ball_and_stick()),
            "space_fill" => Some(Self::space_fill()),
            _ => None,
        }
    }

    /// Check that every parameter is finite and that selection enlarges.
    pub fn validate(&self) -> Result<(), StyleError> {
        let finite = [
            self.unselected_scale,
            self.selected_scale,
            self.bond_width,
            self.selected_bond_width,
        ]
        .iter()
        .chain(&self.highlight)
        .all(|v| v.is_finite());
        if !finite {
            return Err(StyleError::InvalidStyle(
                "style parameters must be finite".to_owned(),
            ));
        }
        if self.unselected_scale <= 0.0 {
            return Err(StyleError::InvalidStyle(format!(
                "unselected_scale must be positive, got {}",
                self.unselected_scale
            )));
        }
        if self.selected_scale <= self.unselected_scale {
            return Err(StyleError::InvalidStyle(format!(
                "selected_scale {} must exceed unselected_scale {}",
                self.selected_scale, self.unselected_scale
            )));
        }
        let bonds_drawn = self.bond_width > 0.0;
        if self.bond_width < 0.0
            || self.selected_bond_width < self.bond_width
            || (bonds_drawn && self.selected_bond_width <= self.bond_width)
        {
            return Err(StyleError::InvalidStyle(format!(
                "bond widths must satisfy 0 <= {} < {} (or both 0)",
                self.bond_width, self.selected_bond_width
            )));
        }
        Ok(())
    }

    /// Color used for selected primitives.
    #[must_use]
    pub fn highlight_color(&self) -> Color {
        Color::from_array(self.highlight)
    }

    /// Color and size of an atom glyph. Selection always wins over the
    /// element color.
    #[must_use]
    pub fn atom_appearance(&self, atom: &Atom) -> Appearance {
        let radius = element::vdw_radius(atom.atomic_number());
        if atom.is_selected() {
            Appearance {
                color: self.highlight_color(),
                size: radius * self.selected_scale,
            }
        } else {
            Appearance {
                color: Color::from_atom(atom),
                size: radius * self.unselected_scale,
            }
        }
    }

    /// Color and width of the bond half attached to `atom`.
    #[must_use]
    pub fn bond_half_appearance(&self, atom: &Atom) -> Appearance {
        if atom.is_selected() {
            Appearance {
                color: self.highlight_color(),
                size: self.selected_bond_width,
            }
        } else {
            Appearance {
                color: Color::from_atom(atom),
                size: self.bond_width,
            }
        }
    }
}

impl Default for PrimitiveStyle {
    fn default() -> Self {
        Self::wireframe()
    }
}

/// Partial style read from options or a plugin manifest. Unset fields keep
/// the engine's own defaults.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// Radius multiple for unselected atoms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unselected_scale: Option<f32>,
    /// Radius multiple for selected atoms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_scale: Option<f32>,
    /// Unselected bond half width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond_width: Option<f32>,
    /// Selected bond half width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bond_width: Option<f32>,
    /// Selection highlight `[r, g, b, a]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<[f32; 4]>,
}

impl StyleOverrides {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// `base` with every set field replaced.
    #[must_use]
    pub fn apply(&self, base: PrimitiveStyle) -> PrimitiveStyle {
        PrimitiveStyle {
            unselected_scale: self
                .unselected_scale
                .unwrap_or(base.unselected_scale),
            selected_scale: self.selected_scale.unwrap_or(base.selected_scale),
            bond_width: self.bond_width.unwrap_or(base.bond_width),
            selected_bond_width: self
                .selected_bond_width
                .unwrap_or(base.selected_bond_width),
            highlight: self.highlight.unwrap_or(base.highlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::molecule::Molecule;

    #[test]
    fn builtin_styles_are_valid() {
        for style in [
            PrimitiveStyle::wireframe(),
            PrimitiveStyle::ball_and_stick(),
            PrimitiveStyle::space_fill(),
        ] {
            style.validate().unwrap();
        }
    }

    #[test]
    fn selection_must_enlarge() {
        let style = PrimitiveStyle {
            selected_scale: 3.0,
            ..PrimitiveStyle::wireframe()
        };
        assert!(matches!(style.validate(), Err(StyleError::InvalidStyle(_))));

        let style = PrimitiveStyle {
            bond_width: f32::NAN,
            ..PrimitiveStyle::wireframe()
        };
        assert!(style.validate().is_err());

        let style = PrimitiveStyle {
            selected_bond_width: 1.0,
            ..PrimitiveStyle::wireframe()
        };
        assert!(matches!(style.validate(), Err(StyleError::InvalidStyle(_))));
        assert!(PrimitiveStyle::space_fill().validate().is_ok());
    }

    #[test]
    fn selected_atoms_use_highlight() {
        let mut mol = Molecule::new();
        let c = mol.add_atom(6, Vec3::ZERO);
        let style = PrimitiveStyle::wireframe();

        let plain = style.atom_appearance(mol.atom(c).unwrap());
        assert_eq!(plain.color, Color::from_atomic_number(6));
        assert!((plain.size - 1.70 * 3.0).abs() < 1e-5);

        mol.set_selected(c, true).unwrap();
        let picked = style.atom_appearance(mol.atom(c).unwrap());
        assert_eq!(picked.color, Color::SELECTION_HIGHLIGHT);
        assert!((picked.size - 1.70 * 4.0).abs() < 1e-5);

        let half = style.bond_half_appearance(mol.atom(c).unwrap());
        assert_eq!(half.color, Color::SELECTION_HIGHLIGHT);
        assert_eq!(half.size, 2.0);
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let overrides: StyleOverrides =
            toml::from_str("selected_scale = 5.0\n").unwrap();
        assert!(!overrides.is_empty());
        let style = overrides.apply(PrimitiveStyle::wireframe());
        assert_eq!(style.selected_scale, 5.0);
        assert_eq!(style.unselected_scale, 3.0);
        assert!(StyleOverrides::default().is_empty());
        assert!(toml::from_str::<StyleOverrides>("colour = 1\n").is_err());
    }
}
