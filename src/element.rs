//! Per-element reference data: symbol, van der Waals radius and CPK color.
//!
//! Lookups are total: atomic numbers outside the table resolve to
//! [`UNKNOWN`] instead of failing.

/// Reference data for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    /// Chemical symbol.
    pub symbol: &'static str,
    /// Van der Waals radius in Ångström.
    pub vdw_radius: f32,
    /// CPK base color (RGB, 0..1).
    pub color: [f32; 3],
}

const fn el(
    symbol: &'static str,
    vdw_radius: f32,
    color: [f32; 3],
) -> ElementData {
    ElementData {
        symbol,
        vdw_radius,
        color,
    }
}

/// Fallback for atomic numbers the table does not cover (including 0).
pub const UNKNOWN: ElementData = el("Xx", 2.0, [0.07, 0.50, 0.70]);

/// Highest atomic number with tabulated data.
pub const MAX_ATOMIC_NUMBER: u8 = ELEMENTS.len() as u8;

// Indexed by atomic number - 1.
const ELEMENTS: [ElementData; 118] = [
    el("H", 1.10, [1.00, 1.00, 1.00]),
    el("He", 1.40, [0.85, 1.00, 1.00]),
    el("Li", 1.81, [0.80, 0.50, 1.00]),
    el("Be", 1.53, [0.76, 1.00, 0.00]),
    el("B", 1.92, [1.00, 0.71, 0.71]),
    el("C", 1.70, [0.40, 0.40, 0.40]),
    el("N", 1.55, [0.05, 0.05, 1.00]),
    el("O", 1.52, [1.00, 0.05, 0.05]),
    el("F", 1.47, [0.50, 0.70, 1.00]),
    el("Ne", 1.54, [0.70, 0.89, 0.96]),
    el("Na", 2.27, [0.67, 0.36, 0.95]),
    el("Mg", 1.73, [0.54, 1.00, 0.00]),
    el("Al", 1.84, [0.75, 0.65, 0.65]),
    el("Si", 2.10, [0.50, 0.60, 0.60]),
    el("P", 1.80, [1.00, 0.50, 0.00]),
    el("S", 1.80, [0.70, 0.70, 0.00]),
    el("Cl", 1.75, [0.12, 0.94, 0.12]),
    el("Ar", 1.88, [0.50, 0.82, 0.89]),
    el("K", 2.75, [0.56, 0.25, 0.83]),
    el("Ca", 2.31, [0.24, 1.00, 0.00]),
    el("Sc", 2.15, [0.90, 0.90, 0.90]),
    el("Ti", 2.11, [0.75, 0.76, 0.78]),
    el("V", 2.07, [0.65, 0.65, 0.67]),
    el("Cr", 2.06, [0.54, 0.60, 0.78]),
    el("Mn", 2.05, [0.61, 0.48, 0.78]),
    el("Fe", 2.04, [0.88, 0.40, 0.20]),
    el("Co", 2.00, [0.94, 0.56, 0.63]),
    el("Ni", 1.97, [0.31, 0.82, 0.31]),
    el("Cu", 1.96, [0.78, 0.50, 0.20]),
    el("Zn", 2.01, [0.49, 0.50, 0.69]),
    el("Ga", 1.87, [0.76, 0.56, 0.56]),
    el("Ge", 2.11, [0.40, 0.56, 0.56]),
    el("As", 1.85, [0.74, 0.50, 0.89]),
    el("Se", 1.90, [1.00, 0.63, 0.00]),
    el("Br", 1.83, [0.65, 0.16, 0.16]),
    el("Kr", 2.02, [0.36, 0.72, 0.82]),
    el("Rb", 3.03, [0.44, 0.18, 0.69]),
    el("Sr", 2.49, [0.00, 1.00, 0.00]),
    el("Y", 2.32, [0.58, 1.00, 1.00]),
    el("Zr", 2.23, [0.58, 0.88, 0.88]),
    el("Nb", 2.18, [0.45, 0.76, 0.79]),
    el("Mo", 2.17, [0.33, 0.71, 0.71]),
    el("Tc", 2.16, [0.23, 0.62, 0.62]),
    el("Ru", 2.13, [0.14, 0.56, 0.56]),
    el("Rh", 2.10, [0.04, 0.49, 0.55]),
    el("Pd", 2.10, [0.00, 0.41, 0.52]),
    el("Ag", 2.11, [0.75, 0.75, 0.75]),
    el("Cd", 2.18, [1.00, 0.85, 0.56]),
    el("In", 1.93, [0.65, 0.46, 0.45]),
    el("Sn", 2.17, [0.40, 0.50, 0.50]),
    el("Sb", 2.06, [0.62, 0.39, 0.71]),
    el("Te", 2.06, [0.83, 0.48, 0.00]),
    el("I", 1.98, [0.58, 0.00, 0.58]),
    el("Xe", 2.16, [0.26, 0.62, 0.69]),
    el("Cs", 3.43, [0.34, 0.09, 0.56]),
    el("Ba", 2.68, [0.00, 0.79, 0.00]),
    el("La", 2.43, [0.44, 0.83, 1.00]),
    el("Ce", 2.42, [1.00, 1.00, 0.78]),
    el("Pr", 2.40, [0.85, 1.00, 0.78]),
    el("Nd", 2.39, [0.78, 1.00, 0.78]),
    el("Pm", 2.38, [0.64, 1.00, 0.78]),
    el("Sm", 2.36, [0.56, 1.00, 0.78]),
    el("Eu", 2.35, [0.38, 1.00, 0.78]),
    el("Gd", 2.34, [0.27, 1.00, 0.78]),
    el("Tb", 2.33, [0.19, 1.00, 0.78]),
    el("Dy", 2.31, [0.12, 1.00, 0.78]),
    el("Ho", 2.30, [0.00, 1.00, 0.61]),
    el("Er", 2.29, [0.00, 0.90, 0.46]),
    el("Tm", 2.27, [0.00, 0.83, 0.32]),
    el("Yb", 2.26, [0.00, 0.75, 0.22]),
    el("Lu", 2.24, [0.00, 0.67, 0.14]),
    el("Hf", 2.23, [0.30, 0.76, 1.00]),
    el("Ta", 2.22, [0.30, 0.65, 1.00]),
    el("W", 2.18, [0.13, 0.58, 0.84]),
    el("Re", 2.16, [0.15, 0.49, 0.67]),
    el("Os", 2.16, [0.15, 0.40, 0.59]),
    el("Ir", 2.13, [0.09, 0.33, 0.53]),
    el("Pt", 2.13, [0.82, 0.82, 0.88]),
    el("Au", 2.14, [1.00, 0.82, 0.14]),
    el("Hg", 2.23, [0.72, 0.72, 0.82]),
    el("Tl", 1.96, [0.65, 0.33, 0.30]),
    el("Pb", 2.02, [0.34, 0.35, 0.38]),
    el("Bi", 2.07, [0.62, 0.31, 0.71]),
    el("Po", 1.97, [0.67, 0.36, 0.00]),
    el("At", 2.02, [0.46, 0.31, 0.27]),
    el("Rn", 2.20, [0.26, 0.51, 0.59]),
    el("Fr", 3.48, [0.26, 0.00, 0.40]),
    el("Ra", 2.83, [0.00, 0.49, 0.00]),
    el("Ac", 2.47, [0.44, 0.67, 0.98]),
    el("Th", 2.45, [0.00, 0.73, 1.00]),
    el("Pa", 2.43, [0.00, 0.63, 1.00]),
    el("U", 2.41, [0.00, 0.56, 1.00]),
    el("Np", 2.39, [0.00, 0.50, 1.00]),
    el("Pu", 2.43, [0.00, 0.42, 1.00]),
    el("Am", 2.44, [0.33, 0.36, 0.95]),
    el("Cm", 2.45, [0.47, 0.36, 0.89]),
    el("Bk", 2.44, [0.54, 0.31, 0.89]),
    el("Cf", 2.45, [0.63, 0.21, 0.83]),
    el("Es", 2.45, [0.70, 0.12, 0.83]),
    el("Fm", 2.45, [0.70, 0.12, 0.73]),
    el("Md", 2.46, [0.70, 0.05, 0.65]),
    el("No", 2.46, [0.74, 0.05, 0.53]),
    el("Lr", 2.46, [0.78, 0.00, 0.40]),
    el("Rf", 2.00, [0.80, 0.00, 0.35]),
    el("Db", 2.00, [0.82, 0.00, 0.31]),
    el("Sg", 2.00, [0.85, 0.00, 0.27]),
    el("Bh", 2.00, [0.88, 0.00, 0.22]),
    el("Hs", 2.00, [0.90, 0.00, 0.18]),
    el("Mt", 2.00, [0.92, 0.00, 0.15]),
    el("Ds", 2.00, [0.92, 0.00, 0.15]),
    el("Rg", 2.00, [0.92, 0.00, 0.15]),
    el("Cn", 2.00, [0.92, 0.00, 0.15]),
    el("Nh", 2.00, [0.92, 0.00, 0.15]),
    el("Fl", 2.00, [0.92, 0.00, 0.15]),
    el("Mc", 2.00, [0.92, 0.00, 0.15]),
    el("Lv", 2.00, [0.92, 0.00, 0.15]),
    el("Ts", 2.00, [0.92, 0.00, 0.15]),
    el("Og", 2.00, [0.92, 0.00, 0.15]),
];

/// Look up element data by atomic number, falling back to [`UNKNOWN`].
#[must_use]
pub fn lookup(atomic_number: u8) -> &'static ElementData {
    usize::from(atomic_number)
        .checked_sub(1)
        .and_then(|i| ELEMENTS.get(i))
        .unwrap_or(&UNKNOWN)
}

/// Whether the table has data for this atomic number.
#[must_use]
pub fn is_known(atomic_number: u8) -> bool {
    (1..=MAX_ATOMIC_NUMBER).contains(&atomic_number)
}

/// Van der Waals radius in Ångström.
#[must_use]
pub fn vdw_radius(atomic_number: u8) -> f32 {
    lookup(atomic_number).vdw_radius
}

/// CPK base color.
#[must_use]
pub fn cpk_color(atomic_number: u8) -> [f32; 3] {
    lookup(atomic_number).color
}

/// Chemical symbol, `"Xx"` when unknown.
#[must_use]
pub fn symbol(atomic_number: u8) -> &'static str {
    lookup(atomic_number).symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_elements() {
        assert_eq!(symbol(1), "H");
        assert_eq!(symbol(6), "C");
        assert_eq!(symbol(8), "O");
        assert_eq!(symbol(54), "Xe");
        assert_eq!(vdw_radius(6), 1.70);
        assert_eq!(cpk_color(8), [1.00, 0.05, 0.05]);
    }

    #[test]
    fn heavy_elements_are_tabulated() {
        assert_eq!(MAX_ATOMIC_NUMBER, 118);
        assert_eq!(symbol(79), "Au");
        assert_eq!(vdw_radius(79), 2.14);
        assert_eq!(cpk_color(79), [1.00, 0.82, 0.14]);
        assert_eq!(symbol(92), "U");
        assert_eq!(symbol(118), "Og");
        assert_ne!(lookup(78), &UNKNOWN);
        assert_eq!(lookup(119), &UNKNOWN);
    }

    #[test]
    fn unknown_numbers_fall_back() {
        assert!(!is_known(0));
        assert!(!is_known(MAX_ATOMIC_NUMBER + 1));
        assert_eq!(lookup(0), &UNKNOWN);
        assert_eq!(lookup(200), &UNKNOWN);
        assert_eq!(vdw_radius(255), UNKNOWN.vdw_radius);
    }

    #[test]
    fn every_radius_is_positive() {
        for z in 0..=u8::MAX {
            let r = vdw_radius(z);
            assert!(r.is_finite() && r > 0.0, "Z={z} radius {r}");
        }
    }
}
