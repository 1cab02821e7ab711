//! Metal Properties Reference
//!
//! Specific gravity, melting point, electrical conductivity, and density for
//! the metals and alloys an electrician runs into. Conductivity is relative
//! to annealed copper (% IACS).
//!
//! Melting points and IACS values are kept as printed strings because the
//! source tables carry ranges ("1330-1380") and scientific notation
//! ("10^-17") that have no single numeric form.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Properties for one metal or alloy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metal {
    /// Common name (e.g. "Copper", "Brass (70-30)")
    pub name: &'static str,
    /// Element symbol, or "--" for alloys
    pub symbol: &'static str,
    /// Specific gravity (relative to water)
    pub specific_gravity: f64,
    /// Melting point in °C (may be a range)
    pub melting_point_c: &'static str,
    /// Melting point in °F (may be a range)
    pub melting_point_f: &'static str,
    /// Electrical conductivity as % IACS (copper = 100)
    pub conductivity_iacs: &'static str,
    /// Density in pounds per cubic inch
    pub density_lb_in3: f64,
}

impl Metal {
    /// Density in pounds per cubic foot
    pub fn density_lb_ft3(&self) -> f64 {
        self.density_lb_in3 * 1728.0
    }
}

/// The full reference table, alphabetized by name.
pub const METALS: &[Metal] = &[
    Metal { name: "Aluminum", symbol: "Al", specific_gravity: 2.71, melting_point_c: "660", melting_point_f: "1220", conductivity_iacs: "64.90", density_lb_in3: 0.0978 },
    Metal { name: "Antimony", symbol: "Sb", specific_gravity: 6.62, melting_point_c: "630", melting_point_f: "1167", conductivity_iacs: "4.42", density_lb_in3: 0.2390 },
    Metal { name: "Arsenic", symbol: "As", specific_gravity: 5.73, melting_point_c: "817", melting_point_f: "1502", conductivity_iacs: "4.90", density_lb_in3: 0.2070 },
    Metal { name: "Beryllium", symbol: "Be", specific_gravity: 1.83, melting_point_c: "1280", melting_point_f: "2336", conductivity_iacs: "9.32", density_lb_in3: 0.0660 },
    Metal { name: "Bismuth", symbol: "Bi", specific_gravity: 9.80, melting_point_c: "271", melting_point_f: "520", conductivity_iacs: "1.50", density_lb_in3: 0.3540 },
    Metal { name: "Brass (70-30)", symbol: "--", specific_gravity: 8.51, melting_point_c: "900", melting_point_f: "1652", conductivity_iacs: "28", density_lb_in3: 0.3070 },
    Metal { name: "Bronze (5% Sn)", symbol: "--", specific_gravity: 8.87, melting_point_c: "1000", melting_point_f: "1382", conductivity_iacs: "18", density_lb_in3: 0.3200 },
    Metal { name: "Cadmium", symbol: "Cd", specific_gravity: 8.65, melting_point_c: "321", melting_point_f: "610", conductivity_iacs: "22.70", density_lb_in3: 0.3120 },
    Metal { name: "Calcium", symbol: "Ca", specific_gravity: 1.55, melting_point_c: "850", melting_point_f: "1562", conductivity_iacs: "50.10", density_lb_in3: 0.0560 },
    Metal { name: "Cobalt", symbol: "Co", specific_gravity: 8.90, melting_point_c: "1495", melting_point_f: "2723", conductivity_iacs: "17.80", density_lb_in3: 0.3210 },
    Metal { name: "Copper", symbol: "Cu", specific_gravity: 8.95, melting_point_c: "1085", melting_point_f: "1984", conductivity_iacs: "100", density_lb_in3: 0.3240 },
    Metal { name: "Copper-Rolled", symbol: "--", specific_gravity: 8.89, melting_point_c: "1083", melting_point_f: "1981", conductivity_iacs: "100", density_lb_in3: 0.3210 },
    Metal { name: "Copper-Tubing", symbol: "--", specific_gravity: 8.89, melting_point_c: "1083", melting_point_f: "1981", conductivity_iacs: "100", density_lb_in3: 0.3210 },
    Metal { name: "Gold", symbol: "Au", specific_gravity: 19.30, melting_point_c: "1063", melting_point_f: "1945", conductivity_iacs: "71.20", density_lb_in3: 0.6970 },
    Metal { name: "Graphite", symbol: "--", specific_gravity: 2.25, melting_point_c: "3500", melting_point_f: "6332", conductivity_iacs: "0.22", density_lb_in3: 0.0812 },
    Metal { name: "Indium", symbol: "In", specific_gravity: 7.30, melting_point_c: "156", melting_point_f: "311", conductivity_iacs: "20.60", density_lb_in3: 0.2640 },
    Metal { name: "Iridium", symbol: "Ir", specific_gravity: 22.40, melting_point_c: "2450", melting_point_f: "4442", conductivity_iacs: "32.50", density_lb_in3: 0.8090 },
    Metal { name: "Iron", symbol: "Fe", specific_gravity: 7.20, melting_point_c: "1200-1400", melting_point_f: "2192-2552", conductivity_iacs: "17.60", density_lb_in3: 0.2600 },
    Metal { name: "Iron-Malleable", symbol: "--", specific_gravity: 7.20, melting_point_c: "1500-1600", melting_point_f: "2732-2912", conductivity_iacs: "10", density_lb_in3: 0.2600 },
    Metal { name: "Iron-Wrought", symbol: "--", specific_gravity: 7.70, melting_point_c: "1500-1600", melting_point_f: "2732-2912", conductivity_iacs: "10", density_lb_in3: 0.2780 },
    Metal { name: "Lead", symbol: "Pb", specific_gravity: 11.40, melting_point_c: "327", melting_point_f: "621", conductivity_iacs: "8.35", density_lb_in3: 0.4120 },
    Metal { name: "Magnesium", symbol: "Mg", specific_gravity: 1.74, melting_point_c: "651", melting_point_f: "1204", conductivity_iacs: "38.70", density_lb_in3: 0.0628 },
    Metal { name: "Manganese", symbol: "Mn", specific_gravity: 7.20, melting_point_c: "1245", melting_point_f: "2273", conductivity_iacs: "0.90", density_lb_in3: 0.2600 },
    Metal { name: "Mercury", symbol: "Hg", specific_gravity: 13.65, melting_point_c: "-38.90", melting_point_f: "-37.70", conductivity_iacs: "1.80", density_lb_in3: 0.4930 },
    Metal { name: "Molybdenum", symbol: "Mo", specific_gravity: 10.20, melting_point_c: "2620", melting_point_f: "4748", conductivity_iacs: "36.10", density_lb_in3: 0.3680 },
    Metal { name: "Monel (63-37)", symbol: "--", specific_gravity: 8.87, melting_point_c: "1300", melting_point_f: "2372", conductivity_iacs: "3", density_lb_in3: 0.3200 },
    Metal { name: "Nickel", symbol: "Ni", specific_gravity: 8.90, melting_point_c: "1452", melting_point_f: "2646", conductivity_iacs: "25", density_lb_in3: 0.3210 },
    Metal { name: "Phosphorus", symbol: "P", specific_gravity: 1.82, melting_point_c: "44.10", melting_point_f: "111.40", conductivity_iacs: "10^-17", density_lb_in3: 0.0657 },
    Metal { name: "Platinum", symbol: "Pt", specific_gravity: 21.46, melting_point_c: "1773", melting_point_f: "3221", conductivity_iacs: "17.50", density_lb_in3: 0.7750 },
    Metal { name: "Potassium", symbol: "K", specific_gravity: 0.86, melting_point_c: "62.30", melting_point_f: "144.10", conductivity_iacs: "28", density_lb_in3: 0.0310 },
    Metal { name: "Selenium", symbol: "Se", specific_gravity: 4.81, melting_point_c: "220", melting_point_f: "428", conductivity_iacs: "14.40", density_lb_in3: 0.1740 },
    Metal { name: "Silicon", symbol: "Si", specific_gravity: 2.40, melting_point_c: "1420", melting_point_f: "2588", conductivity_iacs: "10^-5", density_lb_in3: 0.0866 },
    Metal { name: "Silver", symbol: "Ag", specific_gravity: 10.50, melting_point_c: "960", melting_point_f: "1760", conductivity_iacs: "106", density_lb_in3: 0.3790 },
    Metal { name: "Steel (Carbon)", symbol: "--", specific_gravity: 7.84, melting_point_c: "1330-1380", melting_point_f: "2436-2516", conductivity_iacs: "10", density_lb_in3: 0.2830 },
    Metal { name: "Stainless (18-8)", symbol: "--", specific_gravity: 7.92, melting_point_c: "1500", melting_point_f: "2732", conductivity_iacs: "2.50", density_lb_in3: 0.2860 },
    Metal { name: "Stainless (13-Cr)", symbol: "--", specific_gravity: 7.78, melting_point_c: "1520", melting_point_f: "2768", conductivity_iacs: "3.50", density_lb_in3: 0.2810 },
    Metal { name: "Stainless (18-Cr)", symbol: "--", specific_gravity: 7.73, melting_point_c: "1500", melting_point_f: "2732", conductivity_iacs: "3", density_lb_in3: 0.2790 },
    Metal { name: "Tantalum", symbol: "Ta", specific_gravity: 16.60, melting_point_c: "2900", melting_point_f: "5414", conductivity_iacs: "13.90", density_lb_in3: 0.5990 },
    Metal { name: "Tellurium", symbol: "Te", specific_gravity: 6.20, melting_point_c: "450", melting_point_f: "846", conductivity_iacs: "10^-5", density_lb_in3: 0.2240 },
    Metal { name: "Thorium", symbol: "Th", specific_gravity: 11.70, melting_point_c: "1845", melting_point_f: "3353", conductivity_iacs: "9.10", density_lb_in3: 0.4420 },
    Metal { name: "Tin", symbol: "Sn", specific_gravity: 7.30, melting_point_c: "232", melting_point_f: "449", conductivity_iacs: "15", density_lb_in3: 0.2640 },
    Metal { name: "Titanium", symbol: "Ti", specific_gravity: 4.50, melting_point_c: "1800", melting_point_f: "3272", conductivity_iacs: "2.10", density_lb_in3: 0.1620 },
    Metal { name: "Tungsten", symbol: "W", specific_gravity: 19.30, melting_point_c: "3422", melting_point_f: "6192", conductivity_iacs: "31.50", density_lb_in3: 0.6970 },
    Metal { name: "Uranium", symbol: "U", specific_gravity: 18.70, melting_point_c: "1130", melting_point_f: "2066", conductivity_iacs: "2.80", density_lb_in3: 0.6750 },
    Metal { name: "Vanadium", symbol: "V", specific_gravity: 5.96, melting_point_c: "1710", melting_point_f: "3110", conductivity_iacs: "6.63", density_lb_in3: 0.2150 },
    Metal { name: "Zinc", symbol: "Zn", specific_gravity: 7.14, melting_point_c: "419", melting_point_f: "786", conductivity_iacs: "29.10", density_lb_in3: 0.2580 },
    Metal { name: "Zirconium", symbol: "Zr", specific_gravity: 6.40, melting_point_c: "1700", melting_point_f: "3092", conductivity_iacs: "4.20", density_lb_in3: 0.2310 },
];

/// Case-insensitive index by name, built on first use.
static BY_NAME: Lazy<HashMap<String, &'static Metal>> = Lazy::new(|| {
    METALS
        .iter()
        .map(|m| (m.name.to_lowercase(), m))
        .collect()
});

/// Look up a metal by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use volt_core::materials::find_metal;
///
/// let copper = find_metal("copper").unwrap();
/// assert_eq!(copper.symbol, "Cu");
/// ```
pub fn find_metal(name: &str) -> CalcResult<&'static Metal> {
    BY_NAME
        .get(&name.to_lowercase())
        .copied()
        .ok_or_else(|| CalcError::table_lookup("metal properties", name))
}
