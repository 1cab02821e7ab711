//! Conductor Sizes and Properties
//!
//! AWG and kcmil wire sizes, conductor material resistivity, and insulated
//! conductor cross sections for raceway fill.
//!
//! AWG areas are computed from the gauge formula rather than tabulated:
//! `d(in) = 0.005 * 92^((36 - g) / 39)`, with 1/0 through 4/0 mapping to
//! gauges 0 through -3. Insulated areas are starter values by insulation
//! family; verify against manufacturer data for critical fills.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Ohms, SqIn};

/// One circular mil in square meters: (π/4)·(0.001 in)² with 1 in = 0.0254 m
const CM_TO_M2: f64 = 5.067074790974977e-10;

/// Conductor material (copper or aluminum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// All conductor materials for UI selection
    pub const ALL: [ConductorMaterial; 2] = [ConductorMaterial::Copper, ConductorMaterial::Aluminum];

    /// DC resistivity at 20°C in ohm-meters
    pub fn resistivity_ohm_m(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 1.724e-8,
            ConductorMaterial::Aluminum => 2.826e-8,
        }
    }

    /// Temperature coefficient of resistance per °C (approximate)
    pub fn temp_coefficient_per_c(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 0.00393,
            ConductorMaterial::Aluminum => 0.00403,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "cu" | "copper" => Ok(ConductorMaterial::Copper),
            "al" | "aluminum" | "aluminium" => Ok(ConductorMaterial::Aluminum),
            _ => Err(CalcError::table_lookup("conductor material", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminum => "Aluminum",
        }
    }
}

impl std::fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Conductor sizes commonly pulled in branch circuits and feeders.
///
/// AWG sizes cover 14 through 4/0; kcmil sizes cover the common feeder
/// range 250-500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireSize {
    #[serde(rename = "14")]
    Awg14,
    #[serde(rename = "12")]
    Awg12,
    #[serde(rename = "10")]
    Awg10,
    #[serde(rename = "8")]
    Awg8,
    #[serde(rename = "6")]
    Awg6,
    #[serde(rename = "4")]
    Awg4,
    #[serde(rename = "3")]
    Awg3,
    #[serde(rename = "2")]
    Awg2,
    #[serde(rename = "1")]
    Awg1,
    #[serde(rename = "1/0")]
    Awg1_0,
    #[serde(rename = "2/0")]
    Awg2_0,
    #[serde(rename = "3/0")]
    Awg3_0,
    #[serde(rename = "4/0")]
    Awg4_0,
    #[serde(rename = "250")]
    Kcmil250,
    #[serde(rename = "300")]
    Kcmil300,
    #[serde(rename = "350")]
    Kcmil350,
    #[serde(rename = "400")]
    Kcmil400,
    #[serde(rename = "500")]
    Kcmil500,
}

impl WireSize {
    /// All wire sizes in conventional small-to-large order
    pub const ALL: [WireSize; 18] = [
        WireSize::Awg14,
        WireSize::Awg12,
        WireSize::Awg10,
        WireSize::Awg8,
        WireSize::Awg6,
        WireSize::Awg4,
        WireSize::Awg3,
        WireSize::Awg2,
        WireSize::Awg1,
        WireSize::Awg1_0,
        WireSize::Awg2_0,
        WireSize::Awg3_0,
        WireSize::Awg4_0,
        WireSize::Kcmil250,
        WireSize::Kcmil300,
        WireSize::Kcmil350,
        WireSize::Kcmil400,
        WireSize::Kcmil500,
    ];

    /// AWG gauge number, with the aught sizes continuing below zero
    /// (1/0 = 0, 2/0 = -1, 3/0 = -2, 4/0 = -3). `None` for kcmil sizes.
    fn gauge(&self) -> Option<i32> {
        match self {
            WireSize::Awg14 => Some(14),
            WireSize::Awg12 => Some(12),
            WireSize::Awg10 => Some(10),
            WireSize::Awg8 => Some(8),
            WireSize::Awg6 => Some(6),
            WireSize::Awg4 => Some(4),
            WireSize::Awg3 => Some(3),
            WireSize::Awg2 => Some(2),
            WireSize::Awg1 => Some(1),
            WireSize::Awg1_0 => Some(0),
            WireSize::Awg2_0 => Some(-1),
            WireSize::Awg3_0 => Some(-2),
            WireSize::Awg4_0 => Some(-3),
            _ => None,
        }
    }

    /// Nominal area in kcmil, for the kcmil sizes. `None` for AWG sizes.
    fn kcmil(&self) -> Option<f64> {
        match self {
            WireSize::Kcmil250 => Some(250.0),
            WireSize::Kcmil300 => Some(300.0),
            WireSize::Kcmil350 => Some(350.0),
            WireSize::Kcmil400 => Some(400.0),
            WireSize::Kcmil500 => Some(500.0),
            _ => None,
        }
    }

    /// Bare conductor area in circular mils.
    ///
    /// For AWG sizes: d(in) = 0.005 * 92^((36-g)/39), area = (1000·d)².
    /// For kcmil sizes: 1 kcmil = 1000 circular mils.
    pub fn circular_mils(&self) -> f64 {
        if let Some(g) = self.gauge() {
            let d_in = 0.005 * 92f64.powf((36.0 - g as f64) / 39.0);
            let d_mils = d_in * 1000.0;
            return d_mils * d_mils;
        }
        // kcmil sizes
        self.kcmil().unwrap_or(0.0) * 1000.0
    }

    /// Bare conductor cross section in square meters
    pub fn area_m2(&self) -> f64 {
        self.circular_mils() * CM_TO_M2
    }

    /// Get display label (e.g. "12 AWG", "1/0 AWG", "250 kcmil")
    pub fn label(&self) -> &'static str {
        match self {
            WireSize::Awg14 => "14 AWG",
            WireSize::Awg12 => "12 AWG",
            WireSize::Awg10 => "10 AWG",
            WireSize::Awg8 => "8 AWG",
            WireSize::Awg6 => "6 AWG",
            WireSize::Awg4 => "4 AWG",
            WireSize::Awg3 => "3 AWG",
            WireSize::Awg2 => "2 AWG",
            WireSize::Awg1 => "1 AWG",
            WireSize::Awg1_0 => "1/0 AWG",
            WireSize::Awg2_0 => "2/0 AWG",
            WireSize::Awg3_0 => "3/0 AWG",
            WireSize::Awg4_0 => "4/0 AWG",
            WireSize::Kcmil250 => "250 kcmil",
            WireSize::Kcmil300 => "300 kcmil",
            WireSize::Kcmil350 => "350 kcmil",
            WireSize::Kcmil400 => "400 kcmil",
            WireSize::Kcmil500 => "500 kcmil",
        }
    }

    /// Parse from common string representations ("12", "12 AWG", "1/0", "250 kcmil")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = s
            .to_uppercase()
            .replace("AWG", "")
            .replace("KCMIL", "")
            .trim()
            .to_string();
        for size in WireSize::ALL {
            let label = size.label().to_uppercase();
            if label.starts_with(&format!("{} ", key)) || label == key {
                return Ok(size);
            }
        }
        Err(CalcError::table_lookup("wire size", s))
    }
}

impl std::fmt::Display for WireSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Conductor resistance per foot at the given temperature.
///
/// R₂₀ per meter is ρ/A; adjusted to temperature T by (1 + α(T − 20)),
/// then scaled to feet.
pub fn resistance_per_foot(material: ConductorMaterial, size: WireSize, temp_c: f64) -> Ohms {
    let r20_per_m = material.resistivity_ohm_m() / size.area_m2();
    let rt_per_m = r20_per_m * (1.0 + material.temp_coefficient_per_c() * (temp_c - 20.0));
    Ohms(rt_per_m * 0.3048)
}

/// Insulation families for conductors installed in raceway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Insulation {
    /// THHN / THWN-2 (nylon jacket) - common building wire in conduit
    #[serde(rename = "THHN/THWN-2")]
    ThhnThwn2,
    /// XHHW-2 - thicker insulation, often used for feeders/services
    #[serde(rename = "XHHW-2")]
    Xhhw2,
    /// RHH / RHW / RHW-2 - service/feeder insulation family
    #[serde(rename = "RHH/RHW-2")]
    RhhRhw2,
}

impl Insulation {
    /// All insulation families for UI selection
    pub const ALL: [Insulation; 3] = [Insulation::ThhnThwn2, Insulation::Xhhw2, Insulation::RhhRhw2];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Insulation::ThhnThwn2 => "THHN / THWN-2",
            Insulation::Xhhw2 => "XHHW-2",
            Insulation::RhhRhw2 => "RHH / RHW / RHW-2",
        }
    }

    /// Insulated conductor cross section in square inches.
    ///
    /// Tabulated for AWG 14 through 4/0; kcmil sizes are not carried in the
    /// starter tables and return a `TableLookup` error.
    pub fn area_in2(&self, size: WireSize) -> CalcResult<SqIn> {
        let area = match self {
            Insulation::ThhnThwn2 => match size {
                WireSize::Awg14 => 0.0097,
                WireSize::Awg12 => 0.0133,
                WireSize::Awg10 => 0.0211,
                WireSize::Awg8 => 0.0366,
                WireSize::Awg6 => 0.0507,
                WireSize::Awg4 => 0.0824,
                WireSize::Awg3 => 0.0973,
                WireSize::Awg2 => 0.1158,
                WireSize::Awg1 => 0.1368,
                WireSize::Awg1_0 => 0.1620,
                WireSize::Awg2_0 => 0.1880,
                WireSize::Awg3_0 => 0.2170,
                WireSize::Awg4_0 => 0.2510,
                _ => return Err(CalcError::table_lookup(self.display_name(), size.label())),
            },
            Insulation::Xhhw2 => match size {
                WireSize::Awg14 => 0.0130,
                WireSize::Awg12 => 0.0170,
                WireSize::Awg10 => 0.0280,
                WireSize::Awg8 => 0.0460,
                WireSize::Awg6 => 0.0620,
                WireSize::Awg4 => 0.0960,
                WireSize::Awg3 => 0.1140,
                WireSize::Awg2 => 0.1350,
                WireSize::Awg1 => 0.1600,
                WireSize::Awg1_0 => 0.1900,
                WireSize::Awg2_0 => 0.2200,
                WireSize::Awg3_0 => 0.2540,
                WireSize::Awg4_0 => 0.2920,
                _ => return Err(CalcError::table_lookup(self.display_name(), size.label())),
            },
            Insulation::RhhRhw2 => match size {
                WireSize::Awg14 => 0.0135,
                WireSize::Awg12 => 0.0178,
                WireSize::Awg10 => 0.0290,
                WireSize::Awg8 => 0.0475,
                WireSize::Awg6 => 0.0640,
                WireSize::Awg4 => 0.0990,
                WireSize::Awg3 => 0.1170,
                WireSize::Awg2 => 0.1390,
                WireSize::Awg1 => 0.1650,
                WireSize::Awg1_0 => 0.1960,
                WireSize::Awg2_0 => 0.2280,
                WireSize::Awg3_0 => 0.2630,
                WireSize::Awg4_0 => 0.3030,
                _ => return Err(CalcError::table_lookup(self.display_name(), size.label())),
            },
        };
        Ok(SqIn(area))
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awg_circular_mils() {
        // Published values: 12 AWG = 6530 cmil, 10 AWG = 10380 cmil
        assert!((WireSize::Awg12.circular_mils() - 6530.0).abs() < 10.0);
        assert!((WireSize::Awg10.circular_mils() - 10380.0).abs() < 10.0);
        // 4/0 = 211600 cmil
        assert!((WireSize::Awg4_0.circular_mils() - 211_600.0).abs() < 500.0);
    }

    #[test]
    fn test_kcmil_circular_mils() {
        assert_eq!(WireSize::Kcmil250.circular_mils(), 250_000.0);
        assert_eq!(WireSize::Kcmil500.circular_mils(), 500_000.0);
    }

    #[test]
    fn test_resistance_per_foot_copper_12awg() {
        // 12 AWG copper at 20°C is about 1.588 Ω/1000 ft
        let r = resistance_per_foot(ConductorMaterial::Copper, WireSize::Awg12, 20.0);
        let per_1000ft = r.0 * 1000.0;
        assert!((per_1000ft - 1.588).abs() < 0.05, "got {per_1000ft}");
    }

    #[test]
    fn test_resistance_rises_with_temperature() {
        let cold = resistance_per_foot(ConductorMaterial::Copper, WireSize::Awg12, 20.0);
        let hot = resistance_per_foot(ConductorMaterial::Copper, WireSize::Awg12, 75.0);
        assert!(hot.0 > cold.0);
    }

    #[test]
    fn test_aluminum_more_resistive_than_copper() {
        let cu = resistance_per_foot(ConductorMaterial::Copper, WireSize::Awg6, 75.0);
        let al = resistance_per_foot(ConductorMaterial::Aluminum, WireSize::Awg6, 75.0);
        assert!(al.0 > cu.0);
    }

    #[test]
    fn test_insulation_area_lookup() {
        let a = Insulation::ThhnThwn2.area_in2(WireSize::Awg12).unwrap();
        assert_eq!(a.0, 0.0133);

        // kcmil not tabulated
        assert!(Insulation::ThhnThwn2.area_in2(WireSize::Kcmil250).is_err());
    }

    #[test]
    fn test_insulation_thickness_ordering() {
        // RHH/RHW family runs larger than THHN for the same size
        for size in [WireSize::Awg14, WireSize::Awg2, WireSize::Awg4_0] {
            let thhn = Insulation::ThhnThwn2.area_in2(size).unwrap();
            let rhh = Insulation::RhhRhw2.area_in2(size).unwrap();
            assert!(rhh.0 > thhn.0);
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(WireSize::from_str_flexible("12").unwrap(), WireSize::Awg12);
        assert_eq!(WireSize::from_str_flexible("12 AWG").unwrap(), WireSize::Awg12);
        assert_eq!(WireSize::from_str_flexible("1/0").unwrap(), WireSize::Awg1_0);
        assert_eq!(WireSize::from_str_flexible("250 kcmil").unwrap(), WireSize::Kcmil250);
        assert!(WireSize::from_str_flexible("750").is_err());

        assert_eq!(ConductorMaterial::from_str_flexible("cu").unwrap(), ConductorMaterial::Copper);
        assert!(ConductorMaterial::from_str_flexible("steel").is_err());
    }

    #[test]
    fn test_wire_size_serialization() {
        let json = serde_json::to_string(&WireSize::Awg1_0).unwrap();
        assert_eq!(json, "\"1/0\"");
        let roundtrip: WireSize = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, WireSize::Awg1_0);
    }
}
