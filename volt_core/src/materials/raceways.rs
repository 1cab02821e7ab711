//! Raceway and Box Data
//!
//! Internal cross-sectional areas for common conduit types and the box-fill
//! volume allowances used by the quick box-fill calculation.
//!
//! Conduit areas are starter values; RMC and IMC actually differ slightly
//! and should be verified against the manufacturer's internal-diameter
//! tables for tight fills.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::WireSize;
use crate::units::{CuIn, SqIn};

/// Conduit/raceway families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConduitType {
    /// Electrical Metallic Tubing
    #[serde(rename = "EMT")]
    Emt,
    /// Rigid Metal / Intermediate Metal Conduit
    #[serde(rename = "RMC/IMC")]
    RmcImc,
    /// Rigid Nonmetallic Conduit (PVC) Schedule 40
    #[serde(rename = "PVC40")]
    Pvc40,
}

impl ConduitType {
    /// All conduit types for UI selection
    pub const ALL: [ConduitType; 3] = [ConduitType::Emt, ConduitType::RmcImc, ConduitType::Pvc40];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConduitType::Emt => "EMT",
            ConduitType::RmcImc => "RMC / IMC",
            ConduitType::Pvc40 => "PVC Sch 40",
        }
    }
}

impl std::fmt::Display for ConduitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Conduit trade sizes from 1/2" through 4"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSize {
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    ThreeQuarter,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "1-1/4")]
    OneAndQuarter,
    #[serde(rename = "1-1/2")]
    OneAndHalf,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "2-1/2")]
    TwoAndHalf,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "3-1/2")]
    ThreeAndHalf,
    #[serde(rename = "4")]
    Four,
}

impl TradeSize {
    /// All trade sizes small to large
    pub const ALL: [TradeSize; 10] = [
        TradeSize::Half,
        TradeSize::ThreeQuarter,
        TradeSize::One,
        TradeSize::OneAndQuarter,
        TradeSize::OneAndHalf,
        TradeSize::Two,
        TradeSize::TwoAndHalf,
        TradeSize::Three,
        TradeSize::ThreeAndHalf,
        TradeSize::Four,
    ];

    /// Get display label (e.g. "3/4\"")
    pub fn label(&self) -> &'static str {
        match self {
            TradeSize::Half => "1/2\"",
            TradeSize::ThreeQuarter => "3/4\"",
            TradeSize::One => "1\"",
            TradeSize::OneAndQuarter => "1-1/4\"",
            TradeSize::OneAndHalf => "1-1/2\"",
            TradeSize::Two => "2\"",
            TradeSize::TwoAndHalf => "2-1/2\"",
            TradeSize::Three => "3\"",
            TradeSize::ThreeAndHalf => "3-1/2\"",
            TradeSize::Four => "4\"",
        }
    }
}

impl std::fmt::Display for TradeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ConduitType {
    /// Internal cross-sectional area in square inches for a trade size.
    pub fn internal_area_in2(&self, size: TradeSize) -> SqIn {
        let area = match self {
            ConduitType::Emt => match size {
                TradeSize::Half => 0.304,
                TradeSize::ThreeQuarter => 0.533,
                TradeSize::One => 0.864,
                TradeSize::OneAndQuarter => 1.496,
                TradeSize::OneAndHalf => 2.036,
                TradeSize::Two => 3.356,
                TradeSize::TwoAndHalf => 5.858,
                TradeSize::Three => 8.846,
                TradeSize::ThreeAndHalf => 11.545,
                TradeSize::Four => 14.753,
            },
            // Conservative-ish starter areas; verify for RMC vs IMC
            ConduitType::RmcImc => match size {
                TradeSize::Half => 0.285,
                TradeSize::ThreeQuarter => 0.506,
                TradeSize::One => 0.832,
                TradeSize::OneAndQuarter => 1.453,
                TradeSize::OneAndHalf => 1.986,
                TradeSize::Two => 3.291,
                TradeSize::TwoAndHalf => 5.760,
                TradeSize::Three => 8.637,
                TradeSize::ThreeAndHalf => 11.290,
                TradeSize::Four => 14.268,
            },
            // Starter areas; verify per Sch 40 internal diameter tables
            ConduitType::Pvc40 => match size {
                TradeSize::Half => 0.285,
                TradeSize::ThreeQuarter => 0.508,
                TradeSize::One => 0.832,
                TradeSize::OneAndQuarter => 1.453,
                TradeSize::OneAndHalf => 1.986,
                TradeSize::Two => 3.291,
                TradeSize::TwoAndHalf => 5.760,
                TradeSize::Three => 8.637,
                TradeSize::ThreeAndHalf => 11.290,
                TradeSize::Four => 14.268,
            },
        };
        SqIn(area)
    }
}

/// Box-fill volume allowance per conductor in cubic inches.
///
/// Covered for the sizes that actually land in device boxes (14 through
/// 6 AWG); anything larger is a junction-box problem, not a quick-calc one.
pub fn box_volume_allowance(size: WireSize) -> CalcResult<CuIn> {
    let in3 = match size {
        WireSize::Awg14 => 2.0,
        WireSize::Awg12 => 2.25,
        WireSize::Awg10 => 2.5,
        WireSize::Awg8 => 3.0,
        WireSize::Awg6 => 5.0,
        _ => return Err(CalcError::table_lookup("box volume allowance", size.label())),
    };
    Ok(CuIn(in3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emt_areas() {
        assert_eq!(ConduitType::Emt.internal_area_in2(TradeSize::Half).0, 0.304);
        assert_eq!(ConduitType::Emt.internal_area_in2(TradeSize::Four).0, 14.753);
    }

    #[test]
    fn test_areas_increase_with_size() {
        for conduit in ConduitType::ALL {
            let mut prev = 0.0;
            for size in TradeSize::ALL {
                let a = conduit.internal_area_in2(size).0;
                assert!(a > prev, "{conduit} {size} not increasing");
                prev = a;
            }
        }
    }

    #[test]
    fn test_box_volume_allowances() {
        assert_eq!(box_volume_allowance(WireSize::Awg14).unwrap().0, 2.0);
        assert_eq!(box_volume_allowance(WireSize::Awg12).unwrap().0, 2.25);
        assert_eq!(box_volume_allowance(WireSize::Awg6).unwrap().0, 5.0);
        assert!(box_volume_allowance(WireSize::Awg4).is_err());
    }

    #[test]
    fn test_trade_size_serialization() {
        let json = serde_json::to_string(&TradeSize::OneAndQuarter).unwrap();
        assert_eq!(json, "\"1-1/4\"");
        let roundtrip: TradeSize = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, TradeSize::OneAndQuarter);
    }
}
