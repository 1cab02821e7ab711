//! Box Fill Calculation
//!
//! Quick required-volume check for device boxes: each conductor counts
//! once, each device yoke twice, internal clamps once, and grounds as the
//! user counts them (usually one for the lot).

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::raceways::box_volume_allowance;
use crate::materials::WireSize;

/// Input parameters for a box fill check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Kitchen GFCI box",
///   "wire": "12",
///   "conductors": 4,
///   "device_yokes": 1,
///   "clamps": 1,
///   "grounds": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxFillInput {
    /// User label for this calculation
    pub label: String,

    /// Conductor size in the box (largest, if mixed)
    pub wire: WireSize,

    /// Insulated conductors entering the box
    pub conductors: u32,

    /// Device yokes (each counts as two conductors)
    pub device_yokes: u32,

    /// Internal cable clamps (0 or 1 in practice)
    pub clamps: u32,

    /// Ground conductors counted (all grounds together usually count as 1)
    pub grounds: u32,
}

/// Results from a box fill check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxFillResult {
    /// Volume allowance per conductor equivalent, in cubic inches
    pub allowance_per_conductor_in3: f64,

    /// Total conductor equivalents
    pub equivalent_count: u32,

    /// Required box volume in cubic inches
    pub required_in3: f64,
}

/// Compute required box volume.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::box_fill::{calculate, BoxFillInput};
/// use volt_core::materials::WireSize;
///
/// let input = BoxFillInput {
///     label: "Demo".to_string(),
///     wire: WireSize::Awg12,
///     conductors: 4,
///     device_yokes: 1,
///     clamps: 1,
///     grounds: 1,
/// };
/// let result = calculate(&input).unwrap();
/// // (4 + 2 + 1 + 1) · 2.25 = 18 in³
/// assert_eq!(result.required_in3, 18.0);
/// ```
pub fn calculate(input: &BoxFillInput) -> CalcResult<BoxFillResult> {
    let allowance = box_volume_allowance(input.wire)?;

    let equivalents = input.conductors + input.device_yokes * 2 + input.clamps + input.grounds;

    Ok(BoxFillResult {
        allowance_per_conductor_in3: allowance.0,
        equivalent_count: equivalents,
        required_in3: f64::from(equivalents) * allowance.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gfci_box() {
        let input = BoxFillInput {
            label: "Test".to_string(),
            wire: WireSize::Awg12,
            conductors: 4,
            device_yokes: 1,
            clamps: 1,
            grounds: 1,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.equivalent_count, 8);
        assert_eq!(result.required_in3, 18.0);
    }

    #[test]
    fn test_empty_box_needs_nothing() {
        let input = BoxFillInput {
            label: "Test".to_string(),
            wire: WireSize::Awg14,
            conductors: 0,
            device_yokes: 0,
            clamps: 0,
            grounds: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.required_in3, 0.0);
    }

    #[test]
    fn test_larger_wire_needs_more_room() {
        let base = BoxFillInput {
            label: "Test".to_string(),
            wire: WireSize::Awg14,
            conductors: 6,
            device_yokes: 0,
            clamps: 0,
            grounds: 1,
        };
        let small = calculate(&base).unwrap();
        let mut big = base;
        big.wire = WireSize::Awg8;
        let big = calculate(&big).unwrap();
        assert!(big.required_in3 > small.required_in3);
    }

    #[test]
    fn test_feeder_sizes_not_covered() {
        let input = BoxFillInput {
            label: "Test".to_string(),
            wire: WireSize::Awg4,
            conductors: 2,
            device_yokes: 0,
            clamps: 0,
            grounds: 0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = BoxFillInput {
            label: "Test".to_string(),
            wire: WireSize::Awg12,
            conductors: 4,
            device_yokes: 1,
            clamps: 0,
            grounds: 1,
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: BoxFillInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.conductors, 4);
    }
}
