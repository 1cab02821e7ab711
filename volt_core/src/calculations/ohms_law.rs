//! Ohm's Law Calculation
//!
//! Given any two of voltage, current, and resistance, solves the third and
//! reports the dissipated power.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input for an Ohm's law solve. Leave exactly one quantity `None`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Heat trace loop",
///   "volts": 120.0,
///   "amps": null,
///   "ohms": 48.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmsLawInput {
    /// User label for this calculation
    pub label: String,

    /// Voltage in volts, if known
    pub volts: Option<f64>,

    /// Current in amperes, if known
    pub amps: Option<f64>,

    /// Resistance in ohms, if known
    pub ohms: Option<f64>,
}

impl OhmsLawInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let supplied = [
            ("volts", self.volts),
            ("amps", self.amps),
            ("ohms", self.ohms),
        ];

        let mut known = 0;
        for (field, value) in supplied {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(CalcError::invalid_input(
                        field,
                        v.to_string(),
                        "Must be a positive finite number",
                    ));
                }
                known += 1;
            }
        }

        if known < 2 {
            return Err(CalcError::missing_field("two of volts/amps/ohms"));
        }
        Ok(())
    }
}

/// Results from an Ohm's law solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmsLawResult {
    /// Voltage in volts
    pub volts: f64,

    /// Current in amperes
    pub amps: f64,

    /// Resistance in ohms
    pub ohms: f64,

    /// Dissipated power P = V·I in watts
    pub watts: f64,
}

/// Solve V = I·R for the missing quantity.
///
/// When all three quantities are supplied they pass through unchanged
/// (the caller is showing a filled-in form, not asking a question).
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::ohms_law::{calculate, OhmsLawInput};
///
/// let input = OhmsLawInput {
///     label: "Demo".to_string(),
///     volts: Some(120.0),
///     amps: None,
///     ohms: Some(48.0),
/// };
/// let result = calculate(&input).unwrap();
/// assert!((result.amps - 2.5).abs() < 1e-9);
/// assert!((result.watts - 300.0).abs() < 1e-9);
/// ```
pub fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    input.validate()?;

    let (volts, amps, ohms) = match (input.volts, input.amps, input.ohms) {
        (Some(v), Some(i), None) => (v, i, v / i),
        (Some(v), None, Some(r)) => (v, v / r, r),
        (None, Some(i), Some(r)) => (i * r, i, r),
        (Some(v), Some(i), Some(r)) => (v, i, r),
        // validate() guarantees at least two quantities
        _ => unreachable!(),
    };

    Ok(OhmsLawResult {
        volts,
        amps,
        ohms,
        watts: volts * amps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(volts: Option<f64>, amps: Option<f64>, ohms: Option<f64>) -> OhmsLawInput {
        OhmsLawInput {
            label: "Test".to_string(),
            volts,
            amps,
            ohms,
        }
    }

    #[test]
    fn test_solve_voltage() {
        let result = calculate(&input(None, Some(2.0), Some(60.0))).unwrap();
        assert_eq!(result.volts, 120.0);
        assert_eq!(result.watts, 240.0);
    }

    #[test]
    fn test_solve_current() {
        let result = calculate(&input(Some(120.0), None, Some(48.0))).unwrap();
        assert!((result.amps - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_solve_resistance() {
        let result = calculate(&input(Some(480.0), Some(40.0), None)).unwrap();
        assert_eq!(result.ohms, 12.0);
    }

    #[test]
    fn test_all_supplied_passes_through() {
        let result = calculate(&input(Some(120.0), Some(2.0), Some(60.0))).unwrap();
        assert_eq!(result.volts, 120.0);
        assert_eq!(result.amps, 2.0);
        assert_eq!(result.ohms, 60.0);
    }

    #[test]
    fn test_one_quantity_is_an_error() {
        let err = calculate(&input(Some(120.0), None, None)).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_nonpositive_input_rejected() {
        assert!(calculate(&input(Some(-120.0), Some(2.0), None)).is_err());
        assert!(calculate(&input(Some(0.0), Some(2.0), None)).is_err());
    }

    #[test]
    fn test_serialization() {
        let i = input(Some(120.0), None, Some(48.0));
        let json = serde_json::to_string_pretty(&i).unwrap();
        let roundtrip: OhmsLawInput = serde_json::from_str(&json).unwrap();
        assert_eq!(i.volts, roundtrip.volts);
        assert_eq!(i.ohms, roundtrip.ohms);
    }
}
