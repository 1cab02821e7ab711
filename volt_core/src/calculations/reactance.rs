//! Reactance Calculation
//!
//! Capacitive and inductive reactance with solve-for inversions, plus the
//! DC capacitor charge relation Q = C·V.
//!
//! All inputs are in base SI units (Hz, farads, henries, ohms, coulombs,
//! volts); the presentation layer owns pF/µF/mH-style scaling.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::errors::{CalcError, CalcResult};

/// Which quantity to solve for, and from what.
///
/// The source form guessed the method from whichever fields were filled in;
/// here each variant pins its required inputs so the contract is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactanceSolve {
    /// Xc = 1/(2πfC) — needs frequency and capacitance
    CapacitiveReactance,
    /// C = 1/(2πfXc) — needs frequency and reactance
    CapacitanceFromReactance,
    /// C = Q/V — needs charge and volts
    CapacitanceFromCharge,
    /// f = 1/(2πCXc) — needs capacitance and reactance
    FrequencyFromCapacitance,
    /// Xl = 2πfL — needs frequency and inductance
    InductiveReactance,
    /// L = Xl/(2πf) — needs frequency and reactance
    InductanceFromReactance,
    /// f = Xl/(2πL) — needs inductance and reactance
    FrequencyFromInductance,
    /// Q = C·V — needs capacitance and volts
    Charge,
    /// V = Q/C — needs charge and capacitance
    VoltsFromCharge,
}

/// Input parameters for a reactance solve.
///
/// Only the fields the chosen variant needs have to be present.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Run capacitor",
///   "solve": "capacitive_reactance",
///   "frequency_hz": 60.0,
///   "capacitance_farads": 0.000040
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactanceInput {
    /// User label for this calculation
    pub label: String,

    /// Quantity to solve for
    pub solve: ReactanceSolve,

    /// Frequency in hertz
    #[serde(default)]
    pub frequency_hz: Option<f64>,

    /// Capacitance in farads
    #[serde(default)]
    pub capacitance_farads: Option<f64>,

    /// Inductance in henries
    #[serde(default)]
    pub inductance_henries: Option<f64>,

    /// Reactance in ohms (Xc or Xl depending on the variant)
    #[serde(default)]
    pub reactance_ohms: Option<f64>,

    /// Charge in coulombs
    #[serde(default)]
    pub charge_coulombs: Option<f64>,

    /// Voltage in volts
    #[serde(default)]
    pub volts: Option<f64>,
}

fn require_positive(value: Option<f64>, field: &str) -> CalcResult<f64> {
    let v = value.ok_or_else(|| CalcError::missing_field(field))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            v.to_string(),
            "Must be a positive finite number",
        ));
    }
    Ok(v)
}

/// Results from a reactance solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactanceResult {
    /// Human label of the solved quantity (e.g. "Capacitive Reactance (Xc)")
    pub quantity: String,

    /// Solved value in the base unit
    pub value: f64,

    /// Base unit symbol ("Ω", "F", "H", "Hz", "C", "V")
    pub unit: String,
}

fn result(quantity: &str, value: f64, unit: &str) -> ReactanceResult {
    ReactanceResult {
        quantity: quantity.to_string(),
        value,
        unit: unit.to_string(),
    }
}

/// Solve the quantity selected by `input.solve`.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::reactance::{calculate, ReactanceInput, ReactanceSolve};
///
/// let input = ReactanceInput {
///     label: "Demo".to_string(),
///     solve: ReactanceSolve::InductiveReactance,
///     frequency_hz: Some(60.0),
///     capacitance_farads: None,
///     inductance_henries: Some(0.1),
///     reactance_ohms: None,
///     charge_coulombs: None,
///     volts: None,
/// };
/// let xl = calculate(&input).unwrap();
/// assert!((xl.value - 37.699).abs() < 0.01);
/// ```
pub fn calculate(input: &ReactanceInput) -> CalcResult<ReactanceResult> {
    match input.solve {
        ReactanceSolve::CapacitiveReactance => {
            let f = require_positive(input.frequency_hz, "frequency_hz")?;
            let c = require_positive(input.capacitance_farads, "capacitance_farads")?;
            Ok(result("Capacitive Reactance (Xc)", 1.0 / (TAU * f * c), "Ω"))
        }
        ReactanceSolve::CapacitanceFromReactance => {
            let f = require_positive(input.frequency_hz, "frequency_hz")?;
            let x = require_positive(input.reactance_ohms, "reactance_ohms")?;
            Ok(result("Capacitance (C)", 1.0 / (TAU * f * x), "F"))
        }
        ReactanceSolve::CapacitanceFromCharge => {
            let q = require_positive(input.charge_coulombs, "charge_coulombs")?;
            let v = require_positive(input.volts, "volts")?;
            Ok(result("Capacitance (C)", q / v, "F"))
        }
        ReactanceSolve::FrequencyFromCapacitance => {
            let c = require_positive(input.capacitance_farads, "capacitance_farads")?;
            let x = require_positive(input.reactance_ohms, "reactance_ohms")?;
            Ok(result("Frequency (f)", 1.0 / (TAU * c * x), "Hz"))
        }
        ReactanceSolve::InductiveReactance => {
            let f = require_positive(input.frequency_hz, "frequency_hz")?;
            let l = require_positive(input.inductance_henries, "inductance_henries")?;
            Ok(result("Inductive Reactance (Xl)", TAU * f * l, "Ω"))
        }
        ReactanceSolve::InductanceFromReactance => {
            let f = require_positive(input.frequency_hz, "frequency_hz")?;
            let x = require_positive(input.reactance_ohms, "reactance_ohms")?;
            Ok(result("Inductance (L)", x / (TAU * f), "H"))
        }
        ReactanceSolve::FrequencyFromInductance => {
            let l = require_positive(input.inductance_henries, "inductance_henries")?;
            let x = require_positive(input.reactance_ohms, "reactance_ohms")?;
            Ok(result("Frequency (f)", x / (TAU * l), "Hz"))
        }
        ReactanceSolve::Charge => {
            let c = require_positive(input.capacitance_farads, "capacitance_farads")?;
            let v = require_positive(input.volts, "volts")?;
            Ok(result("Charge (Q)", c * v, "C"))
        }
        ReactanceSolve::VoltsFromCharge => {
            let q = require_positive(input.charge_coulombs, "charge_coulombs")?;
            let c = require_positive(input.capacitance_farads, "capacitance_farads")?;
            Ok(result("Voltage (V)", q / c, "V"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(solve: ReactanceSolve) -> ReactanceInput {
        ReactanceInput {
            label: "Test".to_string(),
            solve,
            frequency_hz: None,
            capacitance_farads: None,
            inductance_henries: None,
            reactance_ohms: None,
            charge_coulombs: None,
            volts: None,
        }
    }

    #[test]
    fn test_capacitive_reactance_60hz() {
        let mut input = blank(ReactanceSolve::CapacitiveReactance);
        input.frequency_hz = Some(60.0);
        input.capacitance_farads = Some(40e-6);
        let xc = calculate(&input).unwrap();
        // Xc = 1/(2π·60·40µF) ≈ 66.3 Ω
        assert!((xc.value - 66.31).abs() < 0.05);
        assert_eq!(xc.unit, "Ω");
    }

    #[test]
    fn test_capacitance_inverts_reactance() {
        let mut forward = blank(ReactanceSolve::CapacitiveReactance);
        forward.frequency_hz = Some(60.0);
        forward.capacitance_farads = Some(40e-6);
        let xc = calculate(&forward).unwrap().value;

        let mut back = blank(ReactanceSolve::CapacitanceFromReactance);
        back.frequency_hz = Some(60.0);
        back.reactance_ohms = Some(xc);
        let c = calculate(&back).unwrap().value;
        assert!((c - 40e-6).abs() < 1e-12);
    }

    #[test]
    fn test_inductive_reactance_and_inversions() {
        let mut input = blank(ReactanceSolve::InductiveReactance);
        input.frequency_hz = Some(60.0);
        input.inductance_henries = Some(0.1);
        let xl = calculate(&input).unwrap().value;
        assert!((xl - TAU * 6.0).abs() < 1e-9);

        let mut inv_l = blank(ReactanceSolve::InductanceFromReactance);
        inv_l.frequency_hz = Some(60.0);
        inv_l.reactance_ohms = Some(xl);
        assert!((calculate(&inv_l).unwrap().value - 0.1).abs() < 1e-12);

        let mut inv_f = blank(ReactanceSolve::FrequencyFromInductance);
        inv_f.inductance_henries = Some(0.1);
        inv_f.reactance_ohms = Some(xl);
        assert!((calculate(&inv_f).unwrap().value - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_charge_relations() {
        let mut q = blank(ReactanceSolve::Charge);
        q.capacitance_farads = Some(100e-6);
        q.volts = Some(50.0);
        let charge = calculate(&q).unwrap();
        assert!((charge.value - 5e-3).abs() < 1e-12);

        let mut v = blank(ReactanceSolve::VoltsFromCharge);
        v.charge_coulombs = Some(5e-3);
        v.capacitance_farads = Some(100e-6);
        assert!((calculate(&v).unwrap().value - 50.0).abs() < 1e-9);

        let mut c = blank(ReactanceSolve::CapacitanceFromCharge);
        c.charge_coulombs = Some(5e-3);
        c.volts = Some(50.0);
        assert!((calculate(&c).unwrap().value - 100e-6).abs() < 1e-12);
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let mut input = blank(ReactanceSolve::CapacitiveReactance);
        input.frequency_hz = Some(60.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(
            err,
            CalcError::missing_field("capacitance_farads")
        );
    }

    #[test]
    fn test_nonpositive_rejected() {
        let mut input = blank(ReactanceSolve::InductiveReactance);
        input.frequency_hz = Some(0.0);
        input.inductance_henries = Some(0.1);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let mut input = blank(ReactanceSolve::FrequencyFromCapacitance);
        input.capacitance_farads = Some(1e-6);
        input.reactance_ohms = Some(100.0);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"frequency_from_capacitance\""));
        let roundtrip: ReactanceInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.solve, ReactanceSolve::FrequencyFromCapacitance);
    }
}
