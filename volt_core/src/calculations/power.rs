//! Power Calculation
//!
//! Conversions between electrical power, apparent power, horsepower, and
//! current across DC, single-phase, and three-phase systems.
//!
//! Formula set:
//! - DC: P = V·I
//! - AC 1φ: P = V·I·PF
//! - AC 3φ: P = √3·V·I·PF
//! - Apparent power S = phase_factor·V·I (PF not applied)
//! - HP out = (P_in · eff) / 746

use serde::{Deserialize, Serialize};

use crate::calculations::Phase;
use crate::errors::{CalcError, CalcResult};

/// Watts per mechanical horsepower
const WATTS_PER_HP: f64 = 746.0;

/// What the calculation solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerMode {
    /// Current from motor horsepower
    AmpsFromHp,
    /// Horsepower out from voltage and current
    HpFromVoltsAmps,
    /// Real power in watts from voltage and current
    WattsFromVoltsAmps,
    /// Real power in kilowatts from voltage and current
    KilowattsFromVoltsAmps,
    /// Apparent power in kVA from voltage and current
    KvaFromVoltsAmps,
}

impl PowerMode {
    /// Whether the power factor participates (AC modes only; never for kVA)
    pub fn uses_power_factor(&self) -> bool {
        !matches!(self, PowerMode::KvaFromVoltsAmps)
    }

    /// Whether motor efficiency participates
    pub fn uses_efficiency(&self) -> bool {
        matches!(self, PowerMode::AmpsFromHp | PowerMode::HpFromVoltsAmps)
    }
}

/// Input parameters for a power conversion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "RTU-1",
///   "phase": "3ph",
///   "mode": "amps_from_hp",
///   "volts": 480.0,
///   "hp": 10.0,
///   "power_factor": 0.9,
///   "efficiency": 0.9
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerInput {
    /// User label for this calculation
    pub label: String,

    /// Supply system
    pub phase: Phase,

    /// Quantity to solve for
    pub mode: PowerMode,

    /// Line voltage in volts (line-to-line for 3φ)
    pub volts: Option<f64>,

    /// Current in amperes
    pub amps: Option<f64>,

    /// Motor horsepower
    pub hp: Option<f64>,

    /// Power factor in (0, 1]; ignored for DC
    #[serde(default = "default_ratio")]
    pub power_factor: f64,

    /// Motor efficiency in (0, 1]
    #[serde(default = "default_ratio")]
    pub efficiency: f64,
}

fn default_ratio() -> f64 {
    0.9
}

impl PowerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.mode.uses_power_factor() && self.phase.is_ac() {
            check_ratio("power_factor", self.power_factor)?;
        }
        if self.mode.uses_efficiency() {
            check_ratio("efficiency", self.efficiency)?;
        }
        Ok(())
    }

    /// Effective power factor: forced to 1 for DC
    fn pf(&self) -> f64 {
        if self.phase.is_ac() {
            self.power_factor
        } else {
            1.0
        }
    }

    fn require(&self, field: &str, value: Option<f64>) -> CalcResult<f64> {
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
}

fn check_ratio(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be between 0 and 1",
        ));
    }
    Ok(())
}

/// Results from a power conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerResult {
    /// The solved value
    pub value: f64,

    /// Unit of the solved value ("A", "HP", "W", "kW", "kVA")
    pub unit: String,
}

/// Real power input in watts for the given phase rules.
fn watts_from_vi(volts: f64, amps: f64, phase: Phase, pf: f64) -> f64 {
    if phase == Phase::Dc {
        return volts * amps;
    }
    phase.factor() * volts * amps * pf
}

/// Run the conversion selected by `input.mode`.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::power::{calculate, PowerInput, PowerMode};
/// use volt_core::calculations::Phase;
///
/// let input = PowerInput {
///     label: "Demo".to_string(),
///     phase: Phase::Dc,
///     mode: PowerMode::WattsFromVoltsAmps,
///     volts: Some(24.0),
///     amps: Some(5.0),
///     hp: None,
///     power_factor: 0.9,
///     efficiency: 0.9,
/// };
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.value, 120.0);
/// assert_eq!(result.unit, "W");
/// ```
pub fn calculate(input: &PowerInput) -> CalcResult<PowerResult> {
    input.validate()?;

    match input.mode {
        PowerMode::AmpsFromHp => {
            let hp = input.require("hp", input.hp)?;
            let volts = input.require("volts", input.volts)?;
            let denom = input.efficiency * input.pf() * volts * input.phase.factor();
            if denom == 0.0 {
                return Err(CalcError::calculation_failed(
                    "Power",
                    "Denominator collapsed to zero",
                ));
            }
            Ok(PowerResult {
                value: hp * WATTS_PER_HP / denom,
                unit: "A".to_string(),
            })
        }
        PowerMode::HpFromVoltsAmps => {
            let volts = input.require("volts", input.volts)?;
            let amps = input.require("amps", input.amps)?;
            let p_in = watts_from_vi(volts, amps, input.phase, input.pf());
            Ok(PowerResult {
                value: p_in * input.efficiency / WATTS_PER_HP,
                unit: "HP".to_string(),
            })
        }
        PowerMode::WattsFromVoltsAmps => {
            let volts = input.require("volts", input.volts)?;
            let amps = input.require("amps", input.amps)?;
            Ok(PowerResult {
                value: watts_from_vi(volts, amps, input.phase, input.pf()),
                unit: "W".to_string(),
            })
        }
        PowerMode::KilowattsFromVoltsAmps => {
            let volts = input.require("volts", input.volts)?;
            let amps = input.require("amps", input.amps)?;
            Ok(PowerResult {
                value: watts_from_vi(volts, amps, input.phase, input.pf()) / 1000.0,
                unit: "kW".to_string(),
            })
        }
        PowerMode::KvaFromVoltsAmps => {
            let volts = input.require("volts", input.volts)?;
            let amps = input.require("amps", input.amps)?;
            Ok(PowerResult {
                value: input.phase.factor() * volts * amps / 1000.0,
                unit: "kVA".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(mode: PowerMode, phase: Phase) -> PowerInput {
        PowerInput {
            label: "Test".to_string(),
            phase,
            mode,
            volts: Some(480.0),
            amps: Some(10.0),
            hp: Some(10.0),
            power_factor: 0.9,
            efficiency: 0.9,
        }
    }

    #[test]
    fn test_dc_watts() {
        let mut input = base(PowerMode::WattsFromVoltsAmps, Phase::Dc);
        input.volts = Some(24.0);
        input.amps = Some(5.0);
        let result = calculate(&input).unwrap();
        assert_eq!(result.value, 120.0);
    }

    #[test]
    fn test_three_phase_kw_uses_sqrt3_and_pf() {
        let input = base(PowerMode::KilowattsFromVoltsAmps, Phase::ThreePhase);
        let expected = 3.0_f64.sqrt() * 480.0 * 10.0 * 0.9 / 1000.0;
        let result = calculate(&input).unwrap();
        assert!((result.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_kva_ignores_pf() {
        let mut input = base(PowerMode::KvaFromVoltsAmps, Phase::ThreePhase);
        input.power_factor = 0.5;
        let expected = 3.0_f64.sqrt() * 480.0 * 10.0 / 1000.0;
        let result = calculate(&input).unwrap();
        assert!((result.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_amps_from_hp_round_trips_hp_from_amps() {
        let input = base(PowerMode::AmpsFromHp, Phase::ThreePhase);
        let amps = calculate(&input).unwrap().value;

        let mut back = base(PowerMode::HpFromVoltsAmps, Phase::ThreePhase);
        back.amps = Some(amps);
        let hp = calculate(&back).unwrap().value;
        assert!((hp - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_pf_out_of_range_rejected() {
        let mut input = base(PowerMode::WattsFromVoltsAmps, Phase::SinglePhase);
        input.power_factor = 1.2;
        assert!(calculate(&input).is_err());

        input.power_factor = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_bad_pf_ignored_for_dc() {
        let mut input = base(PowerMode::WattsFromVoltsAmps, Phase::Dc);
        input.volts = Some(12.0);
        input.amps = Some(2.0);
        input.power_factor = 7.0;
        // PF is not consulted for DC
        let result = calculate(&input).unwrap();
        assert_eq!(result.value, 24.0);
    }

    #[test]
    fn test_missing_inputs() {
        let mut input = base(PowerMode::AmpsFromHp, Phase::ThreePhase);
        input.hp = None;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_serialization() {
        let input = base(PowerMode::AmpsFromHp, Phase::ThreePhase);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"amps_from_hp\""));
        let roundtrip: PowerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.mode, PowerMode::AmpsFromHp);
    }
}
