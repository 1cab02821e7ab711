//! Motor Full-Load Current
//!
//! Field estimate of motor FLC from horsepower or nameplate kW. These are
//! physics-based numbers with typical efficiency/PF defaults by motor size,
//! not the NEC table values used for conductor sizing.

use serde::{Deserialize, Serialize};

use crate::calculations::Phase;
use crate::errors::{CalcError, CalcResult};

/// How the motor is rated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum MotorRating {
    /// Mechanical output horsepower
    Horsepower { hp: f64 },
    /// Nameplate electrical input kW
    NameplateKw { kw: f64 },
}

/// Typical field defaults by motor size: bigger motors run better
/// efficiency and power factor.
///
/// Returns (efficiency, power_factor).
pub fn typical_defaults(hp: f64) -> (f64, f64) {
    if !hp.is_finite() || hp <= 0.0 {
        return (0.9, 0.85);
    }
    if hp <= 1.0 {
        (0.75, 0.75)
    } else if hp <= 5.0 {
        (0.82, 0.80)
    } else if hp <= 20.0 {
        (0.88, 0.85)
    } else if hp <= 75.0 {
        (0.92, 0.88)
    } else {
        (0.94, 0.90)
    }
}

/// Input parameters for a motor FLC estimate.
///
/// Leave `efficiency`/`power_factor` as `None` to use the typical defaults
/// for the motor size.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-3 pump",
///   "phase": "3ph",
///   "rating": { "basis": "horsepower", "hp": 10.0 },
///   "volts": 480.0,
///   "efficiency": null,
///   "power_factor": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorFlcInput {
    /// User label for this motor
    pub label: String,

    /// Supply system ("Armature voltage" semantics for DC)
    pub phase: Phase,

    /// Motor rating
    pub rating: MotorRating,

    /// Line voltage in volts
    pub volts: f64,

    /// Motor efficiency in (0, 1]; `None` for the typical default
    #[serde(default)]
    pub efficiency: Option<f64>,

    /// Power factor in (0, 1]; `None` for the typical default, forced to 1
    /// for DC
    #[serde(default)]
    pub power_factor: Option<f64>,
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

impl MotorFlcInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volts.is_finite() || self.volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "volts",
                self.volts.to_string(),
                "Voltage must be positive",
            ));
        }
        match self.rating {
            MotorRating::Horsepower { hp } => {
                if !hp.is_finite() || hp <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "hp",
                        hp.to_string(),
                        "Horsepower must be positive",
                    ));
                }
            }
            MotorRating::NameplateKw { kw } => {
                if !kw.is_finite() || kw <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "kw",
                        kw.to_string(),
                        "Nameplate kW must be positive",
                    ));
                }
            }
        }
        if let Some(eff) = self.efficiency {
            check_ratio("efficiency", eff)?;
        }
        if let Some(pf) = self.power_factor {
            check_ratio("power_factor", pf)?;
        }
        Ok(())
    }

    fn resolved_factors(&self) -> (f64, f64) {
        let (default_eff, default_pf) = match self.rating {
            MotorRating::Horsepower { hp } => typical_defaults(hp),
            MotorRating::NameplateKw { .. } => (0.9, 0.85),
        };
        let eff = self.efficiency.unwrap_or(default_eff);
        let pf = if self.phase.is_ac() {
            self.power_factor.unwrap_or(default_pf)
        } else {
            1.0
        };
        (eff, pf)
    }
}

/// Results from a motor FLC estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorFlcResult {
    /// Estimated full-load current in amperes
    pub flc_amps: f64,

    /// Efficiency used (supplied or typical default)
    pub efficiency_used: f64,

    /// Power factor used (supplied, typical default, or 1 for DC)
    pub power_factor_used: f64,
}

/// Estimate full-load current.
///
/// From HP: I = (HP·746 / eff) / (V·PF·phase_factor).
/// From nameplate kW (already electrical input): I = kW·1000 / (V·PF·phase_factor).
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::motor_flc::{calculate, MotorFlcInput, MotorRating};
/// use volt_core::calculations::Phase;
///
/// let input = MotorFlcInput {
///     label: "P-3".to_string(),
///     phase: Phase::ThreePhase,
///     rating: MotorRating::Horsepower { hp: 10.0 },
///     volts: 480.0,
///     efficiency: None,
///     power_factor: None,
/// };
/// let result = calculate(&input).unwrap();
/// // ≈ 12 A with the typical 0.88/0.85 defaults
/// assert!((result.flc_amps - 12.0).abs() < 0.5);
/// ```
pub fn calculate(input: &MotorFlcInput) -> CalcResult<MotorFlcResult> {
    input.validate()?;

    let (eff, pf) = input.resolved_factors();

    let electrical_watts = match input.rating {
        MotorRating::Horsepower { hp } => hp * 746.0 / eff,
        MotorRating::NameplateKw { kw } => kw * 1000.0,
    };

    let denom = input.phase.factor() * input.volts * pf;
    if denom == 0.0 {
        return Err(CalcError::calculation_failed(
            "Motor FLC",
            "Denominator collapsed to zero",
        ));
    }

    Ok(MotorFlcResult {
        flc_amps: electrical_watts / denom,
        efficiency_used: eff,
        power_factor_used: pf,
    })
}
