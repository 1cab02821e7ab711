//! Voltage Drop Calculation
//!
//! Resistive voltage drop over a conductor run, from first principles:
//! conductor area via the AWG formula, resistivity adjusted to conductor
//! temperature, then V_d = factor · I · R_per_ft · L with factor 2 for the
//! out-and-back single-phase path and √3 for three-phase.
//!
//! Reactance is ignored, which is fine at these lengths and sizes; this is
//! the resistive estimate electricians actually size branch runs with.

use serde::{Deserialize, Serialize};

use crate::calculations::Phase;
use crate::errors::{CalcError, CalcResult};
use crate::materials::conductors::resistance_per_foot;
use crate::materials::{ConductorMaterial, WireSize};

/// Input parameters for a voltage-drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Well pump feeder",
///   "phase": "3ph",
///   "material": "copper",
///   "size": "6",
///   "source_volts": 480.0,
///   "load_amps": 40.0,
///   "one_way_length_ft": 150.0,
///   "conductor_temp_c": 75.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropInput {
    /// User label for this calculation
    pub label: String,

    /// Supply system; DC behaves like single-phase (2-wire round trip)
    pub phase: Phase,

    /// Conductor material
    pub material: ConductorMaterial,

    /// Conductor size
    pub size: WireSize,

    /// Source voltage in volts (line-to-line for 3φ)
    pub source_volts: f64,

    /// Load current in amperes
    pub load_amps: f64,

    /// One-way circuit length in feet
    pub one_way_length_ft: f64,

    /// Conductor operating temperature in °C (75 matches common
    /// termination ratings)
    #[serde(default = "default_temp_c")]
    pub conductor_temp_c: f64,
}

fn default_temp_c() -> f64 {
    75.0
}

impl VoltageDropInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.source_volts.is_finite() || self.source_volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "source_volts",
                self.source_volts.to_string(),
                "Voltage must be positive",
            ));
        }
        if !self.load_amps.is_finite() || self.load_amps < 0.0 {
            return Err(CalcError::invalid_input(
                "load_amps",
                self.load_amps.to_string(),
                "Current cannot be negative",
            ));
        }
        if !self.one_way_length_ft.is_finite() || self.one_way_length_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "one_way_length_ft",
                self.one_way_length_ft.to_string(),
                "Length cannot be negative",
            ));
        }
        if !self.conductor_temp_c.is_finite() {
            return Err(CalcError::invalid_input(
                "conductor_temp_c",
                self.conductor_temp_c.to_string(),
                "Temperature must be a number",
            ));
        }
        Ok(())
    }

    /// Circuit path factor: 2 conductors in series for 1φ/DC, √3 for 3φ
    fn path_factor(&self) -> f64 {
        match self.phase {
            Phase::ThreePhase => 3.0_f64.sqrt(),
            _ => 2.0,
        }
    }
}

/// Results from a voltage-drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ohms_per_1000_ft": 0.5092,
///   "drop_volts": 5.29,
///   "drop_percent": 1.10,
///   "load_volts": 474.71
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Conductor resistance at temperature, per 1000 ft
    pub ohms_per_1000_ft: f64,

    /// Voltage drop in volts
    pub drop_volts: f64,

    /// Drop as a percentage of source voltage
    pub drop_percent: f64,

    /// Estimated voltage at the load
    pub load_volts: f64,
}

impl VoltageDropResult {
    /// Check the drop against a percentage limit (e.g. the 3% branch
    /// circuit recommendation)
    pub fn within_limit(&self, limit_percent: f64) -> bool {
        self.drop_percent <= limit_percent
    }
}

/// Calculate voltage drop for a conductor run.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::voltage_drop::{calculate, VoltageDropInput};
/// use volt_core::calculations::Phase;
/// use volt_core::materials::{ConductorMaterial, WireSize};
///
/// let input = VoltageDropInput {
///     label: "Demo".to_string(),
///     phase: Phase::ThreePhase,
///     material: ConductorMaterial::Copper,
///     size: WireSize::Awg6,
///     source_volts: 480.0,
///     load_amps: 40.0,
///     one_way_length_ft: 150.0,
///     conductor_temp_c: 75.0,
/// };
/// let result = calculate(&input).unwrap();
/// assert!(result.drop_percent < 2.0);
/// ```
pub fn calculate(input: &VoltageDropInput) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let r_per_ft = resistance_per_foot(input.material, input.size, input.conductor_temp_c);

    let drop_volts = input.path_factor() * input.load_amps * r_per_ft.0 * input.one_way_length_ft;
    let drop_percent = drop_volts / input.source_volts * 100.0;

    Ok(VoltageDropResult {
        ohms_per_1000_ft: r_per_ft.0 * 1000.0,
        drop_volts,
        drop_percent,
        load_volts: input.source_volts - drop_volts,
    })
}
