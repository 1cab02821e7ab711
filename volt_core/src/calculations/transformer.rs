//! Transformer Calculations
//!
//! Full-load current, available fault current from nameplate impedance, and
//! kVA sizing against the standard unit sizes distributors actually stock.
//!
//! Fault current uses the infinite-bus approximation I_sc ≈ I_fl / Z_pu,
//! which overstates the real value slightly (source impedance ignored) and
//! is the conservative number wanted for gear selection.

use serde::{Deserialize, Serialize};

use crate::calculations::Phase;
use crate::errors::{CalcError, CalcResult};

/// Standard transformer sizes in kVA.
pub const STANDARD_KVA: [f64; 25] = [
    3.0, 5.0, 7.5, 10.0, 15.0, 25.0, 30.0, 37.5, 45.0, 50.0, 75.0, 100.0, 112.5, 150.0, 167.0,
    225.0, 300.0, 400.0, 500.0, 600.0, 750.0, 1000.0, 1500.0, 2000.0, 2500.0,
];

/// Smallest standard size at or above `required_kva`; past the table,
/// rounds up to the next 100.
pub fn next_standard_kva(required_kva: f64) -> f64 {
    for k in STANDARD_KVA {
        if k >= required_kva {
            return k;
        }
    }
    (required_kva / 100.0).ceil() * 100.0
}

/// Full-load current from kVA and voltage.
fn flc_amps(phase: Phase, kva: f64, volts: f64) -> f64 {
    kva * 1000.0 / (phase.factor() * volts)
}

/// Input for FLC / fault-current analysis of a nameplated unit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "T-1",
///   "phase": "3ph",
///   "kva": 500.0,
///   "primary_volts": 12470.0,
///   "secondary_volts": 480.0,
///   "impedance_percent": 5.75
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerInput {
    /// User label for this transformer (e.g. "T-1")
    pub label: String,

    /// Supply system (1φ or 3φ; voltages are line-to-line for 3φ)
    pub phase: Phase,

    /// Nameplate rating in kVA
    pub kva: f64,

    /// Primary voltage in volts
    pub primary_volts: f64,

    /// Secondary voltage in volts
    pub secondary_volts: f64,

    /// Nameplate impedance %Z
    pub impedance_percent: f64,
}

impl TransformerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.kva.is_finite() || self.kva <= 0.0 {
            return Err(CalcError::invalid_input(
                "kva",
                self.kva.to_string(),
                "Rating must be positive",
            ));
        }
        if !self.primary_volts.is_finite() || self.primary_volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "primary_volts",
                self.primary_volts.to_string(),
                "Voltage must be positive",
            ));
        }
        if !self.secondary_volts.is_finite() || self.secondary_volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "secondary_volts",
                self.secondary_volts.to_string(),
                "Voltage must be positive",
            ));
        }
        if !self.impedance_percent.is_finite()
            || self.impedance_percent <= 0.0
            || self.impedance_percent >= 100.0
        {
            return Err(CalcError::invalid_input(
                "impedance_percent",
                self.impedance_percent.to_string(),
                "%Z must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

/// Results from FLC / fault-current analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerResult {
    /// Per-unit impedance (%Z / 100)
    pub z_per_unit: f64,

    /// Primary full-load current in amperes
    pub flc_primary_amps: f64,

    /// Secondary full-load current in amperes
    pub flc_secondary_amps: f64,

    /// Available fault current at the primary in amperes
    pub fault_primary_amps: f64,

    /// Available fault current at the secondary in amperes
    pub fault_secondary_amps: f64,

    /// Voltage magnitude ratio Vp/Vs
    pub turns_ratio: f64,
}

/// Calculate full-load and available fault currents.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::transformer::{calculate, TransformerInput};
/// use volt_core::calculations::Phase;
///
/// let input = TransformerInput {
///     label: "T-1".to_string(),
///     phase: Phase::ThreePhase,
///     kva: 500.0,
///     primary_volts: 12470.0,
///     secondary_volts: 480.0,
///     impedance_percent: 5.75,
/// };
/// let result = calculate(&input).unwrap();
/// // 500 kVA at 480V 3φ is about 601 A full load
/// assert!((result.flc_secondary_amps - 601.4).abs() < 1.0);
/// ```
pub fn calculate(input: &TransformerInput) -> CalcResult<TransformerResult> {
    input.validate()?;

    let z_pu = input.impedance_percent / 100.0;
    let flc_primary = flc_amps(input.phase, input.kva, input.primary_volts);
    let flc_secondary = flc_amps(input.phase, input.kva, input.secondary_volts);

    Ok(TransformerResult {
        z_per_unit: z_pu,
        flc_primary_amps: flc_primary,
        flc_secondary_amps: flc_secondary,
        fault_primary_amps: flc_primary / z_pu,
        fault_secondary_amps: flc_secondary / z_pu,
        turns_ratio: input.primary_volts / input.secondary_volts,
    })
}

/// How the connected load is described for sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum TransformerLoad {
    /// Measured or calculated load current
    Amps { amps: f64 },
    /// Real power plus an assumed power factor
    Kilowatts { kw: f64, power_factor: f64 },
    /// Apparent power directly
    Kva { kva: f64 },
    /// Motor horsepower with efficiency and power factor
    Horsepower {
        hp: f64,
        efficiency: f64,
        power_factor: f64,
    },
}

/// Input for kVA sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shop sub",
///   "phase": "3ph",
///   "volts": 480.0,
///   "load": { "basis": "amps", "amps": 200.0 },
///   "continuous": true,
///   "design_margin_percent": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerSizingInput {
    /// User label for this calculation
    pub label: String,

    /// Supply system
    pub phase: Phase,

    /// Secondary voltage the load sees
    pub volts: f64,

    /// The connected load
    pub load: TransformerLoad,

    /// Whether the load runs 3 hours or more (applies the 1.25 factor)
    pub continuous: bool,

    /// Extra design margin as a percentage (0 disables)
    pub design_margin_percent: f64,
}

impl TransformerSizingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volts.is_finite() || self.volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "volts",
                self.volts.to_string(),
                "Voltage must be positive",
            ));
        }
        if !self.design_margin_percent.is_finite() || self.design_margin_percent < 0.0 {
            return Err(CalcError::invalid_input(
                "design_margin_percent",
                self.design_margin_percent.to_string(),
                "Margin cannot be negative",
            ));
        }

        let check_positive = |field: &str, v: f64| -> CalcResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    v.to_string(),
                    "Must be positive",
                ));
            }
            Ok(())
        };
        let check_ratio = |field: &str, v: f64| -> CalcResult<()> {
            if !v.is_finite() || v <= 0.0 || v > 1.0 {
                return Err(CalcError::invalid_input(
                    field,
                    v.to_string(),
                    "Must be between 0 and 1",
                ));
            }
            Ok(())
        };

        match self.load {
            TransformerLoad::Amps { amps } => check_positive("amps", amps),
            TransformerLoad::Kva { kva } => check_positive("kva", kva),
            TransformerLoad::Kilowatts { kw, power_factor } => {
                check_positive("kw", kw)?;
                check_ratio("power_factor", power_factor)
            }
            TransformerLoad::Horsepower {
                hp,
                efficiency,
                power_factor,
            } => {
                check_positive("hp", hp)?;
                check_ratio("efficiency", efficiency)?;
                check_ratio("power_factor", power_factor)
            }
        }
    }
}

/// Results from kVA sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerSizingResult {
    /// Load converted to kVA before factors
    pub base_kva: f64,

    /// Base kVA after continuous and margin multipliers
    pub design_kva: f64,

    /// Recommended standard unit size
    pub recommended_kva: f64,

    /// Full-load current of the recommended unit at the given voltage
    pub estimated_flc_amps: f64,

    /// Multiplier applied for continuous duty (1.25 or 1.0)
    pub continuous_multiplier: f64,

    /// Multiplier applied for design margin
    pub margin_multiplier: f64,
}

/// Size a transformer for a load.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::transformer::{size, TransformerLoad, TransformerSizingInput};
/// use volt_core::calculations::Phase;
///
/// let input = TransformerSizingInput {
///     label: "Shop sub".to_string(),
///     phase: Phase::ThreePhase,
///     volts: 480.0,
///     load: TransformerLoad::Amps { amps: 200.0 },
///     continuous: true,
///     design_margin_percent: 10.0,
/// };
/// let result = size(&input).unwrap();
/// // 166.3 kVA base · 1.25 · 1.10 ≈ 228.6 → next standard unit is 300
/// assert_eq!(result.recommended_kva, 300.0);
/// ```
pub fn size(input: &TransformerSizingInput) -> CalcResult<TransformerSizingResult> {
    input.validate()?;

    let base_kva = match input.load {
        TransformerLoad::Amps { amps } => input.phase.factor() * input.volts * amps / 1000.0,
        TransformerLoad::Kva { kva } => kva,
        TransformerLoad::Kilowatts { kw, power_factor } => kw / power_factor,
        TransformerLoad::Horsepower {
            hp,
            efficiency,
            power_factor,
        } => {
            let kw_in = hp * 746.0 / (1000.0 * efficiency);
            kw_in / power_factor
        }
    };

    let continuous_multiplier = if input.continuous { 1.25 } else { 1.0 };
    let margin_multiplier = 1.0 + input.design_margin_percent / 100.0;
    let design_kva = base_kva * continuous_multiplier * margin_multiplier;
    let recommended_kva = next_standard_kva(design_kva);

    Ok(TransformerSizingResult {
        base_kva,
        design_kva,
        recommended_kva,
        estimated_flc_amps: flc_amps(input.phase, recommended_kva, input.volts),
        continuous_multiplier,
        margin_multiplier,
    })
}
