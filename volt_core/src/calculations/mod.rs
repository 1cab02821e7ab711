//! # Electrical Calculations
//!
//! This module contains all field calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`ohms_law`] - Solve the missing quantity of V = I·R
//! - [`power`] - Watts / kW / kVA / HP / amps across DC, 1φ, 3φ
//! - [`voltage_drop`] - Conductor voltage drop over a run
//! - [`reactance`] - Capacitive and inductive reactance, charge
//! - [`transformer`] - FLC, fault current, and kVA sizing
//! - [`pf_correction`] - Capacitor kVAR for power-factor correction
//! - [`motor_flc`] - Motor full-load current estimates
//! - [`conduit_fill`] - Maximum conductors in a raceway
//! - [`box_fill`] - Required box volume
//!
//! The resistance-network builder lives in [`crate::network`] and plugs into
//! the same item enum below.

pub mod box_fill;
pub mod conduit_fill;
pub mod motor_flc;
pub mod ohms_law;
pub mod pf_correction;
pub mod power;
pub mod reactance;
pub mod transformer;
pub mod voltage_drop;

use serde::{Deserialize, Serialize};

use crate::network::NetworkInput;

// Re-export commonly used types
pub use box_fill::{BoxFillInput, BoxFillResult};
pub use conduit_fill::{ConduitFillInput, ConduitFillResult};
pub use motor_flc::{MotorFlcInput, MotorFlcResult, MotorRating};
pub use ohms_law::{OhmsLawInput, OhmsLawResult};
pub use pf_correction::{PfCorrectionInput, PfCorrectionResult};
pub use power::{PowerInput, PowerMode, PowerResult};
pub use reactance::{ReactanceInput, ReactanceResult, ReactanceSolve};
pub use transformer::{
    TransformerInput, TransformerLoad, TransformerResult, TransformerSizingInput,
    TransformerSizingResult,
};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};

/// Supply system for AC/DC-sensitive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Direct current (power factor does not apply)
    #[serde(rename = "dc")]
    Dc,
    /// AC single-phase
    #[serde(rename = "1ph")]
    SinglePhase,
    /// AC three-phase (line-to-line voltages, √3 factor)
    #[serde(rename = "3ph")]
    ThreePhase,
}

impl Phase {
    /// All supply systems for UI selection
    pub const ALL: [Phase; 3] = [Phase::Dc, Phase::SinglePhase, Phase::ThreePhase];

    /// Power equation factor: √3 for three-phase, otherwise 1
    pub fn factor(&self) -> f64 {
        match self {
            Phase::ThreePhase => 3.0_f64.sqrt(),
            _ => 1.0,
        }
    }

    /// Whether power factor applies
    pub fn is_ac(&self) -> bool {
        matches!(self, Phase::SinglePhase | Phase::ThreePhase)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Dc => "DC",
            Phase::SinglePhase => "AC Single-Phase",
            Phase::ThreePhase => "AC Three-Phase",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Ohm's law solve
    OhmsLaw(OhmsLawInput),
    /// Power / horsepower / kVA conversions
    Power(PowerInput),
    /// Conductor voltage drop
    VoltageDrop(VoltageDropInput),
    /// Reactance and capacitance solve
    Reactance(ReactanceInput),
    /// Transformer FLC and fault current
    Transformer(TransformerInput),
    /// Transformer kVA sizing
    TransformerSizing(TransformerSizingInput),
    /// Power-factor correction capacitor sizing
    PfCorrection(PfCorrectionInput),
    /// Motor full-load current
    MotorFlc(MotorFlcInput),
    /// Maximum conductors in conduit
    ConduitFill(ConduitFillInput),
    /// Box fill volume
    BoxFill(BoxFillInput),
    /// Series/parallel resistance network
    ResistanceNetwork(NetworkInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::OhmsLaw(i) => &i.label,
            CalculationItem::Power(i) => &i.label,
            CalculationItem::VoltageDrop(i) => &i.label,
            CalculationItem::Reactance(i) => &i.label,
            CalculationItem::Transformer(i) => &i.label,
            CalculationItem::TransformerSizing(i) => &i.label,
            CalculationItem::PfCorrection(i) => &i.label,
            CalculationItem::MotorFlc(i) => &i.label,
            CalculationItem::ConduitFill(i) => &i.label,
            CalculationItem::BoxFill(i) => &i.label,
            CalculationItem::ResistanceNetwork(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::OhmsLaw(_) => "Ohm's Law",
            CalculationItem::Power(_) => "Power",
            CalculationItem::VoltageDrop(_) => "Voltage Drop",
            CalculationItem::Reactance(_) => "Reactance",
            CalculationItem::Transformer(_) => "Transformer",
            CalculationItem::TransformerSizing(_) => "Transformer Sizing",
            CalculationItem::PfCorrection(_) => "PF Correction",
            CalculationItem::MotorFlc(_) => "Motor FLC",
            CalculationItem::ConduitFill(_) => "Conduit Fill",
            CalculationItem::BoxFill(_) => "Box Fill",
            CalculationItem::ResistanceNetwork(_) => "Resistance Network",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_factor() {
        assert_eq!(Phase::Dc.factor(), 1.0);
        assert_eq!(Phase::SinglePhase.factor(), 1.0);
        assert!((Phase::ThreePhase.factor() - 1.7320508).abs() < 1e-6);
    }

    #[test]
    fn test_phase_serialization() {
        assert_eq!(serde_json::to_string(&Phase::ThreePhase).unwrap(), "\"3ph\"");
        let roundtrip: Phase = serde_json::from_str("\"dc\"").unwrap();
        assert_eq!(roundtrip, Phase::Dc);
    }

    #[test]
    fn test_item_label_and_type() {
        let item = CalculationItem::ResistanceNetwork(NetworkInput::new("Heater bank"));
        assert_eq!(item.label(), "Heater bank");
        assert_eq!(item.calc_type(), "Resistance Network");
    }
}
