//! Power-Factor Correction
//!
//! Capacitor kVAR required to raise a load's power factor, and the
//! resulting capacitor current:
//!
//! Qc = P · (tan(acos PF₁) − tan(acos PF₂))

use serde::{Deserialize, Serialize};

use crate::calculations::Phase;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for capacitor sizing.
///
/// Power factors are entered in percent, matching how they read on a
/// utility bill.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Compressor bank",
///   "phase": "3ph",
///   "real_power_kw": 50.0,
///   "existing_pf_percent": 80.0,
///   "target_pf_percent": 95.0,
///   "volts": 480.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfCorrectionInput {
    /// User label for this calculation
    pub label: String,

    /// Supply system
    pub phase: Phase,

    /// Real power of the load in kW
    pub real_power_kw: f64,

    /// Measured power factor in percent (0-100 exclusive)
    pub existing_pf_percent: f64,

    /// Desired power factor in percent (0-100 exclusive)
    pub target_pf_percent: f64,

    /// System voltage, used for the capacitor current estimate
    pub volts: f64,
}

fn pf_fraction(field: &str, percent: f64) -> CalcResult<f64> {
    let p = percent / 100.0;
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(CalcError::invalid_input(
            field,
            percent.to_string(),
            "PF must be between 1% and 99%",
        ));
    }
    Ok(p)
}

impl PfCorrectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.real_power_kw.is_finite() || self.real_power_kw <= 0.0 {
            return Err(CalcError::invalid_input(
                "real_power_kw",
                self.real_power_kw.to_string(),
                "Real power must be positive",
            ));
        }
        let pf1 = pf_fraction("existing_pf_percent", self.existing_pf_percent)?;
        let pf2 = pf_fraction("target_pf_percent", self.target_pf_percent)?;
        if pf2 <= pf1 {
            return Err(CalcError::invalid_input(
                "target_pf_percent",
                self.target_pf_percent.to_string(),
                "Target PF must be greater than existing PF",
            ));
        }
        if !self.volts.is_finite() || self.volts <= 0.0 {
            return Err(CalcError::invalid_input(
                "volts",
                self.volts.to_string(),
                "Voltage must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from capacitor sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfCorrectionResult {
    /// Required capacitor bank in kVAR
    pub kvar_required: f64,

    /// Estimated capacitor current in amperes
    pub capacitor_amps: f64,

    /// Existing power factor as a fraction
    pub existing_pf: f64,

    /// Target power factor as a fraction
    pub target_pf: f64,
}

/// Size the capacitor bank.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::pf_correction::{calculate, PfCorrectionInput};
/// use volt_core::calculations::Phase;
///
/// let input = PfCorrectionInput {
///     label: "Demo".to_string(),
///     phase: Phase::ThreePhase,
///     real_power_kw: 50.0,
///     existing_pf_percent: 80.0,
///     target_pf_percent: 95.0,
///     volts: 480.0,
/// };
/// let result = calculate(&input).unwrap();
/// // 50·(tan(acos 0.8) − tan(acos 0.95)) ≈ 21.1 kVAR
/// assert!((result.kvar_required - 21.07).abs() < 0.05);
/// ```
pub fn calculate(input: &PfCorrectionInput) -> CalcResult<PfCorrectionResult> {
    input.validate()?;

    let pf1 = input.existing_pf_percent / 100.0;
    let pf2 = input.target_pf_percent / 100.0;

    let kvar = input.real_power_kw * (pf1.acos().tan() - pf2.acos().tan());
    let capacitor_amps = kvar * 1000.0 / (input.phase.factor() * input.volts);

    Ok(PfCorrectionResult {
        kvar_required: kvar,
        capacitor_amps,
        existing_pf: pf1,
        target_pf: pf2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PfCorrectionInput {
        PfCorrectionInput {
            label: "Test".to_string(),
            phase: Phase::ThreePhase,
            real_power_kw: 50.0,
            existing_pf_percent: 80.0,
            target_pf_percent: 95.0,
            volts: 480.0,
        }
    }

    #[test]
    fn test_kvar_for_80_to_95() {
        let result = calculate(&base()).unwrap();
        // tan(acos 0.8) = 0.75, tan(acos 0.95) ≈ 0.3287
        let expected = 50.0 * (0.75 - 0.95_f64.acos().tan());
        assert!((result.kvar_required - expected).abs() < 1e-9);
        assert!((result.kvar_required - 21.07).abs() < 0.05);
    }

    #[test]
    fn test_capacitor_current() {
        let result = calculate(&base()).unwrap();
        let expected = result.kvar_required * 1000.0 / (3.0_f64.sqrt() * 480.0);
        assert!((result.capacitor_amps - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_phase_current_larger() {
        let mut single = base();
        single.phase = Phase::SinglePhase;
        let i3 = calculate(&base()).unwrap().capacitor_amps;
        let i1 = calculate(&single).unwrap().capacitor_amps;
        assert!(i1 > i3);
    }

    #[test]
    fn test_target_must_exceed_existing() {
        let mut input = base();
        input.target_pf_percent = 80.0;
        assert!(calculate(&input).is_err());
        input.target_pf_percent = 70.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_pf_bounds() {
        let mut input = base();
        input.existing_pf_percent = 0.0;
        assert!(calculate(&input).is_err());
        input.existing_pf_percent = 100.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = base();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PfCorrectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.real_power_kw, roundtrip.real_power_kw);
    }
}
