//! # Unit Types
//!
//! Type-safe wrappers for electrical units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Field electrical work uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Conventions
//!
//! Voltcalc works in the units electricians actually write on a panel
//! schedule:
//! - Potential: volts (V)
//! - Current: amperes (A)
//! - Resistance: ohms (Ω), kilohms (kΩ), megohms (MΩ)
//! - Power: watts (W), kilowatts (kW)
//! - Apparent/reactive power: kilovolt-amperes (kVA), kilovars (kVAR)
//! - Frequency: hertz (Hz)
//! - Conductor runs: feet (ft)
//! - Raceway/box cross sections: square inches (in²), cubic inches (in³)
//!
//! ## Example
//!
//! ```rust
//! use volt_core::units::{KiloOhms, Ohms};
//!
//! let r = KiloOhms(4.7);
//! let ohms: Ohms = r.into();
//! assert_eq!(ohms.0, 4700.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Potential and Current
// ============================================================================

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

// ============================================================================
// Resistance Units
// ============================================================================

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

/// Resistance in kilohms (1 kΩ = 1000 Ω)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloOhms(pub f64);

/// Resistance in megohms (1 MΩ = 1,000,000 Ω)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaOhms(pub f64);

impl From<KiloOhms> for Ohms {
    fn from(k: KiloOhms) -> Self {
        Ohms(k.0 * 1_000.0)
    }
}

impl From<Ohms> for KiloOhms {
    fn from(r: Ohms) -> Self {
        KiloOhms(r.0 / 1_000.0)
    }
}

impl From<MegaOhms> for Ohms {
    fn from(m: MegaOhms) -> Self {
        Ohms(m.0 * 1_000_000.0)
    }
}

impl From<Ohms> for MegaOhms {
    fn from(r: Ohms) -> Self {
        MegaOhms(r.0 / 1_000_000.0)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Real power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Real power in kilowatts (1 kW = 1000 W)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Apparent power in kilovolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloVoltAmps(pub f64);

/// Reactive power in kilovars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilovars(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1_000.0)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1_000.0)
    }
}

// ============================================================================
// Frequency
// ============================================================================

/// Frequency in hertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub f64);

// ============================================================================
// Length and Section Units
// ============================================================================

/// Conductor run length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Cross-sectional area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Box volume in cubic inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuIn(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Volts);
impl_arithmetic!(Amps);
impl_arithmetic!(Ohms);
impl_arithmetic!(KiloOhms);
impl_arithmetic!(MegaOhms);
impl_arithmetic!(Watts);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(KiloVoltAmps);
impl_arithmetic!(Kilovars);
impl_arithmetic!(Hertz);
impl_arithmetic!(Feet);
impl_arithmetic!(SqIn);
impl_arithmetic!(CuIn);
