//! # Materials Database
//!
//! Conductor, raceway, and metal property lookups for field electrical work.
//!
//! ## Material Types
//!
//! - **Conductors**: AWG/kcmil wire sizes, copper and aluminum resistivity,
//!   insulated-conductor cross sections (THHN/THWN-2, XHHW-2, RHH/RHW-2)
//! - **Raceways**: internal areas for EMT, RMC/IMC, and PVC Sch 40 conduit,
//!   plus box-fill volume allowances
//! - **Metals**: specific gravity, melting point, conductivity (% IACS), and
//!   density for common metals and alloys
//!
//! ## Example
//!
//! ```rust
//! use volt_core::materials::{ConductorMaterial, WireSize};
//!
//! let size = WireSize::Awg12;
//! let cmil = size.circular_mils();
//! assert!((cmil - 6530.0).abs() < 10.0);
//!
//! let copper = ConductorMaterial::Copper;
//! assert!(copper.resistivity_ohm_m() < ConductorMaterial::Aluminum.resistivity_ohm_m());
//! ```

pub mod conductors;
pub mod metals;
pub mod raceways;

// Re-export conductor types
pub use conductors::{ConductorMaterial, Insulation, WireSize};

// Re-export raceway types
pub use raceways::{box_volume_allowance, ConduitType, TradeSize};

// Re-export metal property types
pub use metals::{find_metal, Metal, METALS};
