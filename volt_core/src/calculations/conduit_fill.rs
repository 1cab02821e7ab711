//! Conduit Fill Calculation
//!
//! Maximum number of one conductor size in a raceway, evaluated against the
//! standard fill percentages: 53% for one conductor, 31% for two, 40% for
//! over two.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConduitType, Insulation, TradeSize, WireSize};

/// The three standard fill rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// One conductor: 53%
    One,
    /// Two conductors: 31%
    Two,
    /// Over two conductors: 40%
    OverTwo,
}

impl FillRule {
    /// All rules in display order
    pub const ALL: [FillRule; 3] = [FillRule::One, FillRule::Two, FillRule::OverTwo];

    /// Allowed fraction of the conduit's internal area
    pub fn fraction(&self) -> f64 {
        match self {
            FillRule::One => 0.53,
            FillRule::Two => 0.31,
            FillRule::OverTwo => 0.40,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            FillRule::One => "1 conductor (53% fill)",
            FillRule::Two => "2 conductors (31% fill)",
            FillRule::OverTwo => "Over 2 conductors (40% fill)",
        }
    }
}

/// Input parameters for a conduit fill check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Branch homeruns",
///   "insulation": "THHN/THWN-2",
///   "wire": "12",
///   "conduit": "EMT",
///   "trade_size": "3/4",
///   "override_area_in2": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConduitFillInput {
    /// User label for this calculation
    pub label: String,

    /// Conductor insulation family
    pub insulation: Insulation,

    /// Conductor size
    pub wire: WireSize,

    /// Raceway family
    pub conduit: ConduitType,

    /// Raceway trade size
    pub trade_size: TradeSize,

    /// Manual conductor-area override in square inches (supersedes the
    /// insulation table when set)
    #[serde(default)]
    pub override_area_in2: Option<f64>,
}

impl ConduitFillInput {
    /// The conductor area in effect: override if set, else the table value.
    fn conductor_area_in2(&self) -> CalcResult<f64> {
        if let Some(area) = self.override_area_in2 {
            if !area.is_finite() || area <= 0.0 {
                return Err(CalcError::invalid_input(
                    "override_area_in2",
                    area.to_string(),
                    "Area must be positive",
                ));
            }
            return Ok(area);
        }
        Ok(self.insulation.area_in2(self.wire)?.0)
    }
}

/// One row of the fill table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRow {
    /// Which rule this row evaluates
    pub rule: FillRule,

    /// Allowable fill area in square inches
    pub allowable_in2: f64,

    /// Maximum whole conductors that fit
    pub max_conductors: u32,
}

/// Results from a conduit fill check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConduitFillResult {
    /// Conductor area used (table or override), in square inches
    pub conductor_area_in2: f64,

    /// Conduit internal area in square inches
    pub conduit_area_in2: f64,

    /// One row per fill rule
    pub rows: Vec<FillRow>,
}

impl ConduitFillResult {
    /// Max conductors under the over-2 rule, the number usually wanted
    pub fn max_over_two(&self) -> u32 {
        self.rows
            .iter()
            .find(|r| r.rule == FillRule::OverTwo)
            .map(|r| r.max_conductors)
            .unwrap_or(0)
    }
}

/// Evaluate all three fill rules.
///
/// # Example
///
/// ```rust
/// use volt_core::calculations::conduit_fill::{calculate, ConduitFillInput};
/// use volt_core::materials::{ConduitType, Insulation, TradeSize, WireSize};
///
/// let input = ConduitFillInput {
///     label: "Demo".to_string(),
///     insulation: Insulation::ThhnThwn2,
///     wire: WireSize::Awg12,
///     conduit: ConduitType::Emt,
///     trade_size: TradeSize::ThreeQuarter,
///     override_area_in2: None,
/// };
/// let result = calculate(&input).unwrap();
/// // 3/4" EMT carries 16 #12 THHN at 40% fill
/// assert_eq!(result.max_over_two(), 16);
/// ```
pub fn calculate(input: &ConduitFillInput) -> CalcResult<ConduitFillResult> {
    let conductor_area = input.conductor_area_in2()?;
    let conduit_area = input.conduit.internal_area_in2(input.trade_size).0;

    let rows = FillRule::ALL
        .iter()
        .map(|rule| {
            let allowable = conduit_area * rule.fraction();
            let max = (allowable / conductor_area).floor();
            FillRow {
                rule: *rule,
                allowable_in2: allowable,
                max_conductors: if max > 0.0 { max as u32 } else { 0 },
            }
        })
        .collect();

    Ok(ConduitFillResult {
        conductor_area_in2: conductor_area,
        conduit_area_in2: conduit_area,
        rows,
    })
}
