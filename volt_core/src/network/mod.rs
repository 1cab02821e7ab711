//! # Resistance Network
//!
//! A user-built tree of series/parallel resistor groups and the reducer that
//! collapses it to a single equivalent resistance.
//!
//! ## Structure
//!
//! ```text
//! Node (enum)
//! ├── Resistor: leaf with a free-form value string and a unit
//! ├── Series:   group whose children combine additively
//! └── Parallel: group whose children combine by reciprocal sum
//! ```
//!
//! The tree has exactly one root, which is always a group. Every edit
//! operation is pure: it takes the prior tree by reference and returns a new
//! tree, so an undo history can hold old snapshots safely.
//!
//! Resistor values are kept as the raw strings the user typed. A value may
//! be blank or garbage mid-edit; it is only validated when the tree is
//! reduced, and the resulting error names the offending node's label.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::network::{default_tree, reduce};
//!
//! // series[ R1=10Ω, parallel[ R2=20Ω, R3=30Ω ] ]
//! let tree = default_tree();
//! let total = reduce(&tree).unwrap();
//! assert!((total.0 - 22.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - tree construction and pure edit operations
//! - [`reduce`] - the post-order reducer
//! - [`diagram`] - textual tree rendering and ohm formatting

pub mod diagram;
pub mod model;
pub mod reduce;

// Re-export the full working surface at the module root
pub use diagram::{diagram, format_ohms};
pub use model::{
    add_child, add_parallel_group, add_resistor, add_series_group, default_tree, delete_node,
    find_node, set_label, set_resistor_unit, set_resistor_value, update_node,
};
pub use reduce::reduce;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CalcResult;

/// Units a resistor value can be entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResistanceUnit {
    #[serde(rename = "Ω")]
    Ohms,
    #[serde(rename = "kΩ")]
    KiloOhms,
    #[serde(rename = "MΩ")]
    MegaOhms,
}

impl ResistanceUnit {
    /// All units for UI selection
    pub const ALL: [ResistanceUnit; 3] = [
        ResistanceUnit::Ohms,
        ResistanceUnit::KiloOhms,
        ResistanceUnit::MegaOhms,
    ];

    /// Scale factor to ohms
    pub fn multiplier(&self) -> f64 {
        match self {
            ResistanceUnit::Ohms => 1.0,
            ResistanceUnit::KiloOhms => 1_000.0,
            ResistanceUnit::MegaOhms => 1_000_000.0,
        }
    }

    /// Unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ResistanceUnit::Ohms => "Ω",
            ResistanceUnit::KiloOhms => "kΩ",
            ResistanceUnit::MegaOhms => "MΩ",
        }
    }
}

impl std::fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A leaf node: one physical resistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorNode {
    /// Unique across the whole tree, assigned at creation
    pub id: Uuid,
    /// User label (e.g. "R1")
    pub label: String,
    /// Raw numeric input as typed; validated only at reduction time
    pub value: String,
    /// Unit the value is entered in
    pub unit: ResistanceUnit,
}

impl ResistorNode {
    /// Create a resistor with a fresh id.
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: ResistanceUnit) -> Self {
        ResistorNode {
            id: Uuid::new_v4(),
            label: label.into(),
            value: value.into(),
            unit,
        }
    }
}

/// An internal node: an ordered collection of children combined in series
/// or parallel (the combination rule lives on the enclosing [`Node`] variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Unique across the whole tree, assigned at creation
    pub id: Uuid,
    /// User label (e.g. "Branch A")
    pub label: String,
    /// Children in display order; order never affects the reduced value
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Create an empty group with a fresh id.
    pub fn new(label: impl Into<String>) -> Self {
        GroupNode {
            id: Uuid::new_v4(),
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// One node of a resistance network.
///
/// Matched exhaustively everywhere the tree is traversed, so adding a node
/// kind is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A single resistor (leaf)
    Resistor(ResistorNode),
    /// End-to-end combination: resistances add
    Series(GroupNode),
    /// Branch combination: reciprocal resistances add
    Parallel(GroupNode),
}

impl Node {
    /// This node's unique id
    pub fn id(&self) -> Uuid {
        match self {
            Node::Resistor(r) => r.id,
            Node::Series(g) | Node::Parallel(g) => g.id,
        }
    }

    /// This node's user label
    pub fn label(&self) -> &str {
        match self {
            Node::Resistor(r) => &r.label,
            Node::Series(g) | Node::Parallel(g) => &g.label,
        }
    }

    /// Whether this node can hold children
    pub fn is_group(&self) -> bool {
        !matches!(self, Node::Resistor(_))
    }

    /// Children of a group, empty slice for a resistor
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Resistor(_) => &[],
            Node::Series(g) | Node::Parallel(g) => &g.children,
        }
    }

    /// Mutable children for a group, `None` for a resistor
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Resistor(_) => None,
            Node::Series(g) | Node::Parallel(g) => Some(&mut g.children),
        }
    }

    /// One-character badge for compact display (R / Σ / ∥)
    pub fn badge(&self) -> &'static str {
        match self {
            Node::Resistor(_) => "R",
            Node::Series(_) => "Σ",
            Node::Parallel(_) => "∥",
        }
    }

    /// Node kind as a display string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Resistor(_) => "Resistor",
            Node::Series(_) => "Series group",
            Node::Parallel(_) => "Parallel group",
        }
    }
}

/// A saved resistance-network calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Heater bank",
///   "root": {
///     "type": "Series",
///     "id": "c7a0…",
///     "label": "Total",
///     "children": [
///       { "type": "Resistor", "id": "…", "label": "R1", "value": "10", "unit": "Ω" }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInput {
    /// User label for this network (e.g. "Heater bank")
    pub label: String,

    /// Root of the tree; always a group, never deleted
    pub root: Node,
}

impl NetworkInput {
    /// Create a network seeded with the default example tree.
    pub fn new(label: impl Into<String>) -> Self {
        NetworkInput {
            label: label.into(),
            root: default_tree(),
        }
    }
}

/// Results from reducing a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkResult {
    /// Equivalent resistance in ohms
    pub total_ohms: f64,

    /// Human-scaled rendering (Ω / kΩ / MΩ)
    pub formatted: String,

    /// Indented structure listing for display
    pub diagram: Vec<String>,
}

/// Reduce a network to its equivalent resistance.
///
/// # Returns
///
/// * `Ok(NetworkResult)` - the equivalent resistance with display helpers
/// * `Err(CalcError)` - validation failure naming the offending node
pub fn calculate(input: &NetworkInput) -> CalcResult<NetworkResult> {
    let total = reduce(&input.root)?;
    Ok(NetworkResult {
        total_ohms: total.0,
        formatted: format_ohms(total.0),
        diagram: diagram(&input.root),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_multipliers() {
        assert_eq!(ResistanceUnit::Ohms.multiplier(), 1.0);
        assert_eq!(ResistanceUnit::KiloOhms.multiplier(), 1_000.0);
        assert_eq!(ResistanceUnit::MegaOhms.multiplier(), 1_000_000.0);
    }

    #[test]
    fn test_unit_serialization_uses_symbols() {
        let json = serde_json::to_string(&ResistanceUnit::KiloOhms).unwrap();
        assert_eq!(json, "\"kΩ\"");
        let roundtrip: ResistanceUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ResistanceUnit::KiloOhms);
    }

    #[test]
    fn test_node_ids_are_unique() {
        let a = ResistorNode::new("R1", "10", ResistanceUnit::Ohms);
        let b = ResistorNode::new("R1", "10", ResistanceUnit::Ohms);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_node_accessors() {
        let r = Node::Resistor(ResistorNode::new("R1", "10", ResistanceUnit::Ohms));
        assert!(!r.is_group());
        assert_eq!(r.badge(), "R");
        assert!(r.children().is_empty());

        let g = Node::Parallel(GroupNode::new("Branch A"));
        assert!(g.is_group());
        assert_eq!(g.badge(), "∥");
        assert_eq!(g.label(), "Branch A");
    }

    #[test]
    fn test_network_calculate() {
        let input = NetworkInput::new("Demo");
        let result = calculate(&input).unwrap();
        assert!((result.total_ohms - 22.0).abs() < 1e-9);
        assert_eq!(result.formatted, "22.0000 Ω");
        assert!(!result.diagram.is_empty());
    }

    #[test]
    fn test_network_serialization() {
        let input = NetworkInput::new("Demo");
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"type\": \"Series\""));
        let roundtrip: NetworkInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
