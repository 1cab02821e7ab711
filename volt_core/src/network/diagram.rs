//! Display Helpers
//!
//! Ohm formatting with human scaling and the indented text diagram the
//! front ends print next to the builder.

use super::Node;

/// Format a resistance in ohms with magnitude scaling.
///
/// Thresholds are fixed: ≥ 1,000,000 renders in MΩ, ≥ 1,000 in kΩ,
/// everything else in Ω. Non-finite values render as an em-dash placeholder.
///
/// # Example
///
/// ```rust
/// use volt_core::network::format_ohms;
///
/// assert_eq!(format_ohms(22.0), "22.0000 Ω");
/// assert_eq!(format_ohms(4_700.0), "4.7000 kΩ");
/// assert_eq!(format_ohms(2_200_000.0), "2.2000 MΩ");
/// ```
pub fn format_ohms(ohms: f64) -> String {
    if !ohms.is_finite() {
        return "—".to_string();
    }
    let magnitude = ohms.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.4} MΩ", ohms / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.4} kΩ", ohms / 1_000.0)
    } else {
        format!("{:.4} Ω", ohms)
    }
}

/// Render the tree as indented text lines, two spaces per depth level.
///
/// ```text
/// └─ SERIES: Total
///   └─ R(R1)
///   └─ PARALLEL: Branch A
///     └─ R(R2)
///     └─ R(R3)
/// ```
pub fn diagram(node: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(node, 0, &mut lines);
    lines
}

fn push_lines(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Resistor(r) => lines.push(format!("{pad}└─ R({})", r.label)),
        Node::Series(g) => {
            lines.push(format!("{pad}└─ SERIES: {}", g.label));
            for child in &g.children {
                push_lines(child, depth + 1, lines);
            }
        }
        Node::Parallel(g) => {
            lines.push(format!("{pad}└─ PARALLEL: {}", g.label));
            for child in &g.children {
                push_lines(child, depth + 1, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::default_tree;

    #[test]
    fn test_format_thresholds() {
        assert_eq!(format_ohms(999.9), "999.9000 Ω");
        assert_eq!(format_ohms(1_000.0), "1.0000 kΩ");
        assert_eq!(format_ohms(999_999.0), "999.9990 kΩ");
        assert_eq!(format_ohms(1_000_000.0), "1.0000 MΩ");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_ohms(f64::NAN), "—");
        assert_eq!(format_ohms(f64::INFINITY), "—");
    }

    #[test]
    fn test_diagram_of_default_tree() {
        let lines = diagram(&default_tree());
        assert_eq!(
            lines,
            vec![
                "└─ SERIES: Total",
                "  └─ R(R1)",
                "  └─ PARALLEL: Branch A",
                "    └─ R(R2)",
                "    └─ R(R3)",
            ]
        );
    }

    #[test]
    fn test_diagram_order_follows_children() {
        let tree = default_tree();
        let lines = diagram(&tree);
        // R1 renders before the parallel branch, mirroring child order
        let r1 = lines.iter().position(|l| l.contains("R1")).unwrap();
        let branch = lines.iter().position(|l| l.contains("PARALLEL")).unwrap();
        assert!(r1 < branch);
    }
}
