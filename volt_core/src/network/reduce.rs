//! Equivalent Resistance Reducer
//!
//! Post-order reduction of a network tree to a single resistance in ohms.
//! Validation happens here, not at edit time: a resistor holds whatever
//! string the user typed until the moment a number is actually needed.
//!
//! The traversal stops at the first invalid node in child order and returns
//! that error unchanged; sibling errors are not collected. The caller shows
//! the one message, the user fixes the named node, and the next keystroke
//! reduces again.

use super::Node;
use crate::errors::{CalcError, CalcResult};
use crate::units::Ohms;

/// Compute the equivalent resistance of a (sub)tree in ohms.
///
/// * Resistor leaf: parse the value string, require a finite number > 0,
///   scale by the unit.
/// * Series group: sum of reduced children.
/// * Parallel group: reciprocal of the summed reciprocals.
/// * Any empty group fails, naming the group's label.
///
/// # Example
///
/// ```rust
/// use volt_core::network::{default_tree, reduce};
///
/// let total = reduce(&default_tree()).unwrap();
/// assert!((total.0 - 22.0).abs() < 1e-9);
/// ```
pub fn reduce(node: &Node) -> CalcResult<Ohms> {
    match node {
        Node::Resistor(r) => {
            let parsed: f64 = r.value.trim().parse().unwrap_or(f64::NAN);
            if !parsed.is_finite() || parsed <= 0.0 {
                return Err(CalcError::invalid_resistor(&r.label, &r.value));
            }
            Ok(Ohms(parsed * r.unit.multiplier()))
        }
        Node::Series(g) => {
            if g.children.is_empty() {
                return Err(CalcError::empty_group(&g.label));
            }
            let mut total = 0.0;
            for child in &g.children {
                total += reduce(child)?.0;
            }
            Ok(Ohms(total))
        }
        Node::Parallel(g) => {
            if g.children.is_empty() {
                return Err(CalcError::empty_group(&g.label));
            }
            let mut reciprocal = 0.0;
            for child in &g.children {
                reciprocal += 1.0 / reduce(child)?.0;
            }
            // Unreachable while leaves must be > 0, but keeps the function
            // total if that invariant ever loosens.
            if reciprocal == 0.0 {
                return Err(CalcError::undefined_parallel(&g.label));
            }
            Ok(Ohms(1.0 / reciprocal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{GroupNode, Node, ResistanceUnit, ResistorNode};

    const TOL: f64 = 1e-9;

    fn resistor(label: &str, value: &str, unit: ResistanceUnit) -> Node {
        Node::Resistor(ResistorNode::new(label, value, unit))
    }

    fn ohm(label: &str, value: &str) -> Node {
        resistor(label, value, ResistanceUnit::Ohms)
    }

    fn series(label: &str, children: Vec<Node>) -> Node {
        let mut group = GroupNode::new(label);
        group.children = children;
        Node::Series(group)
    }

    fn parallel(label: &str, children: Vec<Node>) -> Node {
        let mut group = GroupNode::new(label);
        group.children = children;
        Node::Parallel(group)
    }

    #[test]
    fn test_single_resistor() {
        let r = ohm("R1", "470");
        assert!((reduce(&r).unwrap().0 - 470.0).abs() < TOL);
    }

    #[test]
    fn test_series_additivity() {
        let values = [4.7, 10.0, 22.0, 100.0, 0.5];
        let leaves = values
            .iter()
            .enumerate()
            .map(|(i, v)| ohm(&format!("R{}", i + 1), &v.to_string()))
            .collect();
        let total = reduce(&series("Chain", leaves)).unwrap();
        assert!((total.0 - values.iter().sum::<f64>()).abs() < TOL);
    }

    #[test]
    fn test_parallel_reciprocal_law() {
        let values = [10.0, 20.0, 40.0];
        let leaves = values
            .iter()
            .enumerate()
            .map(|(i, v)| ohm(&format!("R{}", i + 1), &v.to_string()))
            .collect();
        let total = reduce(&parallel("Bank", leaves)).unwrap();
        let expected = 1.0 / values.iter().map(|v| 1.0 / v).sum::<f64>();
        assert!((total.0 - expected).abs() < TOL);
    }

    #[test]
    fn test_unit_scaling_equivalence() {
        let in_kilohms = resistor("R1", "1", ResistanceUnit::KiloOhms);
        let in_ohms = ohm("R1", "1000");
        assert_eq!(reduce(&in_kilohms).unwrap(), reduce(&in_ohms).unwrap());

        let in_megohms = resistor("R1", "2.2", ResistanceUnit::MegaOhms);
        assert!((reduce(&in_megohms).unwrap().0 - 2_200_000.0).abs() < TOL);
    }

    #[test]
    fn test_nesting_through_single_child_wrappers() {
        // parallel[R1, R2] alone...
        let bare = parallel("P", vec![ohm("R1", "30"), ohm("R2", "60")]);
        let expected = 30.0 * 60.0 / (30.0 + 60.0);
        assert!((reduce(&bare).unwrap().0 - expected).abs() < TOL);

        // ...and buried under two single-child series wrappers
        let wrapped = series(
            "Outer",
            vec![series(
                "Inner",
                vec![parallel("P", vec![ohm("R1", "30"), ohm("R2", "60")])],
            )],
        );
        assert!((reduce(&wrapped).unwrap().0 - expected).abs() < TOL);
    }

    #[test]
    fn test_child_order_independence() {
        let forward = parallel("P", vec![ohm("R1", "10"), ohm("R2", "20"), ohm("R3", "30")]);
        let backward = parallel("P", vec![ohm("R3", "30"), ohm("R2", "20"), ohm("R1", "10")]);
        assert!((reduce(&forward).unwrap().0 - reduce(&backward).unwrap().0).abs() < TOL);

        let forward = series("S", vec![ohm("R1", "10"), ohm("R2", "20")]);
        let backward = series("S", vec![ohm("R2", "20"), ohm("R1", "10")]);
        assert_eq!(reduce(&forward).unwrap(), reduce(&backward).unwrap());
    }

    #[test]
    fn test_empty_group_fails() {
        let err = reduce(&series("Total", vec![])).unwrap_err();
        assert_eq!(err, CalcError::empty_group("Total"));

        let err = reduce(&parallel("Branch A", vec![])).unwrap_err();
        assert_eq!(err, CalcError::empty_group("Branch A"));
    }

    #[test]
    fn test_zero_value_resistor_fails() {
        let err = reduce(&series("Total", vec![ohm("R1", "0")])).unwrap_err();
        assert_eq!(err, CalcError::invalid_resistor("R1", "0"));
    }

    #[test]
    fn test_blank_and_garbage_values_fail_with_label() {
        for bad in ["", "  ", "abc", "-5", "inf", "nan"] {
            let err = reduce(&ohm("R7", bad)).unwrap_err();
            match err {
                CalcError::InvalidResistor { label, .. } => assert_eq!(label, "R7"),
                other => panic!("expected InvalidResistor, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_first_failure_in_child_order_wins() {
        let tree = series(
            "Total",
            vec![ohm("Good", "10"), ohm("BadA", "x"), ohm("BadB", "y")],
        );
        let err = reduce(&tree).unwrap_err();
        assert_eq!(err, CalcError::invalid_resistor("BadA", "x"));
    }

    #[test]
    fn test_failure_propagates_unchanged_from_depth() {
        let tree = series(
            "Total",
            vec![parallel("Branch", vec![series("Deep", vec![])])],
        );
        let err = reduce(&tree).unwrap_err();
        assert_eq!(err, CalcError::empty_group("Deep"));
    }

    #[test]
    fn test_concrete_scenario_mixed() {
        // series[ R1=10Ω, parallel[ R2=20Ω, R3=30Ω ] ] = 10 + 20*30/50 = 22 Ω
        let tree = series(
            "Total",
            vec![
                ohm("R1", "10"),
                parallel("Branch A", vec![ohm("R2", "20"), ohm("R3", "30")]),
            ],
        );
        assert!((reduce(&tree).unwrap().0 - 22.0).abs() < TOL);
    }

    #[test]
    fn test_concrete_scenario_equal_parallel() {
        let tree = parallel("P", vec![ohm("R1", "100"), ohm("R2", "100")]);
        assert!((reduce(&tree).unwrap().0 - 50.0).abs() < TOL);
    }

    #[test]
    fn test_reduce_does_not_mutate() {
        let tree = series("Total", vec![ohm("R1", "10")]);
        let before = tree.clone();
        let _ = reduce(&tree);
        assert_eq!(tree, before);
    }
}
