//! Tree Construction and Edit Operations
//!
//! Every operation here is pure: it takes the prior tree by reference and
//! returns a new tree value. Callers that keep undo history can hold old
//! snapshots without aliasing hazards.
//!
//! Operations addressed at a missing id, or at a parent that cannot accept
//! children, return the tree unchanged rather than erroring. This mirrors
//! how the builder UI drives the model: buttons for invalid targets simply
//! are not rendered, so a miss means a stale id, not a bug worth surfacing.

use uuid::Uuid;

use super::{GroupNode, Node, ResistanceUnit, ResistorNode};

/// Find a node by id, depth-first, including the root itself.
pub fn find_node(root: &Node, id: Uuid) -> Option<&Node> {
    if root.id() == id {
        return Some(root);
    }
    for child in root.children() {
        if let Some(hit) = find_node(child, id) {
            return Some(hit);
        }
    }
    None
}

fn find_node_mut(root: &mut Node, id: Uuid) -> Option<&mut Node> {
    if root.id() == id {
        return Some(root);
    }
    root.children_mut()?
        .iter_mut()
        .find_map(|child| find_node_mut(child, id))
}

/// Append `child` to the children of the group with `parent_id`.
///
/// No-op if the parent is a resistor or the id is not in the tree.
pub fn add_child(root: &Node, parent_id: Uuid, child: Node) -> Node {
    let mut tree = root.clone();
    if let Some(parent) = find_node_mut(&mut tree, parent_id) {
        if let Some(children) = parent.children_mut() {
            children.push(child);
        }
    }
    tree
}

/// Apply a field-level edit to the node with `id` on a fresh copy of the
/// tree. No-op if the id is not found.
///
/// # Example
///
/// ```rust
/// use volt_core::network::{default_tree, find_node, update_node, Node};
///
/// let tree = default_tree();
/// let id = tree.id();
/// let renamed = update_node(&tree, id, |node| {
///     if let Node::Series(group) = node {
///         group.label = "Whole circuit".to_string();
///     }
/// });
/// assert_eq!(find_node(&renamed, id).unwrap().label(), "Whole circuit");
/// ```
pub fn update_node(root: &Node, id: Uuid, mutate: impl FnOnce(&mut Node)) -> Node {
    let mut tree = root.clone();
    if let Some(target) = find_node_mut(&mut tree, id) {
        mutate(target);
    }
    tree
}

/// Remove the node with `id` (and its whole subtree) from its parent.
///
/// Deleting the root id is a no-op, as is deleting an unknown id.
pub fn delete_node(root: &Node, id: Uuid) -> Node {
    let mut tree = root.clone();
    if tree.id() == id {
        return tree;
    }
    prune(&mut tree, id);
    tree
}

fn prune(node: &mut Node, id: Uuid) {
    if let Some(children) = node.children_mut() {
        children.retain(|child| child.id() != id);
        for child in children {
            prune(child, id);
        }
    }
}

/// Add a fresh resistor under `parent_id` with an auto-numbered label and a
/// blank value (the user fills it in afterwards).
pub fn add_resistor(root: &Node, parent_id: Uuid) -> Node {
    let label = format!("R{}", count_resistors(root) + 1);
    add_child(
        root,
        parent_id,
        Node::Resistor(ResistorNode::new(label, "", ResistanceUnit::Ohms)),
    )
}

/// Add a fresh empty series group under `parent_id`.
pub fn add_series_group(root: &Node, parent_id: Uuid) -> Node {
    add_child(root, parent_id, Node::Series(GroupNode::new("Series group")))
}

/// Add a fresh empty parallel group under `parent_id`.
pub fn add_parallel_group(root: &Node, parent_id: Uuid) -> Node {
    add_child(root, parent_id, Node::Parallel(GroupNode::new("Parallel group")))
}

/// Rename the node with `id`.
pub fn set_label(root: &Node, id: Uuid, label: impl Into<String>) -> Node {
    let label = label.into();
    update_node(root, id, |node| match node {
        Node::Resistor(r) => r.label = label,
        Node::Series(g) | Node::Parallel(g) => g.label = label,
    })
}

/// Set the raw value string of the resistor with `id`. No-op on groups.
pub fn set_resistor_value(root: &Node, id: Uuid, value: impl Into<String>) -> Node {
    let value = value.into();
    update_node(root, id, |node| {
        if let Node::Resistor(r) = node {
            r.value = value;
        }
    })
}

/// Set the unit of the resistor with `id`. No-op on groups.
pub fn set_resistor_unit(root: &Node, id: Uuid, unit: ResistanceUnit) -> Node {
    update_node(root, id, |node| {
        if let Node::Resistor(r) = node {
            r.unit = unit;
        }
    })
}

/// The example tree new networks start from:
/// series[ R1=10Ω, parallel[ R2=20Ω, R3=30Ω ] ].
pub fn default_tree() -> Node {
    Node::Series(GroupNode {
        id: Uuid::new_v4(),
        label: "Total".to_string(),
        children: vec![
            Node::Resistor(ResistorNode::new("R1", "10", ResistanceUnit::Ohms)),
            Node::Parallel(GroupNode {
                id: Uuid::new_v4(),
                label: "Branch A".to_string(),
                children: vec![
                    Node::Resistor(ResistorNode::new("R2", "20", ResistanceUnit::Ohms)),
                    Node::Resistor(ResistorNode::new("R3", "30", ResistanceUnit::Ohms)),
                ],
            }),
        ],
    })
}

fn count_resistors(node: &Node) -> usize {
    match node {
        Node::Resistor(_) => 1,
        _ => node.children().iter().map(count_resistors).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_group_child_id(tree: &Node) -> Uuid {
        tree.children()
            .iter()
            .find(|c| c.is_group())
            .expect("tree has a group child")
            .id()
    }

    #[test]
    fn test_find_includes_root() {
        let tree = default_tree();
        let found = find_node(&tree, tree.id()).unwrap();
        assert_eq!(found.id(), tree.id());
    }

    #[test]
    fn test_find_nested() {
        let tree = default_tree();
        let branch = first_group_child_id(&tree);
        let found = find_node(&tree, branch).unwrap();
        assert_eq!(found.label(), "Branch A");
    }

    #[test]
    fn test_find_unknown_id() {
        let tree = default_tree();
        assert!(find_node(&tree, Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_add_resistor_to_nested_group() {
        let tree = default_tree();
        let branch = first_group_child_id(&tree);

        let updated = add_resistor(&tree, branch);
        let group = find_node(&updated, branch).unwrap();
        assert_eq!(group.children().len(), 3);
        // Labels auto-number past the existing resistors
        assert_eq!(group.children()[2].label(), "R4");

        // Input tree untouched
        assert_eq!(find_node(&tree, branch).unwrap().children().len(), 2);
    }

    #[test]
    fn test_add_child_to_resistor_is_noop() {
        let tree = default_tree();
        let resistor_id = tree.children()[0].id();

        let updated = add_resistor(&tree, resistor_id);
        assert_eq!(updated, tree);
    }

    #[test]
    fn test_add_child_to_unknown_parent_is_noop() {
        let tree = default_tree();
        let updated = add_series_group(&tree, Uuid::new_v4());
        assert_eq!(updated, tree);
    }

    #[test]
    fn test_added_groups_start_empty() {
        let tree = default_tree();
        let updated = add_parallel_group(&tree, tree.id());
        let added = updated.children().last().unwrap();
        assert!(added.is_group());
        assert!(added.children().is_empty());
        assert_eq!(added.label(), "Parallel group");
    }

    #[test]
    fn test_update_resistor_value_and_unit() {
        let tree = default_tree();
        let r1 = tree.children()[0].id();

        let updated = set_resistor_value(&tree, r1, "47");
        let updated = set_resistor_unit(&updated, r1, ResistanceUnit::KiloOhms);

        match find_node(&updated, r1).unwrap() {
            Node::Resistor(r) => {
                assert_eq!(r.value, "47");
                assert_eq!(r.unit, ResistanceUnit::KiloOhms);
            }
            _ => panic!("expected resistor"),
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let tree = default_tree();
        let updated = set_label(&tree, Uuid::new_v4(), "nope");
        assert_eq!(updated, tree);
    }

    #[test]
    fn test_delete_removes_exactly_that_subtree() {
        let tree = default_tree();
        let branch = first_group_child_id(&tree);

        let updated = delete_node(&tree, branch);
        assert!(find_node(&updated, branch).is_none());
        // The sibling resistor survives
        assert_eq!(updated.children().len(), 1);
        assert_eq!(updated.children()[0].label(), "R1");
    }

    #[test]
    fn test_delete_nested_leaf() {
        let tree = default_tree();
        let branch = first_group_child_id(&tree);
        let r2 = find_node(&tree, branch).unwrap().children()[0].id();

        let updated = delete_node(&tree, r2);
        let group = find_node(&updated, branch).unwrap();
        assert_eq!(group.children().len(), 1);
        assert_eq!(group.children()[0].label(), "R3");
    }

    #[test]
    fn test_delete_root_is_noop() {
        let tree = default_tree();
        let updated = delete_node(&tree, tree.id());
        assert_eq!(updated, tree);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let tree = default_tree();
        let updated = delete_node(&tree, Uuid::new_v4());
        assert_eq!(updated, tree);
    }
}
