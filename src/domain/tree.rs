//! Tree builder: converts a flat node snapshot into an ordered forest.
//!
//! Pure in-memory transformation. Input is an unordered collection of nodes
//! carrying parent back-references, output is a new immutable forest value.
//! No state survives between calls.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{Node, NodeId};
use crate::domain::order::sibling_order;

/// A node together with its recursively ordered children.
///
/// Childless nodes carry an empty (not absent) children sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTree {
    #[serde(flatten)]
    pub node: Node,
    pub children: Vec<ItemTree>,
}

impl ItemTree {
    fn leaf(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this tree, including the root.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ItemTree::len).sum::<usize>()
    }
}

/// Build an ordered forest from a flat node collection.
///
/// Every input node appears in the output exactly once. A node whose
/// `parent_id` does not resolve to a node in the input is treated as a root
/// (orphan-as-root, not an error). Every children sequence and the root
/// sequence is sorted by [`sibling_order`].
pub fn build_forest(nodes: Vec<Node>) -> Vec<ItemTree> {
    // Lookup keyed by id; children held as id adjacency, never as embedded
    // back-references.
    let mut by_id: HashMap<NodeId, Node> = HashMap::with_capacity(nodes.len());
    for node in &nodes {
        by_id.insert(node.id, node.clone());
    }

    let mut children_of: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    let mut root_ids: Vec<NodeId> = Vec::new();

    for node in &nodes {
        match node.parent_id {
            Some(parent) if by_id.contains_key(&parent) => {
                children_of.entry(parent).or_default().push(node.id);
            }
            _ => root_ids.push(node.id),
        }
    }

    let mut roots: Vec<ItemTree> = root_ids
        .into_iter()
        .map(|id| assemble(id, &by_id, &children_of))
        .collect();
    roots.sort_by(|a, b| sibling_order(&a.node, &b.node));
    roots
}

fn assemble(
    id: NodeId,
    by_id: &HashMap<NodeId, Node>,
    children_of: &HashMap<NodeId, Vec<NodeId>>,
) -> ItemTree {
    let node = by_id[&id].clone();
    let mut tree = ItemTree::leaf(node);

    if let Some(child_ids) = children_of.get(&id) {
        tree.children = child_ids
            .iter()
            .map(|&child| assemble(child, by_id, children_of))
            .collect();
        tree.children
            .sort_by(|a, b| sibling_order(&a.node, &b.node));
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_input_when_building_then_empty_forest() {
        assert!(build_forest(Vec::new()).is_empty());
    }

    #[test]
    fn given_orphan_parent_reference_when_building_then_node_becomes_root() {
        let mut orphan = Node::file("stray", None, None);
        orphan.parent_id = Some(NodeId::new()); // never persisted

        let forest = build_forest(vec![orphan.clone()]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].node.id, orphan.id);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn given_nested_nodes_when_building_then_children_attach_to_parent() {
        let root = Node::folder("root", None);
        let child = Node::folder("child", Some(root.id));
        let grandchild = Node::file("leaf", Some(child.id), None);

        let forest = build_forest(vec![grandchild.clone(), root.clone(), child.clone()]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].node.id, root.id);
        assert_eq!(forest[0].children[0].node.id, child.id);
        assert_eq!(forest[0].children[0].children[0].node.id, grandchild.id);
    }
}
