//! Sibling ordering: the total order applied to nodes sharing a parent.
//!
//! Folders sort before files; among same-kind siblings shorter names come
//! first; remaining ties break case-insensitively by name. This ordering is
//! user-visible tree ordering and must not change.

use std::cmp::Ordering;

use crate::domain::entities::{Node, NodeKind};

fn kind_rank(kind: NodeKind) -> u8 {
    match kind {
        NodeKind::Folder => 0,
        NodeKind::File => 1,
    }
}

/// Compare two sibling nodes.
///
/// Name length is measured in characters, not bytes. The case-insensitive
/// tie-break folds both names to lowercase before comparing.
pub fn sibling_order(a: &Node, b: &Node) -> Ordering {
    kind_rank(a.kind)
        .cmp(&kind_rank(b.kind))
        .then_with(|| a.name.chars().count().cmp(&b.name.chars().count()))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Sort a flat slice of siblings in place. Stable: nodes comparing equal
/// keep their input order.
pub fn sort_siblings(nodes: &mut [Node]) {
    nodes.sort_by(sibling_order);
}
