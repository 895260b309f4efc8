//! Depth-first enumeration of agenda nodes.
//!
//! # Responsibility
//! - Produce hierarchical labels ("1", "1.1", "1.2.3") for rendering.
//! - Count nodes and leaves for annotation reconciliation.
//!
//! # Invariants
//! - Traversal is pre-order with children in order.
//! - `count_nodes(n) == enumerate_in_order(n, p).len()` for any prefix `p`.
//! - Labels are 1-based and dot-separated.

use crate::model::agenda::AgendaNode;
use serde::Serialize;

/// One enumerated node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    /// Dot-separated 1-based label, e.g. `2.1.3`.
    pub path_label: String,
    pub title: String,
    pub is_leaf: bool,
}

/// Counts the node itself and all descendants.
pub fn count_nodes(node: &AgendaNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

/// Counts leaves; a childless node counts as one leaf.
pub fn count_leaves(node: &AgendaNode) -> usize {
    if node.children.is_empty() {
        1
    } else {
        node.children.iter().map(count_leaves).sum()
    }
}

/// Enumerates `node` and its descendants in pre-order.
///
/// The node itself is labelled with `path_prefix`; child `i` is labelled
/// `path_prefix.(i+1)`, or just `(i+1)` when the prefix is empty.
pub fn enumerate_in_order(node: &AgendaNode, path_prefix: &str) -> Vec<NodeDescriptor> {
    let mut out = Vec::with_capacity(count_nodes(node));
    collect_in_order(node, path_prefix.to_string(), &mut out);
    out
}

/// Enumerates every top-level item, labelling item `i` with `(i+1)`.
pub fn enumerate_forest(forest: &[AgendaNode]) -> Vec<Vec<NodeDescriptor>> {
    forest
        .iter()
        .enumerate()
        .map(|(index, top)| enumerate_in_order(top, &(index + 1).to_string()))
        .collect()
}

fn collect_in_order(node: &AgendaNode, label: String, out: &mut Vec<NodeDescriptor>) {
    out.push(NodeDescriptor {
        path_label: label.clone(),
        title: node.title.clone(),
        is_leaf: node.children.is_empty(),
    });
    for (index, child) in node.children.iter().enumerate() {
        collect_in_order(child, child_label(&label, index), out);
    }
}

fn child_label(prefix: &str, index: usize) -> String {
    if prefix.is_empty() {
        (index + 1).to_string()
    } else {
        format!("{prefix}.{}", index + 1)
    }
}
