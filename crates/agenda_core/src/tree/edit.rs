//! Path-addressed structural edits for the agenda forest.
//!
//! # Responsibility
//! - Rename, append and remove nodes addressed by index paths.
//! - Produce the minimal submission shape with blank subtrees pruned.
//!
//! # Invariants
//! - Input forests are never mutated.
//! - An empty path only ever targets the forest itself.
//! - Removing the last top-level item is allowed here; callers enforce UI policy.

use crate::model::agenda::{AgendaForest, AgendaNode, NodePath};

/// Returns a fresh, empty top-level item.
pub fn default_top() -> AgendaNode {
    AgendaNode::default()
}

/// Replaces the title of the node at `path`.
///
/// An empty or stale path returns the forest unchanged.
pub fn set_title_at_path(forest: &[AgendaNode], path: &NodePath, value: &str) -> AgendaForest {
    let Some((&index, rest)) = path.split_first() else {
        return forest.to_vec();
    };
    replace_at(forest, index, |node| {
        if rest.is_empty() {
            AgendaNode {
                title: value.to_string(),
                children: node.children.clone(),
            }
        } else {
            AgendaNode {
                title: node.title.clone(),
                children: set_title_at_path(&node.children, rest, value),
            }
        }
    })
}

/// Appends an empty child to the node at `path`.
///
/// An empty path appends a new top-level item instead.
pub fn add_child_at_path(forest: &[AgendaNode], path: &NodePath) -> AgendaForest {
    let Some((&index, rest)) = path.split_first() else {
        let mut next = forest.to_vec();
        next.push(default_top());
        return next;
    };
    replace_at(forest, index, |node| AgendaNode {
        title: node.title.clone(),
        children: add_child_at_path(&node.children, rest),
    })
}

/// Removes the node at `path` from its parent (or from the forest).
///
/// An empty or stale path returns the forest unchanged.
pub fn remove_at_path(forest: &[AgendaNode], path: &NodePath) -> AgendaForest {
    match path {
        [] => forest.to_vec(),
        [index] => forest
            .iter()
            .enumerate()
            .filter(|(position, _)| position != index)
            .map(|(_, node)| node.clone())
            .collect(),
        [index, rest @ ..] => replace_at(forest, *index, |node| AgendaNode {
            title: node.title.clone(),
            children: remove_at_path(&node.children, rest),
        }),
    }
}

/// Looks up the node at `path`, if the path is still valid.
pub fn node_at_path<'a>(forest: &'a [AgendaNode], path: &NodePath) -> Option<&'a AgendaNode> {
    let (&index, rest) = path.split_first()?;
    let node = forest.get(index)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at_path(&node.children, rest)
    }
}

/// Produces the minimal external shape of one node.
///
/// Titles are trimmed recursively. A child is dropped when its trimmed title
/// is empty and none of its own children survive.
pub fn normalize_for_submission(node: &AgendaNode) -> AgendaNode {
    AgendaNode {
        title: node.title.trim().to_string(),
        children: prune_blank(node.children.iter().map(normalize_for_submission)),
    }
}

/// Normalizes every top-level item and drops the ones that end up blank.
pub fn normalize_forest_for_submission(forest: &[AgendaNode]) -> AgendaForest {
    prune_blank(forest.iter().map(normalize_for_submission))
}

fn prune_blank(nodes: impl Iterator<Item = AgendaNode>) -> Vec<AgendaNode> {
    nodes
        .filter(|node| !node.title.is_empty() || !node.children.is_empty())
        .collect()
}

fn replace_at<F>(forest: &[AgendaNode], index: usize, update: F) -> AgendaForest
where
    F: FnOnce(&AgendaNode) -> AgendaNode,
{
    let mut next = forest.to_vec();
    if let Some(slot) = next.get_mut(index) {
        let updated = update(slot);
        *slot = updated;
    }
    next
}
