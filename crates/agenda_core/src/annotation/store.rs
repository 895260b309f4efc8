//! Annotation matrix reconciliation.

use crate::model::agenda::AgendaNode;
use crate::tree::enumerate::{count_leaves, count_nodes, enumerate_in_order};
use log::{debug, info};

/// One ordered annotation list per top-level item, aligned with pre-order
/// enumeration of that item.
pub type AnnotationMatrix = Vec<Vec<String>>;

/// Reconciles annotations with the current forest shape after an edit.
///
/// Lists that already match their TOP are kept as-is; all others are padded
/// with `""` or truncated positionally. Entries for TOPs beyond the forest
/// are dropped.
pub fn reconcile(previous: &[Vec<String>], forest: &[AgendaNode]) -> AnnotationMatrix {
    forest
        .iter()
        .enumerate()
        .map(|(index, top)| {
            let previous_list = previous.get(index).map(Vec::as_slice).unwrap_or_default();
            resize_positional(previous_list, count_nodes(top))
        })
        .collect()
}

/// Maps persisted annotations onto the forest at load time.
///
/// Per top-level item, in order of preference:
/// 1. length equals the node count: kept unchanged;
/// 2. length equals the leaf count: legacy per-leaf layout, values are
///    redistributed onto leaf positions and inner nodes receive `""`;
/// 3. anything else: positional pad/truncate.
pub fn migrate_persisted(persisted: &[Vec<String>], forest: &[AgendaNode]) -> AnnotationMatrix {
    forest
        .iter()
        .enumerate()
        .map(|(index, top)| {
            let stored = persisted.get(index).map(Vec::as_slice).unwrap_or_default();
            let node_count = count_nodes(top);
            let leaf_count = count_leaves(top);
            if stored.len() == node_count {
                stored.to_vec()
            } else if stored.len() == leaf_count {
                info!(
                    "event=annotation_migrate module=annotation status=ok layout=legacy_leaf top_index={} leaf_count={} node_count={}",
                    index, leaf_count, node_count
                );
                redistribute_leaf_values(stored, top)
            } else {
                debug!(
                    "event=annotation_migrate module=annotation status=ok layout=positional top_index={} stored_len={} node_count={}",
                    index,
                    stored.len(),
                    node_count
                );
                resize_positional(stored, node_count)
            }
        })
        .collect()
}

/// Builds an all-empty matrix shaped by the forest.
pub fn empty_annotations(forest: &[AgendaNode]) -> AnnotationMatrix {
    forest
        .iter()
        .map(|top| vec![String::new(); count_nodes(top)])
        .collect()
}

/// Loads annotations for an editing session.
///
/// `None` means nothing was persisted yet. The result is never an empty
/// matrix: an empty forest yields `[[""]]`, matching the single blank TOP
/// an editor starts with.
pub fn load_annotations(
    forest: &[AgendaNode],
    persisted: Option<&[Vec<String>]>,
) -> AnnotationMatrix {
    let matrix = match persisted {
        Some(stored) => migrate_persisted(stored, forest),
        None => empty_annotations(forest),
    };
    if matrix.is_empty() {
        vec![vec![String::new()]]
    } else {
        matrix
    }
}

/// Writes one annotation, growing the matrix and the list with `""` as needed.
pub fn set_annotation(
    matrix: &[Vec<String>],
    top_index: usize,
    node_index: usize,
    value: &str,
) -> AnnotationMatrix {
    let mut next = matrix.to_vec();
    if next.len() <= top_index {
        next.resize_with(top_index + 1, Vec::new);
    }
    let list = &mut next[top_index];
    if list.len() <= node_index {
        list.resize(node_index + 1, String::new());
    }
    list[node_index] = value.to_string();
    next
}

/// Returns the per-TOP lists to persist, one per forest item.
///
/// A TOP without an entry contributes `[""]`.
pub fn annotation_payload(forest: &[AgendaNode], matrix: &[Vec<String>]) -> AnnotationMatrix {
    (0..forest.len())
        .map(|index| {
            matrix
                .get(index)
                .cloned()
                .unwrap_or_else(|| vec![String::new()])
        })
        .collect()
}

fn resize_positional(values: &[String], len: usize) -> Vec<String> {
    if values.len() == len {
        return values.to_vec();
    }
    (0..len)
        .map(|position| values.get(position).cloned().unwrap_or_default())
        .collect()
}

fn redistribute_leaf_values(values: &[String], top: &AgendaNode) -> Vec<String> {
    let mut leaf_values = values.iter();
    enumerate_in_order(top, "")
        .into_iter()
        .map(|descriptor| {
            if descriptor.is_leaf {
                leaf_values.next().cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .collect()
}
