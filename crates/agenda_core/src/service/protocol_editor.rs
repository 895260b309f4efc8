//! Meeting protocol editing session.
//!
//! # Responsibility
//! - Own one agenda forest and its annotation matrix for a single editor.
//! - Run annotation reconciliation after every structural edit.
//! - Enforce UI policy: the last top-level item cannot be removed.
//!
//! # Invariants
//! - After every public call `annotations[i].len() == count_nodes(&forest[i])`.
//! - The forest always holds at least one top-level item.
//! - Log events carry counts and depths only, never titles or annotation text.

use crate::annotation::{
    annotation_payload, annotations_from_json, load_annotations, reconcile, set_annotation,
    AnnotationMatrix,
};
use crate::model::agenda::{forest_from_json, AgendaForest, AgendaNode, NodePath};
use crate::tree::edit::{
    add_child_at_path, default_top, node_at_path, normalize_forest_for_submission,
    remove_at_path, set_title_at_path,
};
use crate::tree::enumerate::{count_nodes, enumerate_forest, NodeDescriptor};
use log::{debug, info, warn};
use serde_json::Value;

/// Editing session over one meeting's agenda and protocol texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolEditor {
    forest: AgendaForest,
    annotations: AnnotationMatrix,
}

impl Default for ProtocolEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEditor {
    /// Starts a session with one blank top-level item.
    pub fn new() -> Self {
        Self {
            forest: vec![default_top()],
            annotations: vec![vec![String::new()]],
        }
    }

    /// Starts a session from stored data.
    ///
    /// An empty forest is replaced by one blank top-level item. Persisted
    /// annotations go through load-time migration (see
    /// [`crate::annotation::migrate_persisted`]).
    pub fn load(forest: AgendaForest, persisted: Option<&[Vec<String>]>) -> Self {
        let forest = if forest.is_empty() {
            vec![default_top()]
        } else {
            forest
        };
        let annotations = load_annotations(&forest, persisted);
        info!(
            "event=protocol_load module=service status=ok tops={} persisted={}",
            forest.len(),
            persisted.is_some()
        );
        Self {
            forest,
            annotations,
        }
    }

    /// Starts a session from stored JSON values, decoding both leniently.
    pub fn from_json(forest: &Value, annotations: Option<&Value>) -> Self {
        let persisted = annotations.and_then(annotations_from_json);
        Self::load(forest_from_json(forest), persisted.as_deref())
    }

    /// Current agenda forest.
    pub fn forest(&self) -> &[AgendaNode] {
        &self.forest
    }

    /// Current annotation matrix.
    pub fn annotations(&self) -> &[Vec<String>] {
        &self.annotations
    }

    /// Appends a blank top-level item.
    pub fn add_top(&mut self) {
        self.apply_structural("add_top", 0, |forest| add_child_at_path(forest, &[]));
    }

    /// Appends a blank child under the node at `path` (a new TOP for `[]`).
    pub fn add_child(&mut self, path: &NodePath) {
        self.apply_structural("add_child", path.len(), |forest| {
            add_child_at_path(forest, path)
        });
    }

    /// Returns whether the node at `path` may be removed.
    ///
    /// Stale paths and the last remaining top-level item are not removable.
    pub fn can_remove(&self, path: &NodePath) -> bool {
        if node_at_path(&self.forest, path).is_none() {
            return false;
        }
        !(path.len() == 1 && self.forest.len() <= 1)
    }

    /// Removes the node at `path`; returns `false` when refused.
    pub fn remove(&mut self, path: &NodePath) -> bool {
        if !self.can_remove(path) {
            warn!(
                "event=agenda_edit module=service op=remove status=refused depth={} tops={}",
                path.len(),
                self.forest.len()
            );
            return false;
        }
        self.apply_structural("remove", path.len(), |forest| {
            remove_at_path(forest, path)
        });
        true
    }

    /// Renames the node at `path`. Shape is unchanged, so annotations stay as-is.
    pub fn set_title(&mut self, path: &NodePath, value: &str) {
        self.forest = set_title_at_path(&self.forest, path, value);
    }

    /// Writes the annotation of node `node_index` (pre-order) within TOP `top_index`.
    ///
    /// Returns `false` and leaves the matrix untouched when either index is stale.
    pub fn set_annotation(&mut self, top_index: usize, node_index: usize, value: &str) -> bool {
        let in_range = self
            .forest
            .get(top_index)
            .is_some_and(|top| node_index < count_nodes(top));
        if !in_range {
            warn!(
                "event=annotation_edit module=service status=refused top={} node={} tops={}",
                top_index,
                node_index,
                self.forest.len()
            );
            return false;
        }
        self.annotations = set_annotation(&self.annotations, top_index, node_index, value);
        true
    }

    /// Labels for rendering, one list per top-level item.
    pub fn node_labels(&self) -> Vec<Vec<NodeDescriptor>> {
        enumerate_forest(&self.forest)
    }

    /// Minimal forest to hand to the storage API.
    pub fn submission_forest(&self) -> AgendaForest {
        normalize_forest_for_submission(&self.forest)
    }

    /// Replaces the session forest by its submitted form and returns that form.
    ///
    /// When nothing survives normalization the session keeps one blank TOP.
    pub fn apply_submitted(&mut self) -> AgendaForest {
        let submitted = self.submission_forest();
        let next = if submitted.is_empty() {
            vec![default_top()]
        } else {
            submitted.clone()
        };
        self.annotations = reconcile(&self.annotations, &next);
        self.forest = next;
        info!(
            "event=agenda_submit module=service status=ok tops={}",
            submitted.len()
        );
        submitted
    }

    /// Annotation lists to persist, one per top-level item.
    pub fn annotation_payload(&self) -> AnnotationMatrix {
        annotation_payload(&self.forest, &self.annotations)
    }

    fn apply_structural<F>(&mut self, op: &'static str, depth: usize, edit: F)
    where
        F: FnOnce(&[AgendaNode]) -> AgendaForest,
    {
        let next = edit(&self.forest);
        self.annotations = reconcile(&self.annotations, &next);
        self.forest = next;
        debug!(
            "event=agenda_edit module=service op={} status=ok depth={} tops={}",
            op,
            depth,
            self.forest.len()
        );
    }
}
