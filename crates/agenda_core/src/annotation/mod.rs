//! Per-node meeting-minutes annotations kept parallel to the agenda forest.
//!
//! # Responsibility
//! - Reconcile the annotation matrix with the forest after structural edits.
//! - Migrate the legacy per-leaf layout to the per-node layout at load time.
//! - Decode persisted annotation JSON without ever failing.
//!
//! # Invariants
//! - After reconciliation `matrix[i].len() == count_nodes(&forest[i])`.
//! - A list whose length already matches its TOP is returned unchanged.
//!
//! # See also
//! - `crate::tree::enumerate` for the traversal order the lists follow.

mod persisted;
mod store;

pub use persisted::{annotations_from_json, parse_annotations};
pub use store::{
    annotation_payload, empty_annotations, load_annotations, migrate_persisted, reconcile,
    set_annotation, AnnotationMatrix,
};
