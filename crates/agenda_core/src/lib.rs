//! Core domain logic for agenda protocols and statute amendments.
//! This crate is the single source of truth for tree and annotation invariants.

pub mod amendment;
pub mod annotation;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod tree;

pub use amendment::{
    describe_pair, diff_to_amendments, diff_to_amendments_with, has_text_changes,
    plan_submission, AmendmentSubmission,
};
pub use annotation::{
    annotation_payload, annotations_from_json, load_annotations, migrate_persisted,
    parse_annotations, reconcile, set_annotation, AnnotationMatrix,
};
pub use config::{AmendmentOptions, Language};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::agenda::{
    forest_from_json, parse_forest, AgendaForest, AgendaJsonError, AgendaNode, NodePath,
};
pub use model::amendment::{AmendmentChange, AmendmentKind, AmendmentRecord};
pub use service::protocol_editor::ProtocolEditor;
pub use service::statute_draft::StatuteDraft;
pub use tree::edit::{
    add_child_at_path, default_top, normalize_for_submission, normalize_forest_for_submission,
    remove_at_path, set_title_at_path,
};
pub use tree::enumerate::{
    count_leaves, count_nodes, enumerate_forest, enumerate_in_order, NodeDescriptor,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
