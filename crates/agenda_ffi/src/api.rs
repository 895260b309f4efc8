//! FFI use-case API for the meeting protocol and statute editors.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the host UI via FRB.
//! - Exchange agenda trees and annotation matrices as JSON strings.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported in response envelopes, never as errors.

use agenda_core::{
    core_version as core_version_inner, describe_pair, diff_to_amendments_with,
    init_logging as init_logging_inner, normalize_forest_for_submission, parse_annotations,
    parse_forest, ping as ping_inner, AmendmentChange, AmendmentOptions, Language,
    ProtocolEditor,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// JSON payload envelope for agenda/protocol calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaPayloadResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// JSON result; empty on failure.
    pub payload_json: String,
    /// Human-readable message for diagnostics.
    pub message: String,
}

impl AgendaPayloadResponse {
    fn success(payload_json: String) -> Self {
        Self {
            ok: true,
            payload_json,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            payload_json: String::new(),
            message: message.into(),
        }
    }
}

/// One labelled agenda node for rendering input fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaNodeLabel {
    /// Index of the owning top-level item.
    pub top_index: u32,
    /// Pre-order index within the top-level item (annotation slot).
    pub node_index: u32,
    /// Hierarchical label, e.g. `2.1`.
    pub path_label: String,
    pub title: String,
    pub is_leaf: bool,
}

/// Labels response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaLabelsResponse {
    pub items: Vec<AgendaNodeLabel>,
    pub message: String,
}

/// One detected amendment in host shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedAmendment {
    /// `deletion|insertion|replacement`.
    pub kind: String,
    pub old_text: String,
    pub new_text: String,
    pub short_label: String,
    pub formal_text: String,
}

/// Amendment detection envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmendmentDetectResponse {
    /// Detected changes in document order (empty when none).
    pub items: Vec<DetectedAmendment>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// Normalizes an agenda forest for the storage API.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Payload is a JSON array of `{title, children?}` with blank items pruned.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_normalize_for_submission(forest_json: String) -> AgendaPayloadResponse {
    let forest = match parse_forest(&forest_json) {
        Ok(forest) => forest,
        Err(err) => return failure("agenda_normalize_for_submission", err),
    };
    match serde_json::to_string(&normalize_forest_for_submission(&forest)) {
        Ok(payload) => AgendaPayloadResponse::success(payload),
        Err(err) => failure("agenda_normalize_for_submission", err),
    }
}

/// Lists labelled nodes of an agenda forest in render order.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; invalid JSON yields no items and a message.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_node_labels(forest_json: String) -> AgendaLabelsResponse {
    let forest = match parse_forest(&forest_json) {
        Ok(forest) => forest,
        Err(err) => {
            return AgendaLabelsResponse {
                items: Vec::new(),
                message: format!("agenda_node_labels failed: {err}"),
            }
        }
    };
    let editor = ProtocolEditor::load(forest, None);
    let items = editor
        .node_labels()
        .into_iter()
        .enumerate()
        .flat_map(|(top_index, descriptors)| {
            descriptors
                .into_iter()
                .enumerate()
                .map(move |(node_index, descriptor)| AgendaNodeLabel {
                    top_index: to_u32(top_index),
                    node_index: to_u32(node_index),
                    path_label: descriptor.path_label,
                    title: descriptor.title,
                    is_leaf: descriptor.is_leaf,
                })
        })
        .collect::<Vec<_>>();
    AgendaLabelsResponse {
        message: format!("{} node(s).", items.len()),
        items,
    }
}

/// Aligns stored protocol texts with the agenda forest.
///
/// Accepts both the legacy per-leaf and the current per-node layout.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - `annotations_json=None` means no texts were stored yet.
/// - Payload is a JSON array with one string array per top-level item.
#[flutter_rust_bridge::frb(sync)]
pub fn protocol_reconcile_annotations(
    forest_json: String,
    annotations_json: Option<String>,
) -> AgendaPayloadResponse {
    const OP: &str = "protocol_reconcile_annotations";
    let forest = match parse_forest(&forest_json) {
        Ok(forest) => forest,
        Err(err) => return failure(OP, err),
    };
    let persisted = match annotations_json.as_deref().map(parse_annotations).transpose() {
        Ok(persisted) => persisted.flatten(),
        Err(err) => return failure(OP, err),
    };
    let editor = ProtocolEditor::load(forest, persisted.as_deref());
    match serde_json::to_string(&editor.annotation_payload()) {
        Ok(payload) => AgendaPayloadResponse::success(payload),
        Err(err) => failure(OP, err),
    }
}

/// Detects amendments between the saved and the edited statute text.
///
/// Input semantics:
/// - `language`: `en|de`; `None` selects English.
///
/// # FFI contract
/// - Sync call, bounded in-memory computation.
/// - Never panics; unsupported language yields no items and a message.
#[flutter_rust_bridge::frb(sync)]
pub fn amendments_detect(
    old_text: String,
    new_text: String,
    language: Option<String>,
) -> AmendmentDetectResponse {
    let options = match resolve_options(language) {
        Ok(options) => options,
        Err(err) => {
            return AmendmentDetectResponse {
                items: Vec::new(),
                message: format!("amendments_detect failed: {err}"),
            }
        }
    };
    let items = diff_to_amendments_with(&old_text, &new_text, &options)
        .into_iter()
        .map(to_detected_amendment)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No changes detected.".to_string()
    } else {
        format!("Detected {} change(s).", items.len())
    };
    AmendmentDetectResponse { items, message }
}

/// Suggests a short label for a manually entered old/new wording pair.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Returns empty string when both sides are blank or language is unsupported.
#[flutter_rust_bridge::frb(sync)]
pub fn amendments_describe_pair(
    old_text: String,
    new_text: String,
    language: Option<String>,
) -> String {
    resolve_options(language)
        .ok()
        .and_then(|options| describe_pair(&old_text, &new_text, &options))
        .unwrap_or_default()
}

fn resolve_options(language: Option<String>) -> Result<AmendmentOptions, String> {
    let language = match language {
        Some(value) => value.parse::<Language>()?,
        None => Language::default(),
    };
    Ok(AmendmentOptions::for_language(language))
}

fn to_detected_amendment(change: AmendmentChange) -> DetectedAmendment {
    DetectedAmendment {
        kind: change.kind.as_str().to_string(),
        old_text: change.old_text,
        new_text: change.new_text,
        short_label: change.short_label,
        formal_text: change.formal_text,
    }
}

fn failure(op: &str, err: impl std::fmt::Display) -> AgendaPayloadResponse {
    warn!("event=ffi_call module=ffi op={op} status=error error={err}");
    AgendaPayloadResponse::failure(format!("{op} failed: {err}"))
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        agenda_node_labels, agenda_normalize_for_submission, amendments_describe_pair,
        amendments_detect, core_version, init_logging, ping, protocol_reconcile_annotations,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn normalize_prunes_and_omits_empty_children() {
        let response = agenda_normalize_for_submission(
            r#"[{"titel":" Opening ","unterpunkte":[{"titel":""}]},{"title":""}]"#.to_string(),
        );
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.payload_json, r#"[{"title":"Opening"}]"#);
    }

    #[test]
    fn normalize_all_blank_forest_yields_empty_payload() {
        let response =
            agenda_normalize_for_submission(r#"[{"title":"  "},"",{"children":[]}]"#.to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.payload_json, "[]");
    }

    #[test]
    fn normalize_reports_invalid_json() {
        let response = agenda_normalize_for_submission("[".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("agenda_normalize_for_submission failed"));
    }

    #[test]
    fn node_labels_carry_annotation_slots() {
        let response = agenda_node_labels(
            r#"[{"title":"A","children":[{"title":"A1"}]},"B"]"#.to_string(),
        );
        let labels: Vec<(u32, u32, &str)> = response
            .items
            .iter()
            .map(|item| (item.top_index, item.node_index, item.path_label.as_str()))
            .collect();
        assert_eq!(labels, vec![(0, 0, "1"), (0, 1, "1.1"), (1, 0, "2")]);
    }

    #[test]
    fn reconcile_migrates_legacy_leaf_texts() {
        let response = protocol_reconcile_annotations(
            r#"[{"title":"A","children":["A1","A2"]}]"#.to_string(),
            Some(r#"[["one","two"]]"#.to_string()),
        );
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.payload_json, r#"[["","one","two"]]"#);
    }

    #[test]
    fn reconcile_without_stored_texts_is_blank() {
        let response = protocol_reconcile_annotations(r#"["A"]"#.to_string(), None);
        assert_eq!(response.payload_json, r#"[[""]]"#);
    }

    #[test]
    fn detect_reports_replacement() {
        let response = amendments_detect(
            "Old clause A.\nKept line.".to_string(),
            "New clause B.\nKept line.".to_string(),
            None,
        );
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].kind, "replacement");
        assert_eq!(response.message, "Detected 1 change(s).");
    }

    #[test]
    fn detect_rejects_unknown_language() {
        let response = amendments_detect(String::new(), "x".to_string(), Some("fr".into()));
        assert!(response.items.is_empty());
        assert!(response.message.contains("unsupported language"));
    }

    #[test]
    fn describe_pair_uses_requested_language() {
        let label = amendments_describe_pair("alt".into(), String::new(), Some("de".into()));
        assert_eq!(label, "Streichung: alt");
        assert_eq!(amendments_describe_pair(" ".into(), String::new(), None), "");
    }
}
