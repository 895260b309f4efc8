//! Statute amendment model.
//!
//! # Responsibility
//! - Define the typed change units produced by the diff classifier.
//! - Define the storage record shape used for batch submissions.
//!
//! # Invariants
//! - `Deletion` has empty `new_text`, `Insertion` has empty `old_text`,
//!   `Replacement` has both texts non-empty.

use serde::{Deserialize, Serialize};

/// Kind of one detected change unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmendmentKind {
    /// Old wording removed without replacement.
    Deletion,
    /// New wording inserted where there was none.
    Insertion,
    /// Old wording replaced by new wording.
    Replacement,
}

impl AmendmentKind {
    /// Classifies one trimmed old/new pair.
    ///
    /// Returns `None` when both sides are empty.
    pub fn classify(old_text: &str, new_text: &str) -> Option<Self> {
        match (old_text.is_empty(), new_text.is_empty()) {
            (false, true) => Some(Self::Deletion),
            (true, false) => Some(Self::Insertion),
            (false, false) => Some(Self::Replacement),
            (true, true) => None,
        }
    }

    /// Stable lowercase identifier used on wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deletion => "deletion",
            Self::Insertion => "insertion",
            Self::Replacement => "replacement",
        }
    }
}

/// One detected and rendered change unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendmentChange {
    pub kind: AmendmentKind,
    /// Removed wording, blank-line trimmed. Empty for insertions.
    pub old_text: String,
    /// Added wording, blank-line trimmed. Empty for deletions.
    pub new_text: String,
    /// Short human label with excerpted wording.
    pub short_label: String,
    /// Formally worded amendment paragraph with the full wording.
    pub formal_text: String,
}

/// Storage record for one change of a multi-change submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendmentRecord {
    /// Index of the change in detection order.
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    /// Formal amendment text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_text: Option<String>,
}

impl AmendmentRecord {
    /// Maps one change onto its storage record; empty texts become `None`.
    pub fn from_change(position: u32, change: &AmendmentChange) -> Self {
        Self {
            position,
            old_text: non_empty(&change.old_text),
            new_text: non_empty(&change.new_text),
            change_text: non_empty(&change.formal_text),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
