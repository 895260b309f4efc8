//! Statute text draft with amendment extraction.
//!
//! # Responsibility
//! - Hold the last-saved baseline and the currently edited statute text.
//! - Turn the difference into a single or batch amendment submission.
//!
//! # Invariants
//! - Extraction never mutates the draft; only `commit_baseline` does.

use crate::amendment::{
    diff_to_amendments_with, has_text_changes, plan_submission, AmendmentSubmission,
};
use crate::config::AmendmentOptions;

/// Baseline/edited text pair for one statute document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatuteDraft {
    baseline: String,
    edited: String,
    options: AmendmentOptions,
}

impl StatuteDraft {
    /// Creates a draft whose edited text starts equal to `baseline`.
    pub fn new(baseline: impl Into<String>, options: AmendmentOptions) -> Self {
        let baseline = baseline.into();
        Self {
            edited: baseline.clone(),
            baseline,
            options,
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn edited(&self) -> &str {
        &self.edited
    }

    /// Replaces the edited text.
    pub fn set_edited(&mut self, text: impl Into<String>) {
        self.edited = text.into();
    }

    /// Returns whether the edited text differs beyond outer whitespace.
    pub fn has_changes(&self) -> bool {
        has_text_changes(&self.baseline, &self.edited)
    }

    /// Detects amendments between baseline and edited text and plans their submission.
    pub fn extract(&self) -> AmendmentSubmission {
        let changes = diff_to_amendments_with(&self.baseline, &self.edited, &self.options);
        plan_submission(changes, &self.options)
    }

    /// Marks the edited text as saved after a successful submission.
    pub fn commit_baseline(&mut self) {
        self.baseline = self.edited.clone();
    }
}
