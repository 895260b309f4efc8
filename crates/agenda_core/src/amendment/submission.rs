//! Submission planning for detected amendments.

use super::render::batch_summary;
use crate::config::AmendmentOptions;
use crate::model::amendment::{AmendmentChange, AmendmentRecord};

/// How detected changes should be submitted by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmendmentSubmission {
    /// Nothing detected; the host reports "no changes".
    NoChanges,
    /// Exactly one change; prefill the single-amendment form.
    Single(AmendmentChange),
    /// Several changes; one amendment with one record per change.
    Batch {
        summary: String,
        records: Vec<AmendmentRecord>,
    },
}

/// Plans the submission for detected changes.
pub fn plan_submission(
    mut changes: Vec<AmendmentChange>,
    options: &AmendmentOptions,
) -> AmendmentSubmission {
    match changes.len() {
        0 => AmendmentSubmission::NoChanges,
        1 => AmendmentSubmission::Single(changes.remove(0)),
        count => AmendmentSubmission::Batch {
            summary: batch_summary(count, options.language),
            records: changes
                .iter()
                .enumerate()
                .map(|(index, change)| {
                    let position = u32::try_from(index).unwrap_or(u32::MAX);
                    AmendmentRecord::from_change(position, change)
                })
                .collect(),
        },
    }
}

/// Returns whether the edited text differs from the baseline beyond outer whitespace.
pub fn has_text_changes(baseline: &str, edited: &str) -> bool {
    baseline.trim() != edited.trim()
}
