//! Diff-driven statute amendment detection.
//!
//! # Responsibility
//! - Compare two document snapshots line by line (`diff`).
//! - Render change units into short labels and formal paragraphs (`render`).
//! - Decide between quick single-change and batch submission (`submission`).
//!
//! # Invariants
//! - Identical snapshots yield no changes.
//! - Unchanged lines never appear in a change's old or new text.
//! - A change unit that is blank on both sides after trimming is dropped.

mod diff;
mod render;
mod submission;

pub use diff::{diff_to_amendments, diff_to_amendments_with};
pub use render::{batch_summary, describe_pair, excerpt, formal_text, short_label};
pub use submission::{has_text_changes, plan_submission, AmendmentSubmission};
