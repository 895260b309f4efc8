//! Line diff and change-unit coalescing.

use super::render::render_change;
use crate::config::AmendmentOptions;
use crate::model::amendment::{AmendmentChange, AmendmentKind};
use log::info;
use similar::{ChangeTag, TextDiff};
use std::time::Instant;

/// Detects amendments between two snapshots with default (English) rendering.
pub fn diff_to_amendments(old_text: &str, new_text: &str) -> Vec<AmendmentChange> {
    diff_to_amendments_with(old_text, new_text, &AmendmentOptions::default())
}

/// Detects amendments between two snapshots.
///
/// Consecutive removed and added lines are accumulated until the next
/// unchanged line (or the end of input) and then classified as one change
/// unit. Never fails on string input; no changes yields an empty list.
pub fn diff_to_amendments_with(
    old_text: &str,
    new_text: &str,
    options: &AmendmentOptions,
) -> Vec<AmendmentChange> {
    let started_at = Instant::now();
    let diff = TextDiff::from_lines(old_text, new_text);

    let mut units = ChangeUnits::new(options);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => units.pending_removed.push_str(change.value()),
            ChangeTag::Insert => units.pending_added.push_str(change.value()),
            ChangeTag::Equal => units.flush(),
        }
    }
    units.flush();

    info!(
        "event=amendment_diff module=amendment status=ok old_len={} new_len={} changes={} language={} duration_ms={}",
        old_text.len(),
        new_text.len(),
        units.changes.len(),
        options.language,
        started_at.elapsed().as_millis()
    );
    units.changes
}

struct ChangeUnits<'a> {
    options: &'a AmendmentOptions,
    pending_removed: String,
    pending_added: String,
    changes: Vec<AmendmentChange>,
}

impl<'a> ChangeUnits<'a> {
    fn new(options: &'a AmendmentOptions) -> Self {
        Self {
            options,
            pending_removed: String::new(),
            pending_added: String::new(),
            changes: Vec::new(),
        }
    }

    fn flush(&mut self) {
        let removed = trim_block(&self.pending_removed);
        let added = trim_block(&self.pending_added);
        self.pending_removed.clear();
        self.pending_added.clear();

        // Line endings and outer blank lines are not wording.
        if removed == added {
            return;
        }
        if let Some(kind) = AmendmentKind::classify(&removed, &added) {
            self.changes
                .push(render_change(kind, removed, added, self.options));
        }
    }
}

/// Drops leading and trailing blank lines. Whitespace inside kept lines stays.
fn trim_block(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);
    lines[first..=last].join("\n")
}
