//! Short labels and formal amendment paragraphs.

use crate::config::{AmendmentOptions, Language};
use crate::model::amendment::{AmendmentChange, AmendmentKind};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const ELLIPSIS: char = '…';

struct Wording {
    deletion: &'static str,
    insertion: &'static str,
    replacement: &'static str,
    deletion_lead: &'static str,
    insertion_lead: &'static str,
    replacement_lead: &'static str,
    previous_heading: &'static str,
    new_heading: &'static str,
}

const ENGLISH: Wording = Wording {
    deletion: "Deletion",
    insertion: "Insertion",
    replacement: "Replacement",
    deletion_lead: "The following wording is deleted:",
    insertion_lead: "The following wording is inserted:",
    replacement_lead: "The previous wording is amended as follows:",
    previous_heading: "Previous wording:",
    new_heading: "New wording:",
};

const GERMAN: Wording = Wording {
    deletion: "Streichung",
    insertion: "Ergänzung",
    replacement: "Ersetzung",
    deletion_lead: "Folgender Wortlaut wird gestrichen:",
    insertion_lead: "Es wird folgender Wortlaut eingefügt:",
    replacement_lead: "Der bisherige Wortlaut wird wie folgt geändert:",
    previous_heading: "Bisheriger Wortlaut:",
    new_heading: "Neuer Wortlaut:",
};

fn wording(language: Language) -> &'static Wording {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
    }
}

/// Collapses whitespace runs and truncates to `max_chars` characters,
/// appending `…` when anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    if collapsed.chars().count() <= max_chars {
        return collapsed.into_owned();
    }
    let mut truncated = collapsed.chars().take(max_chars).collect::<String>();
    truncated.push(ELLIPSIS);
    truncated
}

/// Builds the short label, e.g. `Replacement: <old> → <new>`.
pub fn short_label(
    kind: AmendmentKind,
    old_text: &str,
    new_text: &str,
    options: &AmendmentOptions,
) -> String {
    let words = wording(options.language);
    let max = options.excerpt_max_chars;
    match kind {
        AmendmentKind::Deletion => format!("{}: {}", words.deletion, excerpt(old_text, max)),
        AmendmentKind::Insertion => format!("{}: {}", words.insertion, excerpt(new_text, max)),
        AmendmentKind::Replacement => format!(
            "{}: {} → {}",
            words.replacement,
            excerpt(old_text, max),
            excerpt(new_text, max)
        ),
    }
}

/// Builds the formal amendment paragraph with the full wording.
pub fn formal_text(
    kind: AmendmentKind,
    old_text: &str,
    new_text: &str,
    language: Language,
) -> String {
    let words = wording(language);
    match kind {
        AmendmentKind::Deletion => format!("{}\n{old_text}", words.deletion_lead),
        AmendmentKind::Insertion => format!("{}\n{new_text}", words.insertion_lead),
        AmendmentKind::Replacement => format!(
            "{}\n{}\n{old_text}\n\n{}\n{new_text}",
            words.replacement_lead, words.previous_heading, words.new_heading
        ),
    }
}

/// Short label for a manually entered old/new pair.
///
/// Both sides are trimmed first; returns `None` when both are blank.
/// Excerpts go through the same whitespace collapsing as detected changes,
/// so a pasted multi-line passage yields a one-line label.
pub fn describe_pair(old_text: &str, new_text: &str, options: &AmendmentOptions) -> Option<String> {
    let old_text = old_text.trim();
    let new_text = new_text.trim();
    AmendmentKind::classify(old_text, new_text)
        .map(|kind| short_label(kind, old_text, new_text, options))
}

/// Summary label for a submission carrying several detected changes.
pub fn batch_summary(count: usize, language: Language) -> String {
    match language {
        Language::English => {
            format!("Multiple changes ({count} passages, detected automatically)")
        }
        Language::German => format!("Mehrere Änderungen ({count} Stellen, automatisch erkannt)"),
    }
}

pub(super) fn render_change(
    kind: AmendmentKind,
    old_text: String,
    new_text: String,
    options: &AmendmentOptions,
) -> AmendmentChange {
    AmendmentChange {
        kind,
        short_label: short_label(kind, &old_text, &new_text, options),
        formal_text: formal_text(kind, &old_text, &new_text, options.language),
        old_text,
        new_text,
    }
}

#[cfg(test)]
mod tests {
    use super::{excerpt, formal_text};
    use crate::config::Language;
    use crate::model::amendment::AmendmentKind;

    #[test]
    fn excerpt_collapses_whitespace() {
        assert_eq!(excerpt("  a \n\t b  ", 50), "a b");
    }

    #[test]
    fn excerpt_truncates_by_characters() {
        let text = "ä".repeat(60);
        let short = excerpt(&text, 50);
        assert_eq!(short.chars().count(), 51);
        assert!(short.ends_with('…'));
        assert_eq!(excerpt(&"x".repeat(50), 50), "x".repeat(50));
    }

    #[test]
    fn german_replacement_lists_both_wordings() {
        let text = formal_text(AmendmentKind::Replacement, "alt", "neu", Language::German);
        assert_eq!(
            text,
            "Der bisherige Wortlaut wird wie folgt geändert:\nBisheriger Wortlaut:\nalt\n\nNeuer Wortlaut:\nneu"
        );
    }
}
