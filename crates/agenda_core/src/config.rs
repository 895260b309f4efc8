//! Rendering configuration for generated amendment text.
//!
//! # Responsibility
//! - Select the output language of labels and formal paragraphs.
//! - Hold the excerpt budget used by short labels.
//!
//! # Invariants
//! - Defaults are English output with a 50-character excerpt budget.
//! - Language parsing never panics; unknown values yield an error message.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Default character budget for one excerpt in a short label.
pub const DEFAULT_EXCERPT_MAX_CHARS: usize = 50;

/// Output language for generated amendment text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    /// Stable short code (`en|de`).
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            other => Err(format!("unsupported language `{other}`; expected en|de")),
        }
    }
}

/// Options for rendering detected amendments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmendmentOptions {
    pub language: Language,
    /// Maximum characters per excerpt before an ellipsis is appended.
    pub excerpt_max_chars: usize,
}

impl AmendmentOptions {
    /// Creates default options for the given language.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

impl Default for AmendmentOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            excerpt_max_chars: DEFAULT_EXCERPT_MAX_CHARS,
        }
    }
}
