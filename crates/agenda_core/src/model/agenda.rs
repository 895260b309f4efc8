//! Agenda tree domain model.
//!
//! # Responsibility
//! - Define the recursive agenda node shared by tree edits and enumeration.
//! - Decode persisted agenda JSON, including legacy item shapes.
//!
//! # Invariants
//! - A node with no children is a leaf.
//! - `children` is omitted from serialized output when empty.
//! - Lenient decoding never fails on a well-formed JSON value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structural address of one node: zero-based child indices from the forest root.
///
/// An empty path addresses no node. It is only meaningful as the target for
/// appending a new top-level item.
pub type NodePath = [usize];

/// Ordered top-level agenda items ("TOPs").
pub type AgendaForest = Vec<AgendaNode>;

/// One titled agenda item with ordered sub-items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaNode {
    /// User-facing title. May be empty while being edited.
    #[serde(alias = "titel", default)]
    pub title: String,
    /// Ordered sub-items. Empty means leaf.
    #[serde(
        alias = "unterpunkte",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<AgendaNode>,
}

impl AgendaNode {
    /// Creates a leaf node with the given title.
    pub fn leaf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with the given title and children.
    pub fn with_children(title: impl Into<String>, children: Vec<AgendaNode>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Decodes one persisted agenda item leniently.
    ///
    /// Accepted shapes:
    /// - a bare string (legacy flat agenda), which becomes a leaf;
    /// - an object with `title`/`titel` and `children`/`unterpunkte`.
    ///
    /// Missing or non-string titles decode as `""`; a missing or non-array
    /// children field decodes as no children. Any other value decodes as an
    /// empty leaf.
    pub fn from_json_value(value: &Value) -> Self {
        match value {
            Value::String(title) => Self::leaf(title.as_str()),
            Value::Object(map) => {
                let title = map
                    .get("title")
                    .or_else(|| map.get("titel"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let children = map
                    .get("children")
                    .or_else(|| map.get("unterpunkte"))
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(Self::from_json_value).collect())
                    .unwrap_or_default();
                Self { title, children }
            }
            _ => Self::default(),
        }
    }
}

/// Decodes a persisted agenda forest leniently.
///
/// A non-array value decodes as an empty forest.
pub fn forest_from_json(value: &Value) -> AgendaForest {
    value
        .as_array()
        .map(|items| items.iter().map(AgendaNode::from_json_value).collect())
        .unwrap_or_default()
}

/// Errors from decoding agenda payload text.
#[derive(Debug)]
pub enum AgendaJsonError {
    /// Payload text is not valid JSON.
    Json(serde_json::Error),
}

impl Display for AgendaJsonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid agenda payload: {err}"),
        }
    }
}

impl Error for AgendaJsonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for AgendaJsonError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses agenda forest payload text.
///
/// Only invalid JSON syntax is an error; unexpected shapes are decoded
/// leniently via [`forest_from_json`].
pub fn parse_forest(payload: &str) -> Result<AgendaForest, AgendaJsonError> {
    let value: Value = serde_json::from_str(payload)?;
    Ok(forest_from_json(&value))
}
