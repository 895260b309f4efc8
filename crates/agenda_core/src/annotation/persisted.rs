//! Lenient decoding of persisted annotation payloads.
//!
//! Stored payloads predate the per-node layout and were written by several
//! client versions, so shape mismatches are repaired rather than rejected.

use super::store::AnnotationMatrix;
use crate::model::agenda::AgendaJsonError;
use serde_json::Value;

/// Decodes a persisted annotation matrix.
///
/// Returns `None` when the value is not an array (nothing persisted).
/// A per-TOP entry that is not an array is treated as a one-element list;
/// `null` elements decode as `""` and other scalars as their JSON text.
pub fn annotations_from_json(value: &Value) -> Option<AnnotationMatrix> {
    let tops = value.as_array()?;
    Some(
        tops.iter()
            .map(|entry| match entry {
                Value::Array(items) => items.iter().map(annotation_text).collect(),
                other => vec![annotation_text(other)],
            })
            .collect(),
    )
}

/// Parses persisted annotation payload text.
///
/// Only invalid JSON syntax is an error.
pub fn parse_annotations(payload: &str) -> Result<Option<AnnotationMatrix>, AgendaJsonError> {
    let value: Value = serde_json::from_str(payload)?;
    Ok(annotations_from_json(&value))
}

fn annotation_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::annotations_from_json;
    use serde_json::json;

    #[test]
    fn scalar_entries_and_nulls_are_repaired() {
        let matrix = annotations_from_json(&json!([["a", null, 3], "solo", null])).unwrap();
        assert_eq!(
            matrix,
            vec![
                vec!["a".to_string(), String::new(), "3".to_string()],
                vec!["solo".to_string()],
                vec![String::new()],
            ]
        );
    }

    #[test]
    fn non_array_payload_means_nothing_persisted() {
        assert_eq!(annotations_from_json(&json!(null)), None);
        assert_eq!(annotations_from_json(&json!({"0": ["a"]})), None);
    }
}
