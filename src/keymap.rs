//! JSON substitution-key parsing.
//!
//! A key file is a JSON object mapping single characters to either a single
//! replacement character or `null` for "leave unchanged":
//!
//! ```json
//! { "А": "Я", "Д": null }
//! ```
//!
//! Member order in the file is preserved and becomes the substitution
//! order.

use serde_json::Value;

use crate::remap::{CharMap, Rule};
use crate::ChastotaError;

fn single_char(s: &str, what: &str) -> Result<char, ChastotaError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ChastotaError::KeyMap(format!(
            "{what} '{s}' must be exactly one character"
        ))),
    }
}

/// Parse a key map from JSON text.
///
/// Rejected with [`ChastotaError::KeyMap`]: documents that are not a JSON
/// object, values that are neither a string nor `null`, and keys or values
/// longer than one character. Note that JSON itself collapses duplicate
/// object members (the last one wins) before this validation runs.
pub fn parse_key_map(json: &str) -> Result<CharMap, ChastotaError> {
    let doc: Value = serde_json::from_str(json)?;
    let object = doc
        .as_object()
        .ok_or_else(|| ChastotaError::KeyMap("key map must be a JSON object".into()))?;

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let key = single_char(key, "key")?;
        let rule = match value {
            Value::Null => Rule::Keep,
            Value::String(s) => Rule::Replace(single_char(s, "value")?),
            other => {
                return Err(ChastotaError::KeyMap(format!(
                    "value for key '{key}' must be a string or null, got {other}"
                )))
            }
        };
        entries.push((key, rule));
    }
    CharMap::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replacements_and_keeps() {
        let map = parse_key_map(r#"{"А": "Я", "Д": null}"#).unwrap();
        assert_eq!(
            map.entries(),
            &[('А', Rule::Replace('Я')), ('Д', Rule::Keep)]
        );
    }

    #[test]
    fn file_order_becomes_entry_order() {
        let map = parse_key_map(r#"{"Б": "В", "А": "Б"}"#).unwrap();
        assert_eq!(
            map.entries(),
            &[('Б', Rule::Replace('В')), ('А', Rule::Replace('Б'))]
        );
    }

    #[test]
    fn multi_character_keys_and_values_are_rejected() {
        assert!(matches!(
            parse_key_map(r#"{"АБ": "В"}"#),
            Err(ChastotaError::KeyMap(_))
        ));
        assert!(matches!(
            parse_key_map(r#"{"А": "БВ"}"#),
            Err(ChastotaError::KeyMap(_))
        ));
        assert!(matches!(
            parse_key_map(r#"{"А": ""}"#),
            Err(ChastotaError::KeyMap(_))
        ));
    }

    #[test]
    fn non_string_values_and_non_objects_are_rejected() {
        assert!(matches!(
            parse_key_map(r#"{"А": 3}"#),
            Err(ChastotaError::KeyMap(_))
        ));
        assert!(matches!(
            parse_key_map(r#"["А", "Б"]"#),
            Err(ChastotaError::KeyMap(_))
        ));
    }

    #[test]
    fn invalid_json_surfaces_as_json_error() {
        assert!(matches!(
            parse_key_map("not json"),
            Err(ChastotaError::Json(_))
        ));
    }
}
