//! Decoder boundary: YAML text to the generic value tree.
//!
//! `serde_yaml` does the lexing and parsing and feeds [`Value`]'s own
//! deserializer, so a repeated key overwrites the earlier one instead of
//! failing. Nothing from `serde_yaml` escapes this module.

use buildmeta_core::value::Value;

use crate::ParseError;

/// Decode a YAML document. Empty input decodes to [`Value::Null`].
pub fn parse_document(text: &str) -> Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(text)?)
}
