//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// The document could not be read, decoded, or mapped onto the model.
///
/// Raised at the first offense; a malformed document is not walked further.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Decode(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid type for {path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl From<serde_yaml::Error> for ParseError {
    fn from(e: serde_yaml::Error) -> Self {
        ParseError::Decode(e.to_string())
    }
}

/// One or more rule violations in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("configuration validation failed:\n{}", format_violations(.violations))]
pub struct ValidationError {
    /// Every violation found, in visit order.
    pub violations: Vec<String>,
}

fn format_violations(violations: &[String]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ValidationError {
            violations: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "configuration validation failed:\n  - first\n  - second"
        );
    }

    #[test]
    fn test_invalid_type_message_names_path() {
        let err = ParseError::InvalidType {
            path: "plugins[1].id".to_string(),
            expected: "string",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "invalid type for plugins[1].id: expected string, found number"
        );
    }
}
