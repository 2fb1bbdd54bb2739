use crate::error::{ParseError, SerializeError};
use crate::value::Value;
use std::fmt;
use std::path::Path;

/// Input format, selected once from the root document's file extension and
/// reused for every external reference loaded during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format implied by a file extension. Anything that is not
    /// `.yaml`/`.yml` is treated as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Parses `text` into a document tree.
    ///
    /// # Errors
    /// Returns a `ParseError` if `text` is not valid in this format, or if a
    /// mapping carries non-string keys.
    pub fn parse(self, text: &str) -> Result<Value, ParseError> {
        match self {
            Format::Json => Ok(serde_json::from_str(text)?),
            Format::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Serializes a document tree. JSON output is pretty-printed with a
    /// two-space indent.
    ///
    /// # Errors
    /// Returns a `SerializeError` if the tree cannot be serialized.
    pub fn serialize(self, value: &Value) -> Result<String, SerializeError> {
        match self {
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}
