use crate::codec::Format;
use crate::error::BundleError;
use crate::inliner::Inliner;
use crate::value::Value;
use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// The result of a successful inlining run.
///
/// This struct contains the fully inlined document alongside the document as
/// it was parsed, references intact, and provides methods for serialization,
/// making it suitable for both direct consumption and for tooling that wants
/// to diff the two trees.
pub struct InlineResult {
    pub document: Value,
    pub source_document: Value,
    pub format: Format,
}

impl Serialize for InlineResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.serialize(serializer)
    }
}

impl InlineResult {
    /// Serializes the inlined document into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the inlined document into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }

    /// Serializes the inlined document in the same format the input used.
    ///
    /// # Errors
    /// Returns `BundleError::OutputSerialize` if serialization fails.
    pub fn render(&self) -> Result<String, BundleError> {
        self.format
            .serialize(&self.document)
            .map_err(|source| BundleError::OutputSerialize { source })
    }
}

/// Inlines every reference in a source document.
///
/// This is the primary entry point. `file_name` determines the input format
/// (by extension) and the base directory that every external reference in
/// the run is resolved against (the file's parent directory).
///
/// # Errors
///
/// Returns a `BundleError` if the source cannot be parsed or any reference
/// fails to resolve.
pub fn inline(source: &str, file_name: &str) -> Result<InlineResult, BundleError> {
    let path = PathBuf::from(file_name);
    let format = Format::from_path(&path);

    let source_document = format
        .parse(source)
        .map_err(|source| BundleError::InputParse {
            path: path.clone(),
            format,
            source,
        })?;

    let base_dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut inliner = Inliner::new(&source_document, base_dir, format);
    let document = inliner.inline(&source_document)?;

    Ok(InlineResult {
        document,
        source_document,
        format,
    })
}

/// Reads `path` and inlines every reference in it.
///
/// # Errors
///
/// Returns a `BundleError` if the file cannot be read, parsed, or inlined.
pub fn inline_file(path: &Path) -> Result<InlineResult, BundleError> {
    let source = fs::read_to_string(path).map_err(|source| BundleError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    inline(&source, &path.to_string_lossy())
}
