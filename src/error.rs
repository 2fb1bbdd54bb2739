use crate::codec::Format;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BundleError {
    #[error("failed to read input file `{}`", .path.display())]
    #[diagnostic(
        code(bundle::input_read),
        help("Check that the file exists and is readable.")
    )]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file `{}` is not valid {format}", .path.display())]
    #[diagnostic(
        code(bundle::input_parse),
        help("The input must parse as the format implied by its file extension.")
    )]
    InputParse {
        path: PathBuf,
        format: Format,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to serialize the inlined document")]
    #[diagnostic(code(bundle::output_serialize))]
    OutputSerialize {
        #[source]
        source: SerializeError,
    },

    #[error("failed to write output file `{}`", .path.display())]
    #[diagnostic(code(bundle::output_write))]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum ResolveError {
    #[error("reference path not found: {reference}")]
    #[diagnostic(
        code(resolve::reference_not_found),
        help("Internal references descend the root document one key per `#/` segment; every segment must name an existing key.")
    )]
    ReferenceNotFound { reference: String },

    #[error("`$ref` value must be a string, found {found}")]
    #[diagnostic(code(resolve::malformed_reference))]
    MalformedReference { found: &'static str },

    #[error("cyclic reference: {cycle}")]
    #[diagnostic(
        code(resolve::cyclic_reference),
        help("A reference chain loops back on itself; break the cycle before inlining.")
    )]
    CyclicReference { cycle: String },

    #[error("failed to read referenced file `{}` (via `{reference}`)", .path.display())]
    #[diagnostic(
        code(resolve::external_read),
        help("External references are resolved against the directory of the original input document.")
    )]
    ExternalRead {
        reference: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse referenced file `{}` (via `{reference}`)", .path.display())]
    #[diagnostic(code(resolve::external_parse))]
    ExternalParse {
        reference: String,
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
