use crate::codec::Format;
use crate::error::ResolveError;
use crate::value::Value;
use log::{debug, trace};
use std::fs;
use std::path::PathBuf;

/// Resolves reference paths against a root document and a base directory.
///
/// A `Resolver` only looks references up; it never inlines what it returns.
/// Resolved content may itself contain further references (including
/// references into yet other external files) — expanding those is the
/// [`Inliner`](crate::inliner::Inliner)'s job.
pub struct Resolver<'doc> {
    root: &'doc Value,
    base_dir: PathBuf,
    format: Format,
}

impl<'doc> Resolver<'doc> {
    pub fn new(root: &'doc Value, base_dir: impl Into<PathBuf>, format: Format) -> Self {
        Resolver {
            root,
            base_dir: base_dir.into(),
            format,
        }
    }

    /// Produces the raw value a reference path points to.
    ///
    /// Internal references (`#/a/b`) descend the root document key by key.
    /// Any other path is joined to the base directory and loaded as a
    /// standalone document in the run's input format.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` when an internal segment names no key,
    /// `ExternalReadFailure`/`ExternalParseFailure` when an external file
    /// cannot be read or parsed.
    pub fn resolve(&self, reference: &str) -> Result<Value, ResolveError> {
        match reference.strip_prefix("#/") {
            Some(pointer) => self.resolve_internal(reference, pointer),
            None => self.resolve_external(reference),
        }
    }

    fn resolve_internal(&self, reference: &str, pointer: &str) -> Result<Value, ResolveError> {
        trace!("resolving internal reference {reference}");
        let mut current = self.root;
        for segment in pointer.split('/') {
            let members = match current.as_object() {
                Some(members) => members,
                // Reached a leaf early: the value stands in for the whole
                // reference and any remaining segments are ignored.
                None => break,
            };
            current = members
                .get(segment)
                .ok_or_else(|| ResolveError::ReferenceNotFound {
                    reference: reference.to_string(),
                })?;
        }
        Ok(current.clone())
    }

    fn resolve_external(&self, reference: &str) -> Result<Value, ResolveError> {
        let path = self.base_dir.join(reference);
        debug!(
            "loading external reference {reference} from {}",
            path.display()
        );
        let text = fs::read_to_string(&path).map_err(|source| ResolveError::ExternalRead {
            reference: reference.to_string(),
            path: path.clone(),
            source,
        })?;
        self.format
            .parse(&text)
            .map_err(|source| ResolveError::ExternalParse {
                reference: reference.to_string(),
                path,
                source,
            })
    }
}
