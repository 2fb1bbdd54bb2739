use crate::codec::Format;
use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::value::{Value, REF_KEY};
use log::trace;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Drives the depth-first traversal that replaces every reference node with
/// its fully resolved content.
///
/// Expansion is pre-order: a reference is resolved first, then the resolved
/// value is itself fully inlined before being substituted into the parent.
/// The same root document and base directory are threaded through every
/// recursive call, so an internal reference inside an external document
/// resolves against the original top-level document, never against the
/// external file's own root, and external paths are always relative to the
/// original input's directory.
pub struct Inliner<'doc> {
    resolver: Resolver<'doc>,
    // References currently being expanded on this branch; a path showing up
    // twice means the chain loops.
    expanding: Vec<String>,
}

impl<'doc> Inliner<'doc> {
    pub fn new(root: &'doc Value, base_dir: impl Into<PathBuf>, format: Format) -> Self {
        Inliner {
            resolver: Resolver::new(root, base_dir, format),
            expanding: Vec::new(),
        }
    }

    /// Returns a freshly built copy of `node` with every reference node
    /// replaced by its inlined content.
    ///
    /// A reference node is replaced wholesale: sibling keys next to `$ref`
    /// do not survive into the output.
    ///
    /// # Errors
    ///
    /// Fails on the first unresolvable, malformed, or cyclic reference
    /// anywhere in the tree; no partial output is produced.
    pub fn inline(&mut self, node: &Value) -> Result<Value, ResolveError> {
        match node {
            Value::Object(members) => match members.get(REF_KEY) {
                Some(target) => self.expand_reference(target),
                None => {
                    let mut inlined = BTreeMap::new();
                    for (key, value) in members {
                        inlined.insert(key.clone(), self.inline(value)?);
                    }
                    Ok(Value::Object(inlined))
                }
            },
            Value::Array(elements) => {
                let mut inlined = Vec::with_capacity(elements.len());
                for element in elements {
                    inlined.push(self.inline(element)?);
                }
                Ok(Value::Array(inlined))
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn expand_reference(&mut self, target: &Value) -> Result<Value, ResolveError> {
        let reference = match target {
            Value::String(reference) => reference.clone(),
            other => {
                return Err(ResolveError::MalformedReference {
                    found: other.type_name(),
                })
            }
        };

        if self.expanding.iter().any(|seen| *seen == reference) {
            let chain = self.expanding.join(" -> ");
            return Err(ResolveError::CyclicReference {
                cycle: format!("{chain} -> {reference}"),
            });
        }

        trace!("expanding reference {reference}");
        let resolved = self.resolver.resolve(&reference)?;

        self.expanding.push(reference);
        let inlined = self.inline(&resolved);
        self.expanding.pop();
        inlined
    }
}
