use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key that marks a mapping node as a reference to other content.
pub const REF_KEY: &str = "$ref";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// The value under the `$ref` key, if this node is a reference node.
    /// Sibling keys next to `$ref` do not affect classification.
    #[must_use]
    pub fn reference_target(&self) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(REF_KEY))
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.reference_target().is_some()
    }

    /// Kind of this node, for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
            Value::Array(_) => "sequence",
            Value::Object(_) => "mapping",
        }
    }
}
