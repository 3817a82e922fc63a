//! The input side: a nested description of field names.
//!
//! A schema is an object whose members are string leaves, nested objects, or
//! lists. A list is written as an array holding a single object; that object
//! is the template every element of the list follows at runtime. An array
//! holding an array is a list of lists; the inner array is read as an object
//! keyed by position (`"0"`, `"1"`, ...).
//!
//! ```
//! use fieldgen::Schema;
//!
//! let schema: Schema = r#"{ "user": { "name": "name", "tags": [{ "value": "value" }] } }"#
//!     .parse()
//!     .unwrap();
//! assert!(!schema.is_list());
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use indexmap::IndexMap;
use serde_json::Value;

use crate::trace;

/// One node of a schema below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// A field. The string is the field's own path fragment.
    Leaf(String),
    /// A nested group of fields.
    Object(Fields),
    /// A list whose elements all follow the given template.
    List(Fields),
}

impl SchemaNode {
    /// Shorthand for [`SchemaNode::Leaf`].
    pub fn leaf(value: impl Into<String>) -> Self {
        SchemaNode::Leaf(value.into())
    }
}

impl From<&str> for SchemaNode {
    fn from(value: &str) -> Self {
        SchemaNode::Leaf(value.into())
    }
}

impl From<String> for SchemaNode {
    fn from(value: String) -> Self {
        SchemaNode::Leaf(value)
    }
}

impl From<Fields> for SchemaNode {
    fn from(fields: Fields) -> Self {
        SchemaNode::Object(fields)
    }
}

/// Keyed members of an object (or of a list's template), in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: IndexMap<String, SchemaNode>,
}

impl Fields {
    /// An empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Fields::insert`].
    ///
    /// ```
    /// use fieldgen::{Fields, SchemaNode};
    ///
    /// let address = Fields::new().with("street", "street").with("city", "city");
    /// let fields = Fields::new()
    ///     .with("name", "name")
    ///     .with("address", address)
    ///     .with("tags", SchemaNode::List(Fields::new().with("value", "value")));
    /// assert_eq!(fields.len(), 3);
    /// ```
    pub fn with(mut self, key: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.insert(key, node);
        self
    }

    /// Insert a member, returning the node previously stored under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<SchemaNode>,
    ) -> Option<SchemaNode> {
        self.entries.insert(key.into(), node.into())
    }

    /// Look up a member by key.
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries.get(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaNode)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, SchemaNode)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        }
    }
}

/// The root of a schema: an object, or a list of objects.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Schema {
    /// Top-level object.
    Object(Fields),
    /// Top-level list; the fields are the element template.
    List(Fields),
}

impl Schema {
    /// The top-level fields (the element template for a list root).
    pub fn fields(&self) -> &Fields {
        match self {
            Schema::Object(fields) | Schema::List(fields) => fields,
        }
    }

    /// `true` if the root is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Schema::List(_))
    }
}

impl From<Fields> for Schema {
    fn from(fields: Fields) -> Self {
        Schema::Object(fields)
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Schema::Object(load_fields(map, "")?)),
            Value::Array(items) => Ok(Schema::List(load_list(items, "")?)),
            other => Err(SchemaError::InvalidRoot {
                found: kind_of(&other),
            }),
        }
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(SchemaError::Json)?;
        Schema::try_from(value)
    }
}

fn load_fields(
    members: impl IntoIterator<Item = (String, Value)>,
    location: &str,
) -> Result<Fields, SchemaError> {
    let mut fields = Fields::new();
    for (key, value) in members {
        let member = if location.is_empty() {
            key.clone()
        } else {
            format!("{location}.{key}")
        };
        match value {
            Value::String(leaf) => {
                fields.insert(key, SchemaNode::Leaf(leaf));
            }
            Value::Object(inner) => {
                let inner = load_fields(inner, &member)?;
                fields.insert(key, SchemaNode::Object(inner));
            }
            Value::Array(items) => {
                let template = load_list(items, &member)?;
                fields.insert(key, SchemaNode::List(template));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                trace!(member = %member, "skipping scalar schema member");
            }
        }
    }
    Ok(fields)
}

/// Only the first element is inspected; the rest are ignored.
///
/// An array template is read as an object keyed by element position, so
/// `[[{ "value": "value" }]]` yields a template with a single member `"0"`.
fn load_list(items: Vec<Value>, location: &str) -> Result<Fields, SchemaError> {
    let element = format!("{location}[0]");
    match items.into_iter().next() {
        Some(Value::Object(template)) => load_fields(template, &element),
        Some(Value::Array(positions)) => {
            trace!(element = %element, "reading nested list by position");
            let members = positions
                .into_iter()
                .enumerate()
                .map(|(index, value)| (format!("{index}"), value));
            load_fields(members, &element)
        }
        Some(other) => Err(SchemaError::ListElementNotObject {
            path: element,
            found: kind_of(&other),
        }),
        None => Err(SchemaError::EmptyList {
            path: location.into(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Error returned when a JSON document is not a valid schema.
#[derive(Debug)]
#[non_exhaustive]
pub enum SchemaError {
    /// The document root is neither an object nor an array.
    InvalidRoot {
        /// JSON kind found at the root.
        found: &'static str,
    },

    /// A list has no template element.
    EmptyList {
        /// Dotted location of the list (empty for the root).
        path: String,
    },

    /// A list's template element is a scalar or a string.
    ListElementNotObject {
        /// Dotted location of the element, e.g. `tags[0]`.
        path: String,
        /// JSON kind found instead.
        found: &'static str,
    },

    /// The input is not valid JSON.
    Json(serde_json::Error),
}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchemaError::InvalidRoot { found } => {
                write!(f, "schema root must be an object or an array, found {found}")
            }
            SchemaError::EmptyList { path } if path.is_empty() => {
                write!(f, "root list has no template element")
            }
            SchemaError::EmptyList { path } => {
                write!(f, "list `{path}` has no template element")
            }
            SchemaError::ListElementNotObject { path, found } => {
                write!(f, "list element `{path}` must be an object or an array, found {found}")
            }
            SchemaError::Json(err) => write!(f, "invalid schema JSON: {err}"),
        }
    }
}

impl core::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SchemaError::Json(err) => Some(err),
            _ => None,
        }
    }
}
