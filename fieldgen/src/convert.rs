//! Building a [`FieldsGroup`] tree from a [`Schema`].

use alloc::format;
use alloc::string::String;

use fieldgen_path::{INDEX_MARKER, IndexFormatter, is_listed};

use crate::case::to_constant_case;
use crate::descriptor::{Accessor, Entry, FIELD_SUFFIX, FieldsGroup, GROUP_PREFIX, KEY, PATH};
use crate::schema::{Fields, Schema, SchemaNode};
use crate::{debug, trace};

/// Where in the schema a conversion starts: the dotted path accumulated from
/// the root down to the fields being converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Context {
    path: String,
}

impl Context {
    /// The root context, with an empty path.
    pub const fn root() -> Self {
        Self {
            path: String::new(),
        }
    }

    /// A context at `path`. Markers in `path` count as lists already crossed.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The accumulated path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `true` if the path is empty.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Generate the descriptor tree for `schema`, starting from the root.
///
/// For a top-level list the root path is empty, so its leaf accessors
/// (`.id`) carry no marker and take no index.
///
/// ```
/// use fieldgen::{Schema, generate_fields};
///
/// let schema: Schema = r#"{ "orders": [{ "id": "id", "items": [{ "quantity": "quantity" }] }] }"#
///     .parse()
///     .unwrap();
/// let fields = generate_fields(&schema);
///
/// assert_eq!(fields.resolve("$ORDERS.ID_FIELD", &[3]).unwrap(), "orders.3.id");
/// assert_eq!(
///     fields.resolve("$ORDERS.$ITEMS.QUANTITY_FIELD", &[0, 1]).unwrap(),
///     "orders.0.items.1.quantity"
/// );
/// ```
pub fn generate_fields(schema: &Schema) -> FieldsGroup {
    convert(schema, &Context::root())
}

/// Generate the descriptor tree for `schema` as if it were nested at
/// `context`.
pub fn convert(schema: &Schema, context: &Context) -> FieldsGroup {
    let group = match schema {
        Schema::Object(fields) => convert_fields(fields, false, context),
        Schema::List(template) => convert_fields(template, true, context),
    };
    debug!(path = context.path(), entries = group.len(), "converted schema");
    group
}

fn convert_fields(fields: &Fields, is_list: bool, context: &Context) -> FieldsGroup {
    let path = context.path();
    let is_listed_before = is_listed(path);

    trace!(path, is_list, is_listed_before, "converting fields");

    fields.iter().fold(FieldsGroup::default(), |mut group, (key, node)| {
        let converted = to_constant_case(key);

        match node {
            SchemaNode::Leaf(value) => {
                group.insert(converted.clone(), Entry::Value(value.clone()));

                // Below a list the path needs indices, so the key (not the
                // value) goes into the template.
                let accessor = if is_list || is_listed_before {
                    Accessor::Formatter(IndexFormatter::new(format!("{path}.{key}")))
                } else if path.is_empty() {
                    Accessor::Literal(value.clone())
                } else {
                    Accessor::Literal(format!("{path}.{value}"))
                };
                group.insert(field_name(&converted), Entry::Accessor(accessor));
            }
            SchemaNode::List(template) => {
                let sub_path = if path.is_empty() {
                    format!("{key}.{INDEX_MARKER}")
                } else {
                    format!("{path}.{key}.{INDEX_MARKER}")
                };

                let mut sub_group = convert_fields(template, true, &Context::new(sub_path));
                sub_group.insert(KEY.into(), Entry::Value(key.into()));
                if !path.is_empty() {
                    sub_group.insert(PATH.into(), list_accessor(path, key));
                }

                group.insert(group_name(&converted), Entry::Group(sub_group));
                group.insert(field_name(&converted), list_accessor(path, key));
            }
            SchemaNode::Object(inner) => {
                let sub_path = if path.is_empty() {
                    String::from(key)
                } else {
                    format!("{path}.{key}")
                };

                let mut sub_group = convert_fields(inner, false, &Context::new(sub_path.as_str()));
                sub_group.insert(KEY.into(), Entry::Value(key.into()));
                if !path.is_empty() {
                    let accessor = if is_listed(&sub_path) {
                        Accessor::Formatter(IndexFormatter::new(sub_path))
                    } else {
                        Accessor::Literal(sub_path)
                    };
                    sub_group.insert(PATH.into(), Entry::Accessor(accessor));
                }

                group.insert(group_name(&converted), Entry::Group(sub_group));
            }
        }

        group
    })
}

/// The accessor for a list itself: the parent path joined with the key,
/// always a formatter. At the root this yields `.key`.
fn list_accessor(path: &str, key: &str) -> Entry {
    Entry::Accessor(Accessor::Formatter(IndexFormatter::new(format!(
        "{path}.{key}"
    ))))
}

fn field_name(converted: &str) -> String {
    format!("{converted}{FIELD_SUFFIX}")
}

fn group_name(converted: &str) -> String {
    format!("{GROUP_PREFIX}{converted}")
}
