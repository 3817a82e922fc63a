//! The output side: a tree of generated names, values and path accessors.

use alloc::string::String;

use fieldgen_path::{FormatterMismatch, IndexFormatter};
use indexmap::IndexMap;

/// Name under which a group stores the key it was generated from.
pub const KEY: &str = "KEY";

/// Name under which a non-root group stores the accessor for its own location.
pub const PATH: &str = "PATH";

/// Suffix of accessor names (`NAME` → `NAME_FIELD`).
pub const FIELD_SUFFIX: &str = "_FIELD";

/// Prefix of sub-group names (`ADDRESS` → `$ADDRESS`).
pub const GROUP_PREFIX: char = '$';

/// A way to obtain the dotted path of a field or group.
///
/// Paths that never crossed a list are known in full up front and are stored
/// as [`Accessor::Literal`]. Paths below a list need one index per list and
/// are stored as [`Accessor::Formatter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// A fully resolved path.
    Literal(String),
    /// A path template awaiting list indices.
    Formatter(IndexFormatter),
}

impl Accessor {
    /// Number of indices [`Accessor::resolve`] expects. Always 0 for literals.
    pub fn arity(&self) -> usize {
        match self {
            Accessor::Literal(_) => 0,
            Accessor::Formatter(formatter) => formatter.arity(),
        }
    }

    /// `true` for [`Accessor::Formatter`].
    pub fn is_formatter(&self) -> bool {
        matches!(self, Accessor::Formatter(_))
    }

    /// The literal path, or the formatter's template with its markers.
    pub fn template(&self) -> &str {
        match self {
            Accessor::Literal(path) => path,
            Accessor::Formatter(formatter) => formatter.template(),
        }
    }

    /// The literal path, if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Accessor::Literal(path) => Some(path),
            Accessor::Formatter(_) => None,
        }
    }

    /// The formatter, if this is one.
    pub fn as_formatter(&self) -> Option<&IndexFormatter> {
        match self {
            Accessor::Literal(_) => None,
            Accessor::Formatter(formatter) => Some(formatter),
        }
    }

    /// Produce the dotted path for the given list indices.
    ///
    /// A literal accepts no indices at all.
    pub fn resolve(&self, indices: &[usize]) -> Result<String, FormatterMismatch> {
        match self {
            Accessor::Literal(path) if indices.is_empty() => Ok(path.clone()),
            Accessor::Literal(_) => Err(FormatterMismatch {
                required: 0,
                received: indices.len(),
            }),
            Accessor::Formatter(formatter) => formatter.format(indices),
        }
    }
}

/// A single generated member of a [`FieldsGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A copied leaf value, or a group's `KEY`.
    Value(String),
    /// A `*_FIELD` or `PATH` accessor.
    Accessor(Accessor),
    /// A `$NAME` sub-group.
    Group(FieldsGroup),
}

impl Entry {
    /// The string, for [`Entry::Value`].
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The accessor, for [`Entry::Accessor`].
    pub fn as_accessor(&self) -> Option<&Accessor> {
        match self {
            Entry::Accessor(accessor) => Some(accessor),
            _ => None,
        }
    }

    /// The sub-group, for [`Entry::Group`].
    pub fn as_group(&self) -> Option<&FieldsGroup> {
        match self {
            Entry::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// A descriptor node: generated names mapped to [`Entry`]s.
///
/// For a leaf `firstName: "firstName"` a group holds `FIRST_NAME` (the value)
/// and `FIRST_NAME_FIELD` (its accessor). For a nested object or list it holds
/// `$NAME`, a sub-group that also carries `KEY` and, below the root, `PATH`.
/// Lists additionally get a `NAME_FIELD` accessor in the parent.
///
/// Groups are built once by [`convert`](fn@crate::convert) and never change
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsGroup {
    entries: IndexMap<String, Entry>,
}

impl FieldsGroup {
    /// Later writes to the same name replace earlier ones.
    pub(crate) fn insert(&mut self, name: String, entry: Entry) {
        self.entries.insert(name, entry);
    }

    /// Look up an entry by generated name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Look up a value entry, e.g. `group.value("FIRST_NAME")`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Entry::as_value)
    }

    /// Look up an accessor entry, e.g. `group.accessor("FIRST_NAME_FIELD")`.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.get(name).and_then(Entry::as_accessor)
    }

    /// Look up a sub-group, e.g. `group.group("$ADDRESS")`.
    pub fn group(&self, name: &str) -> Option<&FieldsGroup> {
        self.get(name).and_then(Entry::as_group)
    }

    /// The original key this group was generated from. `None` at the root.
    pub fn key(&self) -> Option<&str> {
        self.value(KEY)
    }

    /// The accessor for this group's own location. `None` for the root and
    /// for groups directly below it.
    pub fn path(&self) -> Option<&Accessor> {
        self.accessor(PATH)
    }

    /// Follow a dot-separated chain of generated names, e.g.
    /// `"$USER.$TAGS.VALUE_FIELD"`.
    pub fn find(&self, location: &str) -> Option<&Entry> {
        let mut names = location.split('.');
        let mut entry = self.get(names.next()?)?;
        for name in names {
            entry = entry.as_group()?.get(name)?;
        }
        Some(entry)
    }

    /// Resolve the accessor at `location` (see [`FieldsGroup::find`]) with the
    /// given list indices.
    pub fn resolve(&self, location: &str, indices: &[usize]) -> Result<String, LookupError> {
        let entry = self.find(location).ok_or_else(|| LookupError::Missing {
            location: location.into(),
        })?;
        let accessor = entry.as_accessor().ok_or_else(|| LookupError::NotAnAccessor {
            location: location.into(),
        })?;
        Ok(accessor.resolve(indices)?)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Generated names in generation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Error returned by [`FieldsGroup::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// Nothing is stored at the location.
    Missing {
        /// The location that was looked up.
        location: String,
    },

    /// The location holds a value or a group, not an accessor.
    NotAnAccessor {
        /// The location that was looked up.
        location: String,
    },

    /// The accessor was given the wrong number of indices.
    Mismatch(FormatterMismatch),
}

impl From<FormatterMismatch> for LookupError {
    fn from(err: FormatterMismatch) -> Self {
        LookupError::Mismatch(err)
    }
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LookupError::Missing { location } => write!(f, "no entry at `{location}`"),
            LookupError::NotAnAccessor { location } => {
                write!(f, "entry at `{location}` is not an accessor")
            }
            LookupError::Mismatch(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            LookupError::Mismatch(err) => Some(err),
            _ => None,
        }
    }
}
