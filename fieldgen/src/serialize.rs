//! `serde` output for descriptor trees.
//!
//! Values and literal accessors serialize as strings, formatters as
//! `{ "template": "...", "arity": n }`, and groups as nested maps.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::descriptor::{Accessor, Entry, FieldsGroup};

impl Serialize for FieldsGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, entry) in self.iter() {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Value(value) => serializer.serialize_str(value),
            Entry::Accessor(accessor) => accessor.serialize(serializer),
            Entry::Group(group) => group.serialize(serializer),
        }
    }
}

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Accessor::Literal(path) => serializer.serialize_str(path),
            Accessor::Formatter(formatter) => {
                let mut state = serializer.serialize_struct("IndexFormatter", 2)?;
                state.serialize_field("template", formatter.template())?;
                state.serialize_field("arity", &formatter.arity())?;
                state.end()
            }
        }
    }
}
