//! Human-readable rendering of descriptor trees.
//!
//! ```text
//! NAME = "name"
//! NAME_FIELD -> "name"
//! $ROUTES {
//!   KEY = "routes"
//!   NAME = "name"
//!   NAME_FIELD -> fn(1) "routes.#.name"
//! }
//! ROUTES_FIELD -> fn(0) ".routes"
//! ```

use core::fmt::{self, Display, Formatter};

use crate::descriptor::{Accessor, Entry, FieldsGroup};

const INDENT: &str = "  ";

impl Display for Accessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Literal(path) => write!(f, "{path:?}"),
            Accessor::Formatter(formatter) => {
                write!(f, "fn({}) {:?}", formatter.arity(), formatter.template())
            }
        }
    }
}

impl Display for FieldsGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_group(f, self, 0)
    }
}

fn write_group(f: &mut Formatter<'_>, group: &FieldsGroup, depth: usize) -> fmt::Result {
    for (name, entry) in group.iter() {
        for _ in 0..depth {
            f.write_str(INDENT)?;
        }
        match entry {
            Entry::Value(value) => writeln!(f, "{name} = {value:?}")?,
            Entry::Accessor(accessor) => writeln!(f, "{name} -> {accessor}")?,
            Entry::Group(inner) => {
                writeln!(f, "{name} {{")?;
                write_group(f, inner, depth + 1)?;
                for _ in 0..depth {
                    f.write_str(INDENT)?;
                }
                writeln!(f, "}}")?;
            }
        }
    }
    Ok(())
}
