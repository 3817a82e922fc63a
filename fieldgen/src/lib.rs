#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod case;

mod schema;
pub use schema::{Fields, Schema, SchemaError, SchemaNode};

mod descriptor;
pub use descriptor::{
    Accessor, Entry, FIELD_SUFFIX, FieldsGroup, GROUP_PREFIX, KEY, LookupError, PATH,
};

mod convert;
pub use convert::{Context, convert, generate_fields};

pub mod walk;
pub use walk::{DescriptorVisitor, VisitDecision, WalkStatus, walk_descriptor};

mod pretty;
mod serialize;

pub use fieldgen_path::{FormatterMismatch, INDEX_MARKER, IndexFormatter, is_listed};

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use trace;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
