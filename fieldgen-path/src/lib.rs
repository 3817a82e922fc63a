#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

mod error;
pub use error::FormatterMismatch;

/// Placeholder standing for a list index inside a path template.
///
/// Real path segments never contain it, so its presence alone tells that a
/// path went through a list.
pub const INDEX_MARKER: char = '#';

/// Returns `true` if `path` contains at least one [`INDEX_MARKER`], i.e. it
/// crossed a list boundary somewhere between the root and its last segment.
pub fn is_listed(path: &str) -> bool {
    path.contains(INDEX_MARKER)
}

/// Counts the [`INDEX_MARKER`]s in `path`.
pub fn count_markers(path: &str) -> usize {
    path.matches(INDEX_MARKER).count()
}

/// A path template with list-index placeholders.
///
/// The number of required indices is fixed when the formatter is built and
/// every call to [`IndexFormatter::format`] must supply exactly that many.
/// Indices are substituted into the markers in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexFormatter {
    template: String,
    required: usize,
}

impl IndexFormatter {
    /// Build a formatter over `template`, counting its markers.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let required = count_markers(&template);
        Self { template, required }
    }

    /// The template as given, markers included.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of indices [`IndexFormatter::format`] expects.
    pub const fn arity(&self) -> usize {
        self.required
    }

    /// Substitute `indices` into the template.
    ///
    /// Fails with [`FormatterMismatch`] when `indices.len()` differs from
    /// [`IndexFormatter::arity`].
    pub fn format(&self, indices: &[usize]) -> Result<String, FormatterMismatch> {
        if indices.len() != self.required {
            return Err(FormatterMismatch {
                required: self.required,
                received: indices.len(),
            });
        }

        let mut result = String::with_capacity(self.template.len() + indices.len() * 2);
        for (i, segment) in self.template.split(INDEX_MARKER).enumerate() {
            if i > 0 {
                write!(result, "{}", indices[i - 1]).unwrap();
            }
            result.push_str(segment);
        }
        Ok(result)
    }
}

impl core::fmt::Display for IndexFormatter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.template)
    }
}

impl From<&str> for IndexFormatter {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for IndexFormatter {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_paths() {
        assert!(is_listed("users.#.name"));
        assert!(!is_listed("users.name"));
        assert!(!is_listed(""));
    }

    #[test]
    fn counts_every_marker() {
        assert_eq!(count_markers("a.#.b.#.c.#"), 3);
        assert_eq!(count_markers("a.b"), 0);
    }

    #[test]
    fn zero_arity_template_is_returned_verbatim() {
        let formatter = IndexFormatter::new("user.tags");
        assert_eq!(formatter.arity(), 0);
        assert_eq!(formatter.format(&[]).unwrap(), "user.tags");
    }

    #[test]
    fn substitutes_in_order() {
        let formatter = IndexFormatter::new("users.#.id.#.name");
        assert_eq!(formatter.format(&[0, 1]).unwrap(), "users.0.id.1.name");
        assert_eq!(formatter.format(&[12, 7]).unwrap(), "users.12.id.7.name");
    }

    #[test]
    fn marker_at_the_edges() {
        let formatter = IndexFormatter::new("#.x.#");
        assert_eq!(formatter.format(&[4, 5]).unwrap(), "4.x.5");
    }
}
