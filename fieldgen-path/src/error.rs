//! Error type for index substitution.

/// Error returned when an [`IndexFormatter`](crate::IndexFormatter) is given
/// a number of indices that differs from the markers in its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatterMismatch {
    /// Number of markers in the template.
    pub required: usize,
    /// Number of indices supplied by the caller.
    pub received: usize,
}

impl core::fmt::Display for FormatterMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Formatter Mismatch: Template requires {} arguments, but received {}.",
            self.required, self.received
        )
    }
}

impl core::error::Error for FormatterMismatch {}
