//! Field access errors for list-screen records

/// Error type for field access on a [`Record`](crate::Record).
///
/// List screens tolerate loosely-shaped rows: a missing or null field simply
/// renders as an empty cell. These errors are for the paths that *do* depend
/// on a field being present and readable, e.g. an attendance sheet reading
/// check-in stamps or a leave form reading a day count.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The record carries no field with this name.
    #[error("record has no field '{field}'")]
    Missing { field: String },

    /// The field is present but holds a different type than was asked for.
    #[error("field '{field}' holds {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The field is present but its content does not read as the requested
    /// shape, e.g. a free-text date that fails to parse.
    #[error("field '{field}' holds {actual} that does not read as {target}")]
    Uncoercible {
        field: String,
        target: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a type-mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a coercion-failure error.
    pub fn uncoercible(field: impl Into<String>, target: &'static str, actual: &'static str) -> Self {
        Self::Uncoercible {
            field: field.into(),
            target,
            actual,
        }
    }
}
