use thiserror::Error;

/// Errors raised at the boundary of the form: rejected row operations,
/// builder misuse, and malformed submission payloads.
///
/// The core algorithms ([`resequence`](super::resequence),
/// [`recompute`](super::recompute), [`input`](super::input) parsing) never
/// fail; invalid numeric input is recovered locally instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PacklistError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Deleting the only remaining row. A form always keeps one row.
    #[error("cannot delete the last remaining row")]
    LastRow,

    /// A row index outside the current row list.
    #[error("row index {index} out of range (form has {len} rows)")]
    RowIndex { index: usize, len: usize },

    /// Submission payload could not be encoded or decoded.
    #[error("payload error: {0}")]
    Payload(String),
}

/// A single validation error with field path and message.
///
/// Rule ids are grouped by what they check: `HDR-xx` header fields,
/// `PKG-xx` package ranges, `AMT-xx` amounts and totals. Row fields are
/// addressed as `items.<index>.<field>`, matching the submitted `items[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items.2.package_to").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule identifier if applicable (e.g. "PKG-02").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
