use thiserror::Error;

/// Errors raised while filling in or reading the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field was empty or did not hold a finite number
    #[error("Invalid input for {label}")]
    Validation { feature: &'static str, label: String },
    /// A value was addressed to a feature the form does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// A bulk fill did not supply one value per field
    #[error("Expected {expected} values, got {actual}")]
    FieldCount { expected: usize, actual: usize },
    /// A submission is already in flight
    #[error("A prediction is already in progress")]
    Busy,
}
