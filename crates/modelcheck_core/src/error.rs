//! Error types for model definitions.
//!
//! These errors describe malformed schemas or misuse of an instance (such as
//! assigning an undeclared field). They are raised when a model is defined or
//! mutated, never as the outcome of validating an instance.

use thiserror::Error;

/// Result type for model definition operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Main error type for model definitions and instance mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Field is not declared on the model
    #[error("Model '{model}' has no field named '{field}'")]
    UnknownField {
        /// Model name
        model: String,
        /// Requested field name
        field: String,
    },

    /// Field declared twice on the same model
    #[error("Duplicate field '{field}' in model '{model}'")]
    DuplicateField {
        /// Model name
        model: String,
        /// Duplicated field name
        field: String,
    },

    /// Field specification inside a model is malformed
    #[error("Invalid field '{field}' in model '{model}': {source}")]
    InvalidField {
        /// Model name
        model: String,
        /// Field name
        field: String,
        /// Underlying definition error
        #[source]
        source: Box<ModelError>,
    },

    /// A declared choice is not of the field's type
    #[error("Choice {choice} is not a valid {field_type} value")]
    ChoiceTypeMismatch {
        /// Declared field type
        field_type: String,
        /// Offending choice, debug formatted
        choice: String,
    },

    /// Choices declared on a compound type
    #[error("Choices are not supported for {0} fields")]
    ChoicesNotSupported(String),

    /// Choices declared but empty
    #[error("Choices must contain at least one value")]
    EmptyChoices,

    /// Constraint declared on a type it cannot apply to
    #[error("Constraint '{constraint}' does not apply to {field_type} fields")]
    ConstraintNotApplicable {
        /// Constraint name
        constraint: &'static str,
        /// Declared field type
        field_type: String,
    },

    /// Lower bound greater than upper bound
    #[error("Invalid {constraint} bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds {
        /// Constraint name
        constraint: &'static str,
        /// Lower bound
        min: String,
        /// Upper bound
        max: String,
    },

    /// Pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {error}")]
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler message
        error: String,
    },
}

impl ModelError {
    /// Creates a new unknown field error.
    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            model: model.into(),
            field: field.into(),
        }
    }

    /// Creates a new not-applicable constraint error.
    pub fn not_applicable(constraint: &'static str, field_type: impl ToString) -> Self {
        Self::ConstraintNotApplicable {
            constraint,
            field_type: field_type.to_string(),
        }
    }

    /// Wraps a definition error with the model and field it belongs to.
    pub fn in_field(self, model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidField {
            model: model.into(),
            field: field.into(),
            source: Box::new(self),
        }
    }
}
