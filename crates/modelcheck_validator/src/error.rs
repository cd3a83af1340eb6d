//! Field-level validation errors.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Closed taxonomy of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Field is required and absent
    FieldRequired,
    /// Field is present but violates a type or shape constraint
    FieldTypeCheck,
}

impl ErrorKind {
    /// Returns the stable tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FieldRequired => "FIELD_REQUIRED",
            ErrorKind::FieldTypeCheck => "FIELD_TYPE_CHECK",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check, attributed to a field path.
///
/// Nested fields use dotted paths (`other.info`), list elements use an
/// index suffix (`other.info[1]`).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} on field '{field_name}'{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct ValidationError {
    /// Failure category
    pub kind: ErrorKind,
    /// Path of the failing field
    pub field_name: String,
    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationError {
    /// Creates a new required-field error.
    pub fn required(field_name: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::FieldRequired,
            field_name: field_name.into(),
            message: Some("This field is required".to_string()),
        }
    }

    /// Creates a new type-check error.
    pub fn type_check(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::FieldTypeCheck,
            field_name: field_name.into(),
            message: Some(message.into()),
        }
    }
}
