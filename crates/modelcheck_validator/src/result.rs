//! Validation outcomes.

use crate::ValidationError;
use serde::Serialize;

/// Outcome of validating one model instance.
///
/// Serializes as `{"tag": "OK"}` or `{"tag": "FAILED", "value": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tag", content = "value", rename_all = "UPPERCASE")]
pub enum ValidationResult {
    /// Every field satisfied its constraints
    Ok,
    /// One or more fields failed, in declaration then check order
    Failed(Vec<ValidationError>),
}

impl ValidationResult {
    /// Builds a result from collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::Ok
        } else {
            Self::Failed(errors)
        }
    }

    /// Returns true if validation passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `"OK"` or `"FAILED"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Failed(_) => "FAILED",
        }
    }

    /// Collected errors; empty when validation passed.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Ok => &[],
            Self::Failed(errors) => errors,
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        match self {
            Self::Ok => Ok(()),
            Self::Failed(errors) => Err(errors),
        }
    }
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationStats {
    /// Number of model instances visited, nested ones included
    pub models_validated: usize,

    /// Number of fields checked
    pub fields_checked: usize,

    /// Number of value constraints evaluated
    pub constraints_evaluated: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

/// A validation result together with execution statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Outcome
    pub result: ValidationResult,

    /// Validation statistics
    pub stats: ValidationStats,
}

impl ValidationReport {
    /// Returns true if validation passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Collected errors.
    pub fn errors(&self) -> &[ValidationError] {
        self.result.errors()
    }
}
