//! Constraint validation logic.
//!
//! This module handles the checks applied to a present value:
//! - Type: the value's kind matches the declared type (emails and URLs must
//!   also parse as such)
//! - Length: strings (in characters) and lists (in elements), inclusive
//! - Pattern: string values must match a regex
//! - Value bounds: numeric values, inclusive
//! - Choices: the value must equal one of the allowed values
//!
//! Every violation is a `FIELD_TYPE_CHECK` error.

use crate::ValidationError;
use modelcheck_core::{FieldSpec, FieldType, Value};
use validator::{ValidateEmail, ValidateLength, ValidateUrl};

/// Validates the constraints of a single present value.
pub struct ConstraintValidator;

impl ConstraintValidator {
    /// Creates a new constraint validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks that a value has the declared type.
    ///
    /// Returns at most one error; callers skip the remaining checks for the
    /// field when the type does not match.
    pub fn check_type(
        &self,
        path: &str,
        spec: &FieldSpec,
        value: &Value,
    ) -> Option<ValidationError> {
        let field_type = spec.field_type();

        if !field_type.accepts(value) {
            return Some(ValidationError::type_check(
                path,
                format!("Expected {}, found {}", field_type, describe(value)),
            ));
        }

        match (field_type, value) {
            (FieldType::Email, Value::String(s)) if !s.validate_email() => Some(
                ValidationError::type_check(path, format!("'{}' is not a valid email address", s)),
            ),
            (FieldType::Url, Value::String(s)) if !s.validate_url() => Some(
                ValidationError::type_check(path, format!("'{}' is not a valid URL", s)),
            ),
            _ => None,
        }
    }

    /// Checks length, pattern and numeric bounds.
    ///
    /// Returns a list of validation errors. An empty list indicates success.
    pub fn validate(&self, path: &str, spec: &FieldSpec, value: &Value) -> Vec<ValidationError> {
        [
            self.check_length(path, spec, value),
            self.check_pattern(path, spec, value),
            self.check_range(path, spec, value),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Validates inclusive length bounds.
    fn check_length(&self, path: &str, spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
        let min = spec.min_length().map(|n| n as u64);
        let max = spec.max_length().map(|n| n as u64);
        if min.is_none() && max.is_none() {
            return None;
        }

        let (within, length) = match value {
            Value::String(s) => (s.validate_length(min, max, None), s.chars().count()),
            Value::List(items) => (items.validate_length(min, max, None), items.len()),
            _ => return None,
        };

        if within {
            return None;
        }

        Some(ValidationError::type_check(
            path,
            format!(
                "Length {} is outside bounds [{}, {}]",
                length,
                bound(spec.min_length()),
                bound(spec.max_length())
            ),
        ))
    }

    /// Validates that a string value matches the declared pattern.
    fn check_pattern(
        &self,
        path: &str,
        spec: &FieldSpec,
        value: &Value,
    ) -> Option<ValidationError> {
        let pattern = spec.pattern()?;
        let text = value.as_str()?;

        if !pattern.is_match(text) {
            return Some(ValidationError::type_check(
                path,
                format!(
                    "Value '{}' does not match pattern '{}'",
                    text,
                    pattern.as_str()
                ),
            ));
        }

        None
    }

    /// Validates that a numeric value is within inclusive bounds.
    fn check_range(&self, path: &str, spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
        if spec.min_value().is_none() && spec.max_value().is_none() {
            return None;
        }
        let number = value.as_float()?;

        let below = spec.min_value().is_some_and(|min| number < min);
        let above = spec.max_value().is_some_and(|max| number > max);

        if below || above {
            return Some(ValidationError::type_check(
                path,
                format!(
                    "Value {} out of range [{}, {}]",
                    value,
                    bound(spec.min_value()),
                    bound(spec.max_value())
                ),
            ));
        }

        None
    }

    /// Validates that a value is in the allowed set.
    pub fn check_choices(
        &self,
        path: &str,
        spec: &FieldSpec,
        value: &Value,
    ) -> Option<ValidationError> {
        let choices = spec.choices()?;

        if choices.iter().any(|choice| choice.loosely_equals(value)) {
            return None;
        }

        let allowed: Vec<String> = choices.iter().map(ToString::to_string).collect();
        Some(ValidationError::type_check(
            path,
            format!(
                "Value '{}' not in allowed values: [{}]",
                value,
                allowed.join(", ")
            ),
        ))
    }
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes the kind of a value for type mismatch messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Model(instance) => format!("model<{}>", instance.name()),
        other => other.type_name().to_string(),
    }
}

fn bound<T: ToString>(limit: Option<T>) -> String {
    limit.map_or_else(|| "-".to_string(), |l| l.to_string())
}
