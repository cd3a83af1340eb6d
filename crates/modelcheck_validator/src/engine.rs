//! Main validation engine.
//!
//! This module provides the `Validator` that walks a model instance field by
//! field, applies presence rules and constraint checks, and recurses into
//! embedded models and list elements.

use crate::{
    ConstraintValidator, Presence, ValidationError, ValidationReport, ValidationResult,
    ValidationStats, check_presence,
};
use modelcheck_core::{FieldSpec, FieldType, FieldValue, ModelInstance, Value};
use std::time::Instant;
use tracing::{debug, trace};

/// Validates a model instance with a default `Validator`.
///
/// # Example
///
/// ```rust
/// use modelcheck_core::{FieldSpecBuilder, ModelInstance, ModelSchemaBuilder};
/// use modelcheck_validator::validate_instance;
///
/// let schema = ModelSchemaBuilder::new("TestDoc")
///     .field("language", FieldSpecBuilder::string().choices(["en", "de"]))
///     .build()
///     .unwrap();
///
/// let doc = ModelInstance::from_values(schema, [("language", "de")]).unwrap();
/// assert!(validate_instance(&doc).is_ok());
/// ```
pub fn validate_instance(instance: &ModelInstance) -> ValidationResult {
    Validator::new().validate(instance)
}

/// Validation engine for model instances.
///
/// Every field is checked even after an earlier one failed. Errors from
/// embedded models are lifted into the parent's sequence under the parent
/// field's path (`other.info`), list element errors carry their index
/// (`other.info[1]`).
pub struct Validator {
    constraints: ConstraintValidator,
}

/// Errors and counters accumulated over one validation run.
#[derive(Default)]
struct Walk {
    errors: Vec<ValidationError>,
    stats: ValidationStats,
}

impl Validator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self {
            constraints: ConstraintValidator::new(),
        }
    }

    /// Validates an instance.
    ///
    /// This is the main validation entry point. The result is `Ok` iff no
    /// field produced an error.
    pub fn validate(&self, instance: &ModelInstance) -> ValidationResult {
        let mut walk = Walk::default();
        self.validate_model(instance, None, &mut walk);
        ValidationResult::from_errors(walk.errors)
    }

    /// Validates an instance and reports execution statistics.
    pub fn validate_with_report(&self, instance: &ModelInstance) -> ValidationReport {
        let start = Instant::now();
        let mut walk = Walk::default();
        self.validate_model(instance, None, &mut walk);

        let mut stats = walk.stats;
        stats.duration_ms = start.elapsed().as_millis() as u64;

        ValidationReport {
            result: ValidationResult::from_errors(walk.errors),
            stats,
        }
    }

    fn validate_model(&self, instance: &ModelInstance, prefix: Option<&str>, walk: &mut Walk) {
        walk.stats.models_validated += 1;
        let errors_before = walk.errors.len();

        for (name, spec, value) in instance.fields() {
            let path = match prefix {
                Some(prefix) => format!("{}.{}", prefix, name),
                None => name.to_string(),
            };
            self.validate_field(&path, spec, value, walk);
        }

        debug!(
            model = instance.name(),
            path = prefix.unwrap_or(""),
            errors = walk.errors.len() - errors_before,
            "Validated model"
        );
    }

    fn validate_field(&self, path: &str, spec: &FieldSpec, value: &FieldValue, walk: &mut Walk) {
        walk.stats.fields_checked += 1;

        match check_presence(spec, value) {
            Presence::Absent => trace!(field = path, "Field absent, skipping checks"),
            Presence::Missing => {
                trace!(field = path, "Required field missing");
                walk.errors.push(ValidationError::required(path));
            }
            Presence::Present(value) => self.validate_value(path, spec, value, walk),
        }
    }

    /// Type and shape checks, recursion, then choices.
    fn validate_value(&self, path: &str, spec: &FieldSpec, value: &Value, walk: &mut Walk) {
        if let Some(err) = self.constraints.check_type(path, spec, value) {
            trace!(field = path, "Type check failed");
            walk.errors.push(err);
            return;
        }

        walk.stats.constraints_evaluated += spec.constraint_count();
        let shape_errors = self.constraints.validate(path, spec, value);
        walk.errors.extend(shape_errors);

        match (spec.field_type(), value) {
            (FieldType::Model(_), Value::Model(nested)) => {
                self.validate_model(nested, Some(path), walk);
            }
            (FieldType::List(item), Value::List(elements)) => {
                for (index, element) in elements.iter().enumerate() {
                    let element_path = format!("{}[{}]", path, index);
                    self.validate_value(&element_path, item, element, walk);
                }
            }
            _ => {}
        }

        if let Some(err) = self.constraints.check_choices(path, spec, value) {
            walk.errors.push(err);
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
