//! Tests for required fields, explicit nulls and the dirty waiver.
//!
//! Presence has three states: unset, explicit null and present. These tests
//! pin down how `required`, `dirty` and `min_length` interact across them:
//! - `dirty` waives `required` for an explicit null, never for unset
//! - an empty string satisfies `required`
//! - a length violation on a supplied value is a type check, not a required error

use modelcheck_core::{FieldSpecBuilder, ModelInstance, ModelSchema, ModelSchemaBuilder};
use modelcheck_validator::{ErrorKind, ValidationResult, validate_instance};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn first_name_doc(spec: FieldSpecBuilder) -> Arc<ModelSchema> {
    ModelSchemaBuilder::new("TestDoc")
        .field("first_name", spec)
        .build()
        .unwrap()
}

fn single_error(result: &ValidationResult) -> ErrorKind {
    assert_ne!(result.tag(), "OK");
    assert_eq!(result.errors().len(), 1, "Only one failure: {:?}", result);
    assert_eq!(result.errors()[0].field_name, "first_name");
    result.errors()[0].kind
}

#[test]
fn test_validation_fails() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true));
    let doc = ModelInstance::new(schema);

    let result = validate_instance(&doc);
    assert_eq!(single_error(&result), ErrorKind::FieldRequired);
}

#[test]
fn test_validation_none_fails() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true));
    let doc = ModelInstance::from_values(schema, [("first_name", None::<&str>)]).unwrap();

    let result = validate_instance(&doc);
    assert_eq!(single_error(&result), ErrorKind::FieldRequired);
}

#[test]
fn test_validation_none_dirty_pass() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true).dirty(true));
    let doc = ModelInstance::from_values(schema, [("first_name", None::<&str>)]).unwrap();

    let result = validate_instance(&doc);
    assert_eq!(result.tag(), "OK");
}

#[test]
fn test_validation_notset_dirty_fails() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true).dirty(true));
    let doc = ModelInstance::new(schema);

    let result = validate_instance(&doc);
    assert_eq!(single_error(&result), ErrorKind::FieldRequired);
}

#[test]
fn test_validation_empty_string_pass() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true));
    let doc = ModelInstance::from_values(schema, [("first_name", "")]).unwrap();

    let result = validate_instance(&doc);
    assert_eq!(result.tag(), "OK");
}

#[test]
fn test_validation_empty_string_length_fail() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true).min_length(1));
    let doc = ModelInstance::from_values(schema, [("first_name", "")]).unwrap();

    let result = validate_instance(&doc);
    // Length failure, not FIELD_REQUIRED
    assert_eq!(single_error(&result), ErrorKind::FieldTypeCheck);
}

#[test]
fn test_validation_none_string_length_pass() {
    let schema = first_name_doc(FieldSpecBuilder::string().min_length(1));
    let doc = ModelInstance::new(schema);

    let result = validate_instance(&doc);
    assert_eq!(result.tag(), "OK");
}

#[test]
fn test_optional_null_passes_every_check() {
    let schema = first_name_doc(
        FieldSpecBuilder::string()
            .min_length(3)
            .choices(["Ada", "Grace"]),
    );
    let doc = ModelInstance::from_values(schema, [("first_name", None::<&str>)]).unwrap();

    assert!(validate_instance(&doc).is_ok());
}

#[test]
fn test_reassignment_changes_outcome() {
    let schema = first_name_doc(FieldSpecBuilder::string().required(true));
    let mut doc = ModelInstance::new(schema);
    assert!(!validate_instance(&doc).is_ok());

    doc.set("first_name", "Ada").unwrap();
    assert!(validate_instance(&doc).is_ok());

    doc.unset("first_name").unwrap();
    assert!(!validate_instance(&doc).is_ok());
}

#[test]
fn test_required_nested_model_field() {
    let other = ModelSchemaBuilder::new("Other")
        .field("info", FieldSpecBuilder::string())
        .build()
        .unwrap();
    let schema = ModelSchemaBuilder::new("TestDoc")
        .field("other", FieldSpecBuilder::model(other).required(true))
        .field("first_name", FieldSpecBuilder::string().required(true))
        .build()
        .unwrap();

    let result = validate_instance(&ModelInstance::new(schema));
    let errors: Vec<(&str, ErrorKind)> = result
        .errors()
        .iter()
        .map(|e| (e.field_name.as_str(), e.kind))
        .collect();
    assert_eq!(
        errors,
        vec![
            ("other", ErrorKind::FieldRequired),
            ("first_name", ErrorKind::FieldRequired),
        ]
    );
}
