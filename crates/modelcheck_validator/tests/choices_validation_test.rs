//! Choice constraints on simple and embedded models.
//!
//! The document model has a `language` field restricted to `en`/`de` and an
//! embedded `other` model holding a list of strings. A value outside the
//! choice set fails the whole document, whether or not the embedded model is
//! supplied alongside it.

use modelcheck_core::{
    FieldSpecBuilder, ModelInstance, ModelSchema, ModelSchemaBuilder, Value,
};
use modelcheck_validator::{ErrorKind, ValidationResult, validate_instance};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn other_schema() -> Arc<ModelSchema> {
    ModelSchemaBuilder::new("Other")
        .field(
            "info",
            FieldSpecBuilder::list(FieldSpecBuilder::string().build().unwrap()),
        )
        .build()
        .unwrap()
}

fn test_doc_schema() -> Arc<ModelSchema> {
    ModelSchemaBuilder::new("TestDoc")
        .field("language", FieldSpecBuilder::string().choices(["en", "de"]))
        .field("other", FieldSpecBuilder::model(other_schema()))
        .build()
        .unwrap()
}

fn embedded_doc(language: &str) -> ModelInstance {
    let other = ModelInstance::from_values(
        other_schema(),
        [("info", Value::from_iter(["somevalue", "other"]))],
    )
    .unwrap();

    ModelInstance::from_values(
        test_doc_schema(),
        [("language", Value::from(language)), ("other", Value::Model(other))],
    )
    .unwrap()
}

#[test]
fn test_choices_validates() {
    let doc = ModelInstance::from_values(test_doc_schema(), [("language", "de")]).unwrap();

    let result = validate_instance(&doc);
    assert_eq!(result.tag(), "OK");
}

#[test]
fn test_validation_fails() {
    let doc = ModelInstance::from_values(test_doc_schema(), [("language", "fr")]).unwrap();

    let result = validate_instance(&doc);
    assert_ne!(result.tag(), "OK");
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].kind, ErrorKind::FieldTypeCheck);
    assert_eq!(result.errors()[0].field_name, "language");
}

#[test]
fn test_choices_validates_with_embedded() {
    let result = validate_instance(&embedded_doc("de"));
    assert_eq!(result, ValidationResult::Ok);
}

#[test]
fn test_validation_fails_with_embedded() {
    let result = validate_instance(&embedded_doc("fr"));
    assert_ne!(result.tag(), "OK");
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field_name, "language");
}

#[test]
fn test_choice_violation_inside_embedded_model() {
    let inner = ModelSchemaBuilder::new("Inner")
        .field("level", FieldSpecBuilder::integer().choices([1, 2, 3]))
        .build()
        .unwrap();
    let outer = ModelSchemaBuilder::new("Outer")
        .field("language", FieldSpecBuilder::string().choices(["en", "de"]))
        .field("inner", FieldSpecBuilder::model(Arc::clone(&inner)))
        .build()
        .unwrap();

    let valid_inner = ModelInstance::from_values(Arc::clone(&inner), [("level", 2)]).unwrap();
    let doc = ModelInstance::from_values(
        Arc::clone(&outer),
        [("language", Value::from("en")), ("inner", Value::Model(valid_inner))],
    )
    .unwrap();
    assert!(validate_instance(&doc).is_ok());

    let invalid_inner = ModelInstance::from_values(inner, [("level", 7)]).unwrap();
    let doc = ModelInstance::from_values(
        outer,
        [("language", Value::from("en")), ("inner", Value::Model(invalid_inner))],
    )
    .unwrap();

    let result = validate_instance(&doc);
    assert!(!result.is_ok());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field_name, "inner.level");
    assert_eq!(result.errors()[0].kind, ErrorKind::FieldTypeCheck);
}

#[test]
fn test_choices_apply_to_list_elements() {
    let schema = ModelSchemaBuilder::new("Tagged")
        .field(
            "tags",
            FieldSpecBuilder::list(
                FieldSpecBuilder::string()
                    .choices(["red", "green"])
                    .build()
                    .unwrap(),
            ),
        )
        .build()
        .unwrap();

    let doc = ModelInstance::from_values(
        schema,
        [("tags", Value::from_iter(["red", "blue", "green", "pink"]))],
    )
    .unwrap();

    let result = validate_instance(&doc);
    let paths: Vec<&str> = result
        .errors()
        .iter()
        .map(|e| e.field_name.as_str())
        .collect();
    assert_eq!(paths, vec!["tags[1]", "tags[3]"]);
}

#[test]
fn test_unset_field_with_choices_passes() {
    let doc = ModelInstance::new(test_doc_schema());
    assert!(validate_instance(&doc).is_ok());
}
