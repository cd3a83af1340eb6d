//! Conversion of documents into model instances.
//!
//! A document is a JSON object. YAML and TOML documents are first read into
//! their own value trees and then into the same representation, rejecting
//! numbers JSON cannot hold (`.inf`, `nan`) instead of reading them as null. Keys map to declared fields: a missing key leaves
//! the field unset, `null` assigns an explicit null, anything else becomes a
//! present value. Values are converted structurally and are not coerced to
//! the declared type; mismatches are left for the validator to report.

use crate::{ParserError, Result};
use modelcheck_core::{FieldType, FieldValue, ModelInstance, ModelSchema, Value};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml_ng::Value as YamlValue;
use std::sync::Arc;

/// Builds an instance of `schema` from a parsed document.
pub fn instance_from_json(schema: &Arc<ModelSchema>, document: &JsonValue) -> Result<ModelInstance> {
    build_instance(schema, document, None)
}

fn build_instance(
    schema: &Arc<ModelSchema>,
    document: &JsonValue,
    prefix: Option<&str>,
) -> Result<ModelInstance> {
    let JsonValue::Object(entries) = document else {
        return Err(ParserError::ExpectedObject {
            model: schema.name().to_string(),
            found: json_kind(document),
        });
    };

    let mut instance = ModelInstance::new(Arc::clone(schema));
    for (key, raw) in entries {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        let spec = schema.field(key).ok_or_else(|| ParserError::UnknownField {
            model: schema.name().to_string(),
            field: path.clone(),
        })?;

        let value = match raw {
            JsonValue::Null => FieldValue::Null,
            raw => FieldValue::Present(convert(&path, Some(spec.field_type()), raw)?),
        };
        instance.set(key.as_str(), value)?;
    }

    Ok(instance)
}

/// Converts a non-null JSON value, using the declared type only to find
/// nested schemas.
fn convert(path: &str, declared: Option<&FieldType>, raw: &JsonValue) -> Result<Value> {
    match raw {
        JsonValue::Null => Err(ParserError::NullElement {
            path: path.to_string(),
        }),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .ok_or_else(|| invalid_number(path)),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(elements) => {
            let item_type = match declared {
                Some(FieldType::List(item)) => Some(item.field_type()),
                _ => None,
            };
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| convert(&format!("{}[{}]", path, index), item_type, element))
                .collect::<Result<Vec<_>>>()
                .map(Value::List)
        }
        JsonValue::Object(_) => match declared {
            Some(FieldType::Model(schema)) => {
                Ok(Value::Model(build_instance(schema, raw, Some(path))?))
            }
            _ => Err(ParserError::UnexpectedObject {
                path: path.to_string(),
            }),
        },
    }
}

/// Reads a YAML document tree into the JSON representation.
pub(crate) fn yaml_document(path: &str, value: &YamlValue) -> Result<JsonValue> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(b) => Ok(JsonValue::Bool(*b)),
        YamlValue::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => Ok(JsonValue::from(i)),
            (None, Some(u), _) => Ok(JsonValue::from(u)),
            (None, None, Some(f)) => finite_number(path, f),
            (None, None, None) => Err(invalid_number(path)),
        },
        YamlValue::String(s) => Ok(JsonValue::String(s.clone())),
        YamlValue::Sequence(elements) => elements
            .iter()
            .enumerate()
            .map(|(index, element)| yaml_document(&format!("{}[{}]", path, index), element))
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(entries) => {
            let mut object = Map::new();
            for (key, element) in entries {
                let key = match key {
                    YamlValue::String(s) => s.clone(),
                    YamlValue::Bool(b) => b.to_string(),
                    YamlValue::Number(n) => n.to_string(),
                    _ => {
                        return Err(ParserError::InvalidKey {
                            path: path.to_string(),
                        });
                    }
                };
                let element = yaml_document(&child_path(path, &key), element)?;
                object.insert(key, element);
            }
            Ok(JsonValue::Object(object))
        }
        YamlValue::Tagged(tagged) => yaml_document(path, &tagged.value),
    }
}

/// Reads a TOML table into the JSON representation.
pub(crate) fn toml_document(path: &str, table: &toml::Table) -> Result<JsonValue> {
    let mut object = Map::new();
    for (key, element) in table {
        let element = toml_value(&child_path(path, key), element)?;
        object.insert(key.clone(), element);
    }
    Ok(JsonValue::Object(object))
}

fn toml_value(path: &str, value: &toml::Value) -> Result<JsonValue> {
    match value {
        toml::Value::String(s) => Ok(JsonValue::String(s.clone())),
        toml::Value::Integer(i) => Ok(JsonValue::from(*i)),
        toml::Value::Float(f) => finite_number(path, *f),
        toml::Value::Boolean(b) => Ok(JsonValue::Bool(*b)),
        toml::Value::Datetime(dt) => Ok(JsonValue::String(dt.to_string())),
        toml::Value::Array(elements) => elements
            .iter()
            .enumerate()
            .map(|(index, element)| toml_value(&format!("{}[{}]", path, index), element))
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        toml::Value::Table(table) => toml_document(path, table),
    }
}

fn finite_number(path: &str, value: f64) -> Result<JsonValue> {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .ok_or_else(|| invalid_number(path))
}

fn invalid_number(path: &str) -> ParserError {
    ParserError::InvalidNumber {
        path: path.to_string(),
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
