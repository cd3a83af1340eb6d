//! Serializable model definitions.
//!
//! These types mirror the on-disk schema format and are converted into
//! `ModelSchema` values through the core builders, so every definition error
//! the builders detect also applies to parsed files.

use crate::{ParserError, Result};
use modelcheck_core::{
    FieldSpec, FieldSpecBuilder, FieldType, ModelSchema, ModelSchemaBuilder, Value,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// A model definition as written in a schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model name
    pub name: String,

    /// Human-readable description of the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Field definitions, in validation order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// Type names accepted in the `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    String,
    Integer,
    Float,
    Boolean,
    Email,
    Url,
    Model,
    List,
}

/// A field definition as written in a schema file.
///
/// List element definitions (`items`) use the same shape; their `name`,
/// `required` and `dirty` keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    #[serde(default)]
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub field_type: TypeName,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub dirty: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<JsonValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inline definition of an embedded model (`type: model`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Box<ModelDefinition>>,

    /// Element definition of a list (`type: list`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldDefinition>>,
}

impl ModelDefinition {
    /// Converts the definition into a shared schema.
    pub fn to_schema(&self) -> Result<Arc<ModelSchema>> {
        let mut builder = ModelSchemaBuilder::new(&self.name);
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }

        for field in &self.fields {
            let spec = field
                .to_builder(&field.name)?
                .required(field.required)
                .dirty(field.dirty);
            builder = builder.field(&field.name, spec);
        }

        Ok(builder.build()?)
    }
}

impl FieldDefinition {
    /// Converts the definition into a field builder. `path` names the field
    /// in error messages.
    fn to_builder(&self, path: &str) -> Result<FieldSpecBuilder> {
        let field_type = self.resolve_type(path)?;

        let mut builder = FieldSpecBuilder::new(field_type);
        if let Some(choices) = &self.choices {
            let choices = choices
                .iter()
                .map(|raw| choice_value(path, raw))
                .collect::<Result<Vec<_>>>()?;
            builder = builder.choices(choices);
        }
        if let Some(min) = self.min_length {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length {
            builder = builder.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            builder = builder.pattern(pattern);
        }
        if let Some(min) = self.min_value {
            builder = builder.min_value(min);
        }
        if let Some(max) = self.max_value {
            builder = builder.max_value(max);
        }
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }

        Ok(builder)
    }

    fn resolve_type(&self, path: &str) -> Result<FieldType> {
        let field_type = match self.field_type {
            TypeName::String => FieldType::String,
            TypeName::Integer => FieldType::Integer,
            TypeName::Float => FieldType::Float,
            TypeName::Boolean => FieldType::Boolean,
            TypeName::Email => FieldType::Email,
            TypeName::Url => FieldType::Url,
            TypeName::Model => {
                let model = self
                    .model
                    .as_ref()
                    .ok_or_else(|| ParserError::missing_definition(path, "model"))?;
                FieldType::Model(model.to_schema()?)
            }
            TypeName::List => {
                let items = self
                    .items
                    .as_ref()
                    .ok_or_else(|| ParserError::missing_definition(path, "items"))?;
                FieldType::List(Box::new(items.to_item_spec(path)?))
            }
        };
        Ok(field_type)
    }

    fn to_item_spec(&self, parent: &str) -> Result<FieldSpec> {
        let path = format!("{}[]", parent);
        Ok(self.to_builder(&path)?.build()?)
    }
}

/// Choices are scalars; their type is checked later against the field.
fn choice_value(path: &str, raw: &JsonValue) -> Result<Value> {
    match raw {
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .ok_or_else(|| ParserError::invalid_choice(path, raw)),
        _ => Err(ParserError::invalid_choice(path, raw)),
    }
}
