//! Field specifications.
//!
//! A [`FieldSpec`] is the immutable declaration of one field: its
//! [`FieldType`] and the constraints a value must satisfy. Specs are created
//! through [`FieldSpecBuilder`](crate::FieldSpecBuilder), which rejects
//! malformed combinations up front.

use crate::{ModelError, ModelSchema, Result, Value};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Declared type of a field.
///
/// The set is closed: scalar kinds, an embedded model, or a homogeneous list
/// whose elements follow their own field spec.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit float (integers are accepted)
    Float,
    /// Boolean
    Boolean,
    /// String holding an email address
    Email,
    /// String holding a URL
    Url,
    /// Embedded model of the given schema
    Model(Arc<ModelSchema>),
    /// List whose elements follow the given spec
    List(Box<FieldSpec>),
}

impl FieldType {
    /// Returns true for types that carry a single scalar value.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldType::Model(_) | FieldType::List(_))
    }

    /// Returns true for types stored as strings.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Email | FieldType::Url)
    }

    /// Returns true for numeric types.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }

    /// Returns true for types that have a length.
    pub fn has_length(&self) -> bool {
        self.is_textual() || matches!(self, FieldType::List(_))
    }

    /// Checks whether a value has the shape this type expects.
    ///
    /// This only looks at the outer kind of the value: list elements and
    /// nested model fields are not inspected. An embedded model must use the
    /// declared schema itself or one with identical declarations.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (t, Value::String(_)) if t.is_textual() => true,
            (FieldType::Integer, Value::Int(_)) => true,
            (FieldType::Float, Value::Float(_) | Value::Int(_)) => true,
            (FieldType::Boolean, Value::Bool(_)) => true,
            (FieldType::List(_), Value::List(_)) => true,
            (FieldType::Model(schema), Value::Model(instance)) => {
                Arc::ptr_eq(schema, instance.schema()) || **schema == **instance.schema()
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Float => f.write_str("float"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Email => f.write_str("email"),
            FieldType::Url => f.write_str("url"),
            FieldType::Model(schema) => write!(f, "model<{}>", schema.name()),
            FieldType::List(item) => write!(f, "list<{}>", item.field_type()),
        }
    }
}

/// Compiled regex constraint.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compiles a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| ModelError::InvalidPattern {
                pattern: pattern.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Immutable constraints of a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub(crate) field_type: FieldType,
    pub(crate) required: bool,
    pub(crate) dirty: bool,
    pub(crate) choices: Option<Vec<Value>>,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) min_value: Option<f64>,
    pub(crate) max_value: Option<f64>,
    pub(crate) description: Option<String>,
}

impl FieldSpec {
    /// Starts a builder for a field of the given type.
    pub fn builder(field_type: FieldType) -> crate::FieldSpecBuilder {
        crate::FieldSpecBuilder::new(field_type)
    }

    /// Declared type.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Whether the field must hold a value.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether an explicit null satisfies `required`.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Allowed values, if restricted.
    pub fn choices(&self) -> Option<&[Value]> {
        self.choices.as_deref()
    }

    /// Inclusive minimum length.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Inclusive maximum length.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Regex a string value must match.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Inclusive numeric minimum.
    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    /// Inclusive numeric maximum.
    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    /// Human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of value constraints declared on this field, not counting
    /// the type itself.
    pub fn constraint_count(&self) -> usize {
        [
            self.choices.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.pattern.is_some(),
            self.min_value.is_some(),
            self.max_value.is_some(),
        ]
        .into_iter()
        .filter(|declared| *declared)
        .count()
    }
}
