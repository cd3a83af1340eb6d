//! Builder pattern for declaring models.
//!
//! This module provides fluent builders for field specifications and model
//! schemas. Definition errors (a choice of the wrong type, bounds that cannot
//! be satisfied, an invalid pattern) are reported by `build()`, so a schema
//! that exists is always well formed.

use crate::{FieldSpec, FieldType, ModelError, ModelSchema, Pattern, Result, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Builder for creating a `FieldSpec`.
///
/// # Example
///
/// ```rust
/// use modelcheck_core::FieldSpecBuilder;
///
/// let language = FieldSpecBuilder::string()
///     .choices(["en", "de"])
///     .description("ISO 639-1 language code")
///     .build()
///     .unwrap();
///
/// assert_eq!(language.choices().map(|c| c.len()), Some(2));
/// ```
#[derive(Debug)]
pub struct FieldSpecBuilder {
    field_type: FieldType,
    required: bool,
    dirty: bool,
    choices: Option<Vec<Value>>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    min_value: Option<f64>,
    max_value: Option<f64>,
    description: Option<String>,
}

impl FieldSpecBuilder {
    /// Creates a new field builder for the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            dirty: false,
            choices: None,
            min_length: None,
            max_length: None,
            pattern: None,
            min_value: None,
            max_value: None,
            description: None,
        }
    }

    /// String field.
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Integer field.
    pub fn integer() -> Self {
        Self::new(FieldType::Integer)
    }

    /// Float field.
    pub fn float() -> Self {
        Self::new(FieldType::Float)
    }

    /// Boolean field.
    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    /// Email address field.
    pub fn email() -> Self {
        Self::new(FieldType::Email)
    }

    /// URL field.
    pub fn url() -> Self {
        Self::new(FieldType::Url)
    }

    /// Embedded model field.
    pub fn model(schema: Arc<ModelSchema>) -> Self {
        Self::new(FieldType::Model(schema))
    }

    /// List field whose elements follow `item`.
    pub fn list(item: FieldSpec) -> Self {
        Self::new(FieldType::List(Box::new(item)))
    }

    /// Sets whether the field must hold a value.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether an explicit null satisfies `required`.
    pub fn dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Restricts the field to a set of values.
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the inclusive minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the inclusive maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets a regex the value must match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the inclusive numeric minimum.
    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Sets the inclusive numeric maximum.
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Sets the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the field spec.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` if a constraint does not apply to the declared
    /// type, if bounds are inverted, if a choice is not of the declared type,
    /// or if the pattern does not compile.
    pub fn build(self) -> Result<FieldSpec> {
        let field_type = self.field_type;

        let choices = match self.choices {
            Some(choices) => Some(check_choices(&field_type, choices)?),
            None => None,
        };

        if (self.min_length.is_some() || self.max_length.is_some()) && !field_type.has_length() {
            return Err(ModelError::not_applicable("length", &field_type));
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(ModelError::InvalidBounds {
                    constraint: "length",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }

        if (self.min_value.is_some() || self.max_value.is_some()) && !field_type.is_numeric() {
            return Err(ModelError::not_applicable("value", &field_type));
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ModelError::InvalidBounds {
                    constraint: "value",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }

        let pattern = match self.pattern {
            Some(_) if !field_type.is_textual() => {
                return Err(ModelError::not_applicable("pattern", &field_type));
            }
            Some(source) => Some(Pattern::new(&source)?),
            None => None,
        };

        Ok(FieldSpec {
            field_type,
            required: self.required,
            dirty: self.dirty,
            choices,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            min_value: self.min_value,
            max_value: self.max_value,
            description: self.description,
        })
    }
}

/// Every choice must be a value of the declared scalar type.
fn check_choices(field_type: &FieldType, choices: Vec<Value>) -> Result<Vec<Value>> {
    if !field_type.is_scalar() {
        return Err(ModelError::ChoicesNotSupported(field_type.to_string()));
    }
    if choices.is_empty() {
        return Err(ModelError::EmptyChoices);
    }
    if let Some(bad) = choices.iter().find(|choice| !field_type.accepts(choice)) {
        return Err(ModelError::ChoiceTypeMismatch {
            field_type: field_type.to_string(),
            choice: format!("{:?}", bad),
        });
    }
    Ok(choices)
}

/// Builder for creating a `ModelSchema`.
///
/// # Example
///
/// ```rust
/// use modelcheck_core::{FieldSpecBuilder, ModelSchemaBuilder};
///
/// let other = ModelSchemaBuilder::new("Other")
///     .field("info", FieldSpecBuilder::list(FieldSpecBuilder::string().build().unwrap()))
///     .build()
///     .unwrap();
///
/// let doc = ModelSchemaBuilder::new("TestDoc")
///     .description("Document with an embedded model")
///     .field("language", FieldSpecBuilder::string().choices(["en", "de"]))
///     .field("other", FieldSpecBuilder::model(other))
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug)]
pub struct ModelSchemaBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<(String, FieldSpecBuilder)>,
}

impl ModelSchemaBuilder {
    /// Creates a new model builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the model description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares a field. Declaration order is validation order.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpecBuilder) -> Self {
        self.fields.push((name.into(), spec));
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateField` if a name is declared twice, or
    /// `ModelError::InvalidField` wrapping the first malformed field spec.
    pub fn build(self) -> Result<Arc<ModelSchema>> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());

        for (name, spec) in self.fields {
            if !seen.insert(name.clone()) {
                return Err(ModelError::DuplicateField {
                    model: self.name,
                    field: name,
                });
            }
            let spec = spec.build().map_err(|e| e.in_field(&self.name, &name))?;
            fields.push((name, spec));
        }

        Ok(Arc::new(ModelSchema {
            name: self.name,
            description: self.description,
            fields,
        }))
    }
}
