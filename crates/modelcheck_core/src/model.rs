//! Model schemas and instances.
//!
//! A [`ModelSchema`] is built once per model type and shared by reference
//! across all of its instances. A [`ModelInstance`] pairs that schema with
//! the current value of each field; fields that were never assigned read as
//! [`FieldValue::Unset`].

use crate::{FieldSpec, FieldValue, ModelError, Result};
use std::collections::HashMap;
use std::sync::Arc;

static UNSET: FieldValue = FieldValue::Unset;

/// Ordered field declarations of one model type.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: Vec<(String, FieldSpec)>,
}

impl ModelSchema {
    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Iterates over field declarations in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, spec)| spec)
    }

    /// Returns true if the model declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the model declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Current field values of one model.
///
/// # Example
///
/// ```rust
/// use modelcheck_core::{FieldSpecBuilder, FieldValue, ModelInstance, ModelSchemaBuilder};
///
/// let schema = ModelSchemaBuilder::new("Person")
///     .field("first_name", FieldSpecBuilder::string().required(true))
///     .build()
///     .unwrap();
///
/// let person = ModelInstance::from_values(schema, [("first_name", None::<&str>)]).unwrap();
/// assert_eq!(person.get("first_name"), Some(&FieldValue::Null));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    schema: Arc<ModelSchema>,
    values: HashMap<String, FieldValue>,
}

impl ModelInstance {
    /// Creates an instance with every field unset.
    pub fn new(schema: Arc<ModelSchema>) -> Self {
        Self {
            schema,
            values: HashMap::new(),
        }
    }

    /// Creates an instance from `(field, value)` pairs.
    ///
    /// Fields not mentioned stay unset. Fails on the first undeclared field.
    pub fn from_values<I, K, V>(schema: Arc<ModelSchema>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut instance = Self::new(schema);
        for (name, value) in values {
            instance.set(name, value)?;
        }
        Ok(instance)
    }

    /// Schema of this instance.
    pub fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    /// Model name.
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    /// Current value of a declared field, or `None` if the model has no such
    /// field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        if !self.schema.contains(name) {
            return None;
        }
        Some(self.values.get(name).unwrap_or(&UNSET))
    }

    /// Assigns a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Result<()> {
        let name = name.into();
        if !self.schema.contains(&name) {
            return Err(ModelError::unknown_field(self.schema.name(), name));
        }
        match value.into() {
            FieldValue::Unset => {
                self.values.remove(&name);
            }
            value => {
                self.values.insert(name, value);
            }
        }
        Ok(())
    }

    /// Assigns an explicit null to a field.
    pub fn set_null(&mut self, name: impl Into<String>) -> Result<()> {
        self.set(name, FieldValue::Null)
    }

    /// Returns a field to the unset state.
    pub fn unset(&mut self, name: impl Into<String>) -> Result<()> {
        self.set(name, FieldValue::Unset)
    }

    /// Iterates over `(name, spec, value)` in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec, &FieldValue)> {
        self.schema.fields().map(|(name, spec)| {
            let value = self.values.get(name).unwrap_or(&UNSET);
            (name, spec, value)
        })
    }
}
