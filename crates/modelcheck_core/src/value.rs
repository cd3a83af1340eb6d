//! Field values and their presence state.

use crate::ModelInstance;
use std::fmt;

/// A concrete value held by a field.
///
/// Nested models are carried as [`Value::Model`], homogeneous lists as
/// [`Value::List`]. There is no null variant: nullness is a presence state
/// and lives in [`FieldValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// List value
    List(Vec<Value>),
    /// Embedded model instance
    Model(ModelInstance),
}

impl Value {
    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Model(_) => "model",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to get this value as an embedded model.
    pub fn as_model(&self) -> Option<&ModelInstance> {
        match self {
            Value::Model(instance) => Some(instance),
            _ => None,
        }
    }

    /// Compares two scalar values, treating integers and floats numerically.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_float() == other.as_float()
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Model(instance) => write!(f, "<{}>", instance.name()),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }

            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    FieldValue::Present(Value::from(v))
                }
            }
        )*
    };
}

value_from! {
    String => String,
    &str => String,
    i64 => Int,
    i32 => Int,
    f64 => Float,
    bool => Bool,
    Vec<Value> => List,
    ModelInstance => Model,
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Presence state of a field on an instance.
///
/// `Unset` (never assigned), `Null` (explicitly cleared) and `Present` are
/// three distinct states; the required/dirty rules depend on telling them
/// apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Never assigned
    #[default]
    Unset,
    /// Explicitly assigned null
    Null,
    /// Assigned a concrete value
    Present(Value),
}

impl FieldValue {
    /// Returns true if the field was never assigned.
    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }

    /// Returns true if the field holds an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the concrete value, if any.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        FieldValue::Present(v)
    }
}

/// `None` maps to an explicit null, never to `Unset`.
impl<T: Into<Value>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => FieldValue::Present(v.into()),
            None => FieldValue::Null,
        }
    }
}
