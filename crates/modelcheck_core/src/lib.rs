//! # modelcheck core
//!
//! Core data structures for declarative model validation.
//!
//! A model type is described once by a [`ModelSchema`]: an ordered list of
//! named [`FieldSpec`]s, each declaring a type plus constraints such as
//! required-ness, allowed choices and length bounds. Instances of the model
//! hold a [`FieldValue`] per field, which keeps "never assigned" ([`FieldValue::Unset`])
//! apart from an explicit null ([`FieldValue::Null`]).
//!
//! Validation itself lives in `modelcheck_validator`; this crate only holds
//! the data representation.
//!
//! ## Key Concepts
//!
//! - **FieldSpec**: immutable constraints of one field
//! - **ModelSchema**: named, ordered collection of field specs shared by `Arc`
//! - **ModelInstance**: current values of one model, keyed by field name
//! - **Value / FieldValue**: dynamically typed values and their presence state
//!
//! ## Example
//!
//! ```rust
//! use modelcheck_core::{FieldSpecBuilder, FieldValue, ModelInstance, ModelSchemaBuilder};
//!
//! let schema = ModelSchemaBuilder::new("TestDoc")
//!     .field("language", FieldSpecBuilder::string().choices(["en", "de"]))
//!     .field("first_name", FieldSpecBuilder::string().required(true))
//!     .build()
//!     .unwrap();
//!
//! let mut doc = ModelInstance::new(schema);
//! doc.set("language", "de").unwrap();
//!
//! assert_eq!(doc.get("first_name"), Some(&FieldValue::Unset));
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod model;
pub mod value;

pub use builder::*;
pub use error::*;
pub use field::*;
pub use model::*;
pub use value::*;
