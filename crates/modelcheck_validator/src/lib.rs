//! # modelcheck validator
//!
//! Validation engine for model instances. Given a
//! [`ModelInstance`](modelcheck_core::ModelInstance), the engine checks every
//! declared field in order and collects field-level errors:
//!
//! - Presence (required fields, explicit nulls, the `dirty` waiver)
//! - Type and shape (declared type, length bounds, pattern, numeric bounds)
//! - Choices (allowed value sets)
//! - Nested models and list elements, recursively
//!
//! Constraint violations are reported as values in a [`ValidationResult`],
//! never as `Err`.
//!
//! ## Example
//!
//! ```rust
//! use modelcheck_core::{FieldSpecBuilder, ModelInstance, ModelSchemaBuilder};
//! use modelcheck_validator::{validate_instance, ErrorKind};
//!
//! let schema = ModelSchemaBuilder::new("TestDoc")
//!     .field("first_name", FieldSpecBuilder::string().required(true))
//!     .build()
//!     .unwrap();
//!
//! let result = validate_instance(&ModelInstance::new(schema));
//!
//! assert_eq!(result.tag(), "FAILED");
//! assert_eq!(result.errors()[0].kind, ErrorKind::FieldRequired);
//! ```

mod constraints;
mod engine;
mod error;
mod presence;
mod result;

pub use constraints::*;
pub use engine::*;
pub use error::*;
pub use presence::*;
pub use result::*;
