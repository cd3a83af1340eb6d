//! Parser for model schema definitions and instance documents.
//!
//! Schemas are written in YAML, TOML or JSON and parsed into shared
//! `ModelSchema` values. Instance documents (JSON, YAML or TOML) are read
//! against a schema into `ModelInstance` values, keeping a missing key
//! (unset) apart from an explicit `null`.
//!
//! # Example
//!
//! ```rust
//! use modelcheck_parser::{parse_instance_json, parse_schema_yaml};
//!
//! let yaml = r#"
//! name: TestDoc
//! fields:
//!   - name: language
//!     type: string
//!     choices: [en, de]
//!   - name: first_name
//!     type: string
//!     required: true
//! "#;
//!
//! let schema = parse_schema_yaml(yaml).expect("Failed to parse schema");
//! let doc = parse_instance_json(&schema, r#"{"language": "de"}"#).unwrap();
//! assert_eq!(doc.name(), "TestDoc");
//! ```

mod definition;
mod instance;

pub use definition::*;
pub use instance::instance_from_json;

use instance::{toml_document, yaml_document};

use modelcheck_core::{ModelError, ModelInstance, ModelSchema};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The definition was rejected by the model builders
    #[error("Invalid model definition: {0}")]
    Model(#[from] ModelError),

    /// A `model` or `list` field lacks its nested definition
    #[error("Field '{field}' is missing its '{key}' definition")]
    MissingDefinition { field: String, key: &'static str },

    /// A choice is not a scalar
    #[error("Invalid choice for field '{field}': {value}")]
    InvalidChoice { field: String, value: String },

    /// Document key not declared by the model
    #[error("Model '{model}' has no field '{field}'")]
    UnknownField { model: String, field: String },

    /// Document (or embedded document) is not an object
    #[error("Expected an object for model '{model}', found {found}")]
    ExpectedObject { model: String, found: &'static str },

    /// Object supplied where no model is declared
    #[error("Unexpected object at '{path}'")]
    UnexpectedObject { path: String },

    /// Lists cannot hold nulls
    #[error("Null list element at '{path}'")]
    NullElement { path: String },

    /// Infinite or NaN number in a document
    #[error("Number at '{path}' is not finite")]
    InvalidNumber { path: String },

    /// Mapping key that is not a string, number or boolean
    #[error("Unsupported mapping key under '{path}'")]
    InvalidKey { path: String },
}

impl ParserError {
    /// Creates a new missing definition error.
    pub fn missing_definition(field: impl Into<String>, key: &'static str) -> Self {
        Self::MissingDefinition {
            field: field.into(),
            key,
        }
    }

    /// Creates a new invalid choice error.
    pub fn invalid_choice(field: impl Into<String>, value: &JsonValue) -> Self {
        Self::InvalidChoice {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a schema from a YAML string.
///
/// # Example
///
/// ```rust
/// use modelcheck_parser::parse_schema_yaml;
///
/// let yaml = r#"
/// name: Other
/// fields:
///   - name: info
///     type: list
///     items:
///       type: string
/// "#;
///
/// let schema = parse_schema_yaml(yaml).unwrap();
/// assert_eq!(schema.name(), "Other");
/// ```
pub fn parse_schema_yaml(content: &str) -> Result<Arc<ModelSchema>> {
    let definition: ModelDefinition = serde_yaml_ng::from_str(content)?;
    definition.to_schema()
}

/// Parse a schema from a TOML string.
///
/// # Example
///
/// ```rust
/// use modelcheck_parser::parse_schema_toml;
///
/// let toml = r#"
/// name = "TestDoc"
///
/// [[fields]]
/// name = "language"
/// type = "string"
/// choices = ["en", "de"]
/// "#;
///
/// let schema = parse_schema_toml(toml).unwrap();
/// assert_eq!(schema.len(), 1);
/// ```
pub fn parse_schema_toml(content: &str) -> Result<Arc<ModelSchema>> {
    let definition: ModelDefinition =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    definition.to_schema()
}

/// Parse a schema from a JSON string.
pub fn parse_schema_json(content: &str) -> Result<Arc<ModelSchema>> {
    let definition: ModelDefinition = serde_json::from_str(content)?;
    definition.to_schema()
}

/// Detect the file format from a path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FileFormat::Yaml`
/// * `.toml` → `FileFormat::Toml`
/// * `.json` → `FileFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema from a file with automatic format detection.
///
/// ```no_run
/// use modelcheck_parser::parse_schema_file;
/// use std::path::Path;
///
/// let schema = parse_schema_file(Path::new("schemas/person.yml")).unwrap();
/// println!("Loaded model: {}", schema.name());
/// ```
pub fn parse_schema_file(path: &Path) -> Result<Arc<ModelSchema>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "Parsing schema file");

    match format {
        FileFormat::Yaml => parse_schema_yaml(&content),
        FileFormat::Toml => parse_schema_toml(&content),
        FileFormat::Json => parse_schema_json(&content),
    }
}

/// Parse an instance of `schema` from a JSON string.
pub fn parse_instance_json(schema: &Arc<ModelSchema>, content: &str) -> Result<ModelInstance> {
    parse_instance_str(schema, content, FileFormat::Json)
}

/// Parse an instance of `schema` from a string in the given format.
pub fn parse_instance_str(
    schema: &Arc<ModelSchema>,
    content: &str,
    format: FileFormat,
) -> Result<ModelInstance> {
    let document: JsonValue = match format {
        FileFormat::Json => serde_json::from_str(content)?,
        FileFormat::Yaml => {
            let document: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;
            yaml_document("", &document)?
        }
        FileFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
            toml_document("", &table)?
        }
    };
    instance_from_json(schema, &document)
}

/// Parse an instance of `schema` from a file with automatic format detection.
pub fn parse_instance_file(schema: &Arc<ModelSchema>, path: &Path) -> Result<ModelInstance> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, model = schema.name(), "Parsing instance file");

    parse_instance_str(schema, &content, format)
}
