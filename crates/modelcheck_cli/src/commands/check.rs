use anyhow::{Context, Result};
use modelcheck_parser::parse_schema_file;
use std::path::Path;
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(schema_path: &str, format: OutputFormat) -> Result<()> {
    info!("Checking schema: {}", schema_path);

    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    if format == OutputFormat::Text {
        output::print_info(&format!(
            "Schema loaded: {} ({} fields)",
            schema.name(),
            schema.len()
        ));
        output::print_success("Schema is valid");
    }

    output::print_schema_summary(&schema, format)
}
