use anyhow::{Context, Result};
use modelcheck_parser::{parse_instance_file, parse_schema_file};
use modelcheck_validator::Validator;
use std::path::Path;
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(schema_path: &str, instance_path: &str, format: OutputFormat) -> Result<()> {
    info!("Validating {} against {}", instance_path, schema_path);

    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    let instance = parse_instance_file(&schema, Path::new(instance_path))
        .with_context(|| format!("Failed to parse instance file: {}", instance_path))?;

    if format == OutputFormat::Text {
        output::print_info(&format!("Schema loaded: {}", schema.name()));
    }

    let report = Validator::new().validate_with_report(&instance);
    info!(
        tag = report.result.tag(),
        errors = report.errors().len(),
        "Validation finished"
    );

    output::print_validation_report(&report, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
