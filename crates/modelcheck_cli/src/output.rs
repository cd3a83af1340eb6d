use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use modelcheck_core::{FieldSpec, FieldType, ModelSchema};
use modelcheck_validator::ValidationReport;
use serde_json::{Value as JsonValue, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_validation_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_report(report),
        OutputFormat::Text => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation OK".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors().is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors().iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    let stats = &report.stats;
    println!("\n{}", "Summary:".bold());
    println!("  Total errors:          {}", report.errors().len());
    println!("  Models validated:      {}", stats.models_validated);
    println!("  Fields checked:        {}", stats.fields_checked);
    println!("  Constraints evaluated: {}", stats.constraints_evaluated);
    println!("  Duration:              {} ms", stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let output = json!({
        "tag": report.result.tag(),
        "errors": report.errors(),
        "summary": {
            "error_count": report.errors().len(),
            "models_validated": report.stats.models_validated,
            "fields_checked": report.stats.fields_checked,
            "constraints_evaluated": report.stats.constraints_evaluated,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_schema_summary(schema: &ModelSchema, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&schema_json(schema))?);
        }
        OutputFormat::Text => {
            println!("\nSchema Summary:");
            println!("  Name:        {}", schema.name());
            println!(
                "  Description: {}",
                schema.description().unwrap_or("N/A")
            );
            println!("  Fields:      {}", schema.len());
            print_fields(schema, 2);
        }
    }
    Ok(())
}

fn print_fields(schema: &ModelSchema, indent: usize) {
    for (name, spec) in schema.fields() {
        let mut line = format!("{}- {}: {}", " ".repeat(indent + 2), name, spec.field_type());
        let notes = field_notes(spec);
        if !notes.is_empty() {
            line.push_str(&format!(" ({})", notes.join(", ")));
        }
        println!("{}", line);

        if let Some(nested) = embedded_schema(spec) {
            print_fields(nested, indent + 2);
        }
    }
}

/// Flags and constraints of a field, one short note each.
fn field_notes(spec: &FieldSpec) -> Vec<String> {
    let mut notes = Vec::new();
    if spec.required() {
        notes.push("required".to_string());
    }
    if spec.dirty() {
        notes.push("dirty".to_string());
    }
    if let Some(choices) = spec.choices() {
        let values: Vec<String> = choices.iter().map(ToString::to_string).collect();
        notes.push(format!("choices: {}", values.join("|")));
    }
    if spec.min_length().is_some() || spec.max_length().is_some() {
        notes.push(format!(
            "length: [{}, {}]",
            bound(spec.min_length()),
            bound(spec.max_length())
        ));
    }
    if let Some(pattern) = spec.pattern() {
        notes.push(format!("pattern: {}", pattern.as_str()));
    }
    if spec.min_value().is_some() || spec.max_value().is_some() {
        notes.push(format!(
            "range: [{}, {}]",
            bound(spec.min_value()),
            bound(spec.max_value())
        ));
    }
    notes
}

fn schema_json(schema: &ModelSchema) -> JsonValue {
    let fields: Vec<JsonValue> = schema
        .fields()
        .map(|(name, spec)| {
            let mut field = json!({
                "name": name,
                "type": spec.field_type().to_string(),
                "required": spec.required(),
                "dirty": spec.dirty(),
                "constraints": spec.constraint_count(),
            });
            if let Some(nested) = embedded_schema(spec) {
                field["model"] = schema_json(nested);
            }
            field
        })
        .collect();

    json!({
        "name": schema.name(),
        "description": schema.description(),
        "fields": fields,
    })
}

/// Schema of an embedded model, looking through list element specs.
fn embedded_schema(spec: &FieldSpec) -> Option<&ModelSchema> {
    match spec.field_type() {
        FieldType::Model(schema) => Some(schema.as_ref()),
        FieldType::List(item) => embedded_schema(item),
        _ => None,
    }
}

fn bound<T: ToString>(limit: Option<T>) -> String {
    limit.map_or_else(|| "-".to_string(), |l| l.to_string())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
