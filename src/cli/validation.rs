// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::formats::FormatRegistry;

#[derive(Debug)]
pub struct ValidationResult {
    /// Normalized format override, validated against the registry
    pub format_override: Option<String>,
    pub max_detail_len: usize,
    pub report_format: String,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args, registry: &FormatRegistry) -> Result<ValidationResult, String> {
    // Validate format override
    let format_override = match &args.format {
        Some(name) => {
            if !registry.has_format(name) {
                return Err(format!(
                    "Invalid format '{}'. Available: {}",
                    name,
                    registry.format_names().join(", ")
                ));
            }
            Some(name.to_lowercase())
        }
        None => None,
    };

    // Validate truncation length
    if args.max_error_len == 0 {
        return Err("--max-error-len must be at least 1".to_string());
    }

    // Validate report format
    let report_format = args.report.to_lowercase();
    if report_format != "text" && report_format != "json" {
        return Err(format!(
            "Unsupported report format: {}. Use: text, json",
            args.report
        ));
    }

    Ok(ValidationResult {
        format_override,
        max_detail_len: args.max_error_len,
        report_format,
    })
}
