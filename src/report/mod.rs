// mod.rs - Report rendering module

use crate::diagnose::{FileReport, Outcome};
use chrono;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of the separator line in the console report
const SEPARATOR_WIDTH: usize = 40;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Render the single diagnosis line for a report
pub fn diagnosis_line(report: &FileReport) -> String {
    match &report.outcome {
        Outcome::Diagnosis(diagnosis) => diagnosis.summary.clone(),
        Outcome::Unsupported { extension } => {
            let shown = if extension.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{}", extension)
            };
            format!(
                "Unsupported format: {} (I only speak YAML, JSON, and TOML)",
                shown
            )
        }
    }
}

/// Print the console report
pub fn print_report(report: &FileReport) {
    println!("\n🔍 Examining: {}", report.path);
    println!("{}", separator());
    println!("{}", diagnosis_line(report));
    println!("{}", separator());
    println!("Config-Fu complete. You're welcome.");
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Write the report in text format
pub fn write_text(file_path: &str, report: &FileReport, command_line: &str) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# configfu v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    writeln!(writer, "Examining: {}", report.path).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "{}", separator()).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "{}", diagnosis_line(report)).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "{}", separator()).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Report written to: {}", file_path);
    Ok(())
}

/// Write the report in JSON format
pub fn write_json(file_path: &str, report: &FileReport, command_line: &str) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let payload = serde_json::json!({
        "command_line": command_line,
        "generated": chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "diagnosis_line": diagnosis_line(report),
        "report": report,
    });

    let content = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write report file '{}': {}", file_path, e))?;

    println!("✅ Report written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write the report in the specified format
pub fn write_report(
    file_path: &str,
    format: &str,
    report: &FileReport,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "text" => write_text(file_path, report, command_line),
        "json" => write_json(file_path, report, command_line),
        _ => Err(format!(
            "Unsupported report format: {}. Use: text, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Diagnosis;

    fn diagnosed_report() -> FileReport {
        FileReport {
            path: "bad.json".to_string(),
            outcome: Outcome::Diagnosis(
                Diagnosis::invalid(
                    "JSON",
                    "JSON error at line 1: trailing comma (Probably a comma drama)",
                    "trailing comma",
                )
                .with_position(1, 9),
            ),
        }
    }

    #[test]
    fn test_diagnosis_line_passes_summary_through() {
        let report = diagnosed_report();
        assert!(diagnosis_line(&report).contains("JSON error at line 1"));
    }

    #[test]
    fn test_diagnosis_line_unsupported() {
        let report = FileReport {
            path: "settings.ini".to_string(),
            outcome: Outcome::Unsupported {
                extension: "ini".to_string(),
            },
        };
        assert_eq!(
            diagnosis_line(&report),
            "Unsupported format: .ini (I only speak YAML, JSON, and TOML)"
        );
    }

    #[test]
    fn test_diagnosis_line_no_extension() {
        let report = FileReport {
            path: "settings".to_string(),
            outcome: Outcome::Unsupported {
                extension: String::new(),
            },
        };
        assert!(diagnosis_line(&report).starts_with("Unsupported format: (none)"));
    }

    #[test]
    fn test_write_text_has_provenance_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();

        write_text(path, &diagnosed_report(), "configfu bad.json").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Command: configfu bad.json"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("JSON error at line 1"));
    }

    #[test]
    fn test_write_json_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let path = path.to_str().unwrap();

        write_json(path, &diagnosed_report(), "configfu bad.json").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["command_line"], "configfu bad.json");
        assert_eq!(parsed["report"]["path"], "bad.json");
        let diagnosis = &parsed["report"]["outcome"]["Diagnosis"];
        assert_eq!(diagnosis["format"], "JSON");
        assert_eq!(diagnosis["line"], 1);
    }

    #[test]
    fn test_unknown_report_format() {
        let error = write_report("out.xml", "xml", &diagnosed_report(), "cmd").unwrap_err();
        assert!(error.contains("Unsupported report format"));
        assert!(error.contains("text, json"));
    }
}
