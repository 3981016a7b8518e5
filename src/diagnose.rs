// diagnose.rs - Format dispatch and file diagnosis driver

use crate::formats::{Diagnosis, FormatDiagnoser, FormatRegistry, DEFAULT_MAX_DETAIL_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options controlling a diagnosis run
#[derive(Debug, Clone)]
pub struct DiagnoseOptions {
    /// Format name forced by the user, bypassing extension detection
    pub format_override: Option<String>,
    /// Truncation length for embedded parser error detail
    pub max_detail_len: usize,
}

impl Default for DiagnoseOptions {
    fn default() -> Self {
        Self {
            format_override: None,
            max_detail_len: DEFAULT_MAX_DETAIL_LEN,
        }
    }
}

/// What happened to one examined file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Outcome {
    /// A diagnoser ran and produced its diagnosis
    Diagnosis(Diagnosis),
    /// The extension matched no registered format; the file was not read
    Unsupported { extension: String },
}

/// Report for one examined file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub outcome: Outcome,
}

impl FileReport {
    /// An unsupported extension is informational, not a failure
    pub fn is_valid(&self) -> bool {
        match &self.outcome {
            Outcome::Diagnosis(diagnosis) => diagnosis.is_valid(),
            Outcome::Unsupported { .. } => true,
        }
    }
}

/// Lowercased extension of a path, empty when there is none
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Diagnose a single configuration file.
///
/// Resolves the diagnoser from the format override or the file extension,
/// reads the file, and invokes the diagnoser. Unrecognized extensions
/// short-circuit to `Outcome::Unsupported` before any file I/O.
pub fn diagnose_file(
    path: &str,
    registry: &FormatRegistry,
    options: &DiagnoseOptions,
) -> Result<FileReport, String> {
    let diagnoser: Option<&dyn FormatDiagnoser> = match &options.format_override {
        Some(name) => Some(registry.get(name).ok_or_else(|| {
            format!(
                "Unknown format '{}'. Available: {}",
                name,
                registry.format_names().join(", ")
            )
        })?),
        None => registry.for_path(path),
    };

    let diagnoser = match diagnoser {
        Some(d) => d,
        None => {
            return Ok(FileReport {
                path: path.to_string(),
                outcome: Outcome::Unsupported {
                    extension: extension_of(path),
                },
            });
        }
    };

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let diagnosis = diagnoser.diagnose(&content, options.max_detail_len);
    Ok(FileReport {
        path: path.to_string(),
        outcome: Outcome::Diagnosis(diagnosis),
    })
}
