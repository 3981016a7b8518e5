// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Format selection
    pub format: Option<String>,

    // Diagnosis rendering
    pub max_error_len: Option<usize>,

    // Report output
    pub report: Option<String>,
    pub output: Option<String>,

    // Flags
    pub strict: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            format: None,
            max_error_len: None,
            report: None,
            output: None,
            strict: None,
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# configfu.toml - Configuration file for configfu
# Command line arguments will override these settings

# =============================================================================
# FORMAT SELECTION
# =============================================================================

# Force format: yaml, json, toml (omit to detect from the file extension)
# format = "yaml"

# =============================================================================
# DIAGNOSIS RENDERING
# =============================================================================

# Maximum length of parser error detail embedded in the diagnosis
max_error_len = 100

# =============================================================================
# REPORT OUTPUT
# =============================================================================

# Report format for the output file: text, json
report = "text"

# Write the report to a file in addition to the console
# output = "report.txt"

# =============================================================================
# FLAGS
# =============================================================================

# Exit with failure status when the file does not parse
strict = false
"#
        .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
