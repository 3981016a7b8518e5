// lib.rs - configfu library root

//! # configfu - Friendly diagnostics for YAML, JSON, and TOML config files
//!
//! This library examines a configuration file and reports whether it parses,
//! turning cryptic parser errors into a single human-readable diagnosis.
//!
//! ## Features
//!
//! - **Format dispatch**: case-insensitive extension detection with an
//!   explicit override
//! - **Plugin system**: pluggable diagnosers behind a registry (YAML, JSON,
//!   TOML built in)
//! - **Readable diagnoses**: truncated parser detail, line numbers where the
//!   parser exposes them
//! - **Reports**: console output plus text/JSON report files with provenance
//!   headers
//! - **Configurable**: TOML configuration file merged under CLI arguments
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use configfu::prelude::*;
//!
//! let registry = FormatRegistry::new();
//! let report = diagnose_file(
//!     "config.yaml",
//!     &registry,
//!     &DiagnoseOptions::default(),
//! )?;
//! print_report(&report);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod diagnose;
pub mod formats;
pub mod report;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::diagnose::{diagnose_file, DiagnoseOptions, FileReport, Outcome};
    pub use crate::formats::{
        Diagnosis, FormatDiagnoser, FormatRegistry, Verdict, DEFAULT_MAX_DETAIL_LEN,
    };
    pub use crate::formats::{JsonDiagnoser, TomlDiagnoser, YamlDiagnoser};
    pub use crate::report::{print_report, write_report};
}

// Re-export main types at the root level for convenience
pub use diagnose::{diagnose_file, DiagnoseOptions, FileReport, Outcome};
pub use formats::{Diagnosis, FormatDiagnoser, FormatRegistry, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("configfu v{} - Friendly config file diagnostics", VERSION)
}
