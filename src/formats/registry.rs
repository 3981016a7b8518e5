// registry.rs - Format registry for managing available diagnosers

use super::traits::FormatDiagnoser;
use super::{JsonDiagnoser, TomlDiagnoser, YamlDiagnoser};
use std::collections::HashMap;
use std::path::Path;

/// Registry for available format diagnosers
pub struct FormatRegistry {
    diagnosers: HashMap<String, Box<dyn FormatDiagnoser>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            diagnosers: HashMap::new(),
        };

        // Register built-in diagnosers
        registry.register("yaml", Box::new(YamlDiagnoser));
        registry.register("json", Box::new(JsonDiagnoser));
        registry.register("toml", Box::new(TomlDiagnoser));

        registry
    }

    /// Register a new diagnoser under a format name
    pub fn register(&mut self, name: &str, diagnoser: Box<dyn FormatDiagnoser>) {
        self.diagnosers.insert(name.to_lowercase(), diagnoser);
    }

    /// Get a diagnoser by format name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&dyn FormatDiagnoser> {
        self.diagnosers.get(&name.to_lowercase()).map(|d| d.as_ref())
    }

    /// Check if a format exists
    pub fn has_format(&self, name: &str) -> bool {
        self.diagnosers.contains_key(&name.to_lowercase())
    }

    /// Resolve a diagnoser from a file extension (case-insensitive, no dot)
    pub fn for_extension(&self, extension: &str) -> Option<&dyn FormatDiagnoser> {
        let extension = extension.to_lowercase();
        self.diagnosers
            .values()
            .find(|d| d.extensions().contains(&extension.as_str()))
            .map(|d| d.as_ref())
    }

    /// Resolve a diagnoser from a file path by its extension
    pub fn for_path(&self, path: &str) -> Option<&dyn FormatDiagnoser> {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        if extension.is_empty() {
            return None;
        }
        self.for_extension(&extension)
    }

    /// List all registered formats with descriptions
    pub fn list_formats(&self) -> Vec<(&str, &str)> {
        let mut formats: Vec<(&str, &str)> = self
            .diagnosers
            .values()
            .map(|d| (d.name(), d.description()))
            .collect();
        formats.sort();
        formats
    }

    /// Get all format names, sorted for stable error messages
    pub fn format_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.diagnosers.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
