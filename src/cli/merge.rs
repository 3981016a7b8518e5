// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::formats::DEFAULT_MAX_DETAIL_LEN;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Format selection
        if self.format.is_none() {
            self.format = config.format;
        }

        // Diagnosis rendering (only override the default, not explicit CLI values)
        if self.max_error_len == DEFAULT_MAX_DETAIL_LEN && config.max_error_len.is_some() {
            self.max_error_len = config.max_error_len.unwrap();
        }

        // Report output
        if self.report == "text" && config.report.is_some() {
            self.report = config.report.unwrap();
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.strict && config.strict.unwrap_or(false) {
            self.strict = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            file: None,
            format: None,
            max_error_len: DEFAULT_MAX_DETAIL_LEN,
            report: "text".to_string(),
            output: None,
            strict: false,
            config: None,
            generate_config: false,
            list_formats: false,
        }
    }

    #[test]
    fn test_config_fills_defaults() {
        let mut config = Config::new();
        config.format = Some("yaml".to_string());
        config.max_error_len = Some(50);
        config.report = Some("json".to_string());
        config.output = Some("report.json".to_string());
        config.strict = Some(true);

        let merged = default_args().merge_with_config(config);

        assert_eq!(merged.format.as_deref(), Some("yaml"));
        assert_eq!(merged.max_error_len, 50);
        assert_eq!(merged.report, "json");
        assert_eq!(merged.output.as_deref(), Some("report.json"));
        assert!(merged.strict);
    }

    #[test]
    fn test_cli_values_win() {
        let mut args = default_args();
        args.format = Some("json".to_string());
        args.max_error_len = 10;
        args.report = "json".to_string();

        let mut config = Config::new();
        config.format = Some("yaml".to_string());
        config.max_error_len = Some(50);
        config.report = Some("text".to_string());

        let merged = args.merge_with_config(config);

        assert_eq!(merged.format.as_deref(), Some("json"));
        assert_eq!(merged.max_error_len, 10);
        assert_eq!(merged.report, "json");
    }

    #[test]
    fn test_empty_config_changes_nothing() {
        let merged = default_args().merge_with_config(Config::new());

        assert!(merged.format.is_none());
        assert_eq!(merged.max_error_len, DEFAULT_MAX_DETAIL_LEN);
        assert_eq!(merged.report, "text");
        assert!(!merged.strict);
    }
}
