// yaml.rs - YAML diagnoser implementation

use super::traits::{truncate_detail, Diagnosis, FormatDiagnoser};

/// YAML diagnoser - safe-load equivalent via serde_yml.
/// Deserializing to a plain Value never constructs language objects from
/// tags, restricting input to scalars, sequences, and mappings.
#[derive(Debug, Clone)]
pub struct YamlDiagnoser;

impl FormatDiagnoser for YamlDiagnoser {
    fn diagnose(&self, content: &str, max_detail_len: usize) -> Diagnosis {
        match serde_yml::from_str::<serde_yml::Value>(content) {
            Ok(_) => Diagnosis::valid(self.name(), "YAML looks fine! (Probably. No promises.)"),
            Err(e) => {
                let detail = truncate_detail(&e.to_string(), max_detail_len);
                let summary = format!(
                    "YAML says: {}... (Hint: Check your spaces, you heathen)",
                    detail
                );
                let mut diagnosis = Diagnosis::invalid(self.name(), summary, detail);
                if let Some(location) = e.location() {
                    diagnosis = diagnosis.with_position(location.line(), location.column());
                }
                diagnosis
            }
        }
    }

    fn name(&self) -> &'static str {
        "YAML"
    }

    fn description(&self) -> &'static str {
        "YAML in safe-load mode (plain scalars, sequences, and mappings only)"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::DEFAULT_MAX_DETAIL_LEN;

    #[test]
    fn test_valid_yaml() {
        let diagnoser = YamlDiagnoser;
        let diagnosis = diagnoser.diagnose("key: value\nlist:\n  - 1\n  - 2\n", DEFAULT_MAX_DETAIL_LEN);

        assert!(diagnosis.is_valid());
        assert_eq!(diagnosis.summary, "YAML looks fine! (Probably. No promises.)");
        assert!(diagnosis.detail.is_none());
    }

    #[test]
    fn test_empty_yaml_is_valid() {
        let diagnoser = YamlDiagnoser;
        let diagnosis = diagnoser.diagnose("", DEFAULT_MAX_DETAIL_LEN);
        assert!(diagnosis.is_valid());
    }

    #[test]
    fn test_invalid_yaml_uses_says_prefix() {
        let diagnoser = YamlDiagnoser;
        let diagnosis = diagnoser.diagnose("key: value\n  bad_indent: true", DEFAULT_MAX_DETAIL_LEN);

        assert!(!diagnosis.is_valid());
        assert!(diagnosis.summary.starts_with("YAML says:"));
        assert!(diagnosis.summary.contains("(Hint: Check your spaces, you heathen)"));
        assert!(diagnosis.detail.is_some());
    }

    #[test]
    fn test_invalid_yaml_detail_respects_limit() {
        let diagnoser = YamlDiagnoser;
        let diagnosis = diagnoser.diagnose("key: value\n  bad_indent: true", 10);

        let detail = diagnosis.detail.unwrap();
        assert!(detail.chars().count() <= 10);
    }

    #[test]
    fn test_properties() {
        let diagnoser = YamlDiagnoser;
        assert_eq!(diagnoser.name(), "YAML");
        assert!(diagnoser.extensions().contains(&"yaml"));
        assert!(diagnoser.extensions().contains(&"yml"));
    }
}
