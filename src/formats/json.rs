// json.rs - JSON diagnoser implementation

use super::traits::{truncate_detail, Diagnosis, FormatDiagnoser};

/// JSON diagnoser - strict grammar via serde_json
#[derive(Debug, Clone)]
pub struct JsonDiagnoser;

impl JsonDiagnoser {
    /// Strip serde_json's trailing "at line L column C" locator so the
    /// rendered diagnosis can carry the short message and the line number
    /// separately.
    fn short_message(err: &serde_json::Error) -> String {
        let rendered = err.to_string();
        match rendered.rfind(" at line ") {
            Some(idx) => rendered[..idx].to_string(),
            None => rendered,
        }
    }
}

impl FormatDiagnoser for JsonDiagnoser {
    fn diagnose(&self, content: &str, max_detail_len: usize) -> Diagnosis {
        match serde_json::from_str::<serde_json::Value>(content) {
            Ok(_) => Diagnosis::valid(
                self.name(),
                "JSON is valid! (The commas are all present and accounted for)",
            ),
            Err(e) => {
                let detail = truncate_detail(&Self::short_message(&e), max_detail_len);
                let summary = format!(
                    "JSON error at line {}: {} (Probably a comma drama)",
                    e.line(),
                    detail
                );
                Diagnosis::invalid(self.name(), summary, detail)
                    .with_position(e.line(), e.column())
            }
        }
    }

    fn name(&self) -> &'static str {
        "JSON"
    }

    fn description(&self) -> &'static str {
        "Strict JSON per the standard grammar"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }
}
