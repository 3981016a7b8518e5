// toml.rs - TOML diagnoser implementation

use super::traits::{truncate_detail, Diagnosis, FormatDiagnoser};

/// TOML diagnoser - standard specification via the toml crate
#[derive(Debug, Clone)]
pub struct TomlDiagnoser;

impl TomlDiagnoser {
    /// Convert a byte offset into a 1-based line/column pair
    fn position_at(content: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(content.len());
        let before = &content[..offset];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(idx) => offset - idx,
            None => offset + 1,
        };
        (line, column)
    }
}

impl FormatDiagnoser for TomlDiagnoser {
    fn diagnose(&self, content: &str, max_detail_len: usize) -> Diagnosis {
        match toml::from_str::<toml::Table>(content) {
            Ok(_) => Diagnosis::valid(self.name(), "TOML parses! (This is surprisingly rare)"),
            Err(e) => {
                // message() is the bare diagnosis without the multi-line
                // span rendering that Display produces
                let detail = truncate_detail(e.message(), max_detail_len);
                let summary = format!(
                    "TOML decode error: {}... (Tables, arrays, who knows?)",
                    detail
                );
                let mut diagnosis = Diagnosis::invalid(self.name(), summary, detail);
                if let Some(span) = e.span() {
                    let (line, column) = Self::position_at(content, span.start);
                    diagnosis = diagnosis.with_position(line, column);
                }
                diagnosis
            }
        }
    }

    fn name(&self) -> &'static str {
        "TOML"
    }

    fn description(&self) -> &'static str {
        "TOML per the standard specification"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["toml"]
    }
}
