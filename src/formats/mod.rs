// mod.rs - Formats module root

pub mod json;
pub mod registry;
pub mod toml;
pub mod traits;
pub mod yaml;

// Re-export main types for convenience
pub use json::JsonDiagnoser;
pub use registry::FormatRegistry;
// self:: disambiguates the module from the toml crate
pub use self::toml::TomlDiagnoser;
pub use traits::{truncate_detail, Diagnosis, FormatDiagnoser, Verdict, DEFAULT_MAX_DETAIL_LEN};
pub use yaml::YamlDiagnoser;
