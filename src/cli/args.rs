// args.rs - Command line arguments definition

use crate::formats::DEFAULT_MAX_DETAIL_LEN;
use argh::FromArgs;

#[derive(FromArgs)]
/// configfu - Friendly diagnostics for YAML, JSON, and TOML config files
pub struct Args {
    /// path to the configuration file to examine
    #[argh(positional)]
    pub file: Option<String>,

    /// force format: yaml, json, toml (default: detect from extension)
    #[argh(option)]
    pub format: Option<String>,

    /// maximum length of parser error detail embedded in the diagnosis (default: 100)
    #[argh(option, default = "DEFAULT_MAX_DETAIL_LEN")]
    pub max_error_len: usize,

    /// report format for --output: text, json (default: text)
    #[argh(option, default = "String::from(\"text\")")]
    pub report: String,

    /// write the report to a file in addition to the console
    #[argh(option)]
    pub output: Option<String>,

    /// exit with failure status when the file does not parse
    #[argh(switch)]
    pub strict: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// list supported formats and exit
    #[argh(switch)]
    pub list_formats: bool,
}
