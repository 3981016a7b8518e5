// main.rs - CLI entry point

use configfu::cli::Config;
use configfu::prelude::*;
use std::path::Path;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let registry = FormatRegistry::new();

    // Handle format listing
    if args.list_formats {
        println!("📋 Supported formats:");
        for (name, description) in registry.list_formats() {
            println!("  - {}: {}", name, description);
        }
        return Ok(());
    }

    // Validate all arguments
    let validation_result = validate_args(&args, &registry)?;

    // Validate required parameters
    let file = args
        .file
        .as_ref()
        .ok_or("a configuration file is required (usage: configfu <CONFIG_FILE>)")?;

    if !Path::new(file).exists() {
        return Err(format!("File not found: {} (Maybe it's hiding?)", file));
    }

    let options = DiagnoseOptions {
        format_override: validation_result.format_override.clone(),
        max_detail_len: validation_result.max_detail_len,
    };
    let report = diagnose_file(file, &registry, &options)?;

    print_report(&report);

    // Write report file if requested
    if let Some(ref output_path) = args.output {
        write_report(
            output_path,
            &validation_result.report_format,
            &report,
            &command_line,
        )?;
    }

    // A parse failure is the expected diagnostic output, not a program
    // fault; only strict mode turns it into a failing exit status
    if args.strict && !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
