//! enumgen CLI - generates enum string-conversion source files.
//!
//! Reads a header containing a single enum declaration and writes a
//! companion source file defining `to_string`, `from_string`, and
//! `from_integer` for it. Exit status is 0 on success and non-zero on any
//! failure; diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use enumgen_core::{
    init_structured_logging, is_up_to_date, load_config, log_info, log_warn, print_json, render,
    scan_enum, write_generated, EmitOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates enum string-conversion functions")]
pub struct Cli {
    /// Header file containing the enum declaration
    input: PathBuf,

    /// Destination for the generated source file
    output: PathBuf,

    /// Verify that the output file is up to date instead of writing it
    #[arg(long)]
    check: bool,

    /// Print a JSON summary of the scanned enum after a successful run
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_structured_logging();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("unable to open input file: {}", cli.input.display()))?;

    // Config lives next to the input header. A broken config is a warning,
    // not a fatal error; the run continues with defaults.
    let config_dir = cli.input.parent().unwrap_or_else(|| Path::new("."));
    let options = match load_config(config_dir) {
        Ok(Some(cfg)) => cfg.emit_options(),
        Ok(None) => EmitOptions::default(),
        Err(e) => {
            log_warn(&format!("config load failed: {}", e));
            EmitOptions::default()
        }
    };

    let scan = scan_enum(&cli.input, &content)?;
    let rendered = render(&scan, &options);

    if cli.check {
        if is_up_to_date(&cli.output, &rendered) {
            log_info(&format!("{} is up to date", cli.output.display()));
            return Ok(());
        }
        eprintln!(
            "{} is out of date; rerun enumgen to regenerate it",
            cli.output.display()
        );
        std::process::exit(1);
    }

    write_generated(&cli.output, &rendered)?;

    if cli.json {
        print_json(&scan, &cli.input, &cli.output);
    } else {
        log_info(&format!(
            "generated {} conversions into {} ({} members)",
            scan.enum_name,
            cli.output.display(),
            scan.members.len()
        ));
    }

    Ok(())
}
