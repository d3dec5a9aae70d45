//! rulecast CLI binary entry point.
//!
//! The only place that maps errors to exit codes. Everything below
//! this boundary reports failures through `error::Error`.

use clap::Parser;

use rulecast::cli::{Cli, Commands};
use rulecast::config;
use rulecast::error::Error;
use rulecast::output::{display_path, error_prefix, hint_prefix};
use rulecast::render::SUPPORTED;
use rulecast::transform::{self, TransformOptions, DEFAULT_INPUT};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Transform {
            format,
            input,
            scope,
            dir,
            out,
            force,
        } => {
            let eff = config::resolve_effective(
                dir.as_deref(),
                format.as_deref(),
                input.as_deref(),
                &scope,
                force,
                out.as_deref(),
            );
            let Some(format) = eff.format else {
                eprintln!(
                    "{} Missing format. Supported: {}",
                    error_prefix(),
                    SUPPORTED.join(" | ")
                );
                std::process::exit(1);
            };
            let opts = TransformOptions {
                format,
                input: eff.input,
                scopes: eff.scopes,
                base_dir: eff.base_dir,
                output: eff.output,
                force: eff.force,
            };
            if let Err(err) = transform::run(&opts) {
                report(&err);
                std::process::exit(1);
            }
        }
    }
}

/// Print the taxonomy-specific diagnostic block for `err` to stderr.
fn report(err: &Error) {
    match err {
        Error::NotFound {
            requested,
            is_default,
            default_path,
            base,
        } => {
            if *is_default {
                eprintln!(
                    "{} '{}' file not found in the current directory: {}",
                    error_prefix(),
                    DEFAULT_INPUT,
                    display_path(base)
                );
                eprintln!(
                    "{} Please ensure the {} file exists or specify a different input file with --input flag.",
                    hint_prefix(),
                    DEFAULT_INPUT
                );
            } else if let Some(default) = default_path {
                eprintln!("{} Input file '{}' does not exist.", error_prefix(), requested);
                eprintln!(
                    "{} However, '{}' was found in the root directory: {}",
                    hint_prefix(),
                    DEFAULT_INPUT,
                    display_path(default)
                );
                eprintln!(
                    "{} Consider using the default or specify the correct path with --input flag.",
                    hint_prefix()
                );
            } else {
                eprintln!("{} Input file '{}' does not exist.", error_prefix(), requested);
                eprintln!(
                    "{} Also, '{}' was not found in the root directory.",
                    hint_prefix(),
                    DEFAULT_INPUT
                );
            }
        }
        Error::Parse { .. } | Error::Schema { .. } | Error::Io { .. } => {
            eprintln!("{} Error processing the file: {}", error_prefix(), err);
        }
        Error::UnsupportedFormat { .. } => {
            eprintln!("{} {}", error_prefix(), err);
            eprintln!(
                "{} Supported formats are: {}",
                hint_prefix(),
                SUPPORTED.join(", ")
            );
        }
        Error::OutputExists { .. } => {
            eprintln!("{} {}", error_prefix(), err);
            eprintln!(
                "{} Use --force flag to overwrite existing output.",
                hint_prefix()
            );
        }
    }
}
