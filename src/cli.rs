//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rulecast",
    version,
    about = "Fan out one rules document to AI assistant tool formats",
    long_about = "rulecast — convert a YAML rules document into the on-disk layout expected by an AI assistant tool (Cursor, Claude, Cline, Codex, Kilo Code, Windsurf) or dump it as JSON.\n\nConfiguration precedence: CLI > rulecast.toml > defaults.",
    after_help = "Examples:\n  rulecast transform --format cursor\n  rulecast transform --format claude --input team-rules.yaml --force\n  rulecast transform --format json --scope python --scope javascript",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current rulecast version."
    )]
    Version,
    /// Render a rules document for one target tool
    #[command(
        about = "Render a rules document for one target tool",
        long_about = "Load a rules document (or an ignore_rules document), filter it by scope, and render it for the requested tool. A sibling ignore.yaml next to a rules input contributes ignore patterns where the target supports them.",
        after_help = "Examples:\n  rulecast transform --format cursor --force\n  rulecast transform --format windsurf --dir ../service\n  rulecast transform --format json --scope python"
    )]
    Transform {
        #[arg(
            long,
            help = "Target format: cursor|claude|cline|codex|kilo|windsurf|json"
        )]
        format: Option<String>,
        #[arg(long, short = 'i', help = "Input document (default: rules.yaml)")]
        input: Option<String>,
        #[arg(long, short = 's', help = "Scope tag to keep; repeatable")]
        scope: Vec<String>,
        #[arg(
            long,
            help = "Base directory for inputs and outputs (default: current dir)"
        )]
        dir: Option<String>,
        #[arg(long, help = "Explicit output path overriding the tool default")]
        out: Option<PathBuf>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Overwrite existing output")]
        force: bool,
    },
}
