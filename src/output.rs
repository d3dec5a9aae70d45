//! Console output helpers: colored prefixes and success lines.
//!
//! Diagnostics go to stderr through the prefix helpers; success lines
//! and the JSON dump go to stdout. Colors are suppressed when the
//! `NO_COLOR` environment variable is set.

use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal diagnostics on stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "✖".red().bold().to_string()
    } else {
        "✖".to_string()
    }
}

/// Prefix for follow-up hint lines accompanying a diagnostic.
pub fn hint_prefix() -> String {
    if use_colors() {
        "◆".blue().bold().to_string()
    } else {
        "◆".to_string()
    }
}

/// Print a success line to stdout.
pub fn success(message: &str) {
    if use_colors() {
        println!("{} {}", "✔".green().bold(), message);
    } else {
        println!("{}", message);
    }
}

/// Render `path` for human-facing messages: relative to the current
/// directory when that form is shorter.
pub fn display_path(path: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let shown = match pathdiff::diff_paths(path, &cwd) {
        Some(rel) if rel.as_os_str().len() < path.as_os_str().len() => rel,
        _ => path.to_path_buf(),
    };
    let text = shown.to_string_lossy().to_string();
    text.strip_prefix("./").map(str::to_string).unwrap_or(text)
}
