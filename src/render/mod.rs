//! Renderer selection and shared on-disk behaviors.
//!
//! One submodule per target tool; this module owns the pieces every
//! renderer shares: the existence guard, rule-name sanitization, the
//! ignore-file emission table, and the markdown digest layout used by
//! the single-file targets.
//!
//! Adding a target means adding a `Format` variant, a module with the
//! shared `render(&RuleSet, &RenderContext)` signature, and a dispatch
//! arm; the match keeps the set exhaustive.

pub mod claude;
pub mod cline;
pub mod codex;
pub mod cursor;
pub mod json;
pub mod kilo;
pub mod windsurf;

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

/// Format names accepted from callers, in diagnostic order.
pub const SUPPORTED: &[&str] = &[
    "cursor", "claude", "cline", "codex", "kilo", "windsurf", "json",
];

/// Supported output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Cursor,
    Claude,
    Cline,
    Codex,
    Kilo,
    Windsurf,
    Json,
}

impl Format {
    /// Case-insensitive lookup from a user-supplied format name.
    pub fn parse(name: &str) -> Result<Format, Error> {
        match name.to_ascii_lowercase().as_str() {
            "cursor" => Ok(Format::Cursor),
            "claude" => Ok(Format::Claude),
            "cline" => Ok(Format::Cline),
            "codex" => Ok(Format::Codex),
            "kilo" => Ok(Format::Kilo),
            "windsurf" => Ok(Format::Windsurf),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat {
                requested: name.to_string(),
            }),
        }
    }
}

/// Everything a renderer needs besides the rule set itself.
pub struct RenderContext<'a> {
    /// Directory all relative artifact paths resolve against. The
    /// process working directory is never changed.
    pub base: &'a Path,
    /// Explicit output override; renderers fall back to their
    /// tool-conventional default when absent.
    pub output: Option<&'a Path>,
    /// Overwrite existing outputs instead of failing.
    pub force: bool,
    /// Flattened ignore patterns, when a sibling document supplied any.
    pub ignore_patterns: Option<&'a [String]>,
}

impl RenderContext<'_> {
    /// Resolve the main output path against the base directory.
    pub fn target(&self, default: &str) -> PathBuf {
        match self.output {
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => self.base.join(p),
            None => self.base.join(default),
        }
    }
}

/// Dispatch to the renderer for `format`. Exactly one renderer runs
/// per invocation.
pub fn render(format: Format, rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    match format {
        Format::Cursor => cursor::render(rules, ctx),
        Format::Claude => claude::render(rules, ctx),
        Format::Cline => cline::render(rules, ctx),
        Format::Codex => codex::render(rules, ctx),
        Format::Kilo => kilo::render(rules, ctx),
        Format::Windsurf => windsurf::render(rules, ctx),
        Format::Json => json::render(rules, ctx),
    }
}

/// Derive a file base name from a rule name: whitespace runs collapse
/// to single hyphens, then everything outside `[A-Za-z0-9-]` is
/// stripped. Distinct names may collide; the last writer wins.
pub fn sanitize_name(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let ws = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"));
    ws.replace_all(name, "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Abort when `path` exists and overwriting was not requested;
/// otherwise clear it for regeneration.
pub(crate) fn ensure_clear(path: &Path, force: bool, kind: TargetKind) -> Result<(), Error> {
    if !path.exists() {
        return Ok(());
    }
    if !force {
        return Err(Error::OutputExists {
            path: output::display_path(path),
            kind,
        });
    }
    let removed = match kind {
        TargetKind::Directory => fs::remove_dir_all(path),
        TargetKind::File => fs::remove_file(path),
    };
    removed.map_err(|e| Error::Io {
        context: format!("failed to remove '{}'", path.display()),
        source: e,
    })
}

pub(crate) fn create_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|e| Error::Io {
        context: format!("failed to create '{}'", path.display()),
        source: e,
    })
}

pub(crate) fn ensure_parent(path: &Path) -> Result<(), Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir(parent),
        _ => Ok(()),
    }
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|e| Error::Io {
        context: format!("failed to write '{}'", path.display()),
        source: e,
    })
}

/// Write the ignore-pattern payload to the location the target tool
/// expects, through the same existence guard as main outputs.
pub(crate) fn emit_ignore_file(
    format: Format,
    patterns: &[String],
    ctx: &RenderContext,
) -> Result<(), Error> {
    let (rel_path, content) = match format {
        Format::Cursor => (".cursorignore", patterns.join("\n")),
        Format::Claude => (
            ".claude/settings.json",
            serde_json::to_string_pretty(&serde_json::json!({ "ignore": patterns })).unwrap(),
        ),
        Format::Codex => (
            ".codex/config.json",
            serde_json::to_string_pretty(&serde_json::json!({ "ignorePatterns": patterns }))
                .unwrap(),
        ),
        _ => (".aiignore", patterns.join("\n")),
    };
    let path = ctx.base.join(rel_path);
    ensure_parent(&path)?;
    ensure_clear(&path, ctx.force, TargetKind::File)?;
    write_file(&path, &content)?;
    output::success(&format!(
        "Successfully created ignore file: {}",
        output::display_path(&path)
    ));
    Ok(())
}

/// Markdown digest layout shared by the single-file targets: one `##`
/// section per rule, separated by horizontal rules.
pub(crate) fn digest(header: &str, rules: &RuleSet) -> String {
    let mut content = format!("{}\n\n", header);
    for rule in &rules.rules {
        content.push_str(&format!("## {}\n\n", rule.name));
        if let Some(desc) = &rule.description {
            content.push_str(&format!("**Description:** {}\n\n", desc));
        }
        content.push_str(&format!("{}\n\n", rule.content));
        content.push_str("---\n\n");
    }
    content
}
