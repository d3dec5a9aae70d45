//! Transform orchestration: one input document to one rendered target.
//!
//! The pipeline is linear with no back-edges: resolve the input path,
//! load and validate, normalize to the canonical rule list, filter by
//! scope, gather the sibling ignore payload, then dispatch to exactly
//! one renderer. All relative paths resolve against `base_dir`; the
//! process working directory is never changed, so the orchestrator is
//! re-entrant and testable without process-level isolation.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::loader;
use crate::models::{Document, RuleSet};
use crate::normalize;
use crate::render::{self, Format, RenderContext};
use crate::scope;

/// Default input file name for rules documents.
pub const DEFAULT_INPUT: &str = "rules.yaml";

/// Configuration accepted by the core, supplied by the CLI shell.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub format: String,
    pub input: Option<String>,
    pub scopes: Vec<String>,
    pub base_dir: PathBuf,
    pub output: Option<PathBuf>,
    pub force: bool,
}

/// Run one transform end to end. Any failure aborts the run; there is
/// no partial-success path.
pub fn run(opts: &TransformOptions) -> Result<(), Error> {
    let requested = opts.input.clone().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let input_path = resolve(&opts.base_dir, Path::new(&requested));
    if !input_path.exists() {
        let default_path = resolve(&opts.base_dir, Path::new(DEFAULT_INPUT));
        return Err(Error::NotFound {
            is_default: requested == DEFAULT_INPUT,
            default_path: default_path.exists().then_some(default_path),
            requested,
            base: opts.base_dir.clone(),
        });
    }

    let document = loader::load(&input_path)?;
    let rules_shaped = matches!(document, Document::Rules(_));
    let canonical = normalize::canonicalize(document);
    let canonical = RuleSet {
        rules: scope::filter_rules(canonical.rules, &opts.scopes),
    };

    // Sibling ignore documents only accompany genuine rules inputs.
    let ignore_patterns = if rules_shaped {
        let input_dir = input_path.parent().unwrap_or(Path::new("."));
        normalize::sibling_ignore_patterns(input_dir, &opts.scopes)
    } else {
        None
    };

    let format = Format::parse(&opts.format)?;
    let ctx = RenderContext {
        base: &opts.base_dir,
        output: opts.output.as_deref(),
        force: opts.force,
        ignore_patterns: ignore_patterns.as_deref(),
    };
    render::render(format, &canonical, &ctx)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
