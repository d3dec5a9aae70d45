//! Cline target: single `.clinerules` YAML document.

use serde::Serialize;

use super::{emit_ignore_file, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = ".clinerules";

#[derive(Serialize)]
struct ClineDocument<'a> {
    rules: Vec<ClineRule<'a>>,
}

/// Cline keeps globs structured, so the tagged value is projected back
/// to a plain sequence here.
#[derive(Serialize)]
struct ClineRule<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    globs: Option<Vec<String>>,
}

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_file = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_file, ctx.force, TargetKind::File)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Cline, patterns, ctx)?;
    }

    let doc = ClineDocument {
        rules: rules
            .rules
            .iter()
            .map(|rule| ClineRule {
                name: &rule.name,
                description: rule.description.as_deref(),
                content: &rule.content,
                globs: rule.globs.as_ref().and_then(|g| g.as_patterns()),
            })
            .collect(),
    };
    super::ensure_parent(&out_file)?;
    super::write_file(&out_file, &serde_yaml::to_string(&doc).unwrap())?;
    output::success(&format!(
        "Successfully created Cline rules in {}",
        output::display_path(&out_file)
    ));
    Ok(())
}
