//! Windsurf target: one sectioned markdown file per rule under
//! `.windsurf/rules`.

use super::{emit_ignore_file, sanitize_name, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = ".windsurf/rules";

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_dir = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_dir, ctx.force, TargetKind::Directory)?;
    super::create_dir(&out_dir)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Windsurf, patterns, ctx)?;
    }

    for rule in &rules.rules {
        let mut body = format!("# Title: {}\n\n", rule.name);
        if let Some(desc) = &rule.description {
            body.push_str(&format!("## Description\n\n{}\n\n", desc));
        }
        body.push_str(&format!("## Instructions\n\n{}\n", rule.content));
        let file = out_dir.join(format!("{}.md", sanitize_name(&rule.name)));
        super::write_file(&file, &body)?;
    }

    output::success(&format!(
        "Successfully created Windsurf rules in {}",
        output::display_path(&out_dir)
    ));
    Ok(())
}
