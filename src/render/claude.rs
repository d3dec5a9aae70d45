//! Claude target: single `CLAUDE.md` digest, plus a settings file for
//! ignore patterns.

use super::{digest, emit_ignore_file, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = "CLAUDE.md";

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_file = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_file, ctx.force, TargetKind::File)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Claude, patterns, ctx)?;
    }

    super::ensure_parent(&out_file)?;
    super::write_file(&out_file, &digest("# Custom Rules for Claude", rules))?;
    output::success(&format!(
        "Successfully created Claude rules in {}",
        output::display_path(&out_file)
    ));
    Ok(())
}
