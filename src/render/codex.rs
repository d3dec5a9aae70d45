//! Codex CLI target: single `AGENTS.md` digest, plus a config file for
//! ignore patterns.

use super::{digest, emit_ignore_file, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = "AGENTS.md";

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_file = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_file, ctx.force, TargetKind::File)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Codex, patterns, ctx)?;
    }

    super::ensure_parent(&out_file)?;
    super::write_file(
        &out_file,
        &digest("# Agent Instructions for Codex CLI", rules),
    )?;
    output::success(&format!(
        "Successfully created Codex CLI rules in {}",
        output::display_path(&out_file)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_agents_digest_and_ignore_config() {
        let dir = tempdir().unwrap();
        let rules = RuleSet {
            rules: vec![Rule {
                name: "Reviews".into(),
                description: None,
                scope: None,
                globs: None,
                content: "Request review early.".into(),
            }],
        };
        let patterns = vec!["target/".to_string(), "vendor/".to_string()];
        let ctx = RenderContext {
            base: dir.path(),
            output: None,
            force: false,
            ignore_patterns: Some(&patterns),
        };
        render(&rules, &ctx).unwrap();

        let text = fs::read_to_string(dir.path().join("AGENTS.md")).unwrap();
        assert!(text.starts_with("# Agent Instructions for Codex CLI\n\n"));
        assert!(text.contains("## Reviews\n\nRequest review early.\n\n---\n\n"));

        let cfg = fs::read_to_string(dir.path().join(".codex/config.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&cfg).unwrap();
        assert_eq!(parsed["ignorePatterns"][1], "vendor/");
    }
}
