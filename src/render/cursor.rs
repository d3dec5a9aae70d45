//! Cursor target: one `.mdc` file per rule under `.cursor/rules`,
//! each led by a YAML front-matter block.

use serde::Serialize;

use super::{emit_ignore_file, sanitize_name, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = ".cursor/rules";

/// Front-matter field order is part of the layout: description first,
/// then the always-on apply flag, then the joined glob string.
#[derive(Serialize)]
struct FrontMatter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "alwaysApply")]
    always_apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    globs: Option<String>,
}

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_dir = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_dir, ctx.force, TargetKind::Directory)?;
    super::create_dir(&out_dir)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Cursor, patterns, ctx)?;
    }

    for rule in &rules.rules {
        let front = FrontMatter {
            description: rule.description.as_deref(),
            always_apply: true,
            globs: rule.globs.as_ref().and_then(|g| g.as_front_matter()),
        };
        let body = format!(
            "---\n{}---\n{}\n",
            serde_yaml::to_string(&front).unwrap(),
            rule.content
        );
        let file = out_dir.join(format!("{}.mdc", sanitize_name(&rule.name)));
        super::write_file(&file, &body)?;
    }

    output::success(&format!(
        "Successfully created Cursor rules in {}",
        output::display_path(&out_dir)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Globs, Rule};
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> RuleSet {
        RuleSet {
            rules: vec![Rule {
                name: "General Coding Rules".into(),
                description: Some("These are general coding rules".into()),
                scope: None,
                globs: Some(Globs::Patterns(vec!["*.js".into(), "*.ts".into()])),
                content: "Use early returns whenever possible.".into(),
            }],
        }
    }

    fn ctx<'a>(base: &'a std::path::Path, force: bool) -> RenderContext<'a> {
        RenderContext {
            base,
            output: None,
            force,
            ignore_patterns: None,
        }
    }

    #[test]
    fn test_writes_front_matter_file_per_rule() {
        let dir = tempdir().unwrap();
        render(&sample(), &ctx(dir.path(), false)).unwrap();

        let file = dir.path().join(".cursor/rules/General-Coding-Rules.mdc");
        let text = fs::read_to_string(file).unwrap();
        assert!(text.starts_with("---\n"));
        assert!(text.contains("description: These are general coding rules"));
        assert!(text.contains("alwaysApply: true"));
        assert!(text.contains("*.js,*.ts"));
        assert!(text.ends_with("---\nUse early returns whenever possible.\n"));
    }

    #[test]
    fn test_globs_absent_omits_key_but_keeps_flag() {
        let dir = tempdir().unwrap();
        let mut set = sample();
        set.rules[0].globs = None;
        render(&set, &ctx(dir.path(), false)).unwrap();

        let text =
            fs::read_to_string(dir.path().join(".cursor/rules/General-Coding-Rules.mdc")).unwrap();
        assert!(!text.contains("globs"));
        assert!(text.contains("alwaysApply: true"));
    }

    #[test]
    fn test_existing_dir_without_force_is_fatal() {
        let dir = tempdir().unwrap();
        render(&sample(), &ctx(dir.path(), false)).unwrap();
        let err = render(&sample(), &ctx(dir.path(), false)).unwrap_err();
        assert!(matches!(err, Error::OutputExists { .. }));
    }

    #[test]
    fn test_force_replaces_without_residue() {
        let dir = tempdir().unwrap();
        render(&sample(), &ctx(dir.path(), false)).unwrap();
        // Drop a stray file into the output to prove regeneration clears it.
        fs::write(dir.path().join(".cursor/rules/stale.mdc"), "old").unwrap();

        render(&sample(), &ctx(dir.path(), true)).unwrap();
        assert!(!dir.path().join(".cursor/rules/stale.mdc").exists());
        assert!(dir
            .path()
            .join(".cursor/rules/General-Coding-Rules.mdc")
            .exists());
    }

    #[test]
    fn test_ignore_payload_lands_in_cursorignore() {
        let dir = tempdir().unwrap();
        let patterns = vec!["node_modules/".to_string(), "dist/".to_string()];
        let ctx = RenderContext {
            base: dir.path(),
            output: None,
            force: false,
            ignore_patterns: Some(&patterns),
        };
        render(&sample(), &ctx).unwrap();
        let text = fs::read_to_string(dir.path().join(".cursorignore")).unwrap();
        assert_eq!(text, "node_modules/\ndist/");
    }
}
