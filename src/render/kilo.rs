//! Kilo Code target: one plain markdown file per rule under
//! `.kilocode/rules`.

use super::{emit_ignore_file, sanitize_name, Format, RenderContext};
use crate::error::{Error, TargetKind};
use crate::models::RuleSet;
use crate::output;

pub const DEFAULT_OUTPUT: &str = ".kilocode/rules";

pub fn render(rules: &RuleSet, ctx: &RenderContext) -> Result<(), Error> {
    let out_dir = ctx.target(DEFAULT_OUTPUT);
    super::ensure_clear(&out_dir, ctx.force, TargetKind::Directory)?;
    super::create_dir(&out_dir)?;

    if let Some(patterns) = ctx.ignore_patterns {
        emit_ignore_file(Format::Kilo, patterns, ctx)?;
    }

    for rule in &rules.rules {
        let mut body = format!("# {}\n\n", rule.name);
        if let Some(desc) = &rule.description {
            body.push_str(&format!("**Description:** {}\n\n", desc));
        }
        body.push_str(&format!("{}\n", rule.content));
        let file = out_dir.join(format!("{}.md", sanitize_name(&rule.name)));
        super::write_file(&file, &body)?;
    }

    output::success(&format!(
        "Successfully created Kilo Code rules in {}",
        output::display_path(&out_dir)
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
    fn test_one_markdown_file_per_rule() {
        let dir = tempdir().unwrap();
        let rules = RuleSet {
            rules: vec![
                Rule {
                    name: "Naming Things".into(),
                    description: Some("Choose names carefully".into()),
                    scope: None,
                    globs: None,
                    content: "Prefer intent-revealing names.".into(),
                },
                Rule {
                    name: "Bare".into(),
                    description: None,
                    scope: None,
                    globs: None,
                    content: "No description here.".into(),
                },
            ],
        };
        let ctx = RenderContext {
            base: dir.path(),
            output: None,
            force: false,
            ignore_patterns: None,
        };
        render(&rules, &ctx).unwrap();

        let first =
            fs::read_to_string(dir.path().join(".kilocode/rules/Naming-Things.md")).unwrap();
        assert_eq!(
            first,
            "# Naming Things\n\n**Description:** Choose names carefully\n\nPrefer intent-revealing names.\n"
        );
        let second = fs::read_to_string(dir.path().join(".kilocode/rules/Bare.md")).unwrap();
        assert_eq!(second, "# Bare\n\nNo description here.\n");
    }
}
