//! Source document loading and root-shape validation.
//!
//! A valid document has exactly one of the two recognized root keys
//! (`rules` or `ignore_rules`) with a non-null value. Everything else,
//! including a non-mapping root, fails validation with one canonical
//! message.

use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::models::{Document, IgnoreDocument, RuleSet};

/// Canonical root-shape violation message.
pub const SCHEMA_MESSAGE: &str =
    "The YAML file must have a root element named \"rules\" or \"ignore_rules\".";

/// Read `path` as UTF-8 and parse it into a tagged `Document`.
pub fn load(path: &Path) -> Result<Document, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::Io {
        context: format!("failed to read '{}'", path.display()),
        source: e,
    })?;
    parse(&text)
}

/// Parse YAML text into a `Document`. Split from `load` so validation
/// is testable without touching the file system.
pub fn parse(text: &str) -> Result<Document, Error> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| Error::Parse {
        message: e.to_string(),
    })?;

    let root = match value.as_mapping() {
        Some(mapping) => mapping,
        None => return Err(schema_error()),
    };
    let has_rules = key_present(root, "rules");
    let has_ignore = key_present(root, "ignore_rules");

    match (has_rules, has_ignore) {
        (true, false) => {
            let doc: RuleSet = serde_yaml::from_value(value).map_err(|e| Error::Schema {
                message: e.to_string(),
            })?;
            for rule in &doc.rules {
                if rule.name.trim().is_empty() {
                    return Err(Error::Schema {
                        message: "rule entries must have a non-empty 'name'".to_string(),
                    });
                }
            }
            Ok(Document::Rules(doc))
        }
        (false, true) => {
            let doc: IgnoreDocument = serde_yaml::from_value(value).map_err(|e| Error::Schema {
                message: e.to_string(),
            })?;
            Ok(Document::Ignore(doc))
        }
        _ => Err(schema_error()),
    }
}

fn key_present(root: &serde_yaml::Mapping, key: &str) -> bool {
    root.get(Value::from(key)).is_some_and(|v| !v.is_null())
}

fn schema_error() -> Error {
    Error::Schema {
        message: SCHEMA_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Globs, IgnoreContent};

    #[test]
    fn test_parse_rules_document() {
        let doc = parse(
            r#"
rules:
  - name: General Coding Rules
    description: These are general coding rules
    scope: [javascript, typescript]
    globs: ["*.js", "*.ts"]
    content: Use early returns.
"#,
        )
        .unwrap();
        let Document::Rules(set) = doc else {
            panic!("expected rules shape");
        };
        assert_eq!(set.rules.len(), 1);
        let rule = &set.rules[0];
        assert_eq!(rule.name, "General Coding Rules");
        assert_eq!(
            rule.globs,
            Some(Globs::Patterns(vec!["*.js".into(), "*.ts".into()]))
        );
    }

    #[test]
    fn test_parse_ignore_document() {
        let doc = parse(
            r#"
ignore_rules:
  - name: Node
    scope: [javascript]
    content:
      - node_modules/
      - dist/
"#,
        )
        .unwrap();
        let Document::Ignore(ignore) = doc else {
            panic!("expected ignore shape");
        };
        assert_eq!(ignore.ignore_rules.len(), 1);
        assert_eq!(
            ignore.ignore_rules[0].content,
            Some(IgnoreContent::Lines(vec![
                "node_modules/".into(),
                "dist/".into()
            ]))
        );
    }

    #[test]
    fn test_reject_missing_root_keys() {
        let err = parse("invalid_structure: true").unwrap_err();
        match err {
            Error::Schema { message } => assert_eq!(message, SCHEMA_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reject_both_root_keys() {
        let err = parse(
            r#"
rules:
  - name: a
    content: x
ignore_rules:
  - name: b
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_reject_null_rules_key() {
        let err = parse("rules:\n").unwrap_err();
        match err {
            Error::Schema { message } => assert_eq!(message, SCHEMA_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reject_non_mapping_root() {
        let err = parse("- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_reject_invalid_yaml() {
        let err = parse("rules: [a, b").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_reject_empty_rule_name() {
        let err = parse(
            r#"
rules:
  - name: "  "
    content: x
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }
}
