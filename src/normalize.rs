//! Canonicalization of parsed documents and sibling ignore handling.
//!
//! Two projections live here:
//! - the ignore-shaped root becomes a plain rule list (content lines
//!   joined with newlines), so renderers only ever see `RuleSet`;
//! - a sibling `ignore.yaml` next to a rules document is flattened
//!   into the ordered ignore-pattern payload handed to renderers.

use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::models::{Document, IgnoreRule, Rule, RuleSet, SiblingIgnore};
use crate::scope;

/// File name probed next to a rules document for ignore patterns.
pub const SIBLING_IGNORE: &str = "ignore.yaml";

/// Project any accepted root shape onto the canonical rule list.
pub fn canonicalize(doc: Document) -> RuleSet {
    match doc {
        Document::Rules(rules) => rules,
        Document::Ignore(ignore) => RuleSet {
            rules: ignore
                .ignore_rules
                .into_iter()
                .map(ignore_rule_to_rule)
                .collect(),
        },
    }
}

fn ignore_rule_to_rule(entry: IgnoreRule) -> Rule {
    Rule {
        name: entry.name,
        description: entry.description,
        scope: entry.scope,
        globs: None,
        content: entry.content.map(|c| c.joined()).unwrap_or_default(),
    }
}

/// Load the sibling `ignore.yaml` in `input_dir` (if any) and flatten
/// it into the ignore-pattern payload, honoring the run's scope set.
///
/// Missing, unparseable, or unrecognized sibling documents yield no
/// payload; the renderer then skips ignore-file emission.
pub fn sibling_ignore_patterns(input_dir: &Path, scopes: &[String]) -> Option<Vec<String>> {
    let path = input_dir.join(SIBLING_IGNORE);
    let text = fs::read_to_string(path).ok()?;
    parse_sibling(&text).map(|doc| flatten(doc, scopes))
}

/// Classify a sibling document: the structured `ignore_rules` shape or
/// the legacy flat pattern list.
pub fn parse_sibling(text: &str) -> Option<SiblingIgnore> {
    let value: Value = serde_yaml::from_str(text).ok()?;
    if let Some(map) = value.as_mapping() {
        let entries = map.get(Value::from("ignore_rules"))?;
        if entries.is_null() {
            return None;
        }
        let entries: Vec<IgnoreRule> = serde_yaml::from_value(entries.clone()).ok()?;
        return Some(SiblingIgnore::Structured(entries));
    }
    if value.is_sequence() {
        let patterns: Vec<String> = serde_yaml::from_value(value).ok()?;
        return Some(SiblingIgnore::Legacy(patterns));
    }
    None
}

/// Flatten surviving entries' content lines into one ordered pattern
/// list. Entry order is preserved, empty lines are dropped, duplicates
/// are kept. The legacy shape passes through verbatim.
pub fn flatten(doc: SiblingIgnore, scopes: &[String]) -> Vec<String> {
    match doc {
        SiblingIgnore::Legacy(patterns) => patterns,
        SiblingIgnore::Structured(entries) => {
            let mut patterns = Vec::new();
            for entry in scope::filter_ignore_rules(entries, scopes) {
                if let Some(content) = entry.content {
                    patterns.extend(content.pattern_lines());
                }
            }
            patterns
        }
    }
}
