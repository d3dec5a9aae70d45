//! Root document shapes accepted from source YAML.

use serde::Deserialize;

use crate::models::RuleSet;

/// Parsed source document, tagged by its root key. The tag is fixed at
/// load time; downstream code never re-inspects the raw tree.
#[derive(Debug)]
pub enum Document {
    Rules(RuleSet),
    Ignore(IgnoreDocument),
}

/// The `ignore_rules:` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreDocument {
    pub ignore_rules: Vec<IgnoreRule>,
}

/// One ignore entry. Metadata fields tolerate absence; only `content`
/// carries the patterns themselves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgnoreRule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scope: Option<Vec<String>>,
    #[serde(default)]
    pub content: Option<IgnoreContent>,
}

/// Ignore entry content: a sequence of pattern lines or one text blob.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IgnoreContent {
    Lines(Vec<String>),
    Text(String),
}

impl IgnoreContent {
    /// Join for the rule projection: lines joined with newline, text
    /// passed through unchanged.
    pub fn joined(&self) -> String {
        match self {
            IgnoreContent::Lines(lines) => lines.join("\n"),
            IgnoreContent::Text(text) => text.clone(),
        }
    }

    /// Flatten into pattern lines, dropping empty ones. A text blob
    /// stays one pattern.
    pub fn pattern_lines(&self) -> Vec<String> {
        match self {
            IgnoreContent::Lines(lines) => {
                lines.iter().filter(|l| !l.is_empty()).cloned().collect()
            }
            IgnoreContent::Text(text) => {
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.clone()]
                }
            }
        }
    }
}

/// A sibling `ignore.yaml` document found next to a rules file.
#[derive(Debug)]
pub enum SiblingIgnore {
    /// The structured `ignore_rules` shape, scope-filterable.
    Structured(Vec<IgnoreRule>),
    /// The legacy flat pattern list, used verbatim.
    Legacy(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_joined() {
        let lines = IgnoreContent::Lines(vec!["node_modules/".into(), "dist/".into()]);
        assert_eq!(lines.joined(), "node_modules/\ndist/");

        let text = IgnoreContent::Text("build/".into());
        assert_eq!(text.joined(), "build/");
    }

    #[test]
    fn test_pattern_lines_drop_empties() {
        let lines = IgnoreContent::Lines(vec!["a".into(), "".into(), "b".into()]);
        assert_eq!(lines.pattern_lines(), vec!["a".to_string(), "b".to_string()]);

        let empty = IgnoreContent::Text(String::new());
        assert!(empty.pattern_lines().is_empty());
    }
}
