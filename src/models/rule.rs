//! Canonical rule model consumed by every renderer.

use serde::{Deserialize, Serialize};

/// One unit of guidance delivered to a downstream assistant tool.
///
/// `name` doubles as the source for output file names in directory
/// renderers. Optional fields that are absent in the source stay
/// absent in serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globs: Option<Globs>,
    #[serde(default)]
    pub content: String,
}

/// File-matching configuration attached to a rule.
///
/// Source documents may write this as a sequence of patterns, a single
/// pattern string, or an `{alwaysApply: bool}` mapping. The variant is
/// fixed here at ingestion so renderers never inspect raw YAML shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Globs {
    Patterns(Vec<String>),
    Single(String),
    AlwaysApply {
        #[serde(rename = "alwaysApply")]
        always_apply: bool,
    },
}

impl Globs {
    /// Comma-joined pattern string for front-matter style renderers.
    /// The flag variant carries no patterns and yields nothing.
    pub fn as_front_matter(&self) -> Option<String> {
        match self {
            Globs::Patterns(list) => Some(list.join(",")),
            Globs::Single(pattern) => Some(pattern.clone()),
            Globs::AlwaysApply { .. } => None,
        }
    }

    /// Pattern sequence for renderers that keep globs structured.
    pub fn as_patterns(&self) -> Option<Vec<String>> {
        match self {
            Globs::Patterns(list) => Some(list.clone()),
            Globs::Single(pattern) => Some(vec![pattern.clone()]),
            Globs::AlwaysApply { .. } => None,
        }
    }
}

/// Ordered collection of rules for one run. Insertion order is
/// preserved from the source document and is renderer-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}
