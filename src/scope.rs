//! Case-insensitive scope filtering.
//!
//! Filtering never reorders; it only removes entries whose scope list
//! shares no tag with the requested set under ASCII case folding. An
//! empty request keeps everything, including rules with no scope.

use crate::models::{IgnoreRule, Rule};

/// Filter canonical rules by the requested scope tags.
pub fn filter_rules(rules: Vec<Rule>, requested: &[String]) -> Vec<Rule> {
    if requested.is_empty() {
        return rules;
    }
    rules
        .into_iter()
        .filter(|rule| tags_match(rule.scope.as_deref(), requested))
        .collect()
}

/// Filter structured ignore entries the same way rules are filtered.
pub fn filter_ignore_rules(entries: Vec<IgnoreRule>, requested: &[String]) -> Vec<IgnoreRule> {
    if requested.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| tags_match(entry.scope.as_deref(), requested))
        .collect()
}

/// True when `scope` is present and shares at least one tag with
/// `requested`, comparing with ASCII case folding.
fn tags_match(scope: Option<&[String]>, requested: &[String]) -> bool {
    scope.is_some_and(|tags| {
        tags.iter()
            .any(|tag| requested.iter().any(|want| tag.eq_ignore_ascii_case(want)))
    })
}
