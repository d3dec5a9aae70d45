//! Data models for rules, source documents, and ignore payloads.

pub mod document;
pub mod rule;

pub use document::{Document, IgnoreContent, IgnoreDocument, IgnoreRule, SiblingIgnore};
pub use rule::{Globs, Rule, RuleSet};
