//! rulecast core library.
//!
//! One canonical rules model, several renderer back ends. A YAML rules
//! document (or an ignore-rules document) is loaded, validated,
//! normalized, optionally filtered by scope tags, and handed to exactly
//! one target renderer per run.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Failure taxonomy, mapped to exit codes at the binary edge.
//! - `loader`: YAML loading and root-shape validation.
//! - `models`: Rule, rule-set, and source-document shapes.
//! - `normalize`: Canonicalization and sibling ignore flattening.
//! - `output`: Console prefixes, success lines, path display.
//! - `render`: Per-target renderers and shared on-disk behaviors.
//! - `scope`: Case-insensitive scope filtering.
//! - `transform`: Orchestration of one end-to-end run.
//!
//! Note: All documentation comments are written in English by convention.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod output;
pub mod render;
pub mod scope;
pub mod transform;
