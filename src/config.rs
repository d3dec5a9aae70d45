//! Configuration discovery and effective settings resolution.
//!
//! rulecast reads `rulecast.toml|yaml|yml` from the base directory and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `input`: `rules.yaml` (applied downstream by the orchestrator so
//!   the missing-file diagnostic knows whether the default was asked for)
//! - `scope`: empty (no filtering)
//! - `force`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rulecast.toml|yaml|yml`.
pub struct RulecastConfig {
    pub format: Option<String>,
    pub input: Option<String>,
    #[serde(default)]
    pub scope: Option<Vec<String>>,
    pub force: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the orchestrator after
/// applying precedence.
pub struct Effective {
    pub base_dir: PathBuf,
    pub format: Option<String>,
    pub input: Option<String>,
    pub scopes: Vec<String>,
    pub output: Option<PathBuf>,
    pub force: bool,
}

/// Load `RulecastConfig` from `rulecast.toml` or `rulecast.yaml|yml`
/// in `root`, if present.
pub fn load_config(root: &Path) -> Option<RulecastConfig> {
    let toml_path = root.join("rulecast.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: RulecastConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["rulecast.yaml", "rulecast.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: RulecastConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and
/// defaults.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_format: Option<&str>,
    cli_input: Option<&str>,
    cli_scopes: &[String],
    cli_force: bool,
    cli_output: Option<&Path>,
) -> Effective {
    let base_dir = PathBuf::from(cli_dir.unwrap_or("."));
    let cfg = load_config(&base_dir).unwrap_or_default();

    let format = cli_format.map(str::to_string).or(cfg.format);
    let input = cli_input.map(str::to_string).or(cfg.input);
    let scopes = if !cli_scopes.is_empty() {
        cli_scopes.to_vec()
    } else {
        cfg.scope.unwrap_or_default()
    };
    let force = cli_force || cfg.force.unwrap_or(false);

    Effective {
        base_dir,
        format,
        input,
        scopes,
        output: cli_output.map(Path::to_path_buf),
        force,
    }
}
