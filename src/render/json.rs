//! Console JSON target: pretty-printed dump of the post-filter
//! canonical document. Writes nothing to disk.

use super::RenderContext;
use crate::error::Error;
use crate::models::RuleSet;

/// Compose the JSON payload. Pure so tests can assert the round trip;
/// the dispatch wrapper prints it.
pub fn compose(rules: &RuleSet) -> String {
    serde_json::to_string_pretty(rules).unwrap()
}

pub fn render(rules: &RuleSet, _ctx: &RenderContext) -> Result<(), Error> {
    println!("{}", compose(rules));
    Ok(())
}
