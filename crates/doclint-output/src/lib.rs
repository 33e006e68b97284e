//! Output formatters for doclint command results.
//!
//! Provides two output modes:
//! - **Human** (default): `file:line:column` diagnostics for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use doclint_enforce::types::{LintResult, RuleInfo};

pub trait OutputFormatter {
    fn format_lint(&self, result: &LintResult) -> String;
    fn format_rules(&self, rules: &[RuleInfo]) -> String;
}
