use crate::OutputFormatter;
use doclint_enforce::types::{LintResult, RuleInfo};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        serde_json::to_string_pretty(rules).unwrap_or_default()
    }
}
