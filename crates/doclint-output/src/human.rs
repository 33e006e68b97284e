use crate::human_helpers::format_failure_human;
use crate::OutputFormatter;
use doclint_enforce::types::{LintResult, RuleInfo};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() && result.suppressed.is_empty() {
            return String::new(); // Clean lint = empty stdout
        }

        let mut out = String::new();

        for f in result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.suppressed)
        {
            out.push_str(&format_failure_human(f));
        }

        // Summary line
        if result.suppressed.is_empty() {
            out.push_str(&format!(
                "\n{} error(s), {} warning(s) in {} file(s)\n",
                result.errors.len(),
                result.warnings.len(),
                result.files_analyzed.len(),
            ));
        } else {
            out.push_str(&format!(
                "\n{} error(s), {} warning(s), {} suppressed in {} file(s)\n",
                result.errors.len(),
                result.warnings.len(),
                result.suppressed.len(),
                result.files_analyzed.len(),
            ));
        }

        out
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
        let mut out = String::new();
        for r in rules {
            let marker = if r.enabled { "" } else { " (disabled)" };
            out.push_str(&format!("{:<width$}  {}{}\n", r.id, r.purpose, marker, width = width));
        }
        out
    }
}
