use std::path::Path;

use doclint_core::config::LintConfig;
use doclint_enforce::linter::rule_infos;
use doclint_output::OutputFormatter;

/// Run `doclint rules`: list registered linters and whether config disables them.
pub fn run(formatter: &dyn OutputFormatter, config_dir: &Path) -> i32 {
    let config = LintConfig::load(config_dir);
    let rules = rule_infos(&config.rules.disabled);
    print!("{}", formatter.format_rules(&rules));
    0
}
