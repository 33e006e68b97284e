use std::path::{Path, PathBuf};

use doclint_core::config::LintConfig;
use doclint_core::descriptor::discover_descriptors;
use doclint_core::types::{FileDescriptor, LintError};
use doclint_enforce::engine::LintEngine;
use doclint_enforce::types::LintResult;
use doclint_output::OutputFormatter;

/// Per-invocation rule overrides, applied on top of `doclint.json`.
#[derive(Debug, Default)]
pub struct RuleFlags {
    pub disable: Vec<String>,
    pub suppress: Vec<String>,
    pub warn: Vec<String>,
}

/// Run `doclint lint <paths...>`: lint parsed-file descriptors.
pub fn run(
    formatter: &dyn OutputFormatter,
    config_dir: &Path,
    paths: Vec<PathBuf>,
    flags: RuleFlags,
    strict: bool,
) -> i32 {
    let config = LintConfig::load(config_dir);

    let engine = match build_engine(&config, &flags) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("doclint lint: {}", e);
            return 2;
        }
    };

    let files = match load_descriptors(&paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("doclint lint: {}", e);
            return 2;
        }
    };
    tracing::info!(files = files.len(), linters = ?engine.linter_ids(), "linting");

    let result = match engine.lint(&files) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("doclint lint: {}", e);
            return 2;
        }
    };

    output_result(formatter, &result, strict)
}

fn build_engine(config: &LintConfig, flags: &RuleFlags) -> Result<LintEngine, LintError> {
    let mut engine = LintEngine::with_config(config)?;
    for id in &flags.disable {
        engine.disable(id)?;
    }
    for id in &flags.warn {
        engine.warn(id)?;
    }
    for id in &flags.suppress {
        engine.suppress(id)?;
    }
    Ok(engine)
}

fn load_descriptors(paths: &[PathBuf]) -> Result<Vec<FileDescriptor>, LintError> {
    discover_descriptors(paths)?
        .iter()
        .map(|p| FileDescriptor::load(p))
        .collect()
}

fn output_result(formatter: &dyn OutputFormatter, result: &LintResult, strict: bool) -> i32 {
    // Clean lint = empty stdout, exit 0
    let has_errors = !result.errors.is_empty();
    let has_warnings = !result.warnings.is_empty();

    if !has_errors && !has_warnings && result.suppressed.is_empty() {
        tracing::info!(files = result.files_analyzed.len(), "clean, no failures");
        return 0;
    }

    let output = formatter.format_lint(result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if has_errors || (strict && has_warnings) {
        1
    } else {
        0
    }
}
