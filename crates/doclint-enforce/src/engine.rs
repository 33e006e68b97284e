use doclint_core::config::LintConfig;
use doclint_core::types::{FileDescriptor, LintError};
use rayon::prelude::*;

use crate::linter::{self, CheckOptions, Linter};
use crate::suppress::SuppressionManager;
use crate::types::{Failure, LintInfo, LintResult, Severity};

/// Core lint engine. Runs the selected linters over each file independently.
#[derive(Debug)]
pub struct LintEngine {
    pub(crate) linters: Vec<&'static Linter>,
    pub(crate) disabled: Vec<String>,
    pub(crate) options: CheckOptions,
    pub(crate) warn: Vec<String>,
    pub(crate) suppressions: SuppressionManager,
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine {
    /// An engine running every registered linter with default options.
    pub fn new() -> Self {
        Self {
            linters: linter::all_linters().iter().collect(),
            disabled: Vec::new(),
            options: CheckOptions::default(),
            warn: Vec::new(),
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create an engine configured from a `LintConfig`.
    pub fn with_config(config: &LintConfig) -> Result<Self, LintError> {
        let mut engine = Self {
            linters: linter::select_linters(&config.rules.disabled)?,
            disabled: config.rules.disabled.clone(),
            options: CheckOptions::from_config(config),
            warn: Vec::new(),
            suppressions: SuppressionManager::new(),
        };
        for id in &config.rules.warn {
            engine.warn(id)?;
        }
        for id in &config.rules.suppress {
            engine.suppress(id)?;
        }
        Ok(engine)
    }

    /// Stop running `lint_id`.
    pub fn disable(&mut self, lint_id: &str) -> Result<(), LintError> {
        let found = linter::find_linter(lint_id)
            .ok_or_else(|| LintError::UnknownLintId(lint_id.to_string()))?;
        self.linters.retain(|l| l.id() != found.id());
        if !self.disabled.iter().any(|d| d.eq_ignore_ascii_case(found.id())) {
            self.disabled.push(found.id().to_string());
        }
        Ok(())
    }

    /// Report failures of `lint_id` as WARNING instead of ERROR.
    pub fn warn(&mut self, lint_id: &str) -> Result<(), LintError> {
        let found = linter::find_linter(lint_id)
            .ok_or_else(|| LintError::UnknownLintId(lint_id.to_string()))?;
        if !self.warn.iter().any(|w| w == found.id()) {
            self.warn.push(found.id().to_string());
        }
        Ok(())
    }

    /// Report failures of `lint_id` as suppressed INFO entries.
    pub fn suppress(&mut self, lint_id: &str) -> Result<(), LintError> {
        let found = linter::find_linter(lint_id)
            .ok_or_else(|| LintError::UnknownLintId(lint_id.to_string()))?;
        self.suppressions.suppress(found.id());
        Ok(())
    }

    pub fn linter_ids(&self) -> Vec<String> {
        self.linters.iter().map(|l| l.id().to_string()).collect()
    }

    /// Lint a set of files. Files are processed in parallel; the result is
    /// sorted by file, position, and lint ID.
    pub fn lint(&self, files: &[FileDescriptor]) -> Result<LintResult, LintError> {
        let per_file: Vec<Vec<Failure>> = files
            .par_iter()
            .map(|file| self.lint_file(file))
            .collect::<Result<_, _>>()?;

        let mut failures: Vec<Failure> = per_file
            .into_iter()
            .flatten()
            .map(|f| self.suppressions.apply(self.apply_severity(f)))
            .collect();
        failures.sort_by(|a, b| {
            (&a.file, a.line, a.column, &a.lint_id, &a.message)
                .cmp(&(&b.file, b.line, b.column, &b.lint_id, &b.message))
        });

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suppressed = Vec::new();
        Self::partition_failures(failures, &mut errors, &mut warnings, &mut suppressed);

        let status = if !errors.is_empty() {
            "error"
        } else if !warnings.is_empty() {
            "warning"
        } else {
            "ok"
        };

        Ok(LintResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "lint".to_string(),
            status: status.to_string(),
            files_analyzed: files.iter().map(|f| f.path.clone()).collect(),
            errors,
            warnings,
            suppressed,
            info: LintInfo {
                linters_run: self.linter_ids(),
                linters_disabled: self.disabled.clone(),
            },
        })
    }

    /// Run every selected linter over one file, collecting its failures.
    pub fn lint_file(&self, file: &FileDescriptor) -> Result<Vec<Failure>, LintError> {
        let mut failures = Vec::new();
        for linter in &self.linters {
            linter.check(
                &mut |f| failures.push(f),
                std::slice::from_ref(file),
                &self.options,
            )?;
        }
        tracing::debug!(file = %file.path, failures = failures.len(), "linted file");
        Ok(failures)
    }

    // -- Private helpers --

    fn apply_severity(&self, mut failure: Failure) -> Failure {
        if self.warn.iter().any(|w| *w == failure.lint_id) {
            failure.severity = Severity::Warning;
        }
        failure
    }

    pub(crate) fn partition_failures(
        failures: Vec<Failure>,
        errors: &mut Vec<Failure>,
        warnings: &mut Vec<Failure>,
        suppressed: &mut Vec<Failure>,
    ) {
        for f in failures {
            match f.severity {
                Severity::Error => errors.push(f),
                Severity::Warning => warnings.push(f),
                Severity::Info => suppressed.push(f),
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
