//! Static registration of every linter doclint knows about.

use doclint_core::config::LintConfig;
use doclint_core::types::{FileDescriptor, LintError};

use crate::sentence::DEFAULT_MIN_WORDS;
use crate::types::{Failure, RuleInfo};

/// Settings a check may consult. Built from [`LintConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub min_words: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl CheckOptions {
    pub fn from_config(config: &LintConfig) -> Self {
        Self {
            min_words: config.sentence.min_words,
        }
    }
}

/// Signature every check implements: report failures through `add`.
///
/// The `Err` path is for unexpected problems while walking the files; lint
/// findings always go through `add`.
pub type CheckFn =
    fn(add: &mut dyn FnMut(Failure), files: &[FileDescriptor], options: &CheckOptions) -> Result<(), LintError>;

/// A named, documented check.
#[derive(Clone, Copy)]
pub struct Linter {
    id: &'static str,
    purpose: &'static str,
    check: CheckFn,
}

impl Linter {
    pub const fn new(id: &'static str, purpose: &'static str, check: CheckFn) -> Self {
        Self { id, purpose, check }
    }

    /// Uppercase ID used to select or suppress the linter.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// One-line description shown by `doclint rules`.
    pub fn purpose(&self) -> &'static str {
        self.purpose
    }

    pub fn check(
        &self,
        add: &mut dyn FnMut(Failure),
        files: &[FileDescriptor],
        options: &CheckOptions,
    ) -> Result<(), LintError> {
        (self.check)(add, files, options)
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter").field("id", &self.id).finish_non_exhaustive()
    }
}

static LINTERS: [Linter; 1] = [crate::messages::LINTER];

/// Every registered linter, in ID order.
pub fn all_linters() -> &'static [Linter] {
    &LINTERS
}

pub fn find_linter(id: &str) -> Option<&'static Linter> {
    LINTERS.iter().find(|l| l.id.eq_ignore_ascii_case(id))
}

/// The linters left after removing `disabled`. Unknown IDs are an error.
pub fn select_linters(disabled: &[String]) -> Result<Vec<&'static Linter>, LintError> {
    for id in disabled {
        if find_linter(id).is_none() {
            return Err(LintError::UnknownLintId(id.clone()));
        }
    }
    Ok(LINTERS
        .iter()
        .filter(|l| !disabled.iter().any(|d| d.eq_ignore_ascii_case(l.id)))
        .collect())
}

/// Registration metadata for `doclint rules`.
pub fn rule_infos(disabled: &[String]) -> Vec<RuleInfo> {
    LINTERS
        .iter()
        .map(|l| RuleInfo {
            id: l.id.to_string(),
            purpose: l.purpose.to_string(),
            enabled: !disabled.iter().any(|d| d.eq_ignore_ascii_case(l.id)),
        })
        .collect()
}
