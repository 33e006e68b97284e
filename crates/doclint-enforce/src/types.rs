use doclint_core::types::Position;
use serde::{Deserialize, Serialize};

/// How serious a failure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation. Built once by a check and handed to the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub lint_id: String,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

impl Failure {
    /// An ERROR-level failure at `position` in `file`.
    pub fn new(lint_id: &str, file: &str, position: Position, message: String) -> Self {
        Self {
            lint_id: lint_id.to_string(),
            severity: Severity::Error,
            message,
            file: file.to_string(),
            line: position.line,
            column: position.column,
            fix_hint: None,
            suppressed: false,
            suppress_hint: None,
        }
    }

    pub fn with_fix_hint(mut self, hint: String) -> Self {
        self.fix_hint = Some(hint);
        self
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Outcome of `doclint lint` over a set of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Failure>,
    pub warnings: Vec<Failure>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suppressed: Vec<Failure>,
    pub info: LintInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintInfo {
    pub linters_run: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub linters_disabled: Vec<String>,
}

/// Registration metadata for one linter, as listed by `doclint rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub purpose: String,
    pub enabled: bool,
}
