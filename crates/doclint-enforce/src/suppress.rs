use std::collections::HashSet;

use crate::types::{Failure, Severity};

/// Manages suppressed lint IDs.
///
/// When a lint ID is suppressed, failures with that ID are:
/// - Changed to severity INFO and marked suppressed=true
/// - Given a suppress_hint explaining the suppression
#[derive(Debug, Default)]
pub struct SuppressionManager {
    suppressed_ids: HashSet<String>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lint ID to suppress. IDs are matched case-insensitively.
    pub fn suppress(&mut self, lint_id: &str) {
        self.suppressed_ids.insert(lint_id.to_ascii_uppercase());
    }

    pub fn is_suppressed(&self, lint_id: &str) -> bool {
        self.suppressed_ids.contains(&lint_id.to_ascii_uppercase())
    }

    /// Apply suppression to a failure, returning the modified failure.
    /// If the ID is not suppressed, returns the failure unchanged.
    pub fn apply(&self, mut failure: Failure) -> Failure {
        if self.is_suppressed(&failure.lint_id) {
            failure.suppress_hint = Some(format!("Suppressed {} via configuration", failure.lint_id));
            failure.suppressed = true;
            failure.severity = Severity::Info;
        }
        failure
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_ids.len()
    }
}
