//! MESSAGES_HAVE_SENTENCE_COMMENTS: every non-extension message needs a
//! leading comment with a complete sentence on its first line.

use doclint_core::types::{FileDescriptor, LintError};

use crate::linter::{CheckOptions, Linter};
use crate::sentence::has_complete_sentence_with;
use crate::types::Failure;
use crate::walk::{collect_messages, MessageRegistry};

pub const LINT_ID: &str = "MESSAGES_HAVE_SENTENCE_COMMENTS";

pub const LINTER: Linter = Linter::new(
    LINT_ID,
    "Verifies that all non-extended messages types have a comment that contains at least one complete sentence.",
    check_messages_have_sentence_comments,
);

/// Run the rule over each file independently.
pub fn check_messages_have_sentence_comments(
    add: &mut dyn FnMut(Failure),
    files: &[FileDescriptor],
    options: &CheckOptions,
) -> Result<(), LintError> {
    for file in files {
        let registry = collect_messages(&file.elements);
        tracing::debug!(file = %file.path, messages = registry.len(), "checking message comments");
        report_missing_sentences(&file.path, &registry, options.min_words, add);
    }
    Ok(())
}

/// Emit one failure per non-extension message in `registry` whose comment
/// lacks a first-line sentence. Returns how many were emitted.
pub fn report_missing_sentences(
    file_path: &str,
    registry: &MessageRegistry<'_>,
    min_words: usize,
    add: &mut dyn FnMut(Failure),
) -> usize {
    let mut emitted = 0;
    for (qualified_name, message) in registry.iter() {
        if message.is_extend {
            continue;
        }
        let comment = message.comment.as_deref().unwrap_or("");
        if has_complete_sentence_with(comment, min_words) {
            continue;
        }
        add(
            Failure::new(
                LINT_ID,
                file_path,
                message.position,
                format!(
                    "Message {:?} needs a comment with a complete sentence that starts on the first line of the comment.",
                    qualified_name
                ),
            )
            .with_fix_hint(format!(
                "Start the comment on `{}` with a sentence such as `// {} ...`",
                qualified_name, message.name
            )),
        );
        emitted += 1;
    }
    emitted
}
