// Tests for MESSAGES_HAVE_SENTENCE_COMMENTS reporting.

use doclint_enforce::engine::LintEngine;
use doclint_enforce::messages::LINT_ID;
use doclint_enforce::sentence::has_complete_sentence;

use super::common::{descriptor, extension, message};

#[test]
/// The canonical nested case: only the uncommented inner message fails.
fn test_nested_message_without_comment() {
    let file = descriptor(
        "foo.proto",
        vec![message(
            "Foo",
            Some("Foo does X."),
            1,
            vec![message("Bar", None, 2, vec![])],
        )],
    );
    let result = LintEngine::new().lint(&[file]).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Message \"Foo.Bar\" needs a comment with a complete sentence that starts on the first line of the comment."
    );
    assert_eq!(result.errors[0].lint_id, LINT_ID);
    assert_eq!(result.errors[0].line, 2);
}

#[test]
/// Extensions are skipped whatever their comment says.
fn test_extensions_skipped() {
    let file = descriptor(
        "ext.proto",
        vec![
            extension("google.protobuf.FieldOptions", None, 1),
            extension("google.protobuf.MessageOptions", Some("lowercase"), 5),
            extension("google.protobuf.FileOptions", Some(""), 9),
        ],
    );
    let result = LintEngine::new().lint(&[file]).unwrap();
    assert_eq!(result.status, "ok");
}

#[test]
/// Empty and missing comments always fail for regular messages.
fn test_empty_comment_fails() {
    let file = descriptor(
        "a.proto",
        vec![message("Empty", Some(""), 1, vec![]), message("Missing", None, 3, vec![])],
    );
    let result = LintEngine::new().lint(&[file]).unwrap();
    assert_eq!(result.errors.len(), 2);
}

#[test]
/// A sentence that only starts on the second line does not count.
fn test_sentence_must_start_on_first_line() {
    let file = descriptor(
        "a.proto",
        vec![message("Late", Some("// \n// Late does X."), 1, vec![])],
    );
    let result = LintEngine::new().lint(&[file]).unwrap();
    assert_eq!(result.errors.len(), 1);
}

#[test]
/// Trailing lines after a first-line sentence are irrelevant.
fn test_trailing_lines_ignored() {
    let file = descriptor(
        "a.proto",
        vec![message(
            "Good",
            Some("// Good does X.\n// see also: bar\n// TODO"),
            1,
            vec![],
        )],
    );
    let result = LintEngine::new().lint(&[file]).unwrap();
    assert_eq!(result.status, "ok");
}

#[test]
/// The predicate examples from the rule's contract.
fn test_predicate_contract() {
    assert!(has_complete_sentence("This is a sentence."));
    assert!(!has_complete_sentence("todo"));
    assert!(has_complete_sentence("Fix. \nmore text"));
    assert!(!has_complete_sentence("lowercase start."));
}
