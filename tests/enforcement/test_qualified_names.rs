// Tests for qualified-name reconstruction during traversal.

use doclint_enforce::walk::collect_messages;

use super::common::{message, service};

fn names(elements: &[doclint_core::types::Element]) -> Vec<String> {
    collect_messages(elements).names().map(str::to_string).collect()
}

#[test]
fn test_three_levels() {
    let elements = vec![message(
        "Outer",
        None,
        1,
        vec![message("Middle", None, 2, vec![message("Leaf", None, 3, vec![])])],
    )];
    assert!(names(&elements).contains(&"Outer.Middle.Leaf".to_string()));
}

#[test]
fn test_top_level() {
    assert_eq!(names(&[message("Top", None, 1, vec![])]), vec!["Top"]);
}

#[test]
fn test_service_nested_message_bare_name() {
    let elements = vec![service("FooAPI", 1, vec![message("Inner", None, 2, vec![])])];
    assert_eq!(names(&elements), vec!["Inner"]);
}

#[test]
fn test_service_inside_message_keeps_enclosing_prefix() {
    // Not valid protobuf, but the traversal qualifies relative to the
    // surrounding message nesting.
    let elements = vec![message(
        "Outer",
        None,
        1,
        vec![service("Svc", 2, vec![message("Inner", None, 3, vec![])])],
    )];
    assert_eq!(names(&elements), vec!["Outer", "Outer.Inner"]);
}

#[test]
fn test_same_local_name_different_parents() {
    let elements = vec![
        message("A", None, 1, vec![message("Item", None, 2, vec![])]),
        message("B", None, 5, vec![message("Item", None, 6, vec![])]),
    ];
    assert_eq!(names(&elements), vec!["A", "A.Item", "B", "B.Item"]);
}
