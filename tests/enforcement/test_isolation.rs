// Tests for per-file isolation and repeatability of lint runs.

use doclint_enforce::engine::LintEngine;

use super::common::{descriptor, message};

#[test]
/// Two files declaring the same name never share a registry.
fn test_files_do_not_share_registries() {
    let documented = descriptor(
        "a.proto",
        vec![message("Shared", Some("// Shared is documented."), 1, vec![])],
    );
    let undocumented = descriptor("b.proto", vec![message("Shared", None, 1, vec![])]);

    let result = LintEngine::new()
        .lint(&[documented.clone(), undocumented.clone()])
        .unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].file, "b.proto");

    // Order of files must not matter.
    let reversed = LintEngine::new().lint(&[undocumented, documented]).unwrap();
    assert_eq!(result.errors, reversed.errors);
}

#[test]
/// Running the same engine twice yields identical failures.
fn test_rerun_is_idempotent() {
    let files = vec![
        descriptor(
            "x.proto",
            vec![message("X", None, 1, vec![message("Y", None, 2, vec![])])],
        ),
        descriptor("z.proto", vec![message("Z", Some("nope"), 1, vec![])]),
    ];
    let engine = LintEngine::new();
    let first = engine.lint(&files).unwrap();
    let second = engine.lint(&files).unwrap();
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.errors.len(), 3);
}

#[test]
/// Many files linted in parallel still produce sorted, complete output.
fn test_many_files_sorted() {
    let files: Vec<_> = (0..64)
        .rev()
        .map(|i| descriptor(&format!("f{:02}.proto", i), vec![message("M", None, 1, vec![])]))
        .collect();
    let result = LintEngine::new().lint(&files).unwrap();
    assert_eq!(result.errors.len(), 64);
    let paths: Vec<&str> = result.errors.iter().map(|f| f.file.as_str()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}
