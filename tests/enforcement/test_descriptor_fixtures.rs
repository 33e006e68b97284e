// Tests that run the rule over checked-in descriptor fixtures.

use doclint_core::descriptor::discover_descriptors;
use doclint_core::types::FileDescriptor;
use doclint_enforce::engine::LintEngine;

use super::common::fixture;

fn lint_fixture(name: &str) -> doclint_enforce::types::LintResult {
    let file = FileDescriptor::load(&fixture(name)).unwrap();
    LintEngine::new().lint(&[file]).unwrap()
}

#[test]
fn test_foo_fixture() {
    let result = lint_fixture("descriptors/foo.json");
    assert_eq!(result.errors.len(), 1);
    let f = &result.errors[0];
    assert_eq!(f.file, "foo/v1/foo.proto");
    assert!(f.message.contains("\"Foo.Bar\""));
    assert_eq!((f.line, f.column), (8, 3));
}

#[test]
fn test_service_fixture() {
    let result = lint_fixture("descriptors/service.json");
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("\"Inner\""));
    assert_eq!(result.errors[0].line, 9);
}

#[test]
fn test_clean_fixture() {
    let result = lint_fixture("clean/clean.json");
    assert_eq!(result.status, "ok");
}

#[test]
fn test_discover_fixture_directory() {
    let paths = discover_descriptors(&[fixture("descriptors")]).unwrap();
    assert_eq!(paths.len(), 2);
    let files: Vec<FileDescriptor> = paths
        .iter()
        .map(|p| FileDescriptor::load(p).unwrap())
        .collect();
    let result = LintEngine::new().lint(&files).unwrap();
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].file, "foo/v1/foo.proto");
    assert_eq!(result.errors[1].file, "foo/v1/foo_api.proto");
}
