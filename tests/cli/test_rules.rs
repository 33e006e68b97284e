// Tests for `doclint rules`.

use std::process::Command;

use super::common::{create_project, doclint_bin};

#[test]
fn test_rules_lists_sentence_rule() {
    let dir = create_project(&[]);
    let output = Command::new(doclint_bin())
        .arg("rules")
        .current_dir(dir.path())
        .output()
        .expect("Failed to run doclint rules");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MESSAGES_HAVE_SENTENCE_COMMENTS"));
    assert!(stdout.contains("Verifies that all non-extended messages types have a comment"));
    assert!(!stdout.contains("(disabled)"));
}

#[test]
fn test_rules_reflects_config() {
    let dir = create_project(&[(
        ".doclint/doclint.json",
        r#"{ "version": "0.1.0", "rules": { "disabled": ["MESSAGES_HAVE_SENTENCE_COMMENTS"] } }"#,
    )]);
    let output = Command::new(doclint_bin())
        .args(["rules", "--json"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to run doclint rules --json");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["id"], "MESSAGES_HAVE_SENTENCE_COMMENTS");
    assert_eq!(value[0]["enabled"], false);
}
