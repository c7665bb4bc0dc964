use predicates::prelude::*;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_input_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .arg("validate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(r#""error":"input_usage_error""#))
        .stderr(predicate::str::contains(r#""kind":"cli_parse_error""#));
}
