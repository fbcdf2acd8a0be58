use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn classhub(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classhub")).args(args)
                                                .env_remove("RUST_LOG")
                                                .output()
                                                .unwrap_or_else(|e| panic!("failed to run classhub: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn single_command_is_evaluated() {
    let output = classhub(&["1 + 1"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "> 1 + 1\n= 2\n");
}

#[test]
fn file_lines_share_one_session() {
    let output = classhub(&["--file", "tests/example.calc"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("y is 11"), "got {out}");
    assert!(out.ends_with("= 1.667\n"), "got {out}");
}

#[test]
fn file_flag_without_path_fails() {
    let output = classhub(&["--file"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No input file given"));
}

#[test]
fn missing_file_fails() {
    let output = classhub(&["--file", "tests/does_not_exist.calc"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}
