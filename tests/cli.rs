use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn recase() -> Command {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn converts_arguments() {
    recase()
        .args(["camel", "hello world", "HTTPServer"])
        .assert()
        .success()
        .stdout("helloWorld\nhttpServer\n");
}

#[test]
fn snake_with_caps() {
    recase()
        .args(["--caps", "snake", "Hello World"])
        .assert()
        .success()
        .stdout("HELLO_WORLD\n");
}

#[test]
fn join_separator_for_broken_styles() {
    recase()
        .args(["--join", "! ", "upper-break", "HelloWorld"])
        .assert()
        .success()
        .stdout("HELLO! WORLD\n");
}

#[test]
fn reads_stdin_when_no_inputs() {
    recase()
        .arg("kebab")
        .write_stdin("helloWorld\nuser_id\n")
        .assert()
        .success()
        .stdout("hello-world\nuser-id\n");
}

#[test]
fn words_subcommand_json() {
    recase()
        .args(["-o", "json", "words", "Hello-World2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hello\"").and(predicate::str::contains("\"world2\"")));
}

#[test]
fn singular_subcommand() {
    recase()
        .args(["singular", "children", "buses", "cats"])
        .assert()
        .success()
        .stdout("child\nbus\ncat\n");
}

#[test]
fn template_subcommand() {
    recase()
        .args([
            "template",
            "Cannot create a #{lowerCase}. #{sentenceCase} exists.",
            "User",
        ])
        .assert()
        .success()
        .stdout("Cannot create a user. User exists.\n");
}

#[test]
fn unknown_style_fails() {
    recase()
        .args(["shouty", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style"));
}

#[test]
fn missing_style_fails() {
    recase()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No case style specified"));
}

#[test]
fn local_config_is_applied() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".recase.toml"), "caps = true\njoin = \"/\"\n").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["kebab", "hello world"])
        .assert()
        .success()
        .stdout("HELLO-WORLD\n");

    recase()
        .current_dir(dir.path())
        .args(["lower-break", "helloWorld"])
        .assert()
        .success()
        .stdout("hello/world\n");
}
