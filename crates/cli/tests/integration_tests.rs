//! Integration tests for the versioned file store shell.
//!
//! Each test spawns the CLI as a child process with a temp store root,
//! pipes commands via stdin, and asserts on the captured stdout.
use std::path::Path;
use tempfile::tempdir;

/// Helper to run CLI commands and capture output.
fn run_cli_command(root: &Path, command: &str) -> String {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new("cargo")
        .args(["run", "-p", "cli", "--"])
        .env("VSTORE_ROOT", root.to_str().unwrap())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        stdin
            .write_all(command.as_bytes())
            .expect("Failed to write to stdin");
        stdin.write_all(b"EXIT\n").expect("Failed to write EXIT");
    }

    let output = child.wait_with_output().expect("Failed to read output");
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Extracts the first bare 14-digit timestamp line from CLI output.
fn first_timestamp(output: &str) -> String {
    output
        .lines()
        .map(|l| l.trim_start_matches("> "))
        .find(|l| l.len() == 14 && l.bytes().all(|b| b.is_ascii_digit()))
        .expect("no timestamp in output")
        .to_string()
}

#[test]
fn test_write_then_versions() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(
        dir.path(),
        "WRITE 2023/league league txt hello world\nVERSIONS 2023/league league txt\n",
    );

    assert!(output.contains("(1 versions)"));
    let ts = first_timestamp(&output);
    assert!(output.contains(&ts));
}

#[test]
fn test_write_then_read_across_sessions() {
    let dir = tempdir().unwrap();

    // First session: write and capture the generated timestamp.
    let output = run_cli_command(dir.path(), "WRITE 2023/league league txt hello world\n");
    let ts = first_timestamp(&output);

    // Second session: the version persists and reads back.
    let output2 = run_cli_command(
        dir.path(),
        &format!("READ 2023/league league txt {}\n", ts),
    );
    assert!(output2.contains("hello world"));
}

#[test]
fn test_last_and_has_with_no_versions() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(
        dir.path(),
        "LAST 2023/league league txt\nHAS 2023/league league txt\n",
    );

    assert!(output.contains("(none)"));
    assert!(output.contains("false"));
}

#[test]
fn test_remove_deletes_version() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(dir.path(), "WRITE 2023/league league txt doomed\n");
    let ts = first_timestamp(&output);

    let output2 = run_cli_command(
        dir.path(),
        &format!(
            "REMOVE 2023/league league txt {}\nHAS 2023/league league txt\n",
            ts
        ),
    );
    assert!(output2.contains("OK"));
    assert!(output2.contains("false"));
}

#[test]
fn test_detect_valid_and_mismatch() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(
        dir.path(),
        "DETECT league.txt.20231019140523 league txt\nDETECT league.json.20231019140523 league txt\n",
    );

    assert!(output.contains("20231019140523"));
    assert!(output.contains("no match"));
    assert!(output.contains("extension"));
}

#[test]
fn test_find_respects_extension() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(
        dir.path(),
        "WRITE 2023/league league txt standings\nFIND 2023/league league json\nFIND 2023/league league txt\n",
    );

    assert!(output.contains("(0 versions)"));
    assert!(output.contains("(1 versions)"));
}

#[test]
fn test_exists_helper() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(
        dir.path(),
        "EXISTS 2023/league\nWRITE 2023/league league txt x\nEXISTS 2023/league\n",
    );

    assert!(output.contains("false"));
    assert!(output.contains("true"));
}

#[test]
fn test_read_missing_version_reports_error() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(dir.path(), "READ 2023/league league txt 20231019140523\n");

    assert!(output.contains("ERR read failed"));
}

#[test]
fn test_bad_timestamp_argument_reports_error() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(dir.path(), "READ 2023/league league txt notatimestamp\n");

    assert!(output.contains("ERR"));
    assert!(output.contains("14 digits"));
}

#[test]
fn test_unknown_command() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(dir.path(), "FROB x\n");

    assert!(output.contains("ERR unknown command"));
}

#[test]
fn test_quit_command() {
    let dir = tempdir().unwrap();

    let output = run_cli_command(dir.path(), "WRITE 2023/league league txt x\nQUIT\n");

    assert!(output.contains("bye"));
}
