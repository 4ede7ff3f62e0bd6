use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn program_file(name: &str, program: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "basic-cli-{}-{}.bas",
        std::process::id(),
        name
    ));
    std::fs::write(&path, program).unwrap();
    path
}

fn basic() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_basic"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_file(name: &str, program: &str, stdin: &str) -> Output {
    let path = program_file(name, program);
    let mut child = basic()
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    std::fs::remove_file(&path).unwrap();
    output
}

#[test]
fn test_prints_output_lines() {
    let output = run_file(
        "hello",
        "20 PRINT \"World\"\n10 PRINT \"Hello\"\n",
        "",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\nWorld\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_end_exits_cleanly() {
    let output = run_file("end", "10 PRINT 1\n20 END\n30 PRINT 2\n", "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn test_error_exits_non_zero() {
    let output = run_file(
        "error",
        "10 PRINT \"Start\"\n20 GOTO 999\n30 PRINT \"End\"\n",
        "",
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Start\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error at line 20"), "{}", stderr);
}

#[test]
fn test_input_from_stdin() {
    let output = run_file("input", "10 INPUT A\n20 PRINT A * 2\n", "21\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "? 42\n");
}

#[test]
fn test_missing_file() {
    let output = basic()
        .arg(std::env::temp_dir().join("basic-cli-does-not-exist.bas"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_requires_a_file_argument() {
    let output = basic().output().unwrap();
    assert!(!output.status.success());
}
