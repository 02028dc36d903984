// Integration tests for rot
//
// End-to-end pump runs over real files: stream resolution, open modes,
// line-ending normalization, and the fail-fast resource error path.

use std::fs;
use std::path::PathBuf;

use rotate::engine::Shift;
use rotate::pump::{self, OpenMode, PumpConfig};
use rotate::RotateError;

fn config(raw_shift: i32) -> PumpConfig {
    PumpConfig::new(Shift::normalize(raw_shift))
}

#[test]
fn test_file_to_file_rot13() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Hello, World!\n").unwrap();

    pump::run(Some(&input), Some(&output), &config(13)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Uryyb, Jbeyq!\n");
}

#[test]
fn test_double_pass_restores_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let middle = dir.path().join("mid.txt");
    let output = dir.path().join("out.txt");
    let text = "The Quick Brown Fox Jumps Over The Lazy Dog\nsecond line\n";
    fs::write(&input, text).unwrap();

    // ROT13 is its own inverse; 13 + 13 = 26 wraps to identity.
    pump::run(Some(&input), Some(&middle), &config(13)).unwrap();
    pump::run(Some(&middle), Some(&output), &config(13)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn test_rot47_double_pass_restores_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let middle = dir.path().join("mid.txt");
    let output = dir.path().join("out.txt");
    let text = "punctuation! @#$%^&*() and spaces stay put\n";
    fs::write(&input, text).unwrap();

    pump::run(Some(&input), Some(&middle), &config(0)).unwrap();
    pump::run(Some(&middle), Some(&output), &config(0)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn test_crlf_input_becomes_lf_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "dos line\r\nanother\r\n").unwrap();

    pump::run(Some(&input), Some(&output), &config(13)).unwrap();

    let out = fs::read_to_string(&output).unwrap();
    assert!(!out.contains('\r'));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_multi_line_order_preserved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    let lines: Vec<String> = (0..50).map(|i| format!("line number {}", i)).collect();
    fs::write(&input, lines.join("\n") + "\n").unwrap();

    pump::run(Some(&input), Some(&output), &config(1)).unwrap();

    let out = fs::read_to_string(&output).unwrap();
    let out_lines: Vec<&str> = out.lines().collect();
    assert_eq!(out_lines.len(), 50);
    // "line number 7" under rot1: letters advance, digits untouched
    assert_eq!(out_lines[7], "mjof ovncfs 7");
}

#[test]
fn test_named_output_appends_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "abc\n").unwrap();
    fs::write(&output, "existing\n").unwrap();

    pump::run(Some(&input), Some(&output), &config(1)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "existing\nbcd\n");
}

#[test]
fn test_truncate_mode_replaces_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "abc\n").unwrap();
    fs::write(&output, "existing\n").unwrap();

    let mut cfg = config(1);
    cfg.open_mode = OpenMode::Truncate;
    pump::run(Some(&input), Some(&output), &cfg).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "bcd\n");
}

#[test]
fn test_missing_input_is_resource_error() {
    let missing = PathBuf::from("/no/such/dir/in.txt");
    let err = pump::run(Some(&missing), None, &config(13)).unwrap_err();
    match err {
        RotateError::Resource { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Resource error, got {:?}", other),
    }
}

#[test]
fn test_failed_open_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let output = dir.path().join("out.txt");

    assert!(pump::run(Some(&missing), Some(&output), &config(13)).is_err());
    // Fail-fast on input resolution happens before the output opens.
    assert!(!output.exists());
}

#[test]
fn test_table_run_over_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "caesar\n").unwrap();

    let mut cfg = config(0);
    cfg.table = true;
    cfg.open_mode = OpenMode::Truncate;
    pump::run(Some(&input), Some(&output), &cfg).unwrap();

    let out = fs::read_to_string(&output).unwrap();
    assert!(out.contains("rot13: pnrfne\n"));
    assert!(out.contains("rot47: "));

    // Truncate-on-open: a rerun replaces the table instead of stacking it.
    pump::run(Some(&input), Some(&output), &cfg).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), out);
}

#[test]
fn test_oversized_shift_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Hello, World!\n").unwrap();

    // Raw 52 falls back to ROT47, same output as raw 0.
    pump::run(Some(&input), Some(&output), &config(52)).unwrap();
    let mut cfg = config(0);
    cfg.open_mode = OpenMode::Truncate;
    let rot47_out = dir.path().join("rot47.txt");
    pump::run(Some(&input), Some(&rot47_out), &cfg).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(&rot47_out).unwrap()
    );
}
