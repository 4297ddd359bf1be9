// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The `spanlex` binary and the driver over files on disk.

use std::fs;
use std::path::PathBuf;
use std::process::Command as Process;

use pretty_assertions::assert_eq;
use spanlexc::{run, Command, Options};
use tempfile::TempDir;

fn write_files(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = files
        .iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            fs::write(&path, text).expect("write fixture");
            path
        })
        .collect();
    (dir, paths)
}

fn run_to_strings(options: &Options) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let accepted = run(options, &mut out, &mut err).unwrap();
    (
        accepted,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn parallel_and_sequential_output_match() {
    let files: Vec<(String, String)> = (0..12)
        .map(|i| (format!("f{i}.ini"), format!("[s{i}]\nkey = {i}\n")))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();
    let (_dir, paths) = write_files(&borrowed);

    let mut options = Options::new(Command::Sections);
    options.files = paths;
    let parallel = run_to_strings(&options);
    options.parallel = false;
    let sequential = run_to_strings(&options);

    assert_eq!(parallel, sequential);
    assert!(parallel.0);
    assert!(parallel.1.contains("[s11] (line 1)\n  key = 11\n"));
}

#[test]
fn check_fails_when_any_file_is_rejected() {
    let (_dir, paths) = write_files(&[("good.ini", "a = 1\n"), ("bad.ini", "a = 1\noops\n")]);

    let mut options = Options::new(Command::Check);
    options.files = paths;
    let (accepted, out, err) = run_to_strings(&options);

    assert!(!accepted);
    assert_eq!(out, "");
    assert!(err.contains("bad.ini"), "{err}");
    assert!(err.contains("unexpected input at 2:1"), "{err}");
    assert!(!err.contains("good.ini"), "{err}");
}

#[test]
fn byte_order_mark_is_skipped_on_load() {
    let (_dir, paths) = write_files(&[("bom.editorconfig", "\u{feff}root = true\n[*]\nindent_size = 4\n")]);

    let mut options = Options::new(Command::Sections);
    options.files = paths;
    let (accepted, out, err) = run_to_strings(&options);

    assert!(accepted, "{err}");
    assert_eq!(out, "(global)\n  root = true\n[*] (line 2)\n  indent_size = 4\n");
}

#[test]
fn json_output_is_one_array() {
    let (_dir, paths) = write_files(&[("a.ini", "x = 1\n"), ("b.ini", "[b]\n")]);

    let mut options = Options::new(Command::Tokenize);
    options.files = paths;
    options.json = true;
    let (accepted, out, _) = run_to_strings(&options);

    assert!(accepted);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[1]["tokens"][1]["kind"], "HeaderToken");
}

#[test]
fn binary_exit_status() {
    let (_dir, paths) = write_files(&[("good.ini", "a = 1\n"), ("bad.ini", "nope\n")]);
    let exe = env!("CARGO_BIN_EXE_spanlex");

    let ok = Process::new(exe).arg("check").arg(&paths[0]).output().unwrap();
    assert!(ok.status.success());

    let bad = Process::new(exe).arg("check").arg(&paths[1]).output().unwrap();
    assert_eq!(bad.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&bad.stderr).contains("document rejected"));

    let usage = Process::new(exe).arg("check").output().unwrap();
    assert_eq!(usage.status.code(), Some(2));

    let help = Process::new(exe).arg("--help").output().unwrap();
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("Usage: spanlex"));
}

#[test]
fn binary_tokenize() {
    let (_dir, paths) = write_files(&[("one.ini", "k=v")]);
    let output = Process::new(env!("CARGO_BIN_EXE_spanlex"))
        .args(["tokenize", "--no-parallel"])
        .arg(&paths[0])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "1:1 KeyToken \"k\"\n1:2 Equals \"=\"\n1:3 ValueToken \"v\"\n"
    );
}
