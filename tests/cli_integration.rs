#![cfg(feature = "cli")]

use std::fs::File;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_oxilzw").to_string()
}

// Runs the filter with stdin/stdout redirected to files, which keeps large
// payloads free of pipe-buffer deadlocks.
fn run_filter(dir: &tempfile::TempDir, decode: bool, input: &[u8]) -> (bool, Vec<u8>) {
    let in_path = dir.path().join("in.bin");
    let out_path = dir.path().join("out.bin");
    std::fs::write(&in_path, input).unwrap();

    let mut cmd = Command::new(bin());
    if decode {
        cmd.arg("-d");
    }
    let status = cmd
        .stdin(Stdio::from(File::open(&in_path).unwrap()))
        .stdout(Stdio::from(File::create(&out_path).unwrap()))
        .status()
        .unwrap();
    (status.success(), std::fs::read(&out_path).unwrap())
}

#[test]
fn cli_compress_decompress_roundtrip() {
    let dir = tempdir().unwrap();
    let input = b"compress me once, compress me twice, compress me once again".repeat(64);

    let (ok, packed) = run_filter(&dir, false, &input);
    assert!(ok);
    assert_eq!(&packed[..3], &oxilzw::lzw::MAGIC[..]);
    assert!(packed.len() < input.len());

    let (ok, decoded) = run_filter(&dir, true, &packed);
    assert!(ok);
    assert_eq!(decoded, input);
}

#[test]
fn cli_large_input_roundtrip() {
    // Enough data to grow the code width past its initial 9 bits.
    let dir = tempdir().unwrap();
    let mut state = 0x2545F4914F6CDD1Du64;
    let input: Vec<u8> = (0..48 * 1024)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect();

    let (ok, packed) = run_filter(&dir, false, &input);
    assert!(ok);
    let (ok, decoded) = run_filter(&dir, true, &packed);
    assert!(ok);
    assert_eq!(decoded, input);
}

#[test]
fn cli_empty_input_emits_bare_header() {
    let dir = tempdir().unwrap();
    let (ok, packed) = run_filter(&dir, false, b"");
    assert!(ok);
    assert_eq!(packed, oxilzw::lzw::MAGIC);

    let (ok, decoded) = run_filter(&dir, true, &packed);
    assert!(ok);
    assert!(decoded.is_empty());
}

#[test]
fn cli_decode_rejects_garbage() {
    let dir = tempdir().unwrap();
    let (ok, _) = run_filter(&dir, true, b"this is not a compressed stream");
    assert!(!ok);
}

#[test]
fn cli_rejects_unknown_flags() {
    let out = Command::new(bin())
        .arg("--level")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn cli_version_flag() {
    let out = Command::new(bin()).arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("oxilzw"));
}
