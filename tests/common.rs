#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The daydial binary with HOME pointed at a scratch directory, so the
/// user's real configuration is never read.
pub fn dd() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("daydial_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("daydial");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique catalog path inside the system temp dir and remove any existing file
pub fn setup_test_catalog(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daydial.json", name));
    let catalog = path.to_string_lossy().to_string();
    fs::remove_file(&catalog).ok();
    catalog
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty catalog in test mode
pub fn init_catalog(catalog: &str) {
    dd().args(["--catalog", catalog, "--test", "init"])
        .assert()
        .success();
}

/// Add an event through the CLI and return its id
pub fn add_event(catalog: &str, date: &str, title: &str, start: &str, end: &str, extra: &[&str]) -> String {
    let mut args = vec![
        "--catalog", catalog, "--test", "add", date, "--title", title, "--start", start, "--end", end,
    ];
    args.extend_from_slice(extra);

    let output = dd().args(&args).output().expect("run daydial add");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .rsplit("id=")
        .next()
        .map(|s| s.trim().to_string())
        .expect("id in add output")
}

/// "X,Y" of the point at `angle` degrees and `radius` on the default 400×400 dial
pub fn dial_point(radius: f64, angle: f64) -> String {
    let p = daydial::core::dial::angle::polar_to_cartesian(200.0, 200.0, radius, angle);
    format!("{:.4},{:.4}", p.x, p.y)
}
