use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn enamel() -> Command {
    Command::cargo_bin("enamel").expect("binary built")
}

#[test]
fn help_lists_options() {
    enamel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--view"));
}

#[test]
fn exports_a_gif() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("tooth.gif");

    enamel()
        .args(["--export"])
        .arg(&out)
        .args(["--width", "120", "--height", "80", "--fps", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 200 frames"))
        .stdout(predicate::str::contains("50 ms/frame"));

    let bytes = std::fs::read(&out).expect("gif written");
    assert!(bytes.starts_with(b"GIF8"));
}

#[test]
fn export_writes_log_file() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("tooth.gif");
    let log = dir.path().join("enamel.log");

    enamel()
        .arg("--export")
        .arg(&out)
        .args(["--width", "64", "--height", "64"])
        .arg("--log")
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let text = std::fs::read_to_string(&log).expect("log written");
    assert!(text.contains("Starting Enamel"));
    assert!(text.contains("Export finished"));
    assert!(text.contains("entering Erosion phase"));
}

#[test]
fn rust_log_sets_the_log_level() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("tooth.gif");
    let log = dir.path().join("enamel.log");

    enamel()
        .arg("--export")
        .arg(&out)
        .args(["--width", "64", "--height", "64"])
        .arg("--log")
        .arg(&log)
        .env("RUST_LOG", "info")
        .assert()
        .success();

    let text = std::fs::read_to_string(&log).expect("log written");
    assert!(text.contains("Export finished"));
    assert!(!text.contains("entering Erosion phase"));
}

#[test]
fn zero_fps_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let out = dir.path().join("tooth.gif");

    enamel()
        .arg("--export")
        .arg(&out)
        .args(["--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fps"));

    assert!(!out.exists());
}

#[test]
fn zero_interval_is_rejected() {
    enamel()
        .args(["--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval"));
}

#[test]
fn unknown_view_is_rejected() {
    enamel()
        .args(["--view", "histogram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
