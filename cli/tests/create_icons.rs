//! Runs the `create-icons` binary in a scratch working directory.
//!
//! XDG_CONFIG_HOME points at an empty directory so a config file on the
//! host cannot change the defaults under test.

use std::path::Path;
use std::process::{Command, Output};

const SIZES: [u32; 4] = [16, 32, 48, 128];

const DEFAULT_STDOUT: [&str; 6] = [
    "Created icons/icon16.png",
    "Created icons/icon32.png",
    "Created icons/icon48.png",
    "Created icons/icon128.png",
    "All placeholder icons created successfully!",
    "The extension is now ready to load in Chrome.",
];

fn command_in(workdir: &Path, args: &[&str]) -> Command {
    let config_home = workdir.join(".config-home");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_create-icons"));
    cmd.args(args)
        .current_dir(workdir)
        .env("XDG_CONFIG_HOME", &config_home)
        .env_remove("ICONS_LOG");
    cmd
}

fn run_in(workdir: &Path, args: &[&str]) -> Output {
    command_in(workdir, args)
        .output()
        .expect("failed to run create-icons")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_run_writes_four_icons() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("icons")).unwrap();

    let output = run_in(tmp.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output), DEFAULT_STDOUT.to_vec());
    // Default log level is warn; a clean run logs nothing
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let contents: Vec<Vec<u8>> = SIZES
        .iter()
        .map(|size| std::fs::read(tmp.path().join(format!("icons/icon{size}.png"))).unwrap())
        .collect();
    assert!(!contents[0].is_empty());
    assert!(contents.iter().all(|c| c == &contents[0]));
}

#[test]
fn test_log_env_var_enables_debug_on_stderr_only() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("icons")).unwrap();

    let output = command_in(tmp.path(), &[])
        .env("ICONS_LOG", "debug")
        .output()
        .expect("failed to run create-icons");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wrote icon"), "stderr: {stderr}");
    assert_eq!(stdout_lines(&output), DEFAULT_STDOUT.to_vec());
}

#[test]
fn test_malformed_log_env_var_names_variable() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("icons")).unwrap();

    let output = command_in(tmp.path(), &[])
        .env("ICONS_LOG", "===bad")
        .output()
        .expect("failed to run create-icons");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ICONS_LOG"), "stderr: {stderr}");
    assert!(!tmp.path().join("icons/icon16.png").exists());
}

#[test]
fn test_second_run_produces_identical_files() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("icons")).unwrap();

    assert!(run_in(tmp.path(), &[]).status.success());
    let first = std::fs::read(tmp.path().join("icons/icon48.png")).unwrap();
    assert!(run_in(tmp.path(), &[]).status.success());
    let second = std::fs::read(tmp.path().join("icons/icon48.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_icons_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();

    let output = run_in(tmp.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!tmp.path().join("icons").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon16.png"), "stderr: {stderr}");
}

#[test]
fn test_create_dir_flag_creates_icons_dir() {
    let tmp = tempfile::tempdir().unwrap();

    let output = run_in(tmp.path(), &["--create-dir"]);

    assert!(output.status.success());
    for size in SIZES {
        assert!(tmp.path().join(format!("icons/icon{size}.png")).is_file());
    }
}

#[test]
fn test_config_file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config_dir = tmp.path().join(".config-home/extension-icons");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[output]\ndir = \"out\"\nsizes = [19]\ncreate_dir = true\n",
    )
    .unwrap();

    let output = run_in(tmp.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0], "Created out/icon19.png");
    assert!(tmp.path().join("out/icon19.png").is_file());
    assert!(!tmp.path().join("icons").exists());
}

#[test]
fn test_verify_after_create() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("icons")).unwrap();

    let before = run_in(tmp.path(), &["verify"]);
    assert!(!before.status.success());
    assert_eq!(stdout_lines(&before).len(), 4);

    assert!(run_in(tmp.path(), &["create"]).status.success());

    let after = run_in(tmp.path(), &["verify"]);
    assert!(after.status.success());
    assert!(stdout_lines(&after).iter().all(|l| l.starts_with("ok")));
}
