//! Integration tests for textcount CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn textcount() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("textcount"))
}

fn folder_arg(dir: &Path) -> String {
    format!("--folder={}", dir.display())
}

#[test]
fn test_cli_help() {
    textcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--folder"))
        .stdout(predicate::str::contains("--skipped"))
        .stdout(predicate::str::contains("--no-ignore"));
}

#[test]
fn test_cli_version() {
    textcount()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textcount"));
}

#[test]
fn test_summary_output() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(".gitignore"), "").unwrap();
    fs::write(temp.path().join("abc.txt"), "a\nb\nc").unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .assert()
        .success()
        .stdout("lines\t2\nchars\t5\nfiles\t2\n");
}

#[test]
fn test_gitignore_excludes_matches() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(temp.path().join("debug.log"), "one\ntwo\nthree\n").unwrap();
    fs::write(temp.path().join("main.go"), "package main\n").unwrap();

    // .gitignore and main.go only
    textcount()
        .arg(folder_arg(temp.path()))
        .assert()
        .success()
        .stdout("lines\t2\nchars\t19\nfiles\t2\n");
}

#[test]
fn test_skipped_suffixes() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("foo.txt"), "foo\nfoo\nfoo\n").unwrap();
    fs::write(temp.path().join("bar.txt"), "bar\n").unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .arg("--skipped=foo.txt")
        .arg("--no-ignore")
        .assert()
        .success()
        .stdout("lines\t1\nchars\t4\nfiles\t1\n");
}

#[test]
fn test_default_skips_go_module_files() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("go.mod"), "module demo\n").unwrap();
    fs::write(temp.path().join("go.sum"), "demo v1 h1:abc\n").unwrap();
    fs::write(temp.path().join("main.go"), "package main\n").unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .arg("--no-ignore")
        .assert()
        .success()
        .stdout("lines\t1\nchars\t13\nfiles\t1\n");
}

#[test]
fn test_binary_files_count_only_as_files() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("text.txt"), "héllo\n").unwrap();
    fs::write(temp.path().join("image.bin"), [0x89, b'P', b'N', b'G', 0x00, 0x0a]).unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .arg("--no-ignore")
        .assert()
        .success()
        .stdout("lines\t1\nchars\t6\nfiles\t2\n");
}

#[test]
fn test_invalid_folder() {
    textcount()
        .arg("--folder=./invalid-directory")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid-directory"));
}

#[test]
fn test_missing_gitignore_is_fatal() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("main.go"), "package main\n").unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(".gitignore"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_logged_and_skipped() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("ok.txt"), "one\ntwo\n").unwrap();
    std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("broken")).unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .arg("--no-ignore")
        .assert()
        .success()
        .stdout("lines\t2\nchars\t8\nfiles\t2\n")
        .stderr(predicate::str::contains("error counting file"))
        .stderr(predicate::str::contains("broken"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    fs::write(temp.path().join("ok.txt"), "one\n").unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("inner.txt"), "two\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = textcount()
        .arg(folder_arg(temp.path()))
        .arg("--no-ignore")
        .assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("locked"));
}

#[cfg(unix)]
#[test]
fn test_quiet_hides_per_file_errors() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("ok.txt"), "one\n").unwrap();
    std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("broken")).unwrap();

    textcount()
        .arg(folder_arg(temp.path()))
        .args(["--no-ignore", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
