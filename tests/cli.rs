//! End-to-end tests running the binary against a throwaway git repository.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn checkin_bin() -> &'static str {
    env!("CARGO_BIN_EXE_git-code-checkin")
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "user.name=Checkin Test", "-c", "user.email=checkin@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Two commits; the second adds, modifies, renames and deletes one file each.
fn setup_repo() -> (TempDir, String) {
    let repo = TempDir::new().expect("failed to create temp dir");
    let dir = repo.path();

    git(dir, &["init", "--quiet"]);
    fs::write(dir.join("app.txt"), "first\n").unwrap();
    fs::write(dir.join("old-name.txt"), "a file that keeps its content\n").unwrap();
    fs::write(dir.join("legacy.txt"), "going away\n").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "Initial import"]);

    fs::write(dir.join("app.txt"), "second\n").unwrap();
    fs::write(dir.join("fresh.txt"), "brand new\n").unwrap();
    git(dir, &["mv", "old-name.txt", "new-name.txt"]);
    git(dir, &["rm", "--quiet", "legacy.txt"]);
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "PROJ-42: shuffle files"]);

    let hash = git(dir, &["rev-parse", "HEAD"]).trim().to_string();
    (repo, hash)
}

fn home_with_desktop() -> TempDir {
    let home = TempDir::new().expect("failed to create temp dir");
    fs::create_dir(home.path().join("Desktop")).unwrap();
    home
}

fn run_checkin(repo: &Path, home: &Path, commit: &str, stdin: &str) -> Output {
    let mut child = Command::new(checkin_bin())
        .args(["--commit", commit])
        .current_dir(repo)
        .env("HOME", home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start git-code-checkin");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn requires_a_commit_argument() {
    let output = Command::new(checkin_bin()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--commit"));
}

#[test]
fn help_describes_commit_as_hash_prefix() {
    let output = Command::new(checkin_bin()).arg("--help").output().unwrap();

    let help = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(help.contains("hash prefix"));
    assert!(help.contains("status 130"));
}

#[test]
fn rejects_flag_like_commit_reference() {
    let output = Command::new(checkin_bin())
        .args(["--commit=--all"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn writes_checkin_document_for_commit() {
    let (repo, hash) = setup_repo();
    let home = home_with_desktop();

    // The clipboard step depends on the host having xclip and a display, so
    // only the written document is checked here.
    run_checkin(repo.path(), home.path(), &hash, "Billing\n\n\n\n\n\n");

    let html = fs::read_to_string(home.path().join("Desktop/checkin.html"))
        .expect("checkin.html was not written");

    assert!(html.contains(">PROJ-42: shuffle files</h2>"));
    assert!(html.contains("<b>Project:</b>&nbsp;Billing</div>"));
    assert!(html.contains("<b>Task:</b>&nbsp;PROJ-42</div>"));
    assert!(html.contains("<b>Notes:</b>&nbsp;N/A</div>"));
    assert!(html.contains(&format!("<b>Commit Hash:</b>&nbsp;{hash}</div>")));
    assert!(html.contains("<div><b>New Files:</b></div><ul><li>fresh.txt</li></ul>"));
    assert!(html.contains("<div><b>Modified Files:</b></div><ul><li>app.txt</li></ul>"));
    assert!(html.contains(
        "<div><b>Renamed Files:</b></div><ul><li>old-name.txt -> new-name.txt</li></ul>"
    ));
    assert!(html.contains("<div><b>Deleted Files:</b></div><ul><li>legacy.txt</li></ul>"));
    assert!(html.ends_with("Regards,"));
}

#[test]
fn end_of_input_during_prompt_writes_nothing() {
    let (repo, hash) = setup_repo();
    let home = home_with_desktop();

    let output = run_checkin(repo.path(), home.path(), &hash, "Billing\n");

    assert_eq!(output.status.code(), Some(130));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!home.path().join("Desktop/checkin.html").exists());
}

#[test]
fn unknown_commit_is_a_labelled_failure() {
    let (repo, _) = setup_repo();
    let home = home_with_desktop();

    let output = run_checkin(repo.path(), home.path(), "0123456789abcdef", "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: "));
    assert!(!home.path().join("Desktop/checkin.html").exists());
}

#[test]
fn missing_home_is_reported() {
    let (repo, hash) = setup_repo();

    let output = Command::new(checkin_bin())
        .args(["--commit", &hash])
        .current_dir(repo.path())
        .env_remove("HOME")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("HOME is not set"));
}
