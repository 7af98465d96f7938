use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for folio
pub fn folio() -> Command {
    cargo_bin_cmd!("folio")
}

/// Extract an entity ID from command output (first line)
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Setup a test store and return the directory
pub fn setup_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    folio()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Register a user and return their ID
pub fn add_user(dir: &TempDir, name: &str) -> String {
    let email = format!("{}@example.com", name);
    let output = folio()
        .current_dir(dir.path())
        .args(["user", "add", name, email.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output)
}

/// Create a post and return its ID
pub fn create_post(dir: &TempDir, author: &str, title: &str, content: &str) -> String {
    create_tagged_post(dir, author, title, content, &[])
}

/// Create a post with tags and return its ID
pub fn create_tagged_post(
    dir: &TempDir,
    author: &str,
    title: &str,
    content: &str,
    tags: &[&str],
) -> String {
    let mut args = vec!["create", title, content, "--as", author];
    for tag in tags {
        args.push("--tag");
        args.push(*tag);
    }

    let output = folio()
        .current_dir(dir.path())
        .args(&args)
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output)
}

/// Record N views on a post
#[allow(dead_code)]
pub fn record_views(dir: &TempDir, post_id: &str, views: usize) {
    for _ in 0..views {
        folio()
            .current_dir(dir.path())
            .args(["show", post_id])
            .assert()
            .success();
    }
}
