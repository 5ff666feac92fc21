use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use tokio::fs;

const CONFIG: &str = r#"{
    "layout": {
        "left": ["modified", "buffer-name", "position"],
        "right": ["vc", "mode"]
    },
    "segments": { "position": { "showPercentage": false } }
}"#;

fn run_statusline(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_statusline"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("STATUSLINE_THEME")
        .env_remove("STATUSLINE_GLYPHS")
        .env_remove("STATUSLINE_WIDTH")
        .env_remove("STATUSLINE_CONFIG")
        .env_remove("COLUMNS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute statusline");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

async fn write_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.json");
    fs::write(&path, CONFIG).await.unwrap();
    path.to_str().unwrap().to_string()
}

fn snapshot() -> String {
    serde_json::json!({
        "views": [
            {
                "id": 1,
                "document": {
                    "name": "lib.rs",
                    "modified": true,
                    "line": 3,
                    "column": 7,
                    "mode": "Rust"
                },
                "vc": { "branch": "main", "state": "edited" }
            },
            {
                "id": 2,
                "document": { "name": "notes.md", "line": 1, "mode": "Markdown" }
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_renders_first_view_at_width() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir).await;

    let output = run_statusline(
        temp_dir.path(),
        &["--config", &config, "--width", "50", "--glyphs", "ascii"],
        &snapshot(),
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("* lib.rs  3:7  {}+ main  Rust  \n", " ".repeat(21))
    );
}

#[tokio::test]
async fn test_all_prints_every_view() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir).await;

    let output = run_statusline(
        temp_dir.path(),
        &["--config", &config, "--width", "40", "--all"],
        &snapshot(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("● lib.rs"));
    assert!(lines[1].starts_with("  notes.md  1:0"));
    assert!(lines[1].ends_with("Markdown  "));
}

#[tokio::test]
async fn test_selected_view_is_rendered() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir).await;

    let mut input: serde_json::Value = serde_json::from_str(&snapshot()).unwrap();
    input["selected"] = serde_json::json!({ "view": 2 });

    let output = run_statusline(
        temp_dir.path(),
        &["--config", &config, "--width", "40"],
        &input.to_string(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("  notes.md"));
}

#[tokio::test]
async fn test_invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let invalid_config = temp_dir.path().join("invalid.json");
    fs::write(&invalid_config, "{ invalid json }").await.unwrap();

    let output = run_statusline(
        temp_dir.path(),
        &["--config", invalid_config.to_str().unwrap()],
        &snapshot(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse config file"));
}

#[tokio::test]
async fn test_invalid_snapshot_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir).await;

    let output = run_statusline(temp_dir.path(), &["--config", &config], "not json");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse host snapshot"));
}

#[tokio::test]
async fn test_theme_variations() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir).await;

    for theme in ["dark", "light", "nord", "tokyo-night", "rose-pine", "unknown"] {
        let output = run_statusline(
            temp_dir.path(),
            &["--config", &config, "--theme", theme, "--width", "50"],
            &snapshot(),
        );

        assert!(output.status.success(), "Should succeed with theme: {}", theme);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("lib.rs"), "theme {theme}: {stdout:?}");
    }
}

fn git(dir: &Path, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
}

#[tokio::test]
async fn test_relative_document_path_reports_file_state() {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();
    git(repo_path, &["init"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "user.name", "Test User"]);

    fs::create_dir_all(repo_path.join("sub")).await.unwrap();
    fs::write(repo_path.join("sub").join("a.rs"), "fn a() {}\n")
        .await
        .unwrap();
    git(repo_path, &["add", "."]);
    git(repo_path, &["commit", "-m", "Initial commit"]);
    fs::write(repo_path.join("sub").join("a.rs"), "fn a() { todo!() }\n")
        .await
        .unwrap();

    let config = repo_path.join("vc-only.json");
    fs::write(&config, r#"{ "layout": { "left": [], "right": ["vc"] } }"#)
        .await
        .unwrap();

    let input = serde_json::json!({
        "views": [{ "id": 1, "document": { "name": "a.rs", "path": "sub/a.rs" } }]
    })
    .to_string();
    let output = run_statusline(
        repo_path,
        &["--config", config.to_str().unwrap(), "--width", "0", "--glyphs", "ascii"],
        &input,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("+ "), "unexpected vc segment: {stdout:?}");
}
