//! E2E tests: commands that never reach a model

use super::common::{isolated_command, spawn_fake_endpoint};

#[tokio::test]
async fn test_roles_lists_stages_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let output = isolated_command(dir.path())
        .arg("roles")
        .output()
        .await
        .expect("Failed to run roles command");

    assert!(output.status.success(), "roles failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let plan = stdout.find("[plan]").expect("plan stage listed");
    let write = stdout.find("[write]").expect("write stage listed");
    let edit = stdout.find("[edit]").expect("edit stage listed");
    assert!(plan < write && write < edit);

    assert!(stdout.contains("Content Planner"));
    assert!(stdout.contains("Content Writer"));
    assert!(stdout.contains("Editor"));
}

#[tokio::test]
async fn test_check_reports_missing_token() {
    let dir = tempfile::tempdir().unwrap();

    let output = isolated_command(dir.path())
        .args(["check", "-m", "acme/tiny-writer"])
        .output()
        .await
        .expect("Failed to run check command");

    assert!(output.status.success(), "check failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("acme/tiny-writer"));
    assert!(stdout.contains("missing (HUGGINGFACEHUB_API_TOKEN)"));
}

#[tokio::test]
async fn test_check_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".blogsmith.toml"),
        "[llm]\nmodel = \"from/config\"\nmax_tokens = 128\n",
    )
    .unwrap();

    let output = isolated_command(dir.path())
        .arg("check")
        .output()
        .await
        .expect("Failed to run check command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("from/config"));
    assert!(stdout.contains("128"));
}

#[tokio::test]
async fn test_blank_topic_warns_and_calls_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (endpoint, seen) = spawn_fake_endpoint(vec!["unused"]).await;

    let output = isolated_command(dir.path())
        .env("HUGGINGFACEHUB_API_TOKEN", "hf_test")
        .args(["--endpoint", &endpoint, "generate", "--topic", "   "])
        .output()
        .await
        .expect("Failed to run generate command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a topic"), "stderr: {}", stderr);
    assert_eq!(seen.calls(), 0);
}
