//! E2E tests: `generate` end to end against a stand-in endpoint

use super::common::{isolated_command, spawn_fake_endpoint, FAKE_MODEL};

const OUTLINE: &str = "1. What DDoS looks like\n2. Where LLMs help";
const DRAFT: &str = "# LLMs for DDoS Detection\n\nDraft body.";
const POLISHED: &str = "# LLMs for DDoS Detection\n\nPolished body.";

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_writes_editor_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let (endpoint, seen) = spawn_fake_endpoint(vec![OUTLINE, DRAFT, POLISHED]).await;
    let out_path = dir.path().join("blog.md");

    let output = isolated_command(dir.path())
        .env("HUGGINGFACEHUB_API_TOKEN", "hf_test")
        .args(["--endpoint", &endpoint, "-m", FAKE_MODEL, "generate"])
        .args(["--topic", "LLMs for DDoS Detection", "-o"])
        .arg(&out_path)
        .output()
        .await
        .expect("Failed to run generate command");

    assert!(output.status.success(), "generate failed: {:?}", output);
    assert_eq!(seen.calls(), 3);
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), POLISHED);

    let prompts = seen.prompts.lock().unwrap();
    assert!(prompts[0].contains("LLMs for DDoS Detection"));
    assert!(prompts[1].contains(OUTLINE), "writer sees the outline");
    assert!(prompts[2].contains(DRAFT), "editor sees the draft");
    assert!(!prompts[2].contains(OUTLINE));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_without_token_shows_auth_error() {
    let dir = tempfile::tempdir().unwrap();
    let (endpoint, seen) = spawn_fake_endpoint(vec![POLISHED]).await;

    let output = isolated_command(dir.path())
        .args(["--endpoint", &endpoint, "-m", FAKE_MODEL, "generate"])
        .args(["--topic", "Rust"])
        .output()
        .await
        .expect("Failed to run generate command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Error: Authentication failed"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains(POLISHED));
    assert_eq!(seen.calls(), 0);
}
