//! E2E tests against the real Hugging Face Inference API

use super::common::{isolated_command, TOKEN_ENV};

fn live_token() -> String {
    std::env::var(TOKEN_ENV).expect("HUGGINGFACEHUB_API_TOKEN must be set for live tests")
}

#[tokio::test]
#[ignore = "requires HUGGINGFACEHUB_API_TOKEN and network access"]
async fn test_live_check_reaches_model() {
    let dir = tempfile::tempdir().unwrap();

    let output = isolated_command(dir.path())
        .env(TOKEN_ENV, live_token())
        .args(["check", "--test-llm"])
        .output()
        .await
        .expect("Failed to run check command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    println!("stdout:\n{}", stdout);

    assert!(output.status.success(), "check --test-llm failed: {:?}", output.status);
    assert!(stdout.contains("Token:        present"));
}

#[tokio::test]
#[ignore = "requires HUGGINGFACEHUB_API_TOKEN and network access"]
async fn test_live_generate() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("blog.md");

    let output = isolated_command(dir.path())
        .env(TOKEN_ENV, live_token())
        .args(["generate", "--topic", "LLMs for DDoS Detection", "-o"])
        .arg(&out_path)
        .output()
        .await
        .expect("Failed to run generate command");

    println!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));

    assert!(output.status.success(), "generate failed: {:?}", output.status);
    let blog = std::fs::read_to_string(&out_path).unwrap();
    assert!(!blog.trim().is_empty());
}
