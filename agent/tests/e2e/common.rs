//! Shared helpers for E2E tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{routing::post, Json, Router};

pub const TOKEN_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";
pub const FAKE_MODEL: &str = "acme/tiny-writer";

/// The blogsmith binary cargo built for this test run
pub fn blogsmith_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_blogsmith"))
}

/// A command with no inherited config: runs in `dir`, token and
/// endpoint variables cleared so only explicit flags apply
pub fn isolated_command(dir: &Path) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(blogsmith_binary());
    cmd.current_dir(dir)
        .env_remove(TOKEN_ENV)
        .env_remove("HF_INFERENCE_URL")
        .env_remove("HF_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Requests the fake endpoint has seen
#[derive(Clone, Default)]
pub struct Seen {
    pub calls: Arc<AtomicUsize>,
    pub prompts: Arc<std::sync::Mutex<Vec<String>>>,
}

impl Seen {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Start a stand-in inference endpoint that answers each call with the
/// next entry of `replies` (the last one repeats)
pub async fn spawn_fake_endpoint(replies: Vec<&'static str>) -> (String, Seen) {
    let seen = Seen::default();
    let state = seen.clone();

    let router = Router::new().route(
        &format!("/models/{}", FAKE_MODEL),
        post(move |Json(body): Json<serde_json::Value>| {
            let state = state.clone();
            let replies = replies.clone();
            async move {
                let n = state.calls.fetch_add(1, Ordering::SeqCst);
                state
                    .prompts
                    .lock()
                    .unwrap()
                    .push(body["inputs"].as_str().unwrap_or_default().to_string());
                let reply = replies[n.min(replies.len() - 1)];
                Json(serde_json::json!([{ "generated_text": reply }]))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}
