//! Web command handler
//!
//! Start the web interface server.

use anyhow::Result;

use super::CommandContext;
use crate::web::{self, AppState, WebConfig};

/// Handle the `web` command
pub async fn run_web(
    ctx: &CommandContext,
    host: Option<String>,
    port: Option<u16>,
    open_browser: bool,
) -> Result<()> {
    let server = &ctx.file_config.server;
    let config = WebConfig {
        host: host.unwrap_or_else(|| server.host.clone()),
        port: port.unwrap_or(server.port),
    };

    let client = ctx.client()?;
    if !client.has_token() {
        tracing::warn!(
            "{} is not set; generation will fail with an authentication error",
            ctx.llm_config().token_env
        );
    }

    let state = AppState::new(ctx.service()?, client.endpoint(), client.has_token());

    if open_browser {
        let url = config.url();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        });
    }

    println!("Blog generator running at {}", config.url());
    web::serve(config, state).await
}
