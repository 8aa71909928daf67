//! Check command handler
//!
//! Print the resolved configuration and, optionally, send the model a test prompt.

use std::time::Instant;

use anyhow::Result;

use super::CommandContext;
use crate::llm::Llm;

/// Handle the `check` command
pub async fn run_check(ctx: &CommandContext, test_llm: bool) -> Result<()> {
    let llm = ctx.llm_config();
    let client = ctx.client()?;

    println!("Endpoint:     {}", client.endpoint());
    println!("Model:        {}", client.model());
    println!("Temperature:  {}", llm.temperature);
    println!("Max tokens:   {}", llm.max_tokens);
    match llm.timeout_secs {
        Some(secs) => println!("Timeout:      {}s", secs),
        None => println!("Timeout:      none"),
    }
    println!(
        "Token:        {} ({})",
        if client.has_token() { "present" } else { "missing" },
        llm.token_env
    );

    if !test_llm {
        return Ok(());
    }

    println!("\nSending test prompt...");
    let start = Instant::now();
    // Failures are reported once, by main
    let text = client
        .generate("Reply with the single word: ready", &llm.generation_options())
        .await?;
    println!("✓ Model replied in {}ms: {}", start.elapsed().as_millis(), text);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[tokio::test]
    async fn test_failed_test_prompt_is_returned_as_error() {
        let file_config = FileConfig::from_toml(
            r#"
            [llm]
            endpoint = "http://127.0.0.1:9"
            token_env = "BLOGSMITH_TEST_UNSET_TOKEN"
            "#,
        )
        .unwrap();
        let ctx = CommandContext::new(None, None, file_config);

        let err = run_check(&ctx, true).await.unwrap_err();
        assert!(err.to_string().contains("BLOGSMITH_TEST_UNSET_TOKEN"));
    }

    #[tokio::test]
    async fn test_check_without_test_prompt_succeeds() {
        let ctx = CommandContext::new(None, None, FileConfig::default());
        assert!(run_check(&ctx, false).await.is_ok());
    }
}
