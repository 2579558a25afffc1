//! Send a prompt using whatever auth the environment provides.
//!
//! ```text
//! GEMINI_API_KEY=... cargo run --example generate -- "Why is the sky blue?"
//! GEMINI_API_ENDPOINT=http://localhost:8080 GEMINI_API_KEY=... cargo run --example generate
//! GOOGLE_API_KEY=... GEMINI_AUTH_TYPE=vertex-ai cargo run --example generate
//! ```
//!
//! `GEMINI_AUTH_TYPE` defaults to `gemini-api-key`; `GEMINI_MODEL` to the
//! default model. Add `--stream` to print chunks as they arrive.

use anyhow::Context;
use futures::StreamExt;
use geminicli::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    geminicli::init_tracing();

    let env = ProcessEnv;
    let auth_type: AuthType = env
        .get_non_empty("GEMINI_AUTH_TYPE")
        .as_deref()
        .unwrap_or(AuthType::UseGemini.as_str())
        .parse()?;
    validate_auth_method(auth_type, &env)?;

    let model = env.get_non_empty("GEMINI_MODEL").unwrap_or_default();
    let config = ContentGeneratorConfig::from_env(&model, auth_type, &env);

    let mut stream = false;
    let mut prompt = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--stream" {
            stream = true;
        } else {
            prompt.push(arg);
        }
    }
    let prompt = if prompt.is_empty() {
        "Say hello in one sentence.".to_string()
    } else {
        prompt.join(" ")
    };

    let generator = create_content_generator(&config)
        .await
        .context("creating content generator")?;
    let request = GenerateContentRequest::prompt(prompt);

    if stream {
        let mut chunks = generator
            .generate_content_stream(&config.model, &request)
            .await?;
        while let Some(chunk) = chunks.next().await {
            if let Some(text) = chunk?.text() {
                print!("{text}");
            }
        }
        println!();
    } else {
        let response = generator.generate_content(&config.model, &request).await?;
        println!("{}", response.text().unwrap_or_default());
        if let Some(usage) = response.usage_metadata {
            tracing::info!(
                prompt_tokens = usage.prompt_token_count,
                total_tokens = usage.total_token_count,
                "usage"
            );
        }
    }

    Ok(())
}
