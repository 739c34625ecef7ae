mod batch;
mod config;
mod email_locator;
mod errors;
mod export;
mod extract;
mod feedback;
mod llm_client;
mod models;
mod notifier;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::batch::BatchProcessor;
use crate::config::Config;
use crate::feedback::LlmFeedbackGenerator;
use crate::llm_client::LlmClient;
use crate::notifier::SmtpNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume reviewer v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let notifier = SmtpNotifier::new(&config.smtp)?;
    info!(
        "SMTP transport configured for {}:{}",
        config.smtp.host, config.smtp.port
    );

    let processor = BatchProcessor::new(
        Arc::new(LlmFeedbackGenerator::new(llm)),
        Arc::new(notifier),
        config.resume_dir.clone(),
        config.output_path.clone(),
    );

    processor.run().await?;

    Ok(())
}
