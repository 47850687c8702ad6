//! phrase-coach server binary

use clap::Parser;
use phrase_coach::utils::logging::init_logging;
use phrase_coach::{CoachConfig, HttpServer};
use std::process::ExitCode;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in production.
    let dotenv = dotenvy::dotenv();

    let config = CoachConfig::parse();
    init_logging(config.log_format);

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line bind hints stay readable
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CoachConfig) -> anyhow::Result<()> {
    config.validate()?;

    if !config.has_credential() {
        warn!("OPENAI_API_KEY is not set; /api/coach will answer with a configuration error");
    }
    info!(
        transcribe_model = %config.openai.transcribe_model,
        analysis_model = %config.openai.analysis_model,
        "Provider models"
    );

    HttpServer::new(config)?.start().await?;
    Ok(())
}
