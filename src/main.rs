use clap::Parser;
use folio::{cli::Cli, config::Settings, github::GitHubClient, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    let client = GitHubClient::from_settings(&settings)?;
    let result = folio::cli::commands::run(&client, cli.user.as_deref(), cli.command).await;

    match client.rate_limit() {
        Some(rate) if rate.is_exhausted() => warn!(
            "GitHub rate limit exhausted ({}/{}), resets at {}",
            rate.remaining,
            rate.limit,
            rate.reset_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| rate.reset.to_string())
        ),
        Some(rate) => info!(
            "GitHub rate limit: {}/{} remaining ({} used)",
            rate.remaining, rate.limit, rate.used
        ),
        None => info!("GitHub rate limit unknown"),
    }

    result
}
