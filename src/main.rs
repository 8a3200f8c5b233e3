//! MarketMind - AI-powered sales and marketing intelligence CLI
//!
#![doc = "MarketMind - AI-powered sales and marketing intelligence CLI"]
#![doc = "Main entry point for the MarketMind application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marketmind::cli::{Cli, Commands};
use marketmind::commands;
use marketmind::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Session { provider, view } => {
            if let Some(p) = &provider {
                tracing::debug!("Using provider override: {}", p);
            }
            commands::session::run_session(config, view).await?;
            Ok(())
        }
        Commands::Run {
            feature,
            input,
            target,
            provider: _,
            export,
        } => {
            tracing::info!("Running tool: {}", feature);
            commands::run::run_tool_once(config, &feature, &input, target.as_deref(), export)
                .await?;
            Ok(())
        }
        Commands::Score {
            description,
            provider: _,
        } => {
            tracing::info!("Scoring lead");
            commands::score::run_score(config, &description).await?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "marketmind=debug"
    } else {
        "marketmind=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
