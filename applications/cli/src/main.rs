/// Melody - command-line music player host
use clap::Parser;
use melody_cli::{run, Cli, MelodyConfig};
use melody_sources::Latency;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = MelodyConfig::load(cli.config.as_deref())?;
    if cli.instant {
        config.latency = Latency::none();
    }

    // Initialize tracing (logs go to stderr, JSON output to stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let outcome = run(cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&outcome.output)?);

    if let Some(error) = outcome.error {
        anyhow::bail!(error);
    }
    Ok(())
}
