//! Rock, Paper, Scissors in the terminal.
//!
//! Reads one choice per line from stdin, shows both hands at once and the
//! result after the reveal delay. Logs go to stderr.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rps::{GameConfig, VERSION, presentation::run_session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env().context("reading configuration")?;

    info!("Rock Paper Scissors v{}", VERSION);

    let (mut resolver, _seed) = config.resolver();
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let summary = run_session(input, &mut output, &mut resolver, &config)
        .await
        .context("running session")?;

    info!("Played {} rounds ({} rejected inputs)", summary.rounds, summary.rejected);
    Ok(())
}
