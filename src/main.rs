//! remote-data demo
//!
//! Runs one simulated user fetch and prints every state it passes through.
//!
//! ```text
//!   NotAsked ──start──▶ Pending ──resolve──▶ Failure(FetchError)
//!                                     └────▶ Success(User)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use remote_data::config::{apply_overrides, load_config, ConfigError, DemoConfig};
use remote_data::fetch::{view, FetchError, SimulatedFetch, Tracker, User};
use remote_data::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "remote-data")]
#[command(about = "Simulate a user fetch and render each RemoteData state", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override fetch.delay_ms.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override fetch.success_ratio.
    #[arg(long)]
    success_ratio: Option<f64>,

    /// Print the fetched user as JSON.
    #[arg(long)]
    json: bool,
}

fn build_config(cli: &Cli) -> Result<DemoConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };
    apply_overrides(file, cli.delay_ms, cli.success_ratio)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    logging::init(&config.observability.log_level);
    metrics::set_enabled(config.observability.metrics_enabled);

    tracing::info!(
        path = ?cli.config,
        delay_ms = config.fetch.delay_ms,
        success_ratio = config.fetch.success_ratio,
        "Configuration loaded"
    );

    let tracker: Tracker<FetchError, User> = Tracker::new();
    let source = SimulatedFetch::from_config(&config.fetch);
    let outcome = view::follow(&tracker, async move { source.fetch_user().await }, |state| {
        println!("{}", view::render(state))
    })
    .await?;

    if cli.json {
        if let Some(json) = view::render_json(&outcome)? {
            println!("{}", json);
        }
    }

    Ok(ExitCode::from(view::exit_status(&outcome)))
}
