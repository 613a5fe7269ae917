use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use skycast::config::LoggingConfig;
use skycast::{SkycastConfig, SkycastError, WeatherResult, WeatherService};
use tracing_subscriber::EnvFilter;

/// Current weather and a 5-day forecast for a city, postal code or "lat,lon" pair
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about)]
struct Cli {
    /// Location to look up, e.g. "Paris", "90210 US" or "40.7128,-74.0060"
    #[arg(required = true, num_args = 1..)]
    location: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_result(result: &WeatherResult, json: bool) -> Result<()> {
    if json {
        let body = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{body}");
        return Ok(());
    }

    match result {
        WeatherResult::Report(report) => print!("{report}"),
        WeatherResult::Error { error } => eprintln!("❌ {error}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let location = cli.location.join(" ").trim().to_string();
    if location.is_empty() {
        let err = SkycastError::invalid_input("Please enter a location");
        eprintln!("{err}");
        return Ok(ExitCode::from(2));
    }

    let config = SkycastConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose);
    tracing::debug!("Fetching weather for: {}", location);

    let service = WeatherService::from_config(&config)?;
    let result = service.resolve_weather(&location).await;
    print_result(&result, cli.json)?;

    Ok(if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
