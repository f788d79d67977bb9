use std::time::Instant;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use sonarsweep::cli::{Cli, OutputFormat};
use sonarsweep::config::Config;
use sonarsweep::{Report, load_readings};

fn setup_logging(verbose: bool) -> Result<()> {
    // stdout carries the metrics, so logs go to stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(input) = cli.input.clone() {
        config.input_path = input;
    }
    if let Some(window) = cli.window {
        config.window_width = usize::try_from(window).context("Window width out of range")?;
    }
    config.validate()?;
    let mode = cli.parse_mode().unwrap_or_else(|| config.parse_mode());

    info!(input = %config.input_path.display(), window = config.window_width, ?mode, "sonarsweep starting");

    let start = Instant::now();
    let readings = load_readings(&config.input_path, mode)
        .wrap_err_with(|| format!("Failed to load readings from {}", config.input_path.display()))?;
    let report = Report::compute(&readings, config.window_width);
    debug!(
        readings = readings.len(),
        windows = readings.len().saturating_sub(config.window_width.saturating_sub(1)),
        elapsed = ?start.elapsed(),
        "Computed report"
    );

    print!("{}", render(&report, cli.part, cli.format)?);
    Ok(())
}

/// Format the report for stdout
fn render(report: &Report, part: Option<u8>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match part {
            Some(p) => format!("{}\n", report.part(p).unwrap_or_default()),
            None => format!("{}\n{}\n", report.increases, report.windowed_increases),
        }),
        OutputFormat::Json => {
            let value = match part {
                Some(1) => serde_json::json!({ "increases": report.increases }),
                Some(2) => serde_json::json!({ "windowed_increases": report.windowed_increases }),
                _ => serde_json::to_value(report)?,
            };
            Ok(format!("{}\n", value))
        }
    }
}
