//! `fss-tradespace` - renders tradespace charts from a simulation results file.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fss_tradespace::adapters::chart::{ImageFormat, PlottersRenderer};
use fss_tradespace::adapters::tabular::CsvResultsReader;
use fss_tradespace::application::{ExperimentReport, RunExperimentCommand, RunExperimentHandler};
use fss_tradespace::config::{self, AppConfig, ConfigError, LoggingConfig};
use fss_tradespace::domain::foundation::DomainError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pareto tradespace charts for FSS simulation results", long_about = None)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Results file, overriding `input.path`
    #[arg(long)]
    input: Option<PathBuf>,

    /// Plan name, overriding `plan.name`
    #[arg(long)]
    plan: Option<String>,

    /// Output directory, overriding `output.dir`
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Image format, overriding `output.format`
    #[arg(long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ValidationError),

    #[error("{0}")]
    Run(#[from] DomainError),

    #[error("Failed to write report: {0}")]
    Report(#[from] serde_json::Error),
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    ImageFormat::from_extension(s).ok_or_else(|| format!("unsupported image format '{}'", s))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(input) = &cli.input {
        config.input.path = input.clone();
    }
    if let Some(plan) = &cli.plan {
        config.plan.name = plan.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    Ok(config)
}

fn run(config: &AppConfig) -> Result<ExperimentReport, CliError> {
    let plan = config.validate()?;
    info!(
        plan = %plan.name,
        input = %config.input.path.display(),
        output = %config.output.dir.display(),
        "Starting run"
    );

    let reader = CsvResultsReader::new(config.input.path.clone(), config.input.column_layout(&plan.name));
    let renderer = PlottersRenderer::new(config.output.render_settings(&config.chart));
    let handler = RunExperimentHandler::new(Arc::new(reader), Arc::new(renderer));

    let report = handler.handle(RunExperimentCommand {
        plan,
        output_dir: config.output.dir.clone(),
    })?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!(error = %e, "Aborting");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    let outcome = run(&config).and_then(|report| {
        if cli.summary {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(report)
    });

    match outcome {
        Ok(report) => {
            info!(files = report.written.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Aborting");
            ExitCode::FAILURE
        }
    }
}
