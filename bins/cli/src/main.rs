//! Dutch pay calculator
//!
//! Command line entry point: one-shot splits and interactive sessions.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dutchpay_core::calculator::CalculatorDefaults;
use dutchpay_core::split::RoundingUnit;
use dutchpay_shared::config::{LogFormat, LoggingConfig};
use dutchpay_shared::{AppConfig, AppError, AppResult};
use dutchpay_term::render::to_json;
use dutchpay_term::{Renderer, Session, SessionMode, SimpleRequest, SplitRequest};

#[derive(Parser, Debug)]
#[clap(name = "dutchpay", author, version, about = "Split a bill evenly after rounding")]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split among named participants; the remainder is shared by extra payers
    Split {
        #[clap(long, help = "Total amount, e.g. 10000")]
        total: String,

        #[clap(long, value_delimiter = ',', conflicts_with = "count", help = "Participant names in order")]
        names: Vec<String>,

        #[clap(long, help = "Number of default-named participants")]
        count: Option<usize>,

        #[clap(long, value_delimiter = ',', help = "Participants (name or ID) left out of the split")]
        exclude: Vec<String>,

        #[clap(long, help = "Rounding unit: 100, 1000 or 10000")]
        unit: Option<RoundingUnit>,

        #[clap(long, help = "How many people share the remainder (1-4)")]
        extra: Option<usize>,

        #[clap(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Split among a number of people; one person absorbs the remainder
    Simple {
        #[clap(long, help = "Total amount, e.g. 10000")]
        total: String,

        #[clap(long, help = "Number of people")]
        people: Option<String>,

        #[clap(long, help = "Rounding unit: 100, 1000 or 10000")]
        unit: Option<RoundingUnit>,

        #[clap(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Edit the form line by line
    Interactive {
        #[clap(long, help = "Use the people-count form instead of named participants")]
        simple: bool,
    },
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}

fn run(command: Commands, config: &AppConfig) -> AppResult<()> {
    let defaults = CalculatorDefaults::try_from(&config.calculator)
        .map_err(|e| AppError::Config(e.to_string()))?;
    let renderer = Renderer::from_config(&config.display);
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Split {
            total,
            names,
            count,
            exclude,
            unit,
            extra,
            json,
        } => {
            let state = SplitRequest {
                total,
                names,
                count,
                exclude,
                rounding_unit: unit,
                extra_payers: extra,
            }
            .into_state(&defaults)?;
            let report = state.report();
            info!(has_result = report.has_result, "split computed");
            if json {
                writeln!(stdout, "{}", to_json(&report)?)?;
            } else {
                write!(stdout, "{}", renderer.render_split(&report))?;
            }
        }
        Commands::Simple {
            total,
            people,
            unit,
            json,
        } => {
            let state = SimpleRequest {
                total,
                people,
                rounding_unit: unit,
            }
            .into_state(&defaults);
            let report = state.report();
            info!(has_result = report.has_result, "simple split computed");
            if json {
                writeln!(stdout, "{}", to_json(&report)?)?;
            } else {
                write!(stdout, "{}", renderer.render_simple(&report))?;
            }
        }
        Commands::Interactive { simple } => {
            let mode = if simple {
                SessionMode::Simple
            } else {
                SessionMode::Split
            };
            let stdin = io::stdin().lock();
            Session::new(stdin, stdout, renderer, &defaults, mode).run()?;
        }
    }

    Ok(())
}

/// Prints the error and returns its exit code.
fn failure(err: &AppError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code())
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration; failures exit with the config error code
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return Ok(failure(&err)),
    };

    // Initialize tracing
    init_tracing(&config.logging)?;

    match run(args.command, &config) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(code = err.error_code(), error = %err, "command failed");
            Ok(failure(&err))
        }
    }
}
