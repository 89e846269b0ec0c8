//! ODR - Entry Point
//!
//! Binary entry point for the offer dependency resolver. Loads a scenario
//! file, resolves it, and prints the construction order or the failure
//! report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use odr::OutputFormat;

/// Command line interface for the offer dependency resolver
#[derive(Parser, Debug)]
#[command(name = "odr")]
#[command(about = "ODR - Resolve declarative object scenarios")]
#[command(version)]
pub struct Cli {
    /// Path to the scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    pub scenario: PathBuf,

    /// Output format for the resolution report
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Default log level (overridden by ODR_LOG)
    #[arg(long, default_value = "warn")]
    pub log: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    odr::logging::init_logging(&cli.log)?;
    let resolved = odr::run(&cli.scenario, cli.format)?;
    Ok(if resolved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
