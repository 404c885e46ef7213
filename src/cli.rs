// src/cli.rs
use std::path::PathBuf;

use crate::{
    config::{Config, consts::DEFAULT_CONFIG_FILE},
    core::HttpTransport,
    error::{CliError, Error, Result},
    report::{Report, TracingReport},
    runner::{self, RunSummary},
    stamp::RunStamp,
};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub config: PathBuf,
    pub out: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            out: None,
            verbose: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Run(Params),
    Help,
}

/// Parse everything after the program name.
pub fn parse_args<I>(args: I) -> std::result::Result<Mode, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--config" => {
                params.config = PathBuf::from(args.next().ok_or_else(|| CliError::MissingValue(a.clone()))?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or_else(|| CliError::MissingValue(a.clone()))?));
            }
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => return Ok(Mode::Help),
            _ => return Err(CliError::UnknownArg(a.clone())),
        }
    }

    Ok(Mode::Run(params))
}

/// Load config, stamp the run, export every provider.
/// Config and transport set-up errors are logged and returned; everything
/// after that is best effort and ends up in the summary.
pub fn run(params: &Params) -> Result<RunSummary> {
    let report = TracingReport;

    let config = Config::load(&params.config).map_err(|e| {
        report.error(&format!("Error loading config from {}: {e}", params.config.display()));
        Error::from(e)
    })?;

    let out_dir = params
        .out
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let transport = HttpTransport::new(config.timeout()).map_err(|e| {
        report.error(&format!("Cannot set up HTTP client: {e}"));
        Error::from(e)
    })?;

    let stamp = RunStamp::now();
    tracing::debug!(providers = config.providers.len(), %stamp, out_dir = %out_dir.display(), "starting run");

    let summary = runner::run(&config.providers, &transport, &out_dir, &stamp, &report);

    report.info(&format!(
        "Done: {} file(s) written, {} failed, {} skipped",
        summary.files_written.len(),
        summary.failed_exports,
        summary.skipped.len()
    ));
    Ok(summary)
}
