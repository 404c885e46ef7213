// src/error.rs
//! Error types, one enum per concern.
//!
//! None of these abort an export run on their own: the client and the exporter
//! turn them into log lines and carry on. Only [`ConfigError`] and [`CliError`]
//! stop the process, and both happen before any provider is contacted.

use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentType;

/// Crate-level result for the binary glue (`cli::run`).
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// One HTTP GET that did not produce a body.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connect/send/read failure. The URL is stripped so credentials in the
    /// query string never reach the logs.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response for '{action}': {source}")]
    Decode {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no catalog actions for content type '{0}'")]
    Unsupported(ContentType),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A shaped record carries a key the header does not list.
    #[error("dict contains field '{field}' not in the header of {}", path.display())]
    UnknownField { field: String, path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid providers file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid or missing 'providers' section")]
    NoProviders,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown arg: {0}")]
    UnknownArg(String),
}
