// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod client;
pub mod config;
pub mod content;
pub mod core;
pub mod csv;
pub mod error;
pub mod export;
pub mod file;
pub mod log;
pub mod record;
pub mod report;
pub mod runner;
pub mod stamp;

pub use client::CatalogClient;
pub use content::ContentType;
pub use export::{ExportOutcome, TableExporter};
pub use record::{Category, Record};
pub use report::Report;
pub use stamp::RunStamp;
