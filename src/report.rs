// src/report.rs
use std::cell::RefCell;

/// Observability sink handed to the catalog client and the exporter.
/// Frontends decide where messages go (the binary forwards to `tracing`).
/// Methods take `&self` so one sink can be shared by every component of a run.
pub trait Report {
    /// Progress chatter ("Processing provider: …", "… saved to …").
    fn info(&self, _msg: &str) {}

    /// Recoverable oddity: empty data, an unconvertible field.
    fn warn(&self, msg: &str);

    /// A call or a file write failed; the run carries on.
    fn error(&self, msg: &str);
}

/// Forwards to the process-wide `tracing` subscriber.
pub struct TracingReport;

impl Report for TracingReport {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// A no-op sink.
pub struct NullReport;

impl Report for NullReport {
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReport {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::Error)
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.entries.borrow_mut().push((level, s!(msg)));
    }
}

impl Report for MemoryReport {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}
