// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    client::CatalogClient,
    config::Provider,
    content::ContentType,
    core::Transport,
    export::{ExportOutcome, TableExporter},
    file::export_base_name,
    report::Report,
    stamp::RunStamp,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Exports that started but could not be written.
    pub failed_exports: usize,
    /// (provider, content type) pairs skipped for lack of streams or categories.
    pub skipped: Vec<(String, ContentType)>,
}

/// Top-level runner: every provider in order; live, vod, series for each.
/// Nothing in here aborts the run; problems are reported and skipped.
pub fn run<T: Transport>(
    providers: &[Provider],
    transport: &T,
    out_dir: &Path,
    stamp: &RunStamp,
    report: &dyn Report,
) -> RunSummary {
    let exporter = TableExporter::new(out_dir, report);
    let mut summary = RunSummary::default();

    for provider in providers {
        report.info(&format!("Processing provider: {}", provider.name));
        let client = CatalogClient::new(provider, transport, report);

        for content_type in &ContentType::KNOWN {
            export_content(&client, &exporter, provider, content_type, stamp, report, &mut summary);
        }
    }

    summary
}

/* ---------------- One provider × one content type ---------------- */

fn export_content<T: Transport>(
    client: &CatalogClient<'_, T>,
    exporter: &TableExporter<'_>,
    provider: &Provider,
    content_type: &ContentType,
    stamp: &RunStamp,
    report: &dyn Report,
    summary: &mut RunSummary,
) {
    // Failed calls were already reported by the client; here they just mean "nothing".
    let streams = client.streams(content_type).unwrap_or_default();
    if streams.is_empty() {
        report.error(&format!(
            "No {content_type} streams found for {} or error in API request.",
            provider.name
        ));
    }

    let categories = client.categories(content_type).unwrap_or_default();
    if categories.is_empty() {
        report.error(&format!(
            "No {content_type} categories found for {} or error in API request.",
            provider.name
        ));
    }

    if streams.is_empty() || categories.is_empty() {
        summary.skipped.push((provider.name.clone(), content_type.clone()));
        return;
    }

    let base = export_base_name(&provider.name, content_type.as_str());
    match exporter.export(streams, &categories, content_type, &base, stamp) {
        ExportOutcome::Written { path, .. } => summary.files_written.push(path),
        ExportOutcome::Failed(_) => summary.failed_exports += 1,
        ExportOutcome::Skipped => summary.skipped.push((provider.name.clone(), content_type.clone())),
    }
}
