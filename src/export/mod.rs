// src/export/mod.rs
//! Records + categories → one CSV file.
//!
//! Layout per file:
//! - header: canonical columns for the content type, then every other key
//!   seen in the batch, sorted ([`header::build_header`])
//! - one row per record after [`shape::shape_record`]; missing keys are
//!   empty cells
//!
//! Best effort: an empty batch is skipped with a warning, and any write
//! failure is logged and returned as [`ExportOutcome::Failed`]. Neither stops
//! the caller from moving on to the next file.

pub mod header;
pub mod shape;

use std::{
    collections::HashSet,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    content::ContentType,
    csv, file,
    error::ExportError,
    record::{Category, Record, cell_text},
    report::Report,
    stamp::RunStamp,
};

pub use header::build_header;
pub use shape::{CategoryIndex, shape_record};

#[derive(Debug)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing to write; no file was created.
    Skipped,
    Failed(ExportError),
}

impl ExportOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Written { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExportOutcome::Failed(_))
    }
}

pub struct TableExporter<'a> {
    out_dir: PathBuf,
    report: &'a dyn Report,
}

impl<'a> TableExporter<'a> {
    pub fn new(out_dir: impl Into<PathBuf>, report: &'a dyn Report) -> Self {
        Self { out_dir: out_dir.into(), report }
    }

    /// Write `{out_dir}/{base_filename}_{stamp}.csv`. Consumes the records;
    /// they are shaped in place on the way out.
    pub fn export(
        &self,
        records: Vec<Record>,
        categories: &[Category],
        content_type: &ContentType,
        base_filename: &str,
        stamp: &RunStamp,
    ) -> ExportOutcome {
        if records.is_empty() {
            self.report.warn(&format!("No {content_type} stream data to save."));
            return ExportOutcome::Skipped;
        }

        let path = file::export_path(&self.out_dir, base_filename, stamp);
        match self.write_table(&path, records, categories, content_type) {
            Ok(rows) => {
                self.report.info(&format!(
                    "{} stream data saved to {}",
                    content_type.label(),
                    path.display()
                ));
                ExportOutcome::Written { path, rows }
            }
            Err(e) => {
                self.report
                    .error(&format!("Error saving {content_type} stream data to CSV: {e}"));
                ExportOutcome::Failed(e)
            }
        }
    }

    fn write_table(
        &self,
        path: &Path,
        mut records: Vec<Record>,
        categories: &[Category],
        content_type: &ContentType,
    ) -> Result<usize, ExportError> {
        let index = CategoryIndex::build(categories);
        let header = build_header(&records, content_type);
        let known: HashSet<&str> = header.iter().map(String::as_str).collect();

        let mut out = file::create_table(path)?;
        csv::write_row(&mut out, &header)?;

        for record in records.iter_mut() {
            shape_record(record, &index, content_type, self.report);

            if let Some(field) = record.keys().find(|k| !known.contains(k.as_str())) {
                return Err(ExportError::UnknownField {
                    field: field.clone(),
                    path: path.to_path_buf(),
                });
            }

            let cells = header
                .iter()
                .map(|col| record.get(col).map(cell_text).unwrap_or_default());
            csv::write_row(&mut out, cells)?;
        }

        out.flush()?;
        Ok(records.len())
    }
}
