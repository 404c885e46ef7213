// src/export/header.rs
use std::collections::BTreeSet;

use crate::{content::ContentType, record::Record};

/// Canonical columns for `content_type` in their fixed order, then every
/// other key seen in any record, sorted ascending by code point.
///
/// Computed from the records as they arrive, before shaping.
pub fn build_header(records: &[Record], content_type: &ContentType) -> Vec<String> {
    let canonical = content_type.canonical_columns();

    let rest: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.keys())
        .map(String::as_str)
        .filter(|k| !canonical.contains(k))
        .collect();

    canonical
        .iter()
        .copied()
        .chain(rest)
        .map(String::from)
        .collect()
}
