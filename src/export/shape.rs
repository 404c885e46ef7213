// src/export/shape.rs
use std::collections::HashMap;

use chrono::{DateTime, Datelike};
use serde_json::Value;

use crate::{
    config::consts::CATEGORY_NOT_FOUND,
    content::ContentType,
    record::{Category, Record, cell_text, id_key},
    report::Report,
};

/// `category_id` → `category_name`. Later duplicates overwrite earlier ones;
/// entries without an id are left out, a missing name maps to "".
#[derive(Debug, Default)]
pub struct CategoryIndex(HashMap<String, String>);

impl CategoryIndex {
    pub fn build(categories: &[Category]) -> Self {
        let map = categories
            .iter()
            .filter_map(|c| {
                let id = c.category_id.clone()?;
                Some((id, c.category_name.clone().unwrap_or_default()))
            })
            .collect();
        Self(map)
    }

    /// Name for a record's `category_id` value, or "N/A".
    pub fn name_for(&self, id: Option<&Value>) -> &str {
        id.and_then(id_key)
            .and_then(|k| self.0.get(&k))
            .map(String::as_str)
            .unwrap_or(CATEGORY_NOT_FOUND)
    }
}

/// Epoch seconds → `YYYY-MM-DDTHH:MM:SS+00:00`.
/// `None` outside years 1..=9999, where ISO-8601 text stops being four digits.
pub fn epoch_to_iso(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0)
        .filter(|dt| (1..=9999).contains(&dt.year()))
        .map(|dt| dt.to_rfc3339())
}

// Integer text, or a JSON number. Floats truncate toward zero.
fn parse_epoch(v: &Value) -> Option<i64> {
    match v {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .map(f64::trunc)
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Rewrite one record in place, ready for its CSV row.
///
/// - `added`: epoch seconds become ISO-8601 UTC; anything else stays and warns.
/// - `category_name`: always set, "N/A" when the id does not resolve.
/// - `stream_id`: dropped unless the content type is VOD.
pub fn shape_record(
    record: &mut Record,
    index: &CategoryIndex,
    content_type: &ContentType,
    report: &dyn Report,
) {
    if let Some(added) = record.get("added") {
        match parse_epoch(added).and_then(epoch_to_iso) {
            Some(iso) => {
                record.insert(s!("added"), Value::String(iso));
            }
            None => {
                let name = record.get("name").map(cell_text).unwrap_or_else(|| s!("N/A"));
                report.warn(&format!("Could not convert 'added' field for stream: {name}"));
            }
        }
    }

    let category_name = s!(index.name_for(record.get("category_id")));
    record.insert(s!("category_name"), Value::String(category_name));

    if !content_type.keeps_stream_id() {
        record.remove("stream_id");
    }
}
