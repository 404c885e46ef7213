// src/record.rs
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One channel / VOD title / series entry as the provider sent it.
/// Keys vary by provider, so this stays a plain JSON object.
pub type Record = Map<String, Value>;

/// A named grouping that a record's `category_id` points at.
///
/// Both fields are lenient: one odd entry must not sink the whole list.
/// An entry without a usable id never matches a record; a missing name
/// resolves to an empty cell.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    /// Providers send this as `"5"` or `5`; both land here as text.
    #[serde(default, deserialize_with = "opt_id")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub category_name: Option<String>,
    /// Whatever else came along (`parent_id`, …). Not used for export.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_id: Some(id.into()),
            category_name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

fn opt_id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_key(&Value::deserialize(d)?))
}

fn opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        v => Some(cell_text(&v)),
    })
}

/// Lookup key for an id-like value. Only strings and numbers qualify.
pub fn id_key(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text written into a CSV cell for one JSON value.
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays/objects (backdrop_path, …) keep their compact JSON form
        other => other.to_string(),
    }
}
