// src/content.rs
use std::{convert::Infallible, fmt, str::FromStr};

/// Which slice of a provider's catalog we are dealing with.
///
/// Drives three things: the API actions to call, the canonical CSV column
/// order, and whether `stream_id` survives shaping. Tags we do not know
/// parse to `Other`, which has no actions and no canonical columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Live,
    Vod,
    Series,
    Other(String),
}

const LIVE_COLUMNS: &[&str] = &[
    "category_name",
    "name",
    "num",
    "stream_icon",
    "epg_channel_id",
    "is_adult",
];

const VOD_COLUMNS: &[&str] = &[
    "category_name",
    "name",
    "stream_id",
    "rating",
    "added",
    "stream_icon",
];

const SERIES_COLUMNS: &[&str] = &[
    "category_name",
    "name",
    "series_id",
    "rating",
    "cast",
    "director",
    "genre",
    "plot",
    "cover",
];

impl ContentType {
    /// Export order used by the runner.
    pub const KNOWN: [ContentType; 3] = [ContentType::Live, ContentType::Vod, ContentType::Series];

    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Live => "live",
            ContentType::Vod => "vod",
            ContentType::Series => "series",
            ContentType::Other(tag) => tag,
        }
    }

    /// Columns that lead every header, in this exact order.
    pub fn canonical_columns(&self) -> &'static [&'static str] {
        match self {
            ContentType::Live => LIVE_COLUMNS,
            ContentType::Vod => VOD_COLUMNS,
            ContentType::Series => SERIES_COLUMNS,
            ContentType::Other(_) => &[],
        }
    }

    /// Only VOD rows keep their `stream_id`.
    pub fn keeps_stream_id(&self) -> bool {
        matches!(self, ContentType::Vod)
    }

    pub fn streams_action(&self) -> Option<&'static str> {
        match self {
            ContentType::Live => Some("get_live_streams"),
            ContentType::Vod => Some("get_vod_streams"),
            ContentType::Series => Some("get_series"),
            ContentType::Other(_) => None,
        }
    }

    pub fn categories_action(&self) -> Option<&'static str> {
        match self {
            ContentType::Live => Some("get_live_categories"),
            ContentType::Vod => Some("get_vod_categories"),
            ContentType::Series => Some("get_series_categories"),
            ContentType::Other(_) => None,
        }
    }

    /// "Live", "Vod", "Series": first letter upper-cased, for log lines.
    pub fn label(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => s!(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "live" => ContentType::Live,
            "vod" => ContentType::Vod,
            "series" => ContentType::Series,
            other => ContentType::Other(s!(other)),
        })
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(ct) => ct,
            Err(never) => match never {},
        }
    }
}
