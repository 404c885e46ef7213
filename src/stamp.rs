// src/stamp.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::consts::STAMP_FORMAT;

/// The single UTC instant a run is tagged with. Captured once at start-up
/// and embedded in every file name of that run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStamp(DateTime<Utc>);

impl RunStamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `YYYYMMDDTHHMMSSZ`
impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STAMP_FORMAT))
    }
}

impl FromStr for RunStamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive = NaiveDateTime::parse_from_str(s, STAMP_FORMAT)?;
        Ok(Self(naive.and_utc()))
    }
}
