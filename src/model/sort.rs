//! Date parsing and ordering of normal tracks

use super::Track;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Order of the normal track list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Latest date first
    #[default]
    Recent,

    /// Earliest date first
    Oldest,
}

impl SortOrder {
    /// All orders, in the order the sort control lists them
    pub const ALL: [SortOrder; 2] = [SortOrder::Recent, SortOrder::Oldest];

    /// Value of the matching `<option>` element
    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Oldest => "oldest",
        }
    }

    /// Human-readable label shown in the sort control
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most Recent",
            SortOrder::Oldest => "Oldest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "recent" => Ok(SortOrder::Recent),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order: {:?}", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Parse date-like text into a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM` (first of the month) and `YYYY` (January 1st).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date);
    }
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    None
}

/// Stable in-place sort of tracks by date
///
/// Tracks without a valid date go last in both orders. Each date is parsed
/// once.
pub fn sort_tracks(tracks: &mut [Track], order: SortOrder) {
    let date = |track: &Track| track.date.as_deref().and_then(parse_date);
    match order {
        SortOrder::Recent => tracks.sort_by_cached_key(|t| {
            let date = date(t);
            (date.is_none(), Reverse(date))
        }),
        SortOrder::Oldest => tracks.sort_by_cached_key(|t| {
            let date = date(t);
            (date.is_none(), date)
        }),
    }
}
