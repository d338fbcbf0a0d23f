//! Calendar date of an event, canonically `YYYY-MM-DD`

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::errors::{AppError, AppResult};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

// Date-only layouts accepted on input, tried in order
const DATE_FORMATS: [&str; 16] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%A %B %d %Y",
    "%a %b %d %Y",
    "%a, %d %b %Y",
];

// Local date-time layouts; the date component is kept as written
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventDate(NaiveDate);

impl EventDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse any accepted date spelling into the canonical date.
    ///
    /// Inputs carrying a UTC offset (RFC 3339, RFC 2822) are converted to UTC
    /// first. Bare years and year-months resolve to the first day.
    pub fn normalize(raw: &str) -> AppResult<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(invalid(raw));
        }

        let parsed = parse_with_offset(input)
            .or_else(|| parse_local(input))
            .or_else(|| parse_partial(input))
            .ok_or_else(|| invalid(raw))?;

        if !(0..=9999).contains(&parsed.year()) {
            return Err(invalid(raw));
        }
        Ok(Self(parsed))
    }

    /// Parse the stored `YYYY-MM-DD` form only.
    pub fn from_canonical(value: &str) -> AppResult<Self> {
        NaiveDate::parse_from_str(value, CANONICAL_FORMAT)
            .map(Self)
            .map_err(|_| invalid(value))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn invalid(raw: &str) -> AppError {
    AppError::InvalidDate(format!(
        "'{}' is not a valid date. Please provide a valid date.",
        raw.trim()
    ))
}

fn parse_with_offset(input: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_rfc2822(input))
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn parse_local(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn parse_partial(input: &str) -> Option<NaiveDate> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match input.split_once('-') {
        None if input.len() == 4 && digits(input) => {
            NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1)
        }
        Some((year, month)) if year.len() == 4 && digits(year) && digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        _ => None,
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EventDate::from_canonical(&raw).map_err(serde::de::Error::custom)
    }
}
