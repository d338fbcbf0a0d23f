//! Start time of an event, canonically 24-hour `HH:MM`

use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::errors::{AppError, AppResult};

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)?$").expect("valid event time regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventTime(NaiveTime);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl EventTime {
    /// Normalize `H:MM`, `HH:MM` or either with an `AM`/`PM` suffix.
    ///
    /// With a suffix the hour must be 1-12, without one 0-23. Minutes must be
    /// 00-59.
    pub fn normalize(raw: &str) -> AppResult<Self> {
        let input = raw.trim();
        let caps = TIME_RE.captures(input).ok_or_else(|| {
            AppError::InvalidTime(format!(
                "'{}' is not a valid time. Use HH:MM or HH:MM AM/PM.",
                input
            ))
        })?;

        let hours: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidTime(format!("'{}' has an invalid hour", input)))?;
        let minutes: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidTime(format!("'{}' has invalid minutes", input)))?;
        let meridiem = caps.get(3).map(|m| {
            if m.as_str().eq_ignore_ascii_case("pm") {
                Meridiem::Pm
            } else {
                Meridiem::Am
            }
        });

        let hours = match meridiem {
            Some(period) => {
                if !(1..=12).contains(&hours) {
                    return Err(AppError::InvalidTime(
                        "Hours must be 1-12 for AM/PM format".to_string(),
                    ));
                }
                match (period, hours) {
                    (Meridiem::Pm, h) if h < 12 => h + 12,
                    (Meridiem::Am, 12) => 0,
                    (_, h) => h,
                }
            }
            None => {
                if hours > 23 {
                    return Err(AppError::InvalidTime("Hours must be 0-23".to_string()));
                }
                hours
            }
        };

        NaiveTime::from_hms_opt(hours, minutes, 0)
            .map(Self)
            .ok_or_else(|| AppError::InvalidTime("Minutes must be 00-59".to_string()))
    }

    /// Parse the stored `HH:MM` form only.
    pub fn from_canonical(value: &str) -> AppResult<Self> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .map(Self)
            .map_err(|_| AppError::InvalidTime(format!("'{}' is not in HH:MM form", value)))
    }

    /// Seconds are not part of an event time.
    pub fn from_stored(time: NaiveTime) -> Self {
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl std::fmt::Display for EventTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EventTime::from_canonical(&raw).map_err(serde::de::Error::custom)
    }
}
