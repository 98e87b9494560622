use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MonthKeyError {
    #[error("month key must look like YYYY-MM, got '{0}'")]
    Malformed(String),

    #[error("month must be between 01 and 12, got {0}")]
    MonthOutOfRange(u32),
}

/// Calendar-month bucket for the usage counter, rendered as `YYYY-MM`.
///
/// Always supplied by the caller; nothing in the counter reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        MonthKey::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_uses_one_based_month() {
        let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(key.to_string(), "2026-01");
    }

    #[test]
    fn test_parse_round_trip() {
        let key: MonthKey = "2025-12".parse().unwrap();
        assert_eq!(key, MonthKey::new(2025, 12).unwrap());
        assert_eq!(key.to_string(), "2025-12");
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert_eq!(
            "2025-13".parse::<MonthKey>(),
            Err(MonthKeyError::MonthOutOfRange(13))
        );
        assert!("2025-1".parse::<MonthKey>().is_err());
        assert!("202512".parse::<MonthKey>().is_err());
        assert!("abcd-01".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let key = MonthKey::new(2026, 10).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""2026-10""#);
        let back: MonthKey = serde_json::from_str(r#""2026-10""#).unwrap();
        assert_eq!(back, key);
    }
}
