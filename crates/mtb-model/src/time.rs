//! Date precision types used across the MTB file.
//!
//! Clinical dates come in two precisions: full dates (`yyyy-MM-dd`, plain
//! [`chrono::NaiveDate`]) and year-months (`yyyy-MM`). The wire format is
//! lenient for year-months: a full date is accepted and reduced to its
//! year-month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// A calendar month, e.g. a patient's birth month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ModelError> {
        if !(1..=12).contains(&month) {
            return Err(ModelError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction, so this cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ModelError;

    /// Parse `yyyy-MM`, accepting `yyyy-MM-dd` as a lenient fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((year, month)) = split_year_month(trimmed) {
            return Self::new(year, month)
                .map_err(|_| ModelError::InvalidYearMonth(s.to_string()));
        }

        // Lenient fallback: a full date reduces to its year-month.
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::from(date));
        }

        Err(ModelError::InvalidYearMonth(s.to_string()))
    }
}

fn split_year_month(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?))
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A period with a start and an optional open end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period<T> {
    pub start: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<T>,
}

impl<T> Period<T> {
    pub fn open(start: T) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: T, end: T) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}
