use chrono::{DateTime, Datelike, Days, Locale, Months, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// Storage and wire format for dates.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("Not a calendar date: '{0}'")]
    InvalidDate(String),
}

/// A whole calendar day without time-of-day or timezone.
///
/// Values are immutable: every arithmetic operation returns a new date. The
/// database representation is the ISO `YYYY-MM-DD` text, so lexical order in
/// SQL matches chronological order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    sqlx::Type,
)]
#[sqlx(transparent)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Parses a strict `YYYY-MM-DD` string.
    pub fn parse(iso: &str) -> Result<Self, ParseDateError> {
        if !has_iso_shape(iso) {
            return Err(ParseDateError::InvalidFormat(iso.to_string()));
        }

        // Shape is checked above, so the slices are ASCII digits.
        let year: i32 = iso[0..4]
            .parse()
            .map_err(|_| ParseDateError::InvalidFormat(iso.to_string()))?;
        let month: u32 = iso[5..7]
            .parse()
            .map_err(|_| ParseDateError::InvalidFormat(iso.to_string()))?;
        let day: u32 = iso[8..10]
            .parse()
            .map_err(|_| ParseDateError::InvalidFormat(iso.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ParseDateError::InvalidDate(iso.to_string()))
    }

    /// Today's date as seen in the given IANA timezone.
    pub fn now(timezone: &str) -> Result<Self, CoreError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self::today_in(tz, Utc::now()))
    }

    /// The calendar day that `instant` falls on in `tz`.
    pub fn today_in(tz: Tz, instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&tz).date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shifts by `n` days. Saturates at the input if chrono's range is exceeded.
    pub fn add_days(&self, n: i64) -> Self {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// Shifts by `n` calendar months, clamping the day to the last valid day
    /// of the target month (`2025-01-31 + 1 month = 2025-02-28`).
    pub fn add_months(&self, n: i32) -> Self {
        let shifted = if n >= 0 {
            self.0.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(n.unsigned_abs()))
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// Signed whole-day difference `self - other`.
    pub fn diff_days(&self, other: &LocalDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    pub fn is_after(&self, other: &LocalDate) -> bool {
        self.0 > other.0
    }

    pub fn is_before(&self, other: &LocalDate) -> bool {
        self.0 < other.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The Monday on or before this date.
    pub fn start_of_week(&self) -> Self {
        self.add_days(-i64::from(self.0.weekday().num_days_from_monday()))
    }

    /// Whether both dates fall in the same Monday-start week.
    pub fn is_within_same_week(&self, other: &LocalDate) -> bool {
        self.0.iso_week() == other.0.iso_week()
    }

    pub fn format(&self, mode: DateFormat, locale: Locale) -> String {
        let pattern = match mode {
            DateFormat::Iso => return self.0.format(ISO_FORMAT).to_string(),
            DateFormat::Short => "%d.%m.%Y",
            DateFormat::Medium => "%-d. %b %Y",
            DateFormat::Long => "%A, %-d. %B %Y",
        };

        self.0
            .and_time(NaiveTime::default())
            .and_utc()
            .format_localized(pattern, locale)
            .to_string()
    }
}

fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for LocalDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Display styles for [`LocalDate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    Iso,
    Short,
    #[default]
    Medium,
    Long,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid date format mode: {0}")]
pub struct ParseDateFormatError(String);

impl FromStr for DateFormat {
    type Err = ParseDateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "short" => Ok(DateFormat::Short),
            "medium" => Ok(DateFormat::Medium),
            "long" => Ok(DateFormat::Long),
            _ => Err(ParseDateFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Iso => write!(f, "iso"),
            DateFormat::Short => write!(f, "short"),
            DateFormat::Medium => write!(f, "medium"),
            DateFormat::Long => write!(f, "long"),
        }
    }
}
