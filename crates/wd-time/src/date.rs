//! `Date` type.
//!
//! A calendar date without time of day or time zone, backed by
//! [`chrono::NaiveDate`] (proleptic Gregorian).  Weeks follow ISO 8601:
//! they start on Monday and week 1 is the week holding the year's first
//! Thursday.

use crate::month::Month;
use crate::weekday::Weekday;
use chrono::{Datelike, Days, NaiveDate};
use wd_core::errors::{Error, Result};

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Date(NaiveDate);

impl Date {
    /// Earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// Latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a valid date")))
    }

    /// Monday of ISO week `week` of `year`.
    ///
    /// The Monday of week 1 is advanced by `week - 1` weeks, so week 53 of
    /// a year that only has 52 ISO weeks lands on week 1 of the next year.
    pub fn monday_of_iso_week(year: i32, week: u32) -> Result<Self> {
        if week == 0 {
            return Err(Error::Date("ISO week numbers start at 1".into()));
        }
        let first = NaiveDate::from_isoywd_opt(year, 1, chrono::Weekday::Mon)
            .ok_or_else(|| Error::Date(format!("ISO year {year} out of range")))?;
        Date(first).add_days(7 * (i64::from(week) - 1))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the month as an enum.
    pub fn month_of_year(&self) -> Month {
        Month::ALL[self.0.month0() as usize]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Return the ISO 8601 week number (1–53).
    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    /// Return the ISO 8601 week-numbering year, which differs from
    /// [`year`](Self::year) around New Year.
    pub fn iso_year(&self) -> i32 {
        self.0.iso_week().year()
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).  Returns an error if
    /// the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} {n:+} days is out of range")))
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<NaiveDate>()
            .map(Date)
            .map_err(|e| Error::Date(format!("cannot parse '{s}' as a date: {e}")))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
