//! Working days of an ISO week.
//!
//! [`WorkWeek`] validates a [`WorkWeekQuery`] against a [`CalendarTable`]
//! and lists the days Monday through Saturday of the requested week that
//! are not holidays.  Sunday is never a working day.
//!
//! # Example
//! ```
//! use wd_time::{CalendarTable, Date, WorkWeek};
//!
//! let work_week = WorkWeek::new(CalendarTable::builtin());
//! // Ascension Day 2013 fell on Thursday, May 9
//! let days = work_week.work_days("DE", "BY", Some(19), Some(2013)).unwrap();
//! assert_eq!(days.len(), 5);
//! assert!(!days.contains(&Date::from_ymd(2013, 5, 9).unwrap()));
//! ```

use tracing::debug;
use wd_core::ensure;
use wd_core::errors::{Error, Field, Result};
use wd_core::{Arg, Number};

use crate::calendar::{Calendar, SubdivisionCalendar};
use crate::calendar_table::CalendarTable;
use crate::clock::{Clock, SystemClock};
use crate::date::Date;
use crate::weekday::Weekday;

/// Arguments of a work-week lookup, as received from a caller.
///
/// Each argument can be absent, null, or a value.  Absent week and year
/// default to the current ones; everything else is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkWeekQuery {
    /// Country code.
    pub country: Arg<String>,
    /// Subdivision code within the country.
    pub subdivision: Arg<String>,
    /// ISO week number, 1–53.
    pub week: Arg<Number>,
    /// Year, non-negative.
    pub year: Arg<Number>,
}

impl WorkWeekQuery {
    /// A query with every argument absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Arg::Value(country.into());
        self
    }

    /// Set the subdivision.
    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Arg::Value(subdivision.into());
        self
    }

    /// Set the week (an integer or numeric text).
    pub fn with_week(mut self, week: impl Into<Number>) -> Self {
        self.week = Arg::Value(week.into());
        self
    }

    /// Set the year (an integer or numeric text).
    pub fn with_year(mut self, year: impl Into<Number>) -> Self {
        self.year = Arg::Value(year.into());
        self
    }
}

/// Computes working days from a calendar table and a clock.
#[derive(Debug, Clone)]
pub struct WorkWeek<'a, C = SystemClock> {
    table: &'a CalendarTable,
    clock: C,
}

impl<'a> WorkWeek<'a> {
    /// Use `table`, with the system clock for defaulted week and year.
    pub fn new(table: &'a CalendarTable) -> Self {
        Self {
            table,
            clock: SystemClock,
        }
    }
}

impl<'a, C: Clock> WorkWeek<'a, C> {
    /// Replace the clock.
    pub fn with_clock<D: Clock>(self, clock: D) -> WorkWeek<'a, D> {
        WorkWeek {
            table: self.table,
            clock,
        }
    }

    /// Working days of `week`/`year` in `subdivision` of `country`.
    ///
    /// `None` for week or year means the current one.
    pub fn work_days(
        &self,
        country: &str,
        subdivision: &str,
        week: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<Date>> {
        let mut query = WorkWeekQuery::new()
            .with_country(country)
            .with_subdivision(subdivision);
        if let Some(week) = week {
            query = query.with_week(week);
        }
        if let Some(year) = year {
            query = query.with_year(year);
        }
        self.work_days_for(&query)
    }

    /// Working days for a raw query, in ascending order.
    ///
    /// Arguments are checked in order (country, state, week, year) and the
    /// first failure is returned before any date is computed.
    pub fn work_days_for(&self, query: &WorkWeekQuery) -> Result<Vec<Date>> {
        let (calendar, monday) = self
            .resolve(query)
            .inspect_err(|e| debug!(error = %e, field = ?e.field(), "rejected work-week query"))?;

        let mut days = Vec::with_capacity(Weekday::WORKING_DAYS.len());
        for weekday in Weekday::WORKING_DAYS {
            let date = monday.add_days(weekday.days_from_monday())?;
            if !calendar.is_holiday(date) {
                days.push(date);
            }
        }
        Ok(days)
    }

    fn resolve(&self, query: &WorkWeekQuery) -> Result<(SubdivisionCalendar<'a>, Date)> {
        let country = required(&query.country, Field::Country)?;
        let country = self
            .table
            .country(country)
            .ok_or(Error::NotFound(Field::Country))?;

        let subdivision = required(&query.subdivision, Field::State)?;
        let calendar = country
            .subdivision(subdivision)
            .ok_or(Error::NotFound(Field::State))?;

        let week = match &query.week {
            Arg::Absent => self.clock.today().iso_week(),
            Arg::Null => return Err(Error::InvalidArgument(Field::Week)),
            Arg::Value(n) => week_number(n)?,
        };

        let year = match &query.year {
            // the current week belongs to the ISO year, which differs from
            // the calendar year around New Year
            Arg::Absent if !query.week.is_supplied() => self.clock.today().iso_year(),
            Arg::Absent => self.clock.today().year(),
            Arg::Null => return Err(Error::InvalidArgument(Field::Year)),
            Arg::Value(n) => year_number(n)?,
        };

        let monday = Date::monday_of_iso_week(year, week)
            .map_err(|_| Error::InvalidArgument(Field::Year))?;
        // the whole week must be representable
        let last = Weekday::WORKING_DAYS.len() as i64 - 1;
        monday
            .add_days(last)
            .map_err(|_| Error::InvalidArgument(Field::Year))?;
        Ok((calendar, monday))
    }
}

fn required(arg: &Arg<String>, field: Field) -> Result<&str> {
    match arg {
        Arg::Value(v) => Ok(v),
        Arg::Absent | Arg::Null => Err(Error::MissingArgument(field)),
    }
}

fn week_number(n: &Number) -> Result<u32> {
    let week = n.to_integer().ok_or(Error::InvalidArgument(Field::Week))?;
    ensure!((1..=53).contains(&week), Error::InvalidArgument(Field::Week));
    u32::try_from(week).map_err(|_| Error::InvalidArgument(Field::Week))
}

fn year_number(n: &Number) -> Result<i32> {
    let year = n.to_integer().ok_or(Error::InvalidArgument(Field::Year))?;
    ensure!(year >= 0, Error::InvalidArgument(Field::Year));
    i32::try_from(year).map_err(|_| Error::InvalidArgument(Field::Year))
}
