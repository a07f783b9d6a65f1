//! Holiday rules.
//!
//! A rule either pins a holiday to a month and day ([`FixedHoliday`]) or
//! places it a number of days before or after Easter Sunday
//! ([`EasterOffsetHoliday`]).  Either kind may be restricted to some of the
//! country's subdivisions; an empty restriction means nationwide.

use std::collections::BTreeSet;

use crate::date::Date;
use crate::month::Month;
use wd_core::errors::Result;

fn observed_in(subdivisions: &BTreeSet<String>, subdivision: &str) -> bool {
    subdivisions.is_empty() || subdivisions.contains(subdivision)
}

fn code_set<I, S>(codes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    codes.into_iter().map(Into::into).collect()
}

/// A holiday on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHoliday {
    name: String,
    month: Month,
    day: u8,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeSet::is_empty")
    )]
    subdivisions: BTreeSet<String>,
}

impl FixedHoliday {
    /// A nationwide holiday on `day` of `month`.
    pub fn new(name: impl Into<String>, month: Month, day: u8) -> Self {
        Self {
            name: name.into(),
            month,
            day,
            subdivisions: BTreeSet::new(),
        }
    }

    /// Restrict the holiday to the given subdivisions.
    pub fn only_in<I, S>(mut self, subdivisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdivisions = code_set(subdivisions);
        self
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Month of the holiday.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Subdivisions observing the holiday (empty = all).
    pub fn subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    /// Return `true` if the holiday is observed in `subdivision`.
    pub fn applies_to(&self, subdivision: &str) -> bool {
        observed_in(&self.subdivisions, subdivision)
    }

    /// Return `true` if `date` has this holiday's month and day.
    pub fn falls_on(&self, date: Date) -> bool {
        date.month_of_year() == self.month && date.day_of_month() == u32::from(self.day)
    }

    /// The holiday's date in `year`, or `None` if the day does not exist
    /// that year (February 29 outside leap years).
    pub fn date_in(&self, year: i32) -> Option<Date> {
        Date::from_ymd(year, self.month.number(), u32::from(self.day)).ok()
    }
}

/// A holiday at a fixed distance from Easter Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EasterOffsetHoliday {
    name: String,
    offset: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeSet::is_empty")
    )]
    subdivisions: BTreeSet<String>,
}

impl EasterOffsetHoliday {
    /// A nationwide holiday `offset` days after Easter Sunday (negative =
    /// before).
    pub fn new(name: impl Into<String>, offset: i32) -> Self {
        Self {
            name: name.into(),
            offset,
            subdivisions: BTreeSet::new(),
        }
    }

    /// Restrict the holiday to the given subdivisions.
    pub fn only_in<I, S>(mut self, subdivisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdivisions = code_set(subdivisions);
        self
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days from Easter Sunday.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Subdivisions observing the holiday (empty = all).
    pub fn subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    /// Return `true` if the holiday is observed in `subdivision`.
    pub fn applies_to(&self, subdivision: &str) -> bool {
        observed_in(&self.subdivisions, subdivision)
    }

    /// The holiday's date given that year's Easter Sunday.
    pub fn date_from(&self, easter_sunday: Date) -> Result<Date> {
        easter_sunday.add_days(i64::from(self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn nationwide_fixed_holiday() {
        let h = FixedHoliday::new("Labour Day", Month::May, 1);
        assert!(h.applies_to("BY"));
        assert!(h.applies_to("HH"));
        assert!(h.falls_on(date(2013, 5, 1)));
        assert!(!h.falls_on(date(2013, 5, 2)));
        assert_eq!(h.date_in(2013), Some(date(2013, 5, 1)));
    }

    #[test]
    fn regional_fixed_holiday() {
        let h = FixedHoliday::new("Epiphany", Month::January, 6).only_in(["BW", "BY", "ST"]);
        assert!(h.applies_to("BY"));
        assert!(!h.applies_to("HH"));
        assert_eq!(h.subdivisions().len(), 3);
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        let h = FixedHoliday::new("Leap Day", Month::February, 29);
        assert_eq!(h.date_in(2012), Some(date(2012, 2, 29)));
        assert_eq!(h.date_in(2013), None);
    }

    #[test]
    fn easter_offsets() {
        let easter = date(2013, 3, 31);
        let good_friday = EasterOffsetHoliday::new("Good Friday", -2);
        let ascension = EasterOffsetHoliday::new("Ascension Day", 39);
        assert_eq!(good_friday.date_from(easter).unwrap(), date(2013, 3, 29));
        assert_eq!(ascension.date_from(easter).unwrap(), date(2013, 5, 9));

        let corpus_christi = EasterOffsetHoliday::new("Corpus Christi", 60).only_in(["BY"]);
        assert!(corpus_christi.applies_to("BY"));
        assert!(!corpus_christi.applies_to("BE"));
    }
}
