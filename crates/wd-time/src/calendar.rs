//! `Calendar` trait and the per-country holiday calendar.
//!
//! A [`CountryCalendar`] holds a country's declared subdivisions and its
//! holiday rules.  Asking it for one subdivision yields a
//! [`SubdivisionCalendar`], which implements [`Calendar`].

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::holiday::{EasterOffsetHoliday, FixedHoliday};

/// A holiday calendar for one region.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Germany (BY)"`).
    fn name(&self) -> String;

    /// Name of the holiday falling on `date`, if any.
    fn holiday_name(&self, date: Date) -> Option<&str>;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` is neither a Sunday nor a holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !date.weekday().is_rest_day() && !self.is_holiday(date)
    }
}

/// Where a matched holiday came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Fixed,
    Easter,
}

/// A country's subdivisions and holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryCalendar {
    code: String,
    name: String,
    subdivisions: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    fixed: Vec<FixedHoliday>,
    #[cfg_attr(feature = "serde", serde(default))]
    easter: Vec<EasterOffsetHoliday>,
}

impl CountryCalendar {
    /// A country with the given subdivisions and no holidays yet.
    pub fn new<I, S>(code: impl Into<String>, name: impl Into<String>, subdivisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            subdivisions: subdivisions.into_iter().map(Into::into).collect(),
            fixed: Vec::new(),
            easter: Vec::new(),
        }
    }

    /// Add a fixed-date holiday.
    pub fn with_fixed(mut self, holiday: FixedHoliday) -> Self {
        self.fixed.push(holiday);
        self
    }

    /// Add an Easter-relative holiday.
    pub fn with_easter(mut self, holiday: EasterOffsetHoliday) -> Self {
        self.easter.push(holiday);
        self
    }

    /// Country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared subdivision codes.
    pub fn subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    /// Fixed-date holiday rules.
    pub fn fixed_holidays(&self) -> &[FixedHoliday] {
        &self.fixed
    }

    /// Easter-relative holiday rules.
    pub fn easter_holidays(&self) -> &[EasterOffsetHoliday] {
        &self.easter
    }

    /// Return `true` if `subdivision` is declared for this country.
    pub fn has_subdivision(&self, subdivision: &str) -> bool {
        self.subdivisions.contains(subdivision)
    }

    /// Calendar for one declared subdivision.
    pub fn subdivision(&self, subdivision: &str) -> Option<SubdivisionCalendar<'_>> {
        self.subdivisions
            .get(subdivision)
            .map(|code| SubdivisionCalendar {
                country: self,
                subdivision: code,
            })
    }

    /// Subdivision codes referenced by holiday rules but never declared.
    ///
    /// Rules restricted to such codes can never match.
    pub fn undeclared_subdivisions(&self) -> BTreeSet<&str> {
        self.fixed
            .iter()
            .flat_map(FixedHoliday::subdivisions)
            .chain(self.easter.iter().flat_map(EasterOffsetHoliday::subdivisions))
            .filter(|code| !self.subdivisions.contains(*code))
            .map(String::as_str)
            .collect()
    }

    /// Name of the holiday observed on `date` in `subdivision`, if any.
    ///
    /// Fixed-date rules are checked first; Easter is only computed when none
    /// of them match.  The subdivision is not validated: an undeclared code
    /// simply matches nationwide holidays only.
    pub fn holiday_on(&self, subdivision: &str, date: Date) -> Option<&str> {
        debug!(country = %self.code, subdivision, %date, "checking date");
        self.match_holiday(subdivision, date).map(|(name, rule)| {
            match rule {
                Rule::Fixed => info!(%date, holiday = name, "is a fixed holiday"),
                Rule::Easter => info!(%date, holiday = name, "is a variable holiday"),
            }
            name
        })
    }

    fn match_holiday(&self, subdivision: &str, date: Date) -> Option<(&str, Rule)> {
        if let Some(h) = self
            .fixed
            .iter()
            .find(|h| h.falls_on(date) && h.applies_to(subdivision))
        {
            return Some((h.name(), Rule::Fixed));
        }

        if self.easter.is_empty() {
            return None;
        }
        let easter = easter_sunday(date.year()).ok()?;
        self.easter
            .iter()
            .find(|h| h.applies_to(subdivision) && h.date_from(easter).is_ok_and(|d| d == date))
            .map(|h| (h.name(), Rule::Easter))
    }

    /// All holidays observed in `subdivision` during `year`, sorted by date.
    ///
    /// Holidays that coincide are listed once, under the name of the rule
    /// that [`holiday_on`](Self::holiday_on) would report.
    pub fn holidays_in_year(&self, subdivision: &str, year: i32) -> Vec<(Date, &str)> {
        let fixed = self
            .fixed
            .iter()
            .filter(|h| h.applies_to(subdivision))
            .filter_map(|h| h.date_in(year));
        let easter = easter_sunday(year).ok();
        let movable = self
            .easter
            .iter()
            .filter(|h| h.applies_to(subdivision))
            .filter_map(|h| easter.and_then(|e| h.date_from(e).ok()))
            // an offset can push the date into the neighbouring year
            .filter(|d| d.year() == year);

        let dates: BTreeSet<Date> = fixed.chain(movable).collect();
        dates
            .into_iter()
            .filter_map(|d| self.match_holiday(subdivision, d).map(|(name, _)| (d, name)))
            .collect()
    }
}

/// One subdivision's view of a [`CountryCalendar`].
#[derive(Debug, Clone, Copy)]
pub struct SubdivisionCalendar<'a> {
    country: &'a CountryCalendar,
    subdivision: &'a str,
}

impl<'a> SubdivisionCalendar<'a> {
    /// The country this subdivision belongs to.
    pub fn country(&self) -> &'a CountryCalendar {
        self.country
    }

    /// Subdivision code.
    pub fn code(&self) -> &'a str {
        self.subdivision
    }

    /// All holidays observed here during `year`, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> Vec<(Date, &'a str)> {
        self.country.holidays_in_year(self.subdivision, year)
    }
}

impl Calendar for SubdivisionCalendar<'_> {
    fn name(&self) -> String {
        format!("{} ({})", self.country.name(), self.subdivision)
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.country.holiday_on(self.subdivision, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> CountryCalendar {
        CountryCalendar::new("XX", "Sample", ["A", "B"])
            .with_fixed(FixedHoliday::new("New Year's Day", Month::January, 1))
            .with_fixed(FixedHoliday::new("Founders' Day", Month::March, 3).only_in(["A"]))
            .with_easter(EasterOffsetHoliday::new("Easter Monday", 1))
            .with_easter(EasterOffsetHoliday::new("Whit Monday", 50).only_in(["B"]))
    }

    #[test]
    fn fixed_and_regional() {
        let cal = sample();
        assert_eq!(cal.holiday_on("A", date(2013, 1, 1)), Some("New Year's Day"));
        assert_eq!(cal.holiday_on("A", date(2013, 3, 3)), Some("Founders' Day"));
        assert_eq!(cal.holiday_on("B", date(2013, 3, 3)), None);
    }

    #[test]
    fn easter_relative() {
        let cal = sample();
        // Easter 2013: March 31
        assert_eq!(cal.holiday_on("A", date(2013, 4, 1)), Some("Easter Monday"));
        assert_eq!(cal.holiday_on("B", date(2013, 5, 20)), Some("Whit Monday"));
        assert_eq!(cal.holiday_on("A", date(2013, 5, 20)), None);
    }

    #[test]
    fn subdivision_view() {
        let cal = sample();
        assert!(cal.subdivision("C").is_none());
        let a = cal.subdivision("A").unwrap();
        assert_eq!(a.name(), "Sample (A)");
        assert!(a.is_holiday(date(2013, 3, 3)));
        // 2013-03-04 is a Monday
        assert!(a.is_working_day(date(2013, 3, 4)));
        // Sundays are never working days
        assert!(!a.is_working_day(date(2013, 3, 10)));
        assert!(!a.is_holiday(date(2013, 3, 10)));
    }

    #[test]
    fn holidays_in_year_sorted() {
        let cal = sample();
        let b: Vec<Date> = cal.holidays_in_year("B", 2013).into_iter().map(|(d, _)| d).collect();
        assert_eq!(b, vec![date(2013, 1, 1), date(2013, 4, 1), date(2013, 5, 20)]);
    }

    #[test]
    fn undeclared_subdivisions_are_reported() {
        let cal = sample().with_fixed(FixedHoliday::new("Typo Day", Month::June, 1).only_in(["A", "Z"]));
        assert_eq!(cal.undeclared_subdivisions().into_iter().collect::<Vec<_>>(), vec!["Z"]);
        assert!(sample().undeclared_subdivisions().is_empty());
    }
}
