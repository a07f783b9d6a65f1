//! The calendar table: every known country's holiday calendar.
//!
//! A table is assembled once with [`CalendarTableBuilder`] and is immutable
//! afterwards, so a shared reference can be read from any thread.  The
//! built-in table is available through [`CalendarTable::builtin`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::warn;

use crate::calendar::{Calendar, CountryCalendar, SubdivisionCalendar};
use crate::calendars;
use crate::date::Date;

/// Country code → holiday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<CountryCalendar>", into = "Vec<CountryCalendar>")
)]
pub struct CalendarTable {
    countries: BTreeMap<String, CountryCalendar>,
}

static BUILTIN: LazyLock<CalendarTable> = LazyLock::new(|| {
    CalendarTable::builder()
        .country(calendars::germany::germany())
        .build()
});

impl CalendarTable {
    /// Start assembling a table.
    pub fn builder() -> CalendarTableBuilder {
        CalendarTableBuilder::default()
    }

    /// The table shipped with the library.
    pub fn builtin() -> &'static CalendarTable {
        &BUILTIN
    }

    /// Calendar of one country.
    pub fn country(&self, code: &str) -> Option<&CountryCalendar> {
        self.countries.get(code)
    }

    /// Calendar of one subdivision of one country.
    pub fn subdivision(&self, country: &str, subdivision: &str) -> Option<SubdivisionCalendar<'_>> {
        self.country(country)?.subdivision(subdivision)
    }

    /// Known country codes, sorted.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Return `true` if `date` is a holiday in `subdivision` of `country`.
    ///
    /// Unknown countries and subdivisions have no holidays.
    pub fn is_holiday(&self, country: &str, subdivision: &str, date: Date) -> bool {
        self.subdivision(country, subdivision)
            .is_some_and(|cal| cal.is_holiday(date))
    }

    /// Name of the holiday on `date`, with the same lookup rules as
    /// [`is_holiday`](Self::is_holiday).
    pub fn holiday_name(&self, country: &str, subdivision: &str, date: Date) -> Option<&str> {
        let calendar = self.country(country)?;
        if !calendar.has_subdivision(subdivision) {
            return None;
        }
        calendar.holiday_on(subdivision, date)
    }

    /// All holidays in `year`, sorted by date.  Empty for unknown
    /// countries and subdivisions.
    pub fn holidays_in_year(&self, country: &str, subdivision: &str, year: i32) -> Vec<(Date, &str)> {
        self.subdivision(country, subdivision)
            .map(|cal| cal.holidays_in_year(year))
            .unwrap_or_default()
    }
}

impl From<Vec<CountryCalendar>> for CalendarTable {
    fn from(countries: Vec<CountryCalendar>) -> Self {
        countries
            .into_iter()
            .fold(CalendarTable::builder(), CalendarTableBuilder::country)
            .build()
    }
}

impl From<CalendarTable> for Vec<CountryCalendar> {
    fn from(table: CalendarTable) -> Self {
        table.countries.into_values().collect()
    }
}

/// Builder for [`CalendarTable`].
#[derive(Debug, Default)]
pub struct CalendarTableBuilder {
    countries: BTreeMap<String, CountryCalendar>,
}

impl CalendarTableBuilder {
    /// Add a country, replacing any earlier one with the same code.
    pub fn country(mut self, calendar: CountryCalendar) -> Self {
        self.countries.insert(calendar.code().to_owned(), calendar);
        self
    }

    /// Finish the table.
    ///
    /// Rules naming undeclared subdivisions are kept (they can never match)
    /// and reported as warnings.
    pub fn build(self) -> CalendarTable {
        for (code, calendar) in &self.countries {
            for subdivision in calendar.undeclared_subdivisions() {
                warn!(country = %code, subdivision, "holiday rule references an undeclared subdivision");
            }
        }
        CalendarTable {
            countries: self.countries,
        }
    }
}
