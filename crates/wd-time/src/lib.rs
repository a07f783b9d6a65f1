//! # wd-time
//!
//! Dates, the Easter computation, holiday calendars, and work-week
//! enumeration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the per-country calendar.
pub mod calendar;

/// The table of known country calendars.
pub mod calendar_table;

/// Built-in country calendars.
pub mod calendars;

/// The source of "today".
pub mod clock;

/// `Date` type.
pub mod date;

/// Easter Sunday.
pub mod easter;

/// Fixed-date and Easter-relative holiday rules.
pub mod holiday;

/// Month of the year.
pub mod month;

/// Day of the week.
pub mod weekday;

/// Working days of an ISO week.
pub mod work_week;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, CountryCalendar, SubdivisionCalendar};
pub use calendar_table::{CalendarTable, CalendarTableBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use easter::easter_sunday;
pub use holiday::{EasterOffsetHoliday, FixedHoliday};
pub use month::Month;
pub use weekday::Weekday;
pub use work_week::{WorkWeek, WorkWeekQuery};
