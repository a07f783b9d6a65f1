//! Built-in country calendars.

pub mod germany;
