//! The source of "today".
//!
//! Operations that default to the current week or year ask a [`Clock`]
//! instead of reading the wall clock directly, so tests can pin the date
//! with a [`FixedClock`].

use crate::date::Date;

/// Something that knows today's date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's calendar date.
    fn today(&self) -> Date;
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        chrono::Local::now().date_naive().into()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}
