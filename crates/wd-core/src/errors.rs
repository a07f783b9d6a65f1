//! Error types for workdays.
//!
//! Every failure of the work-week operations is one of three kinds, each
//! tagged with the [`Field`] that caused it.  Callers match on the variant
//! instead of the message text.

use thiserror::Error;

/// The argument an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Country code (e.g. `"DE"`).
    Country,
    /// Subdivision (federal state) code, e.g. `"BY"`.
    State,
    /// ISO week number.
    Week,
    /// Calendar year.
    Year,
}

impl Field {
    /// Lower-case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::State => "state",
            Field::Week => "week",
            Field::Year => "year",
        }
    }

    fn requirement(&self) -> &'static str {
        match self {
            Field::Week => "has to be a positive number [1..53]",
            Field::Year => "has to be a positive number",
            Field::Country | Field::State => "is invalid",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The top-level error type used throughout workdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent or null.
    #[error("{0} not defined")]
    MissingArgument(Field),

    /// The argument names something the calendar table does not know.
    #[error("{0} not found")]
    NotFound(Field),

    /// The argument is present but not acceptable.
    #[error("{0} {req}", req = .0.requirement())]
    InvalidArgument(Field),

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Return the field this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::MissingArgument(f) | Error::NotFound(f) | Error::InvalidArgument(f) => Some(*f),
            Error::Date(_) => None,
        }
    }
}

/// Shorthand `Result` type used throughout workdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` early if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::{Error, Field}};
/// fn week(n: i64) -> wd_core::errors::Result<u32> {
///     ensure!((1..=53).contains(&n), Error::InvalidArgument(Field::Week));
///     Ok(n as u32)
/// }
/// assert_eq!(week(20), Ok(20));
/// assert_eq!(week(0), Err(Error::InvalidArgument(Field::Week)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
