//! Loosely typed call arguments.
//!
//! The work-week operation distinguishes an argument that was left out
//! (and is defaulted) from one that was passed as null (and is rejected).
//! [`Arg`] carries that distinction; [`Number`] carries numeric arguments
//! that may have arrived as text.

use super::data_parsers::parse_integer;

/// A possibly omitted, possibly null argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Arg<T> {
    /// Not supplied at all.
    #[default]
    Absent,
    /// Supplied, but explicitly null.
    Null,
    /// Supplied with a value.
    Value(T),
}

impl<T> Arg<T> {
    /// Return `true` unless the argument is [`Arg::Absent`].
    pub fn is_supplied(&self) -> bool {
        !matches!(self, Arg::Absent)
    }
}

/// `Some(v)` is a value, `None` is an explicit null.
impl<T> From<Option<T>> for Arg<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Arg::Null, Arg::Value)
    }
}

/// A numeric argument, either already an integer or still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    /// An integer.
    Int(i64),
    /// Unparsed text, e.g. `"20"`.
    Text(String),
}

impl Number {
    /// Integer value, or `None` if the text is not a whole number.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Text(s) => parse_integer(s),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n.into())
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Int(n.into())
    }
}

impl From<&str> for Number {
    fn from(s: &str) -> Self {
        Number::Text(s.to_owned())
    }
}

impl From<String> for Number {
    fn from(s: String) -> Self {
        Number::Text(s)
    }
}
