//! Easter Sunday (Gauss's algorithm, Gregorian calendar).

use crate::date::Date;
use wd_core::errors::Result;

/// Compute the date of Easter Sunday in `year`.
///
/// Meaningful for Gregorian years (1583 onwards).  Fails only if `year`
/// lies outside the representable date range.
///
/// # Example
/// ```
/// use wd_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2013).unwrap(), Date::from_ymd(2013, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<Date> {
    let march_1 = Date::from_ymd(year, 3, 1)?;
    march_1.add_days(i64::from(easter_day_of_march(year)) - 1)
}

/// Easter Sunday as a day count from the start of March (22 = March 22,
/// 32 = April 1, up to 56 = April 25).
pub(crate) fn easter_day_of_march(year: i32) -> i32 {
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let k = year.div_euclid(100);
    let p = (8 * k + 13).div_euclid(25);
    let q = k.div_euclid(4);
    let m = (15 + k - p - q).rem_euclid(30);
    let n = (4 + k - q).rem_euclid(7);
    let d = (19 * a + m).rem_euclid(30);
    let e = (2 * b + 4 * c + 6 * d + n).rem_euclid(7);

    let mut o = 22 + d + e;
    // April 26 is never Easter; move back a week
    if o > 56 {
        o -= 7;
    }
    // April 25 with d = 28 and e = 6 is only kept for early Golden Numbers
    else if d == 28 && e == 6 && (11 * m + 11).rem_euclid(30) < 19 {
        o -= 7;
    }
    o
}
