//! Work-week tests: argument validation, defaulting, and the German
//! reference weeks.

use proptest::prelude::*;
use wd_core::{Arg, Error, Field};
use wd_time::{CalendarTable, Date, FixedClock, SystemClock, WorkWeek, WorkWeekQuery};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn work_week() -> WorkWeek<'static, FixedClock> {
    // Wednesday of week 21/2013
    WorkWeek::new(CalendarTable::builtin()).with_clock(FixedClock(date(2013, 5, 22)))
}

fn bavaria() -> WorkWeekQuery {
    WorkWeekQuery::new().with_country("DE").with_subdivision("BY")
}

fn count(state: &str, week: u32, year: i32) -> usize {
    work_week()
        .work_days("DE", state, Some(week), Some(year))
        .unwrap()
        .len()
}

// ─── Country ──────────────────────────────────────────────────────────────────

#[test]
fn test_missing_country() {
    let ww = work_week();
    assert_eq!(
        ww.work_days_for(&WorkWeekQuery::new()),
        Err(Error::MissingArgument(Field::Country))
    );
    let q = WorkWeekQuery {
        country: Arg::Null,
        ..WorkWeekQuery::new()
    };
    assert_eq!(ww.work_days_for(&q), Err(Error::MissingArgument(Field::Country)));
}

#[test]
fn test_unknown_country() {
    let q = WorkWeekQuery::new().with_country("XX");
    assert_eq!(work_week().work_days_for(&q), Err(Error::NotFound(Field::Country)));
}

// ─── State ────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_state() {
    let ww = work_week();
    let q = WorkWeekQuery::new().with_country("DE");
    assert_eq!(ww.work_days_for(&q), Err(Error::MissingArgument(Field::State)));
    let q = WorkWeekQuery {
        subdivision: Arg::Null,
        ..q
    };
    assert_eq!(ww.work_days_for(&q), Err(Error::MissingArgument(Field::State)));
}

#[test]
fn test_unknown_state() {
    let q = WorkWeekQuery::new().with_country("DE").with_subdivision("xx");
    assert_eq!(work_week().work_days_for(&q), Err(Error::NotFound(Field::State)));
    assert_eq!(
        work_week().work_days("DE", "by", Some(1), Some(2013)),
        Err(Error::NotFound(Field::State))
    );
}

// ─── Week ─────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_weeks() {
    let ww = work_week();
    let invalid = Err(Error::InvalidArgument(Field::Week));

    let null = WorkWeekQuery {
        week: Arg::Null,
        ..bavaria()
    };
    assert_eq!(ww.work_days_for(&null), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week("abc")), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week("")), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week(0)), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week(-1)), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week(54)), invalid);
    assert_eq!(ww.work_days("DE", "BY", Some(0), Some(2013)), invalid);
}

#[test]
fn test_valid_weeks() {
    let ww = work_week();
    assert!(!ww.work_days_for(&bavaria().with_week(1)).unwrap().is_empty());
    assert!(!ww.work_days_for(&bavaria().with_week(53)).unwrap().is_empty());
    assert!(!ww.work_days_for(&bavaria().with_week("20")).unwrap().is_empty());
}

#[test]
fn test_current_week_when_absent() {
    let ww = work_week();
    let days = ww.work_days_for(&bavaria()).unwrap();
    // Whit Monday, May 20
    assert_eq!(days.len(), 5);
    assert_eq!(days[0], date(2013, 5, 21));
}

#[test]
fn test_system_clock_default() {
    let ww = WorkWeek::new(CalendarTable::builtin()).with_clock(SystemClock);
    assert!(!ww.work_days("DE", "BY", None, None).unwrap().is_empty());
}

// ─── Year ─────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_years() {
    let ww = work_week();
    let invalid = Err(Error::InvalidArgument(Field::Year));

    let null = WorkWeekQuery {
        year: Arg::Null,
        ..bavaria().with_week("1")
    };
    assert_eq!(ww.work_days_for(&null), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week("1").with_year("abc")), invalid);
    assert_eq!(ww.work_days_for(&bavaria().with_week(1).with_year(-1000)), invalid);
}

#[test]
fn test_current_year_when_absent() {
    let ww = work_week();
    assert_eq!(
        ww.work_days("DE", "BY", Some(1), None).unwrap(),
        ww.work_days("DE", "BY", Some(1), Some(2013)).unwrap()
    );
}

#[test]
fn test_year_zero_is_accepted() {
    assert!(!work_week()
        .work_days("DE", "BY", Some(10), Some(0))
        .unwrap()
        .is_empty());
}

// ─── General holidays ─────────────────────────────────────────────────────────

#[test]
fn test_christmas_week_2012() {
    assert_eq!(count("BY", 52, 2012), 4);
}

#[test]
fn test_new_years_week_2013() {
    assert_eq!(count("BY", 1, 2013), 5);
}

#[test]
fn test_good_friday_week_2013() {
    assert_eq!(count("BY", 13, 2013), 5);
}

#[test]
fn test_easter_monday_week_2013() {
    assert_eq!(count("BY", 14, 2013), 5);
}

#[test]
fn test_ascension_week_2013() {
    assert_eq!(count("BY", 19, 2013), 5);
    let days = work_week()
        .work_days("DE", "BY", Some(19), Some(2013))
        .unwrap();
    assert_eq!(
        days,
        vec![
            date(2013, 5, 6),
            date(2013, 5, 7),
            date(2013, 5, 8),
            date(2013, 5, 10),
            date(2013, 5, 11),
        ]
    );
}

#[test]
fn test_ordinary_week_has_six_days() {
    let days = work_week()
        .work_days("DE", "BY", Some(23), Some(2013))
        .unwrap();
    assert_eq!(days.len(), 6);
    assert_eq!(days[0], date(2013, 6, 3));
    assert_eq!(days[5], date(2013, 6, 8));
}

// ─── Regional holidays ────────────────────────────────────────────────────────

#[test]
fn test_holy_three_kings_2012() {
    assert_eq!(count("BY", 1, 2012), 5);
    assert_eq!(count("HH", 1, 2012), 6);
}

#[test]
fn test_corpus_christi_2013() {
    // Thursday, May 30
    assert_eq!(count("BY", 22, 2013), 5);
    assert_eq!(count("BE", 22, 2013), 6);
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn idempotent_and_ordered(week in 1u32..=53, year in 1900i32..2200, idx in 0usize..16) {
        let ww = work_week();
        let state = CalendarTable::builtin()
            .country("DE")
            .unwrap()
            .subdivisions()
            .iter()
            .nth(idx)
            .unwrap();
        let first = ww.work_days("DE", state, Some(week), Some(year)).unwrap();
        let second = ww.work_days("DE", state, Some(week), Some(year)).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= 6);
        prop_assert!(first.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(first.iter().all(|d| !d.weekday().is_rest_day()));
        prop_assert!(first
            .iter()
            .all(|d| !CalendarTable::builtin().is_holiday("DE", state, *d)));
    }
}
