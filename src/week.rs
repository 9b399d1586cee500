//! Week-based-year computations against the Jalali day-of-year.
//!
//! Weeks run Shanbeh (day-of-week 1) through Jom'eh (7). Week 1 of a
//! week-based year is the week containing Farvardin 4, so at least four days
//! of week 1 fall inside the calendar year; the first days of Farvardin can
//! therefore belong to the previous week-based year, and the last days of
//! Esfand to the next one.

use crate::{date::PlainDate, jalali_assert, options::ResolutionMode, year, JalaliError, JalaliResult};

/// Returns the epoch day of the first day of week 1 of the provided
/// week-based year.
///
/// Computed directly from the cycle day counts so that neighbors of the
/// outermost supported years stay representable.
fn week_one_start(week_based_year: i64) -> i64 {
    let anchor = year::days_before_year(week_based_year) + 3 - year::DAYS_TO_UNIX_EPOCH;
    let days_from_shanbeh = (anchor + 5).rem_euclid(7);
    anchor - days_from_shanbeh
}

/// Returns the week-based year containing the provided date.
pub(crate) fn week_based_year(date: &PlainDate) -> i32 {
    let epoch_day = date.epoch_day();
    let calendar_year = i64::from(date.year());
    if epoch_day < week_one_start(calendar_year) {
        (calendar_year - 1) as i32
    } else if epoch_day >= week_one_start(calendar_year + 1) {
        (calendar_year + 1) as i32
    } else {
        calendar_year as i32
    }
}

/// Returns the week-of-week-based-year of the provided date, 1 through 53.
pub(crate) fn week_of_week_based_year(date: &PlainDate) -> u8 {
    let start = week_one_start(i64::from(week_based_year(date)));
    ((date.epoch_day() - start) / 7) as u8 + 1
}

/// Builds the date with the provided week-based-year, week, and day-of-week.
///
/// The anchor is Farvardin 4 of the target week-based year; the result walks
/// forward `(week - 1)` weeks from the week containing it, then adjusts to
/// the requested day-of-week.
pub(crate) fn of_week_date(
    week_based_year: i32,
    week: i64,
    day_of_week: i64,
    mode: ResolutionMode,
) -> JalaliResult<PlainDate> {
    PlainDate::check_year(i64::from(week_based_year))?;
    let (week, day_of_week) = match mode {
        ResolutionMode::Reject => {
            if !(1..=53).contains(&week) {
                return Err(
                    JalaliError::range().with_message("week-of-year must be in the range 1..=53.")
                );
            }
            if !(1..=7).contains(&day_of_week) {
                return Err(
                    JalaliError::range().with_message("day-of-week must be in the range 1..=7.")
                );
            }
            (week, day_of_week)
        }
        ResolutionMode::Constrain => (week.clamp(1, 53), day_of_week.clamp(1, 7)),
        ResolutionMode::Balance => (week, day_of_week),
    };

    let offset = week
        .checked_sub(1)
        .and_then(|weeks| weeks.checked_mul(7))
        .and_then(|days| days.checked_add(day_of_week - 1))
        .ok_or_else(|| {
            JalaliError::overflow().with_message("week offset exceeds the supported range.")
        })?;
    let date = PlainDate::from_epoch_day(week_one_start(i64::from(week_based_year)) + offset)?;

    if mode == ResolutionMode::Reject {
        // Week starts are Shanbeh-aligned, so the requested slot must land
        // on the requested weekday.
        jalali_assert!(
            i64::from(date.day_of_week()) == day_of_week,
            "week-date construction drifted off the requested day-of-week"
        );
        if self::week_based_year(&date) != week_based_year {
            return Err(JalaliError::state()
                .with_message("the requested week does not exist in the week-based year."));
        }
    }
    Ok(date)
}
