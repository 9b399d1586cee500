//! Proleptic Gregorian day-count math and the bounded Jalali alignment table.
//!
//! The Gregorian calendar appears here only as the reference coordinate for
//! epoch alignment. Conversion inside the tabulated window goes through
//! `NOWRUZ_MARCH_DAY`, a bounded per-Gregorian-year table of the March day on
//! which the Jalali year begins; outside the window both directions fall back
//! to epoch-day arithmetic. The table is generated from the 33-year-cycle
//! arithmetic anchored at the 1970-03-21 == 1349-01-01 alignment, so the two
//! paths agree wherever they overlap.

use alloc::format;
use core::ops::RangeInclusive;

use crate::{date::PlainDate, JalaliError, JalaliResult};

/// A proleptic Gregorian calendar date record.
///
/// This is an exchange record, not a calendar implementation: it exists so
/// that conversions can name their endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`, validating under the 4/100/400 leap
    /// rule.
    pub fn try_new(year: i32, month: u8, day: u8) -> JalaliResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(
                JalaliError::range().with_message("Gregorian month must be in the range 1..=12.")
            );
        }
        let length = days_in_gregorian_month(year, month);
        if day == 0 || day > length {
            return Err(JalaliError::range().with_message(format!(
                "day {day} is not valid for Gregorian month {month} of {year}."
            )));
        }
        Ok(Self { year, month, day })
    }
}

/// Returns whether the provided Gregorian year is a leap year.
#[inline]
pub(crate) fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the provided Gregorian month.
pub(crate) fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + is_gregorian_leap_year(year) as u8,
        _ => unreachable!("month is validated before the length lookup"),
    }
}

/// Converts a proleptic Gregorian date to its epoch day, counting whole
/// 400-year cycles of 146,097 days.
pub(crate) fn epoch_days_from_gregorian(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (month + 9).rem_euclid(12);
    let day_of_year = (153 * march_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Converts an epoch day to its proleptic Gregorian date.
pub(crate) fn gregorian_from_epoch_days(epoch_days: i64) -> GregorianDate {
    let shifted = epoch_days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * march_month + 2) / 5 + 1) as u8;
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    } as u8;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    GregorianDate {
        year: year as i32,
        month,
        day,
    }
}

// ==== Alignment table ====

/// Gregorian years covered by the alignment table.
pub const ALIGNMENT_WINDOW: RangeInclusive<i32> = 1960..=2060;

/// The March day of Farvardin 1 for each Gregorian year in the window.
///
/// Entry `i` is for Gregorian year `1960 + i`. A pure day-count formula
/// drifts across this data over centuries because the two calendars place
/// their leap days differently; the table keeps the alignment explicit and
/// independently testable.
#[rustfmt::skip]
const NOWRUZ_MARCH_DAY: [u8; 101] = [
    // 1960..=1969
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    // 1970..=1979
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    // 1980..=1989
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    // 1990..=1999
    21, 21, 21, 21, 21, 21, 20, 21, 21, 21,
    // 2000..=2009
    20, 21, 21, 21, 20, 21, 21, 21, 20, 21,
    // 2010..=2019
    21, 21, 20, 21, 21, 21, 20, 21, 21, 21,
    // 2020..=2029
    20, 21, 21, 21, 20, 21, 21, 21, 20, 20,
    // 2030..=2039
    21, 21, 20, 20, 21, 21, 20, 20, 21, 21,
    // 2040..=2049
    20, 20, 21, 21, 20, 20, 21, 21, 20, 20,
    // 2050..=2059
    21, 21, 20, 20, 21, 21, 20, 20, 21, 21,
    // 2060
    20,
];

/// Returns the epoch day of Farvardin 1 of the provided Jalali year, when the
/// matching Gregorian year is inside the alignment window.
fn nowruz_epoch_day(jalali_year: i32) -> Option<i64> {
    let gregorian_year = jalali_year.checked_add(621)?;
    if !ALIGNMENT_WINDOW.contains(&gregorian_year) {
        return None;
    }
    let march_day = NOWRUZ_MARCH_DAY[(gregorian_year - ALIGNMENT_WINDOW.start()) as usize];
    Some(epoch_days_from_gregorian(
        i64::from(gregorian_year),
        3,
        i64::from(march_day),
    ))
}

/// Converts a Gregorian date to Jalali, through the table inside the window.
pub(crate) fn to_jalali(gregorian: &GregorianDate) -> JalaliResult<PlainDate> {
    // Reject impossible records up front; the fields are public.
    let gregorian = GregorianDate::try_new(gregorian.year, gregorian.month, gregorian.day)?;
    let epoch_day = epoch_days_from_gregorian(
        i64::from(gregorian.year),
        i64::from(gregorian.month),
        i64::from(gregorian.day),
    );

    // A Gregorian year G overlaps Jalali years G-622 and G-621, split at
    // Nowruz.
    let candidate_year = gregorian.year - 621;
    if let Some(nowruz) = nowruz_epoch_day(candidate_year) {
        if epoch_day >= nowruz {
            return PlainDate::from_year_day(candidate_year, (epoch_day - nowruz + 1) as u16);
        }
        if let Some(previous_nowruz) = nowruz_epoch_day(candidate_year - 1) {
            return PlainDate::from_year_day(
                candidate_year - 1,
                (epoch_day - previous_nowruz + 1) as u16,
            );
        }
    }

    PlainDate::from_epoch_day(epoch_day)
}

/// Converts a Jalali date to Gregorian, through the table inside the window.
pub(crate) fn from_jalali(date: &PlainDate) -> GregorianDate {
    if let Some(nowruz) = nowruz_epoch_day(date.year()) {
        return gregorian_from_epoch_days(nowruz + i64::from(date.day_of_year()) - 1);
    }
    gregorian_from_epoch_days(date.epoch_day())
}
