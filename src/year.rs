//! Year-level equations for the Jalali calendar.
//!
//! The proleptic leap rule is the 33-year cycle: a year is leap exactly when
//! `year mod 33` falls in {1, 5, 9, 13, 17, 22, 26, 30}, giving 8 leap years
//! per cycle (12053 days). The rule is applied uniformly over the whole year
//! range; it does not special-case the era boundary.

use tinystr::{tinystr, TinyAsciiStr};

/// The supported proleptic year range.
pub const YEAR_RANGE: core::ops::RangeInclusive<i32> = -999_999_999..=999_999_999;

/// Years per leap cycle.
pub(crate) const CYCLE_YEARS: i64 = 33;

/// Days per leap cycle: 33 * 365 + 8.
pub(crate) const CYCLE_DAYS: i64 = 12_053;

/// Days from the cycle origin (Farvardin 1 of year 0) to epoch day 0
/// (1348-10-11, the Jalali date of Gregorian 1970-01-01).
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 492_633;

/// Count of leap residues strictly below each residue of the 33-year cycle.
const LEAPS_BELOW_RESIDUE: [i64; 33] = [
    0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7,
    8, 8,
];

/// Returns whether the provided year is a leap year.
#[inline]
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    matches!(
        (year as i64).rem_euclid(CYCLE_YEARS),
        1 | 5 | 9 | 13 | 17 | 22 | 26 | 30
    )
}

/// Returns the number of days in the provided year.
#[inline]
#[must_use]
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the era of the provided year: 1 for years >= 1, 0 otherwise.
#[inline]
#[must_use]
pub fn era_of(year: i32) -> u8 {
    (year >= 1) as u8
}

/// Returns the year-of-era of the provided year.
///
/// Era 1 counts years 1, 2, .. forward; era 0 counts 1 − year, so year 0 is
/// year 1 of era 0.
#[inline]
#[must_use]
pub fn year_of_era(year: i32) -> i32 {
    if year >= 1 {
        year
    } else {
        1 - year
    }
}

/// Returns the era identifier of the provided year.
#[inline]
#[must_use]
pub fn era_identifier(year: i32) -> TinyAsciiStr<16> {
    if year >= 1 {
        tinystr!(16, "ap")
    } else {
        tinystr!(16, "before-ap")
    }
}

/// Returns the number of leap years in `[0, year)`, negative when `year < 0`.
#[inline]
pub(crate) fn leap_years_before(year: i64) -> i64 {
    let cycles = year.div_euclid(CYCLE_YEARS);
    let residue = year.rem_euclid(CYCLE_YEARS);
    8 * cycles + LEAPS_BELOW_RESIDUE[residue as usize]
}

/// Days from the cycle origin (year 0, Farvardin 1) to Farvardin 1 of `year`.
#[inline]
pub(crate) fn days_before_year(year: i64) -> i64 {
    365 * year + leap_years_before(year)
}

/// Locates the year containing the provided day count from the cycle origin.
///
/// The estimate is derived from the mean cycle-year length and is off by at
/// most one, so the refinement loops run a bounded number of steps.
#[inline]
pub(crate) fn year_for_cycle_days(days: i64) -> i64 {
    let mut year = (days * CYCLE_YEARS).div_euclid(CYCLE_DAYS);
    while days < days_before_year(year) {
        year -= 1;
    }
    while days >= days_before_year(year + 1) {
        year += 1;
    }
    year
}
