//! This module implements `PlainDate` and any directly related algorithms.

use alloc::format;
use core::cmp::Ordering;
use core::str::FromStr;

use tinystr::TinyAsciiStr;

use crate::{
    gregorian::GregorianDate,
    month::Month,
    options::Unit,
    text, week, year,
    JalaliError, JalaliResult,
};

/// The smallest representable epoch day, the first day of year -999,999,999.
pub(crate) const MIN_EPOCH_DAY: i64 = -365_242_916_510;

/// The largest representable epoch day, the last day of year 999,999,999.
pub(crate) const MAX_EPOCH_DAY: i64 = 365_241_931_609;

/// A Jalali calendar date.
///
/// A `PlainDate` is never constructible in an invalid state: every
/// constructor validates and every "mutator" returns a new value. The epoch
/// day coordinate shared with other calendars fixes day 0 at 1348-10-11,
/// the Jalali date of Gregorian 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

// ==== Private API ====

impl PlainDate {
    /// Creates a new `PlainDate` without validating.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Validates the year range, raising a `Range` error on failure.
    #[inline]
    pub(crate) fn check_year(year: i64) -> JalaliResult<i32> {
        if year < -999_999_999 || year > 999_999_999 {
            return Err(
                JalaliError::range().with_message("year is not within the supported year range.")
            );
        }
        Ok(year as i32)
    }

    /// Creates a `PlainDate`, clamping an out-of-range day to the last valid
    /// day of the target month. Year and month keep their strict ranges.
    pub(crate) fn new_clamping_day(year: i64, month: u8, day: u8) -> JalaliResult<Self> {
        let year = Self::check_year(year)?;
        let month_id = Month::from_ordinal(month)?;
        let clamped = day.clamp(1, month_id.length(year::is_leap_year(year)));
        Ok(Self::new_unchecked(year, month, clamped))
    }

    /// Locates the month containing a day-of-year known to be valid.
    #[inline]
    fn from_year_day_unchecked(year: i32, day_of_year: u16) -> Self {
        let (month, day) = if day_of_year <= 186 {
            (((day_of_year - 1) / 31) as u8 + 1, ((day_of_year - 1) % 31) as u8 + 1)
        } else {
            (((day_of_year - 187) / 30) as u8 + 7, ((day_of_year - 187) % 30) as u8 + 1)
        };
        Self::new_unchecked(year, month, day)
    }

    /// Converts an epoch day known to be in range.
    #[inline]
    pub(crate) fn from_epoch_day_unchecked(epoch_day: i64) -> Self {
        let cycle_days = epoch_day + year::DAYS_TO_UNIX_EPOCH;
        let yr = year::year_for_cycle_days(cycle_days);
        let day_of_year = (cycle_days - year::days_before_year(yr) + 1) as u16;
        Self::from_year_day_unchecked(yr as i32, day_of_year)
    }
}

// ==== Public API ====

impl PlainDate {
    /// The earliest supported date, -999999999-01-01.
    pub const MIN: Self = Self::new_unchecked(-999_999_999, 1, 1);

    /// The latest supported date, +999999999-12-30 (a leap year).
    pub const MAX: Self = Self::new_unchecked(999_999_999, 12, 30);

    /// The Jalali date of epoch day 0, Gregorian 1970-01-01.
    pub const UNIX_EPOCH: Self = Self::new_unchecked(1348, 10, 11);

    /// Creates a new `PlainDate`, validating every component.
    ///
    /// The day is checked against the exact length of the target month; day
    /// 30 of Esfand in a non-leap year is the distinguished failure.
    pub fn try_new(year: i32, month: u8, day: u8) -> JalaliResult<Self> {
        Self::check_year(i64::from(year))?;
        let month_id = Month::from_ordinal(month)?;
        if day == 0 || day > 31 {
            return Err(
                JalaliError::range().with_message("day-of-month must be in the range 1..=31.")
            );
        }
        let length = month_id.length(year::is_leap_year(year));
        if day > length {
            if month == 12 && day == 30 {
                return Err(JalaliError::state()
                    .with_message(format!("day 30 of Esfand requires {year} to be a leap year.")));
            }
            return Err(JalaliError::state().with_message(format!(
                "day {day} exceeds the {length}-day length of {month_id}."
            )));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a new `PlainDate` from a year and a 1-based day-of-year.
    pub fn from_year_day(year: i32, day_of_year: u16) -> JalaliResult<Self> {
        Self::check_year(i64::from(year))?;
        if day_of_year == 0 || day_of_year > 366 {
            return Err(
                JalaliError::range().with_message("day-of-year must be in the range 1..=366.")
            );
        }
        if day_of_year == 366 && !year::is_leap_year(year) {
            return Err(JalaliError::state()
                .with_message(format!("day-of-year 366 requires {year} to be a leap year.")));
        }
        Ok(Self::from_year_day_unchecked(year, day_of_year))
    }

    /// Creates a new `PlainDate` from a signed epoch day count.
    pub fn from_epoch_day(epoch_day: i64) -> JalaliResult<Self> {
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&epoch_day) {
            return Err(
                JalaliError::range().with_message("epoch day is not within the supported range.")
            );
        }
        Ok(Self::from_epoch_day_unchecked(epoch_day))
    }

    /// Creates a new `PlainDate` from a proleptic Gregorian date.
    pub fn from_gregorian(gregorian: &GregorianDate) -> JalaliResult<Self> {
        crate::gregorian::to_jalali(gregorian)
    }

    /// Converts this date to its proleptic Gregorian equivalent.
    #[must_use]
    pub fn to_gregorian(&self) -> GregorianDate {
        crate::gregorian::from_jalali(self)
    }

    /// Creates a new `PlainDate` from a compact `yyyyMMdd` digit string.
    ///
    /// Non-digit characters are stripped first; exactly eight digits must
    /// remain.
    pub fn from_digits(digits: &str) -> JalaliResult<Self> {
        text::parse_date_digits(digits)
    }

    // ==== Field reads ====

    /// Returns this date's year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns this date's month.
    #[inline]
    #[must_use]
    pub fn month(&self) -> Month {
        match Month::from_ordinal(self.month) {
            Ok(month) => month,
            Err(_) => unreachable!("month is validated on every construction path"),
        }
    }

    /// Returns this date's 1-based month ordinal.
    #[inline]
    #[must_use]
    pub const fn month_ordinal(&self) -> u8 {
        self.month
    }

    /// Returns this date's day-of-month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns this date's 1-based day-of-year.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.month().first_day_of_year() + u16::from(self.day) - 1
    }

    /// Returns this date's day-of-week, 1 (Shanbeh) through 7 (Jom'eh).
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        ((self.epoch_day() + 5).rem_euclid(7) + 1) as u8
    }

    /// Returns this date's era: 1 for years >= 1, 0 otherwise.
    #[inline]
    #[must_use]
    pub fn era(&self) -> u8 {
        year::era_of(self.year)
    }

    /// Returns this date's year-of-era.
    #[inline]
    #[must_use]
    pub fn year_of_era(&self) -> i32 {
        year::year_of_era(self.year)
    }

    /// Returns this date's era identifier, `ap` or `before-ap`.
    #[inline]
    #[must_use]
    pub fn era_identifier(&self) -> TinyAsciiStr<16> {
        year::era_identifier(self.year)
    }

    /// Returns this date's proleptic month, `year * 12 + month - 1`.
    #[inline]
    #[must_use]
    pub fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Returns the aligned week-of-month, where week 1 starts on day 1.
    #[inline]
    #[must_use]
    pub fn aligned_week_of_month(&self) -> u8 {
        (self.day - 1) / 7 + 1
    }

    /// Returns the aligned day-of-week within the month's weeks.
    #[inline]
    #[must_use]
    pub fn aligned_day_of_week_in_month(&self) -> u8 {
        (self.day - 1) % 7 + 1
    }

    /// Returns the aligned week-of-year, where week 1 starts on Farvardin 1.
    #[inline]
    #[must_use]
    pub fn aligned_week_of_year(&self) -> u8 {
        ((self.day_of_year() - 1) / 7) as u8 + 1
    }

    /// Returns the aligned day-of-week within the year's weeks.
    #[inline]
    #[must_use]
    pub fn aligned_day_of_week_in_year(&self) -> u8 {
        ((self.day_of_year() - 1) % 7) as u8 + 1
    }

    /// Returns the week-based year this date belongs to.
    ///
    /// Week 1 of a week-based year is the week containing Farvardin 4, with
    /// weeks running Shanbeh through Jom'eh.
    #[inline]
    #[must_use]
    pub fn week_based_year(&self) -> i32 {
        week::week_based_year(self)
    }

    /// Returns the week-of-week-based-year, 1 through 53.
    #[inline]
    #[must_use]
    pub fn week_of_week_based_year(&self) -> u8 {
        week::week_of_week_based_year(self)
    }

    /// Returns the number of days in this date's month.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.month().length(self.in_leap_year())
    }

    /// Returns the number of days in this date's year.
    #[inline]
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        year::days_in_year(self.year)
    }

    /// Returns whether this date's year is a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        year::is_leap_year(self.year)
    }

    /// Returns this date's signed epoch day count.
    #[inline]
    #[must_use]
    pub fn epoch_day(&self) -> i64 {
        year::days_before_year(i64::from(self.year)) + i64::from(self.day_of_year()) - 1
            - year::DAYS_TO_UNIX_EPOCH
    }

    // ==== Field writes ====

    /// Returns this date with the year replaced, clamping the day to the
    /// target month's last valid day.
    pub fn with_year(&self, year: i32) -> JalaliResult<Self> {
        Self::new_clamping_day(i64::from(year), self.month, self.day)
    }

    /// Returns this date with the month replaced, clamping the day to the
    /// target month's last valid day.
    pub fn with_month(&self, month: u8) -> JalaliResult<Self> {
        Self::new_clamping_day(i64::from(self.year), month, self.day)
    }

    /// Returns this date with the day-of-month replaced, failing strictly on
    /// an invalid day.
    pub fn with_day_of_month(&self, day: u8) -> JalaliResult<Self> {
        Self::try_new(self.year, self.month, day)
    }

    /// Returns this date with the day-of-year replaced, failing strictly on
    /// an invalid day.
    pub fn with_day_of_year(&self, day_of_year: u16) -> JalaliResult<Self> {
        Self::from_year_day(self.year, day_of_year)
    }

    // ==== Arithmetic ====

    /// Returns this date shifted by the provided number of days.
    pub fn plus_days(&self, days: i64) -> JalaliResult<Self> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .epoch_day()
            .checked_add(days)
            .filter(|e| (MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(e))
            .ok_or_else(|| {
                JalaliError::overflow().with_message("day addition exceeds the supported range.")
            })?;
        Ok(Self::from_epoch_day_unchecked(epoch_day))
    }

    /// Returns this date shifted by the provided number of weeks.
    pub fn plus_weeks(&self, weeks: i64) -> JalaliResult<Self> {
        let days = weeks.checked_mul(7).ok_or_else(|| {
            JalaliError::overflow().with_message("week addition exceeds the supported range.")
        })?;
        self.plus_days(days)
    }

    /// Returns this date shifted by the provided number of months.
    ///
    /// The day-of-month is preserved unless invalid for the target month, in
    /// which case it clamps to that month's last day; the result never rolls
    /// into the following month.
    pub fn plus_months(&self, months: i64) -> JalaliResult<Self> {
        let proleptic = self.proleptic_month().checked_add(months).ok_or_else(|| {
            JalaliError::overflow().with_message("month addition exceeds the supported range.")
        })?;
        let year = proleptic.div_euclid(12);
        let month = proleptic.rem_euclid(12) as u8 + 1;
        Self::new_clamping_day(year, month, self.day)
            .map_err(|_| JalaliError::overflow().with_message("month addition exceeds the supported range."))
    }

    /// Returns this date shifted by the provided number of years, clamping
    /// Esfand 30 to Esfand 29 when the target year is not leap.
    pub fn plus_years(&self, years: i64) -> JalaliResult<Self> {
        let year = i64::from(self.year).checked_add(years).ok_or_else(|| {
            JalaliError::overflow().with_message("year addition exceeds the supported range.")
        })?;
        Self::new_clamping_day(year, self.month, self.day)
            .map_err(|_| JalaliError::overflow().with_message("year addition exceeds the supported range."))
    }

    /// Returns this date shifted back by the provided number of days.
    pub fn minus_days(&self, days: i64) -> JalaliResult<Self> {
        self.plus_days(negated(days)?)
    }

    /// Returns this date shifted back by the provided number of weeks.
    pub fn minus_weeks(&self, weeks: i64) -> JalaliResult<Self> {
        self.plus_weeks(negated(weeks)?)
    }

    /// Returns this date shifted back by the provided number of months.
    pub fn minus_months(&self, months: i64) -> JalaliResult<Self> {
        self.plus_months(negated(months)?)
    }

    /// Returns this date shifted back by the provided number of years.
    pub fn minus_years(&self, years: i64) -> JalaliResult<Self> {
        self.plus_years(negated(years)?)
    }

    /// Returns the number of epoch days from this date to `other`.
    #[inline]
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i64 {
        other.epoch_day() - self.epoch_day()
    }

    /// Returns the whole number of the provided date unit from this date to
    /// `other`, truncated toward zero.
    pub fn until(&self, other: &Self, unit: Unit) -> JalaliResult<i64> {
        match unit {
            Unit::Day => Ok(self.days_until(other)),
            Unit::Week => Ok(self.days_until(other) / 7),
            Unit::Month => Ok(self.until_months(other)),
            Unit::Year => Ok(self.until_years(other)),
            _ => Err(JalaliError::range()
                .with_message("a date difference requires a date-based unit.")),
        }
    }

    fn until_years(&self, other: &Self) -> i64 {
        let sign = match self.cmp(other) {
            Ordering::Less => 1,
            Ordering::Equal => return 0,
            Ordering::Greater => -1,
        };
        let mut years = 0;
        let mut candidate = i64::from(other.year) - i64::from(self.year);
        if candidate != 0 {
            candidate -= sign;
        }
        loop {
            let probe = (i64::from(self.year) + candidate, self.month, self.day);
            if date_surpasses(probe, other, sign) {
                break;
            }
            years = candidate;
            candidate += sign;
        }
        years
    }

    fn until_months(&self, other: &Self) -> i64 {
        let sign = match self.cmp(other) {
            Ordering::Less => 1,
            Ordering::Equal => return 0,
            Ordering::Greater => -1,
        };
        let mut months = 0;
        let mut candidate = other.proleptic_month() - self.proleptic_month();
        if candidate != 0 {
            candidate -= sign;
        }
        loop {
            let proleptic = self.proleptic_month() + candidate;
            let probe = (
                proleptic.div_euclid(12),
                proleptic.rem_euclid(12) as u8 + 1,
                self.day,
            );
            if date_surpasses(probe, other, sign) {
                break;
            }
            months = candidate;
            candidate += sign;
        }
        months
    }
}

/// Returns whether the probe triple lies strictly beyond `other` in the walk
/// direction. The probe's day may be invalid for its month; the lexicographic
/// comparison does not care.
#[inline]
fn date_surpasses(probe: (i64, u8, u8), other: &PlainDate, sign: i64) -> bool {
    let ordering = probe.cmp(&(i64::from(other.year), other.month, other.day));
    ordering as i64 * sign == 1
}

#[inline]
fn negated(value: i64) -> JalaliResult<i64> {
    value.checked_neg().ok_or_else(|| {
        JalaliError::overflow().with_message("negated amount exceeds the supported range.")
    })
}

impl FromStr for PlainDate {
    type Err = JalaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_date(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch_anchor() {
        assert_eq!(
            PlainDate::from_epoch_day(0).unwrap(),
            PlainDate::UNIX_EPOCH
        );
        assert_eq!(PlainDate::UNIX_EPOCH.epoch_day(), 0);
        assert_eq!(PlainDate::UNIX_EPOCH.day_of_year(), 287);
    }

    #[test]
    fn epoch_days_around_anchor() {
        // Fixture offsets cross the 1348/1349 year boundary; 1348 is not leap.
        let cases = [
            (1, (1348, 10, 12)),
            (62, (1348, 12, 13)),
            (78, (1348, 12, 29)),
            (79, (1349, 1, 1)),
            (79 + 30, (1349, 1, 31)),
            (79 + 31, (1349, 2, 1)),
            (79 + 185, (1349, 6, 31)),
            (79 + 186, (1349, 7, 1)),
            (79 + 364, (1349, 12, 29)),
            (79 + 365, (1350, 1, 1)),
            (-1, (1348, 10, 10)),
            (-287, (1347, 12, 29)),
            (-288, (1347, 12, 28)),
        ];
        for (epoch, (y, m, d)) in cases {
            let date = PlainDate::from_epoch_day(epoch).unwrap();
            assert_eq!((date.year(), date.month_ordinal(), date.day()), (y, m, d));
            assert_eq!(date.epoch_day(), epoch);
        }
    }

    #[test]
    fn construction_validates_exact_month_length() {
        assert!(PlainDate::try_new(1400, 0, 1).is_err());
        assert!(PlainDate::try_new(1400, 13, 1).is_err());
        assert!(PlainDate::try_new(1400, 1, 0).is_err());
        assert!(PlainDate::try_new(1400, 1, 32).is_err());
        // Mehr has 30 days; a blanket 31 check would accept this.
        assert!(PlainDate::try_new(1400, 7, 31).is_err());
        assert!(PlainDate::try_new(1400, 6, 31).is_ok());

        use crate::error::ErrorKind;
        let err = PlainDate::try_new(1400, 13, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = PlainDate::try_new(1404, 12, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(PlainDate::try_new(1403, 12, 30).is_ok());
    }

    #[test]
    fn year_day_construction() {
        let date = PlainDate::from_year_day(1400, 187).unwrap();
        assert_eq!((date.month_ordinal(), date.day()), (7, 1));
        let date = PlainDate::from_year_day(1400, 186).unwrap();
        assert_eq!((date.month_ordinal(), date.day()), (6, 31));
        let date = PlainDate::from_year_day(1403, 366).unwrap();
        assert_eq!((date.month_ordinal(), date.day()), (12, 30));
        assert!(PlainDate::from_year_day(1404, 366).is_err());
        assert!(PlainDate::from_year_day(1404, 0).is_err());
        assert!(PlainDate::from_year_day(1404, 367).is_err());
    }

    #[test]
    fn day_of_year_round_trip() {
        for year in [1403, 1404] {
            for doy in 1..=year::days_in_year(year) {
                let date = PlainDate::from_year_day(year, doy).unwrap();
                assert_eq!(date.day_of_year(), doy);
            }
        }
    }

    #[test]
    fn day_of_week_is_saturday_based() {
        // Epoch day 0 is Thursday (Panjshanbeh).
        assert_eq!(PlainDate::UNIX_EPOCH.day_of_week(), 6);
        // Two days later is Saturday (Shanbeh), the first day of the week.
        assert_eq!(
            PlainDate::from_epoch_day(2).unwrap().day_of_week(),
            1
        );
        assert_eq!(
            PlainDate::from_epoch_day(-5).unwrap().day_of_week(),
            1
        );
    }

    #[test]
    fn field_write_clamps_day() {
        let date = PlainDate::try_new(1403, 12, 30).unwrap();
        assert_eq!(date.with_year(1404).unwrap().day(), 29);
        let date = PlainDate::try_new(1400, 1, 31).unwrap();
        assert_eq!(date.with_month(7).unwrap().day(), 30);
        // Strict day writes fail instead of clamping.
        assert!(date.with_day_of_month(32).is_err());
        assert!(PlainDate::try_new(1404, 12, 1)
            .unwrap()
            .with_day_of_month(30)
            .is_err());
    }

    #[test]
    fn month_end_clamp_on_year_addition() {
        let date = PlainDate::try_new(1403, 12, 29).unwrap();
        let next = date.plus_years(1).unwrap();
        assert_eq!(
            (next.year(), next.month_ordinal(), next.day()),
            (1404, 12, 29)
        );

        let date = PlainDate::try_new(1403, 12, 30).unwrap();
        let next = date.plus_years(1).unwrap();
        assert_eq!(
            (next.year(), next.month_ordinal(), next.day()),
            (1404, 12, 29)
        );
    }

    #[test]
    fn month_addition_clamps_without_rolling() {
        let date = PlainDate::try_new(1403, 6, 31).unwrap();
        let next = date.plus_months(1).unwrap();
        assert_eq!((next.month_ordinal(), next.day()), (7, 30));

        let date = PlainDate::try_new(1403, 12, 30).unwrap();
        let next = date.plus_months(12).unwrap();
        assert_eq!(
            (next.year(), next.month_ordinal(), next.day()),
            (1404, 12, 29)
        );
        let next = date.plus_months(13).unwrap();
        assert_eq!(
            (next.year(), next.month_ordinal(), next.day()),
            (1405, 1, 30)
        );
        let prev = date.plus_months(-12).unwrap();
        assert_eq!(
            (prev.year(), prev.month_ordinal(), prev.day()),
            (1402, 12, 29)
        );
    }

    #[test]
    fn arithmetic_overflow_is_checked() {
        use crate::error::ErrorKind;
        let err = PlainDate::MAX.plus_days(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        let err = PlainDate::MIN.minus_days(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        let err = PlainDate::MAX.plus_years(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        let err = PlainDate::UNIX_EPOCH.plus_days(i64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(PlainDate::MIN.epoch_day(), MIN_EPOCH_DAY);
        assert_eq!(PlainDate::MAX.epoch_day(), MAX_EPOCH_DAY);
        assert!(PlainDate::MAX.in_leap_year());
        assert!(PlainDate::from_epoch_day(MAX_EPOCH_DAY + 1).is_err());
        assert!(PlainDate::from_epoch_day(MIN_EPOCH_DAY - 1).is_err());
        assert!(PlainDate::try_new(1_000_000_000, 1, 1).is_err());
    }

    #[test]
    fn until_in_date_units() {
        let start = PlainDate::try_new(1400, 1, 15).unwrap();
        let end = PlainDate::try_new(1402, 3, 14).unwrap();
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 2);
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 25);
        assert_eq!(end.until(&start, Unit::Month).unwrap(), -25);
        assert_eq!(
            start.until(&end, Unit::Day).unwrap(),
            start.days_until(&end)
        );
        assert_eq!(
            start.until(&end, Unit::Week).unwrap(),
            start.days_until(&end) / 7
        );
        assert!(start.until(&end, Unit::Hour).is_err());

        // A clamped month boundary truncates rather than overshooting.
        let start = PlainDate::try_new(1403, 12, 30).unwrap();
        let end = PlainDate::try_new(1404, 12, 29).unwrap();
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 11);
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 0);
    }

    #[test]
    fn until_exact_year_boundary() {
        let start = PlainDate::try_new(1400, 5, 10).unwrap();
        let end = PlainDate::try_new(1401, 5, 10).unwrap();
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 1);
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 12);
        assert_eq!(end.until(&start, Unit::Year).unwrap(), -1);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = PlainDate::try_new(1400, 5, 10).unwrap();
        let b = PlainDate::try_new(1400, 6, 1).unwrap();
        let c = PlainDate::try_new(1401, 1, 1).unwrap();
        assert!(a < b && b < c);
        assert_eq!(a, PlainDate::try_new(1400, 5, 10).unwrap());
    }

    #[test]
    fn aligned_week_fields() {
        let date = PlainDate::try_new(1400, 1, 1).unwrap();
        assert_eq!(date.aligned_week_of_month(), 1);
        assert_eq!(date.aligned_day_of_week_in_month(), 1);
        assert_eq!(date.aligned_week_of_year(), 1);
        let date = PlainDate::try_new(1400, 1, 8).unwrap();
        assert_eq!(date.aligned_week_of_month(), 2);
        assert_eq!(date.aligned_day_of_week_in_month(), 1);
        let date = PlainDate::try_new(1400, 1, 31).unwrap();
        assert_eq!(date.aligned_week_of_month(), 5);
        assert_eq!(date.aligned_day_of_week_in_month(), 3);
        let date = PlainDate::try_new(1400, 12, 29).unwrap();
        assert_eq!(date.day_of_year(), 365);
        assert_eq!(date.aligned_week_of_year(), 53);
    }

    #[test]
    fn proleptic_month_and_eras() {
        let date = PlainDate::try_new(1400, 3, 1).unwrap();
        assert_eq!(date.proleptic_month(), 1400 * 12 + 2);
        assert_eq!(date.era(), 1);
        assert_eq!(date.year_of_era(), 1400);
        let date = PlainDate::try_new(0, 1, 1).unwrap();
        assert_eq!(date.era(), 0);
        assert_eq!(date.year_of_era(), 1);
        assert_eq!(date.proleptic_month(), 0);
        let date = PlainDate::try_new(-2, 4, 1).unwrap();
        assert_eq!(date.year_of_era(), 3);
    }

    proptest! {
        #[test]
        fn epoch_day_round_trip(epoch in MIN_EPOCH_DAY..=MAX_EPOCH_DAY) {
            let date = PlainDate::from_epoch_day(epoch).unwrap();
            prop_assert_eq!(date.epoch_day(), epoch);
        }

        #[test]
        fn ymd_round_trip(year in -10_000i32..=10_000, month in 1u8..=12, day in 1u8..=31) {
            if let Ok(date) = PlainDate::try_new(year, month, day) {
                prop_assert_eq!(
                    (date.year(), date.month_ordinal(), date.day()),
                    (year, month, day)
                );
            }
        }

        #[test]
        fn plus_days_inverse(epoch in -1_000_000i64..=1_000_000, days in -1_000_000i64..=1_000_000) {
            let date = PlainDate::from_epoch_day(epoch).unwrap();
            let there = date.plus_days(days).unwrap();
            prop_assert_eq!(there.plus_days(-days).unwrap(), date);
            prop_assert_eq!(date.days_until(&there), days);
        }

        #[test]
        fn plus_months_inverse_holds_unclamped(
            epoch in -1_000_000i64..=1_000_000,
            months in -10_000i64..=10_000,
        ) {
            let date = PlainDate::from_epoch_day(epoch).unwrap();
            let there = date.plus_months(months).unwrap();
            // The inverse only fails where the forward step clamped Esfand.
            if there.day() == date.day() {
                prop_assert_eq!(there.plus_months(-months).unwrap(), date);
            }
        }

        #[test]
        fn epoch_day_order_matches_date_order(
            a in -2_000_000i64..=2_000_000,
            b in -2_000_000i64..=2_000_000,
        ) {
            let da = PlainDate::from_epoch_day(a).unwrap();
            let db = PlainDate::from_epoch_day(b).unwrap();
            prop_assert_eq!(a.cmp(&b), da.cmp(&db));
        }
    }
}
