//! This module implements `PlainDateTime` and its day-overflow-aware
//! arithmetic.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::{
    date::PlainDate,
    options::Unit,
    text,
    time::PlainTime,
    JalaliError, JalaliResult, NS_PER_DAY,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// A Jalali calendar date paired with a nanosecond-precision time-of-day.
///
/// The time-of-day never represents a whole day or more; arithmetic overflow
/// carries into the date through [`PlainDate::plus_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDateTime {
    pub(crate) date: PlainDate,
    pub(crate) time: PlainTime,
}

impl PlainDateTime {
    /// Creates a new `PlainDateTime` from already-validated parts.
    #[inline]
    #[must_use]
    pub const fn new(date: PlainDate, time: PlainTime) -> Self {
        Self { date, time }
    }

    /// Creates a new `PlainDateTime`, validating every component.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> JalaliResult<Self> {
        let date = PlainDate::try_new(year, month, day)?;
        let time = PlainTime::try_new(hour, minute, second, millisecond, microsecond, nanosecond)?;
        Ok(Self::new(date, time))
    }

    /// Creates a new `PlainDateTime` from an epoch second count and an opaque
    /// UTC offset in seconds.
    pub fn from_epoch_second(
        epoch_second: i64,
        nanosecond: u32,
        offset_seconds: i64,
    ) -> JalaliResult<Self> {
        if nanosecond >= 1_000_000_000 {
            return Err(
                JalaliError::range().with_message("nanosecond-of-second must be less than 10^9.")
            );
        }
        let local_second = epoch_second.checked_add(offset_seconds).ok_or_else(|| {
            JalaliError::overflow().with_message("epoch second exceeds the supported range.")
        })?;
        let date = PlainDate::from_epoch_day(local_second.div_euclid(SECONDS_PER_DAY))?;
        let second_of_day = local_second.rem_euclid(SECONDS_PER_DAY) as u64;
        let time =
            PlainTime::from_nanosecond_of_day(second_of_day * 1_000_000_000 + u64::from(nanosecond))?;
        Ok(Self::new(date, time))
    }

    /// Returns this date-time's epoch second count relative to an opaque UTC
    /// offset in seconds. Subsecond components are truncated.
    #[inline]
    #[must_use]
    pub fn to_epoch_second(&self, offset_seconds: i64) -> i64 {
        self.date.epoch_day() * SECONDS_PER_DAY + i64::from(self.time.second_of_day())
            - offset_seconds
    }

    /// Creates a new `PlainDateTime` from a compact digit string of 8 to 23
    /// digits, `yyyyMMdd[hh[mm[ss[nnnnnnnnn]]]]`.
    ///
    /// Non-digit characters are stripped first.
    pub fn from_digits(digits: &str) -> JalaliResult<Self> {
        text::parse_date_time_digits(digits)
    }

    /// Returns this date-time's date.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> PlainDate {
        self.date
    }

    /// Returns this date-time's time-of-day.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> PlainTime {
        self.time
    }

    /// Returns this date-time with the date replaced.
    #[inline]
    #[must_use]
    pub const fn with_date(&self, date: PlainDate) -> Self {
        Self::new(date, self.time)
    }

    /// Returns this date-time with the time-of-day replaced.
    #[inline]
    #[must_use]
    pub const fn with_time(&self, time: PlainTime) -> Self {
        Self::new(self.date, time)
    }

    // ==== Arithmetic ====

    /// Adds a signed nanosecond delta, carrying whole days into the date with
    /// floor division so negative deltas still land in `[0, day)`.
    pub fn plus_nanoseconds(&self, nanoseconds: i128) -> JalaliResult<Self> {
        let (carry, time) = self.time.add(nanoseconds);
        let days = i64::try_from(carry).map_err(|_| {
            JalaliError::overflow().with_message("time addition exceeds the supported range.")
        })?;
        Ok(Self::new(self.date.plus_days(days)?, time))
    }

    /// Returns this date-time shifted by the provided number of hours.
    pub fn plus_hours(&self, hours: i64) -> JalaliResult<Self> {
        self.plus_nanoseconds(i128::from(hours) * 3_600_000_000_000)
    }

    /// Returns this date-time shifted by the provided number of minutes.
    pub fn plus_minutes(&self, minutes: i64) -> JalaliResult<Self> {
        self.plus_nanoseconds(i128::from(minutes) * 60_000_000_000)
    }

    /// Returns this date-time shifted by the provided number of seconds.
    pub fn plus_seconds(&self, seconds: i64) -> JalaliResult<Self> {
        self.plus_nanoseconds(i128::from(seconds) * 1_000_000_000)
    }

    /// Returns this date-time shifted by the provided number of milliseconds.
    pub fn plus_milliseconds(&self, milliseconds: i64) -> JalaliResult<Self> {
        self.plus_nanoseconds(i128::from(milliseconds) * 1_000_000)
    }

    /// Returns this date-time shifted by the provided number of microseconds.
    pub fn plus_microseconds(&self, microseconds: i64) -> JalaliResult<Self> {
        self.plus_nanoseconds(i128::from(microseconds) * 1_000)
    }

    /// Returns this date-time shifted by the provided number of days.
    pub fn plus_days(&self, days: i64) -> JalaliResult<Self> {
        Ok(Self::new(self.date.plus_days(days)?, self.time))
    }

    /// Returns this date-time shifted by the provided number of weeks.
    pub fn plus_weeks(&self, weeks: i64) -> JalaliResult<Self> {
        Ok(Self::new(self.date.plus_weeks(weeks)?, self.time))
    }

    /// Returns this date-time shifted by the provided number of months,
    /// clamping the day-of-month as [`PlainDate::plus_months`] does.
    pub fn plus_months(&self, months: i64) -> JalaliResult<Self> {
        Ok(Self::new(self.date.plus_months(months)?, self.time))
    }

    /// Returns this date-time shifted by the provided number of years.
    pub fn plus_years(&self, years: i64) -> JalaliResult<Self> {
        Ok(Self::new(self.date.plus_years(years)?, self.time))
    }

    /// Returns the whole number of the provided unit from this date-time to
    /// `other`, truncated toward zero.
    ///
    /// Date-based units delegate to the date after correcting the end date by
    /// one day when the time-of-day ordering disagrees with the date
    /// ordering; time-based units truncate at the unit's nanosecond length.
    pub fn until(&self, other: &Self, unit: Unit) -> JalaliResult<i64> {
        if unit.is_date_unit() {
            let mut end_date = other.date;
            match self.cmp(other) {
                Ordering::Less if other.time < self.time => {
                    end_date = end_date.plus_days(-1)?;
                }
                Ordering::Greater if other.time > self.time => {
                    end_date = end_date.plus_days(1)?;
                }
                _ => {}
            }
            return self.date.until(&end_date, unit);
        }

        let day_diff = i128::from(self.date.days_until(&other.date));
        let time_diff = i128::from(other.time.nanosecond_of_day())
            - i128::from(self.time.nanosecond_of_day());
        let total = day_diff * i128::from(NS_PER_DAY) + time_diff;
        let unit_length = unit
            .as_nanoseconds()
            .ok_or_else(JalaliError::assert)?;
        i64::try_from(total / i128::from(unit_length)).map_err(|_| {
            JalaliError::overflow().with_message("difference exceeds the supported range.")
        })
    }
}

impl FromStr for PlainDateTime {
    type Err = JalaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_date_time(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(
        (y, mo, d): (i32, u8, u8),
        (h, mi, s): (u8, u8, u8),
    ) -> PlainDateTime {
        PlainDateTime::try_new(y, mo, d, h, mi, s, 0, 0, 0).unwrap()
    }

    #[test]
    fn time_addition_carries_into_the_date() {
        let start = datetime((1400, 1, 1), (23, 30, 0));
        let result = start.plus_hours(2).unwrap();
        assert_eq!(result.date().day(), 2);
        assert_eq!((result.time().hour(), result.time().minute()), (1, 30));

        let result = start.plus_minutes(30).unwrap();
        assert_eq!(result.date().day(), 2);
        assert_eq!(result.time(), PlainTime::MIDNIGHT);
    }

    #[test]
    fn negative_time_addition_uses_floor_division() {
        let start = datetime((1400, 1, 1), (0, 30, 0));
        let result = start.plus_hours(-1).unwrap();
        assert_eq!(
            (result.date().year(), result.date().month_ordinal(), result.date().day()),
            (1399, 12, 30)
        );
        assert_eq!(result.time().hour(), 23);

        // A negative delta larger than one day still lands in [0, day).
        let result = start.plus_hours(-49).unwrap();
        assert_eq!(result.date().day(), 28);
        assert_eq!((result.time().hour(), result.time().minute()), (23, 30));
    }

    #[test]
    fn year_boundary_carry() {
        // 1399 is a leap year, so its last day is Esfand 30.
        let start = datetime((1399, 12, 30), (23, 0, 0));
        let result = start.plus_hours(1).unwrap();
        assert_eq!(
            (result.date().year(), result.date().month_ordinal(), result.date().day()),
            (1400, 1, 1)
        );
    }

    #[test]
    fn date_units_delegate_with_day_correction() {
        let start = datetime((1400, 1, 1), (23, 0, 0));
        let end = datetime((1400, 1, 2), (1, 0, 0));
        // Less than a full day has elapsed.
        assert_eq!(start.until(&end, Unit::Day).unwrap(), 0);
        assert_eq!(start.until(&end, Unit::Hour).unwrap(), 2);
        assert_eq!(end.until(&start, Unit::Hour).unwrap(), -2);
        assert_eq!(end.until(&start, Unit::Day).unwrap(), 0);

        let end = datetime((1400, 1, 2), (23, 0, 0));
        assert_eq!(start.until(&end, Unit::Day).unwrap(), 1);

        let start = datetime((1400, 1, 15), (12, 0, 0));
        let end = datetime((1400, 2, 15), (11, 0, 0));
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 0);
        let end = datetime((1400, 2, 15), (12, 0, 0));
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 1);
    }

    #[test]
    fn time_units_truncate_at_unit_length() {
        let start = datetime((1400, 1, 1), (0, 0, 0));
        let end = datetime((1400, 1, 3), (1, 30, 30));
        assert_eq!(start.until(&end, Unit::Hour).unwrap(), 49);
        assert_eq!(start.until(&end, Unit::Minute).unwrap(), 49 * 60 + 30);
        assert_eq!(
            start.until(&end, Unit::Second).unwrap(),
            (49 * 60 + 30) * 60 + 30
        );
    }

    #[test]
    fn epoch_second_round_trip() {
        let epoch = datetime((1348, 10, 11), (0, 0, 0));
        assert_eq!(epoch.to_epoch_second(0), 0);
        assert_eq!(
            PlainDateTime::from_epoch_second(0, 0, 0).unwrap(),
            epoch
        );

        // Tehran standard offset, +03:30.
        let offset = 12_600;
        for epoch_second in [-1_234_567, 0, 1, 86_399, 86_400, 1_700_000_000] {
            let local = PlainDateTime::from_epoch_second(epoch_second, 0, offset).unwrap();
            assert_eq!(local.to_epoch_second(offset), epoch_second);
        }

        let local = PlainDateTime::from_epoch_second(0, 0, offset).unwrap();
        assert_eq!((local.time().hour(), local.time().minute()), (3, 30));

        assert!(PlainDateTime::from_epoch_second(0, 1_000_000_000, 0).is_err());
    }

    #[test]
    fn month_arithmetic_preserves_time() {
        let start = datetime((1403, 6, 31), (8, 15, 0));
        let result = start.plus_months(1).unwrap();
        assert_eq!((result.date().month_ordinal(), result.date().day()), (7, 30));
        assert_eq!(result.time(), start.time());
    }

    #[test]
    fn ordering_pairs_date_then_time() {
        let a = datetime((1400, 1, 1), (10, 0, 0));
        let b = datetime((1400, 1, 1), (11, 0, 0));
        let c = datetime((1400, 1, 2), (0, 0, 0));
        assert!(a < b && b < c);
    }
}
