//! This module implements the cross-calendar field identifiers and the
//! transient field map consumed by resolution.
//!
//! The field interface is how the text formatting collaborator reads and
//! writes calendar values without touching calendar internals: `get` returns
//! a field as an integer, `with` reconstructs a value with one field
//! replaced, and `range` reports each field's static bounds.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::{
    date::{PlainDate, MAX_EPOCH_DAY, MIN_EPOCH_DAY},
    datetime::PlainDateTime,
    options::ResolutionMode,
    time::PlainTime,
    week, JalaliError, JalaliResult,
};

/// The date-based field identifiers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateField {
    Era = 0,
    YearOfEra = 1,
    Year = 2,
    ProlepticMonth = 3,
    MonthOfYear = 4,
    DayOfMonth = 5,
    DayOfYear = 6,
    DayOfWeek = 7,
    AlignedWeekOfMonth = 8,
    AlignedDayOfWeekInMonth = 9,
    AlignedWeekOfYear = 10,
    AlignedDayOfWeekInYear = 11,
    WeekBasedYear = 12,
    WeekOfWeekBasedYear = 13,
    EpochDay = 14,
}

impl DateField {
    /// Number of date fields.
    pub(crate) const COUNT: usize = 15;

    /// Every date field, in discriminant order.
    pub const ALL: [DateField; Self::COUNT] = [
        Self::Era,
        Self::YearOfEra,
        Self::Year,
        Self::ProlepticMonth,
        Self::MonthOfYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::DayOfWeek,
        Self::AlignedWeekOfMonth,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedWeekOfYear,
        Self::AlignedDayOfWeekInYear,
        Self::WeekBasedYear,
        Self::WeekOfWeekBasedYear,
        Self::EpochDay,
    ];

    /// Returns this field's static `(min, max)` value range.
    #[must_use]
    pub const fn range(self) -> (i64, i64) {
        match self {
            Self::Era => (0, 1),
            Self::YearOfEra => (1, 1_000_000_000),
            Self::Year | Self::WeekBasedYear => (-999_999_999, 999_999_999),
            Self::ProlepticMonth => (-11_999_999_988, 11_999_999_999),
            Self::MonthOfYear => (1, 12),
            Self::DayOfMonth => (1, 31),
            Self::DayOfYear => (1, 366),
            Self::DayOfWeek
            | Self::AlignedDayOfWeekInMonth
            | Self::AlignedDayOfWeekInYear => (1, 7),
            Self::AlignedWeekOfMonth => (1, 5),
            Self::AlignedWeekOfYear | Self::WeekOfWeekBasedYear => (1, 53),
            Self::EpochDay => (MIN_EPOCH_DAY, MAX_EPOCH_DAY),
        }
    }

    /// Checks a value against this field's static range.
    pub fn validate(self, value: i64) -> JalaliResult<()> {
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(JalaliError::range()
                .with_message(format!("{value} is not within {self}'s range {min}..={max}.")));
        }
        Ok(())
    }

    /// Returns this field's identifier string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Era => "era",
            Self::YearOfEra => "year-of-era",
            Self::Year => "year",
            Self::ProlepticMonth => "proleptic-month",
            Self::MonthOfYear => "month-of-year",
            Self::DayOfMonth => "day-of-month",
            Self::DayOfYear => "day-of-year",
            Self::DayOfWeek => "day-of-week",
            Self::AlignedWeekOfMonth => "aligned-week-of-month",
            Self::AlignedDayOfWeekInMonth => "aligned-day-of-week-in-month",
            Self::AlignedWeekOfYear => "aligned-week-of-year",
            Self::AlignedDayOfWeekInYear => "aligned-day-of-week-in-year",
            Self::WeekBasedYear => "week-based-year",
            Self::WeekOfWeekBasedYear => "week-of-week-based-year",
            Self::EpochDay => "epoch-day",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for DateField {
    type Err = JalaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| JalaliError::range().with_message("unknown date field identifier."))
    }
}

/// The time-based field identifiers, delegated unchanged to `PlainTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeField {
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    MilliOfSecond,
    MicroOfSecond,
    NanoOfSecond,
    SecondOfDay,
    NanoOfDay,
}

impl TimeField {
    /// Returns this field's static `(min, max)` value range.
    #[must_use]
    pub const fn range(self) -> (i64, i64) {
        match self {
            Self::HourOfDay => (0, 23),
            Self::MinuteOfHour | Self::SecondOfMinute => (0, 59),
            Self::MilliOfSecond | Self::MicroOfSecond | Self::NanoOfSecond => (0, 999),
            Self::SecondOfDay => (0, 86_399),
            Self::NanoOfDay => (0, 86_399_999_999_999),
        }
    }

    /// Checks a value against this field's static range.
    pub fn validate(self, value: i64) -> JalaliResult<()> {
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(JalaliError::range()
                .with_message(format!("{value} is not within the time field's range {min}..={max}.")));
        }
        Ok(())
    }
}

/// A transient map from date fields to integer values.
///
/// This is the working set of one resolve cycle: fields are removed as the
/// resolution engine consumes them. Each call owns its own map; a `FieldMap`
/// is never shared across concurrent resolve attempts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldMap {
    values: [Option<i64>; DateField::COUNT],
}

impl FieldMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; DateField::COUNT],
        }
    }

    /// Inserts a field value, returning the previous one.
    pub fn insert(&mut self, field: DateField, value: i64) -> Option<i64> {
        self.values[field as usize].replace(value)
    }

    /// Returns the value of the provided field.
    #[must_use]
    pub fn get(&self, field: DateField) -> Option<i64> {
        self.values[field as usize]
    }

    /// Removes and returns the value of the provided field.
    pub fn remove(&mut self, field: DateField) -> Option<i64> {
        self.values[field as usize].take()
    }

    /// Returns whether the provided field is present.
    #[must_use]
    pub fn contains(&self, field: DateField) -> bool {
        self.values[field as usize].is_some()
    }

    /// Returns the number of present fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Returns whether the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates over the present fields in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = (DateField, i64)> + '_ {
        DateField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}

impl FromIterator<(DateField, i64)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (DateField, i64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

// ==== Field access on PlainDate ====

impl PlainDate {
    /// Returns the value of the provided field for this date.
    #[must_use]
    pub fn get(&self, field: DateField) -> i64 {
        match field {
            DateField::Era => i64::from(self.era()),
            DateField::YearOfEra => i64::from(self.year_of_era()),
            DateField::Year => i64::from(self.year()),
            DateField::ProlepticMonth => self.proleptic_month(),
            DateField::MonthOfYear => i64::from(self.month_ordinal()),
            DateField::DayOfMonth => i64::from(self.day()),
            DateField::DayOfYear => i64::from(self.day_of_year()),
            DateField::DayOfWeek => i64::from(self.day_of_week()),
            DateField::AlignedWeekOfMonth => i64::from(self.aligned_week_of_month()),
            DateField::AlignedDayOfWeekInMonth => i64::from(self.aligned_day_of_week_in_month()),
            DateField::AlignedWeekOfYear => i64::from(self.aligned_week_of_year()),
            DateField::AlignedDayOfWeekInYear => i64::from(self.aligned_day_of_week_in_year()),
            DateField::WeekBasedYear => i64::from(self.week_based_year()),
            DateField::WeekOfWeekBasedYear => i64::from(self.week_of_week_based_year()),
            DateField::EpochDay => self.epoch_day(),
        }
    }

    /// Returns this date with the provided field set to `value`.
    ///
    /// Year, month, and derived-week writes clamp an out-of-range day to the
    /// target month's last valid day; direct day writes fail strictly.
    pub fn with(&self, field: DateField, value: i64) -> JalaliResult<Self> {
        field.validate(value)?;
        match field {
            DateField::Era => {
                if value == i64::from(self.era()) {
                    Ok(*self)
                } else {
                    // Flipping the era preserves the year-of-era.
                    Self::new_clamping_day(1 - i64::from(self.year), self.month, self.day)
                }
            }
            DateField::YearOfEra => {
                let year = if self.era() == 1 { value } else { 1 - value };
                Self::new_clamping_day(year, self.month, self.day)
            }
            DateField::Year => Self::new_clamping_day(value, self.month, self.day),
            DateField::ProlepticMonth => Self::new_clamping_day(
                value.div_euclid(12),
                value.rem_euclid(12) as u8 + 1,
                self.day,
            ),
            DateField::MonthOfYear => self.with_month(value as u8),
            DateField::DayOfMonth => self.with_day_of_month(value as u8),
            DateField::DayOfYear => self.with_day_of_year(value as u16),
            DateField::DayOfWeek => self.plus_days(value - i64::from(self.day_of_week())),
            DateField::AlignedWeekOfMonth => {
                self.plus_weeks(value - i64::from(self.aligned_week_of_month()))
            }
            DateField::AlignedDayOfWeekInMonth => {
                self.plus_days(value - i64::from(self.aligned_day_of_week_in_month()))
            }
            DateField::AlignedWeekOfYear => {
                self.plus_weeks(value - i64::from(self.aligned_week_of_year()))
            }
            DateField::AlignedDayOfWeekInYear => {
                self.plus_days(value - i64::from(self.aligned_day_of_week_in_year()))
            }
            DateField::WeekBasedYear => week::of_week_date(
                value as i32,
                i64::from(self.week_of_week_based_year()),
                i64::from(self.day_of_week()),
                ResolutionMode::Constrain,
            ),
            DateField::WeekOfWeekBasedYear => week::of_week_date(
                self.week_based_year(),
                value,
                i64::from(self.day_of_week()),
                ResolutionMode::Constrain,
            ),
            DateField::EpochDay => Self::from_epoch_day(value),
        }
    }
}

// ==== Field access on PlainTime ====

impl PlainTime {
    /// Returns the value of the provided field for this time.
    #[must_use]
    pub fn get(&self, field: TimeField) -> i64 {
        match field {
            TimeField::HourOfDay => i64::from(self.hour()),
            TimeField::MinuteOfHour => i64::from(self.minute()),
            TimeField::SecondOfMinute => i64::from(self.second()),
            TimeField::MilliOfSecond => i64::from(self.millisecond()),
            TimeField::MicroOfSecond => i64::from(self.microsecond()),
            TimeField::NanoOfSecond => i64::from(self.subsecond_nanoseconds()),
            TimeField::SecondOfDay => i64::from(self.second_of_day()),
            TimeField::NanoOfDay => self.nanosecond_of_day() as i64,
        }
    }

    /// Returns this time with the provided field set to `value`.
    pub fn with(&self, field: TimeField, value: i64) -> JalaliResult<Self> {
        field.validate(value)?;
        let nano_of_day = match field {
            TimeField::HourOfDay => {
                self.nanosecond_of_day() as i64
                    + (value - i64::from(self.hour())) * 3_600_000_000_000
            }
            TimeField::MinuteOfHour => {
                self.nanosecond_of_day() as i64
                    + (value - i64::from(self.minute())) * 60_000_000_000
            }
            TimeField::SecondOfMinute => {
                self.nanosecond_of_day() as i64
                    + (value - i64::from(self.second())) * 1_000_000_000
            }
            TimeField::MilliOfSecond => {
                i64::from(self.second_of_day()) * 1_000_000_000 + value * 1_000_000
            }
            TimeField::MicroOfSecond => {
                i64::from(self.second_of_day()) * 1_000_000_000 + value * 1_000
            }
            TimeField::NanoOfSecond => {
                i64::from(self.second_of_day()) * 1_000_000_000 + value
            }
            TimeField::SecondOfDay => {
                value * 1_000_000_000 + i64::from(self.subsecond_nanoseconds())
            }
            TimeField::NanoOfDay => value,
        };
        Self::from_nanosecond_of_day(nano_of_day as u64)
    }
}

// ==== Field access on PlainDateTime ====

impl PlainDateTime {
    /// Returns the value of the provided date field.
    #[must_use]
    pub fn get(&self, field: DateField) -> i64 {
        self.date().get(field)
    }

    /// Returns the value of the provided time field.
    #[must_use]
    pub fn get_time(&self, field: TimeField) -> i64 {
        self.time().get(field)
    }

    /// Returns this date-time with the provided date field set to `value`.
    pub fn with(&self, field: DateField, value: i64) -> JalaliResult<Self> {
        Ok(self.with_date(self.date().with(field, value)?))
    }

    /// Returns this date-time with the provided time field set to `value`.
    pub fn with_time_field(&self, field: TimeField, value: i64) -> JalaliResult<Self> {
        Ok(self.with_time(self.time().with(field, value)?))
    }
}
