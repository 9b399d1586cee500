//! Native implementation of the `jalali_rs` option vocabulary.
//!
//! The enums in this module name the policies a caller can select for
//! arithmetic, field writes, and field resolution.

use core::fmt;
use core::str::FromStr;

use crate::NS_PER_DAY;

/// The relevant unit for an arithmetic or difference operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    /// The `Nanosecond` unit
    Nanosecond,
    /// The `Microsecond` unit
    Microsecond,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
    /// The `Day` unit
    Day,
    /// The `Week` unit
    Week,
    /// The `Month` unit
    Month,
    /// The `Year` unit
    Year,
}

impl Unit {
    /// Returns the nanosecond length of this unit, if it has a fixed one.
    #[must_use]
    pub fn as_nanoseconds(&self) -> Option<u64> {
        use Unit::{
            Day, Hour, Microsecond, Millisecond, Minute, Month, Nanosecond, Second, Week, Year,
        };
        match self {
            Year | Month | Week => None,
            Day => Some(NS_PER_DAY),
            Hour => Some(3_600_000_000_000),
            Minute => Some(60_000_000_000),
            Second => Some(1_000_000_000),
            Millisecond => Some(1_000_000),
            Microsecond => Some(1_000),
            Nanosecond => Some(1),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_date_unit(&self) -> bool {
        use Unit::{Day, Month, Week, Year};
        matches!(self, Year | Month | Week | Day)
    }

    #[inline]
    #[must_use]
    pub fn is_time_unit(&self) -> bool {
        !self.is_date_unit()
    }
}

/// A parsing error for `Unit`.
#[derive(Debug, Clone, Copy)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid Unit")
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "microsecond" | "microseconds" => Ok(Self::Microsecond),
            "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            _ => Err(ParseUnitError),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
            Self::Microsecond => "microsecond",
            Self::Nanosecond => "nanosecond",
        }
        .fmt(f)
    }
}

/// `ArithmeticOverflow` selects between the "constrain" and "reject"
/// assignment policies for out-of-range components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Constrain option
    #[default]
    Constrain,
    /// Reject option
    Reject,
}

/// A parsing error for `ArithmeticOverflow`.
#[derive(Debug, Clone, Copy)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

/// `ResolutionMode` selects how the field-resolution engine treats field
/// values that do not directly name a valid date.
///
/// - `Reject` fails on any invalidity.
/// - `Constrain` clamps an invalid day-of-month or day-of-year to the last
///   valid one; every other field keeps its strict range.
/// - `Balance` treats overflow as further arithmetic, so month 13 of one year
///   becomes month 1 of the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Reject option
    Reject,
    /// Constrain option
    #[default]
    Constrain,
    /// Balance option
    Balance,
}

/// A parsing error for `ResolutionMode`.
#[derive(Debug, Clone, Copy)]
pub struct ParseResolutionModeError;

impl fmt::Display for ParseResolutionModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid resolution mode")
    }
}

impl FromStr for ResolutionMode {
    type Err = ParseResolutionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "constrain" => Ok(Self::Constrain),
            "balance" => Ok(Self::Balance),
            _ => Err(ParseResolutionModeError),
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => "reject",
            Self::Constrain => "constrain",
            Self::Balance => "balance",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_ordering_follows_magnitude() {
        assert!(Unit::Nanosecond < Unit::Second);
        assert!(Unit::Day < Unit::Week);
        assert!(Unit::Month < Unit::Year);
    }

    #[test]
    fn unit_nanoseconds() {
        assert_eq!(Unit::Day.as_nanoseconds(), Some(86_400_000_000_000));
        assert_eq!(Unit::Hour.as_nanoseconds(), Some(3_600_000_000_000));
        assert_eq!(Unit::Month.as_nanoseconds(), None);
    }

    #[test]
    fn option_strings_round_trip() {
        use alloc::string::ToString;
        for s in ["reject", "constrain", "balance"] {
            assert_eq!(ResolutionMode::from_str(s).unwrap().to_string(), s);
        }
        for s in ["constrain", "reject"] {
            assert_eq!(ArithmeticOverflow::from_str(s).unwrap().to_string(), s);
        }
        assert!(ResolutionMode::from_str("smart").is_err());
    }
}
