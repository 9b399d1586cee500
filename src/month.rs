//! This module implements the Jalali month identity.

use core::fmt;
use core::str::FromStr;

use tinystr::{tinystr, TinyAsciiStr};

use crate::{JalaliError, JalaliResult};

/// The twelve months of the Jalali year.
///
/// Months 1 through 6 have 31 days, months 7 through 11 have 30 days, and
/// Esfand has 29 days, or 30 in a leap year.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Farvardin = 1,
    Ordibehesht = 2,
    Khordad = 3,
    Tir = 4,
    Mordad = 5,
    Shahrivar = 6,
    Mehr = 7,
    Aban = 8,
    Azar = 9,
    Dey = 10,
    Bahman = 11,
    Esfand = 12,
}

const MONTHS: [Month; 12] = [
    Month::Farvardin,
    Month::Ordibehesht,
    Month::Khordad,
    Month::Tir,
    Month::Mordad,
    Month::Shahrivar,
    Month::Mehr,
    Month::Aban,
    Month::Azar,
    Month::Dey,
    Month::Bahman,
    Month::Esfand,
];

impl Month {
    /// Creates a `Month` from its 1-based ordinal.
    pub fn from_ordinal(ordinal: u8) -> JalaliResult<Self> {
        if !(1..=12).contains(&ordinal) {
            return Err(JalaliError::range().with_message("month must be in the range 1..=12."));
        }
        Ok(MONTHS[ordinal as usize - 1])
    }

    /// Returns this month's 1-based ordinal.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the number of days in this month for the given leap state.
    #[inline]
    #[must_use]
    pub const fn length(self, leap: bool) -> u8 {
        match self as u8 {
            1..=6 => 31,
            7..=11 => 30,
            _ => 29 + leap as u8,
        }
    }

    /// Returns the 1-based day-of-year of this month's first day.
    ///
    /// The offsets do not depend on the leap state; only Esfand's length does.
    #[inline]
    #[must_use]
    pub const fn first_day_of_year(self) -> u16 {
        let ordinal = self as u16 - 1;
        if ordinal < 6 {
            ordinal * 31 + 1
        } else {
            (ordinal - 6) * 30 + 187
        }
    }

    /// Returns the month `months` after this one, wrapping around the year.
    #[inline]
    #[must_use]
    pub fn plus(self, months: i64) -> Self {
        let ordinal = (self as i64 - 1 + months).rem_euclid(12);
        MONTHS[ordinal as usize]
    }

    /// Returns the month `months` before this one, wrapping around the year.
    #[inline]
    #[must_use]
    pub fn minus(self, months: i64) -> Self {
        self.plus(-months)
    }

    /// Returns this month's code, `M01` through `M12`.
    #[must_use]
    pub const fn code(self) -> TinyAsciiStr<4> {
        match self {
            Self::Farvardin => tinystr!(4, "M01"),
            Self::Ordibehesht => tinystr!(4, "M02"),
            Self::Khordad => tinystr!(4, "M03"),
            Self::Tir => tinystr!(4, "M04"),
            Self::Mordad => tinystr!(4, "M05"),
            Self::Shahrivar => tinystr!(4, "M06"),
            Self::Mehr => tinystr!(4, "M07"),
            Self::Aban => tinystr!(4, "M08"),
            Self::Azar => tinystr!(4, "M09"),
            Self::Dey => tinystr!(4, "M10"),
            Self::Bahman => tinystr!(4, "M11"),
            Self::Esfand => tinystr!(4, "M12"),
        }
    }

    /// Creates a `Month` from a month code.
    pub fn from_code(code: &TinyAsciiStr<4>) -> JalaliResult<Self> {
        let bytes = code.all_bytes();
        if bytes[0] != b'M' || bytes[3] != 0 {
            return Err(JalaliError::range().with_message("month code must have the form Mnn."));
        }
        let (tens, ones) = (bytes[1].wrapping_sub(b'0'), bytes[2].wrapping_sub(b'0'));
        if tens > 9 || ones > 9 {
            return Err(JalaliError::range().with_message("month code must have the form Mnn."));
        }
        Self::from_ordinal(tens * 10 + ones)
    }

    /// Returns the transliterated month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Farvardin => "Farvardin",
            Self::Ordibehesht => "Ordibehesht",
            Self::Khordad => "Khordad",
            Self::Tir => "Tir",
            Self::Mordad => "Mordad",
            Self::Shahrivar => "Shahrivar",
            Self::Mehr => "Mehr",
            Self::Aban => "Aban",
            Self::Azar => "Azar",
            Self::Dey => "Dey",
            Self::Bahman => "Bahman",
            Self::Esfand => "Esfand",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Month {
    type Err = JalaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for month in MONTHS {
            if month.name().eq_ignore_ascii_case(s) || month.code().as_str() == s {
                return Ok(month);
            }
        }
        Err(JalaliError::range().with_message("unknown month name or code."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip() {
        for ordinal in 1..=12 {
            assert_eq!(Month::from_ordinal(ordinal).unwrap().ordinal(), ordinal);
        }
        assert!(Month::from_ordinal(0).is_err());
        assert!(Month::from_ordinal(13).is_err());
    }

    #[test]
    fn lengths() {
        assert_eq!(Month::Farvardin.length(false), 31);
        assert_eq!(Month::Shahrivar.length(true), 31);
        assert_eq!(Month::Mehr.length(false), 30);
        assert_eq!(Month::Bahman.length(true), 30);
        assert_eq!(Month::Esfand.length(false), 29);
        assert_eq!(Month::Esfand.length(true), 30);
    }

    #[test]
    fn first_days_accumulate_lengths() {
        let mut expected = 1u16;
        for month in MONTHS {
            assert_eq!(month.first_day_of_year(), expected, "{month}");
            expected += u16::from(month.length(false));
        }
        assert_eq!(expected, 366);
        assert_eq!(Month::Mehr.first_day_of_year(), 187);
        assert_eq!(Month::Esfand.first_day_of_year(), 337);
    }

    #[test]
    fn cyclic_arithmetic() {
        assert_eq!(Month::Esfand.plus(1), Month::Farvardin);
        assert_eq!(Month::Farvardin.minus(1), Month::Esfand);
        assert_eq!(Month::Dey.plus(25), Month::Bahman);
        assert_eq!(Month::Dey.plus(-25), Month::Azar);
        for month in MONTHS {
            assert_eq!(month.plus(12), month);
            assert_eq!(month.plus(7).minus(7), month);
        }
    }

    #[test]
    fn codes_round_trip() {
        for month in MONTHS {
            assert_eq!(Month::from_code(&month.code()).unwrap(), month);
        }
        assert!(Month::from_code(&tinystr!(4, "M13")).is_err());
        assert!(Month::from_code(&tinystr!(4, "X01")).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!(Month::from_str("Dey").unwrap(), Month::Dey);
        assert_eq!(Month::from_str("esfand").unwrap(), Month::Esfand);
        assert_eq!(Month::from_str("M07").unwrap(), Month::Mehr);
        assert!(Month::from_str("January").is_err());
    }
}
