//! The `jalali_rs` crate is an implementation of the Jalali (Solar Hijri)
//! civil calendar in Rust.
//!
//! ```rust
//! use jalali_rs::{GregorianDate, Month, PlainDate};
//!
//! // 1403 is a leap year under the 33-year cycle rule.
//! let date = PlainDate::try_new(1403, 12, 30).unwrap();
//! assert_eq!(date.month(), Month::Esfand);
//! assert!(date.in_leap_year());
//!
//! // Dates convert losslessly to the shared epoch-day coordinate and to
//! // the proleptic Gregorian calendar.
//! assert_eq!(PlainDate::from_epoch_day(0).unwrap(), PlainDate::UNIX_EPOCH);
//! assert_eq!(
//!     date.to_gregorian(),
//!     GregorianDate { year: 2025, month: 3, day: 20 }
//! );
//! ```
//!
//! Every value type is immutable: "mutators" return new values, and no
//! value is constructible in an invalid state. The crate deliberately stops
//! at the calendrical core; pattern-based text formatting and time-zone
//! rule storage belong to separate collaborators that interact with this
//! crate through the field interface and opaque epoch conversions.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fields;
pub mod gregorian;
pub mod options;
pub mod resolve;
pub mod year;

mod date;
mod datetime;
mod month;
mod text;
mod time;
mod week;

#[doc(inline)]
pub use error::JalaliError;

/// The `jalali_rs` result type.
pub type JalaliResult<T> = Result<T, JalaliError>;

pub use crate::{
    date::PlainDate,
    datetime::PlainDateTime,
    fields::{DateField, FieldMap, TimeField},
    gregorian::GregorianDate,
    month::Month,
    options::{ArithmeticOverflow, ResolutionMode, Unit},
    resolve::resolve_date,
    time::PlainTime,
};

#[doc(hidden)]
#[macro_export]
macro_rules! jalali_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::JalaliError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::JalaliError::assert());
        }
    };
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
