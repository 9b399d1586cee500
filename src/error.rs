//! This module implements `JalaliError`.

use alloc::borrow::Cow;
use core::fmt;

/// `JalaliError`'s error kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generic error.
    #[default]
    Generic,
    /// A field value outside its static valid range, e.g. month 13.
    Range,
    /// Individually in-range fields that do not form a valid date, e.g. day 30
    /// of Esfand in a non-leap year.
    State,
    /// Arithmetic that would leave the representable year range.
    Overflow,
    /// A malformed text argument, e.g. a digit string of the wrong length.
    Syntax,
    /// An assertion error, should not be handled by the user.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::State => "CalendarStateError",
            Self::Overflow => "OverflowError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `jalali_rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct JalaliError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl JalaliError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error with a provided message.
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a calendar state error.
    #[inline]
    #[must_use]
    pub const fn state() -> Self {
        Self::new(ErrorKind::State)
    }

    /// Create an overflow error.
    #[inline]
    #[must_use]
    pub const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Consumes the error and returns its message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for JalaliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for JalaliError {}
