//! Error types used across modules.
//!
//! Every fallible operation in this crate returns [`Error`]. Errors fall into three kinds, see
//! [`ErrorKind`]: bad input handed to a constructor or lookup, arithmetic that would move a time
//! of day before midnight, and failure to read the system clock.

use std::{error, fmt};

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	/// A value handed to a constructor or lookup is not acceptable (field out of range, unknown
	/// timezone or unit name, reversed range).
	InvalidArgument,
	/// Arithmetic would leave the representable range of a time of day.
	OutOfRange,
	/// The operating system clock could not be read.
	Unavailable
}

/// The error type for constructing and manipulating times of day.
#[derive(Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Error {
	/// A field was outside its valid range. The offending value, rendered as
	/// `h:mm:ss.mmm.uuu.nnn`, is provided in the payload.
	InvalidTime(String),
	/// No timezone has the given name. The name is provided in the payload.
	UnknownTimezone(String),
	/// No unit of time has the given name. The name is provided in the payload.
	UnknownUnit(String),
	/// A range was built with its start after its end. Both ends, rendered, are provided in the
	/// payload.
	InvalidRange(String, String),
	/// Subtraction carried past midnight; there is no day to borrow from.
	NegativeTime,
	/// Reading the system clock (or converting its reading to local time) failed.
	ClockUnavailable
}

impl Error {
	/// The kind of this error.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{ErrorKind, Timezone};
	/// let err = "Martian Standard Time".parse::<Timezone>().unwrap_err();
	/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::InvalidTime(_)
			| Error::UnknownTimezone(_)
			| Error::UnknownUnit(_)
			| Error::InvalidRange(_, _) => ErrorKind::InvalidArgument,
			Error::NegativeTime => ErrorKind::OutOfRange,
			Error::ClockUnavailable => ErrorKind::Unavailable
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::InvalidTime(t) => write!(f, "Time '{}' is invalid", t),
			Error::UnknownTimezone(n) => write!(f, "Unknown timezone name: {}", n),
			Error::UnknownUnit(n) => write!(f, "Unknown time unit: {}", n),
			Error::InvalidRange(s, e) => write!(f, "Invalid time range: {} is after {}", s, e),
			Error::NegativeTime => write!(f, "Time cannot be negative"),
			Error::ClockUnavailable => write!(f, "Failed to read the system clock"),
		}
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl error::Error for Error {}
