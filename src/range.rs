//! Closed intervals of time of day.
//!
//! # Examples
//!
//! ```
//! # use civiltime::{Time, TimeRange, Timezone};
//! let open = Time::with_timezone(14, 30, 0, 0, 0, 0, Timezone::Utc).unwrap();
//! let close = Time::with_timezone(21, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
//! let session = TimeRange::new(open, close).unwrap();
//!
//! // 9:00 in New York is 14:00 UTC, before the open
//! let t = Time::with_timezone(9, 0, 0, 0, 0, 0, Timezone::Est).unwrap();
//! assert!(!session.contains(&t));
//! assert!(session.contains(&open));
//! assert!(session.contains(&close));
//! ```

use std::fmt;
use crate::{error::Error, time::Time};

/// An interval `[start, end]` of time of day, inclusive at both ends.
///
/// The interval does not wrap past midnight: `start` must not be after `end`. Both ends keep
/// their own timezones, and membership uses [`Time`]'s zone-aware comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
	start: Time,
	end: Time
}

impl TimeRange {
	/// Create a range. Fails with [`Error::InvalidRange`] if `start` is after `end`.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{ErrorKind, Time, TimeRange, Timezone};
	/// let one = Time::with_timezone(1, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
	/// let two = Time::with_timezone(2, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
	/// assert!(TimeRange::new(one, two).is_ok());
	/// assert!(TimeRange::new(one, one).is_ok());
	///
	/// let err = TimeRange::new(two, one).unwrap_err();
	/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
	/// assert_eq!(err.to_string(), "Invalid time range: 2:00:00.0.0.0 is after 1:00:00.0.0.0");
	/// ```
	pub fn new(start: Time, end: Time) -> Result<TimeRange, Error> {
		if start > end {
			debug!("rejecting time range {} - {}", start, end);
			return Err(Error::InvalidRange(start.to_string(), end.to_string()));
		}
		Ok(TimeRange { start, end })
	}

	/// The first time in the range.
	pub fn start(&self) -> Time {
		self.start
	}

	/// The last time in the range.
	pub fn end(&self) -> Time {
		self.end
	}

	/// Whether `time` lies within the range, ends included.
	pub fn contains(&self, time: &Time) -> bool {
		self.start <= *time && *time <= self.end
	}
}

impl fmt::Display for TimeRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {}", self.start, self.end)
	}
}
