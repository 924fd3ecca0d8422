//! Fixed-offset timezone labels.
//!
//! A [`Timezone`] is one of a closed set of labels, each carrying a whole-hour UTC offset. There
//! are no daylight savings rules and no timezone database: `Pst` is always UTC-8, even in July.
//! The one label whose offset is not a compile-time constant is [`Timezone::Local`], which takes
//! the operating system's UTC offset the first time it is needed (rounded to the nearest hour)
//! and keeps it for the rest of the process.
//!
//! Labels can be looked up by their display name ([`Timezone::from_name`]), or parsed from either
//! the display name or the abbreviation ([`str::parse`]).
//!
//! This module also holds the process-wide default timezone, used by [`Time`](crate::Time)
//! constructors that do not take an explicit zone. See [`set_default_timezone`].
//!
//! # Examples
//!
//! ```
//! # use civiltime::Timezone;
//! let pst = Timezone::from_name("Pacific Standard Time").unwrap();
//! assert_eq!(pst, Timezone::Pst);
//! assert_eq!(pst.offset(), -8);
//!
//! // Six in the morning in New York is three in the morning in Los Angeles
//! assert_eq!(Timezone::Est.offset_diff(Timezone::Pst), -3);
//!
//! let cet: Timezone = "cet".parse().unwrap();
//! assert_eq!(cet.name(), "Central European Time");
//! ```

use std::{fmt, str::FromStr, sync::OnceLock};
use std::sync::atomic::{AtomicU8, Ordering};
use crate::error::Error;

/// Seconds per hour, for converting the system's UTC offset.
const SECONDS_PER_HOUR: i32 = 3600;

/// A fixed-offset timezone label.
///
/// The offset of each label is documented on the variant, in hours east of UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Timezone {
	/// Coordinated Universal Time, +0
	Utc = 0,
	/// The operating system's local timezone, offset read from the system once per process
	Local = 1,
	/// Greenwich Mean Time, +0
	Gmt = 2,
	/// Hawaii-Aleutian Standard Time, -10
	Hst = 3,
	/// Alaska Standard Time, -9
	Akst = 4,
	/// Pacific Standard Time, -8
	Pst = 5,
	/// Mountain Standard Time, -7
	Mst = 6,
	/// Central Standard Time, -6
	Cst = 7,
	/// Eastern Standard Time, -5
	Est = 8,
	/// Central European Time, +1
	Cet = 9,
	/// Japan Standard Time, +9
	Jst = 10
}

/// Display names recognized by [`Timezone::from_name`].
///
/// The first entry for each label is its canonical name. Daylight names map onto the matching
/// standard label since offsets here are fixed.
const NAMES: [(&str, Timezone); 15] = [
	("Coordinated Universal Time", Timezone::Utc),
	("Local Time", Timezone::Local),
	("Greenwich Mean Time", Timezone::Gmt),
	("Hawaii-Aleutian Standard Time", Timezone::Hst),
	("Alaska Standard Time", Timezone::Akst),
	("Pacific Standard Time", Timezone::Pst),
	("Mountain Standard Time", Timezone::Mst),
	("Central Standard Time", Timezone::Cst),
	("Eastern Standard Time", Timezone::Est),
	("Central European Time", Timezone::Cet),
	("Japan Standard Time", Timezone::Jst),
	("Pacific Daylight Time", Timezone::Pst),
	("Mountain Daylight Time", Timezone::Mst),
	("Central Daylight Time", Timezone::Cst),
	("Eastern Daylight Time", Timezone::Est)
];

impl Timezone {
	/// Every timezone label, in declaration order.
	pub const ALL: [Timezone; 11] = [
		Timezone::Utc, Timezone::Local, Timezone::Gmt, Timezone::Hst, Timezone::Akst,
		Timezone::Pst, Timezone::Mst, Timezone::Cst, Timezone::Est, Timezone::Cet, Timezone::Jst
	];

	/// UTC offset in whole hours.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Timezone;
	/// assert_eq!(Timezone::Utc.offset(), 0);
	/// assert_eq!(Timezone::Cst.offset(), -6);
	/// assert_eq!(Timezone::Jst.offset(), 9);
	/// ```
	pub fn offset(self) -> i8 {
		match self {
			Timezone::Utc | Timezone::Gmt => 0,
			Timezone::Local => local_offset(),
			Timezone::Hst => -10,
			Timezone::Akst => -9,
			Timezone::Pst => -8,
			Timezone::Mst => -7,
			Timezone::Cst => -6,
			Timezone::Est => -5,
			Timezone::Cet => 1,
			Timezone::Jst => 9,
		}
	}

	/// Signed hour difference `to.offset() - self.offset()`.
	///
	/// Adding the result to an hour in `self` re-expresses it in `to` (before wrapping).
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Timezone;
	/// assert_eq!(Timezone::Cst.offset_diff(Timezone::Utc), 6);
	/// assert_eq!(Timezone::Utc.offset_diff(Timezone::Cst), -6);
	/// assert_eq!(Timezone::Pst.offset_diff(Timezone::Pst), 0);
	/// ```
	pub fn offset_diff(self, to: Timezone) -> i8 {
		to.offset() - self.offset()
	}

	/// The short abbreviation, e.g. `"PST"`.
	pub fn abbreviation(self) -> &'static str {
		match self {
			Timezone::Utc => "UTC",
			Timezone::Local => "LOCAL",
			Timezone::Gmt => "GMT",
			Timezone::Hst => "HST",
			Timezone::Akst => "AKST",
			Timezone::Pst => "PST",
			Timezone::Mst => "MST",
			Timezone::Cst => "CST",
			Timezone::Est => "EST",
			Timezone::Cet => "CET",
			Timezone::Jst => "JST",
		}
	}

	/// The canonical display name, e.g. `"Pacific Standard Time"`.
	pub fn name(self) -> &'static str {
		// Canonical names come first in NAMES, in the same order as ALL
		NAMES[self as usize].0
	}

	/// Look up a timezone by display name.
	///
	/// Matching is exact (case-sensitive, no trimming). Besides each canonical [`name`], the
	/// daylight names of the US zones are accepted as aliases of their standard label.
	///
	/// [`name`]: Timezone::name
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{ErrorKind, Timezone};
	/// assert_eq!(Timezone::from_name("Coordinated Universal Time").unwrap(), Timezone::Utc);
	/// assert_eq!(Timezone::from_name("Central Daylight Time").unwrap(), Timezone::Cst);
	/// let err = Timezone::from_name("pacific standard time").unwrap_err();
	/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
	/// ```
	pub fn from_name(name: &str) -> Result<Timezone, Error> {
		NAMES.iter()
			.find(|(n, _)| *n == name)
			.map(|&(_, tz)| tz)
			.ok_or_else(|| Error::UnknownTimezone(name.to_string()))
	}

	/// Inverse of `self as u8`.
	fn from_u8(n: u8) -> Option<Timezone> {
		Timezone::ALL.get(n as usize).copied()
	}
}

impl fmt::Display for Timezone {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.abbreviation())
	}
}

impl FromStr for Timezone {
	type Err = Error;

	/// Parse an abbreviation (case-insensitive) or an exact display name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Timezone::ALL.iter()
			.find(|tz| tz.abbreviation().eq_ignore_ascii_case(s))
			.copied()
			.map_or_else(|| Timezone::from_name(s), Ok)
	}
}

/// Cached offset of [`Timezone::Local`], resolved on first use.
static LOCAL_OFFSET: OnceLock<i8> = OnceLock::new();

/// Get the offset of [`Timezone::Local`], asking the operating system the first time.
fn local_offset() -> i8 {
	*LOCAL_OFFSET.get_or_init(|| {
		let offset = match clock::local::local_utc_offset() {
			Some(seconds) => {
				if seconds % SECONDS_PER_HOUR != 0 {
					warn!("local UTC offset of {}s is not a whole number of hours, rounding", seconds);
				}
				offset_hours(seconds)
			},
			None => {
				warn!("failed to read the local UTC offset, treating local time as UTC");
				0
			}
		};
		debug!("resolved local timezone offset to {} hours", offset);
		offset
	})
}

/// Round a UTC offset in seconds to the nearest whole hour, ties away from zero.
fn offset_hours(seconds: i32) -> i8 {
	let half = SECONDS_PER_HOUR / 2;
	let hours = if seconds < 0 {
		(seconds - half) / SECONDS_PER_HOUR
	} else {
		(seconds + half) / SECONDS_PER_HOUR
	};
	hours as i8
}

/// The process-wide default timezone, stored as `Timezone as u8`.
static DEFAULT_TIMEZONE: AtomicU8 = AtomicU8::new(Timezone::Local as u8);

/// Get the process-wide default timezone.
///
/// This is [`Timezone::Local`] unless changed with [`set_default_timezone`].
pub fn default_timezone() -> Timezone {
	Timezone::from_u8(DEFAULT_TIMEZONE.load(Ordering::Relaxed)).unwrap_or(Timezone::Local)
}

/// Set the process-wide default timezone.
///
/// The default is read by [`Time::new`](crate::Time::new) and the other constructors that do not
/// take a timezone. It is a plain last-writer-wins slot: set it once at startup, before creating
/// times on other threads. Code that cannot guarantee that should pass zones explicitly with
/// [`Time::with_timezone`](crate::Time::with_timezone).
///
/// # Examples
///
/// ```
/// # use civiltime::{default_timezone, set_default_timezone, Time, Timezone};
/// set_default_timezone(Timezone::Utc);
/// assert_eq!(default_timezone(), Timezone::Utc);
/// assert_eq!(Time::new(1, 0, 0, 0, 0, 0).unwrap().timezone(), Timezone::Utc);
/// ```
pub fn set_default_timezone(timezone: Timezone) {
	debug!("default timezone set to {}", timezone);
	DEFAULT_TIMEZONE.store(timezone as u8, Ordering::Relaxed);
}

/// Serializes tests that read or write the process-wide default timezone.
#[cfg(test)]
pub(crate) static DEFAULT_TIMEZONE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
