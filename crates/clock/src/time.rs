//! Unix time with nanosecond granularity, unaware of timezone.
//!
//! [`TimeSpec`] mirrors `libc::timespec` but supports carrying arithmetic: adding [`Seconds`] or
//! [`Nanoseconds`] (positive or negative) always keeps `nsec` within [0, 999999999], and
//! subtracting two [`TimeSpec`]s yields a normalized difference.
//!
//! # Examples
//!
//! ```
//! # use clock::time::{Nanoseconds, Seconds, TimeSpec};
//! // Jan 1, 2025. 12:00:00.999999999 UTC.
//! let c = TimeSpec { sec: 1735732800, nsec: 999999999 };
//! assert_eq!(c + Seconds(10) + Nanoseconds(10), TimeSpec { sec: c.sec + 11, nsec: 9 });
//! assert_eq!(c - TimeSpec { sec: 1735732800, nsec: 0 }, TimeSpec { sec: 0, nsec: 999999999 });
//! ```

use core::ops::{Add, Sub};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};

/// Nanoseconds per second.
pub const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

/// Helper type to support math on [`TimeSpec`]s. Represents seconds.
///
/// # Examples
///
/// ```
/// # use clock::time::{Seconds, TimeSpec};
/// let c = TimeSpec { sec: 1735732800, nsec: 123456789 };
/// assert_eq!(c + Seconds(10), TimeSpec { sec: c.sec + 10, nsec: c.nsec });
/// ```
#[repr(transparent)]
pub struct Seconds(pub i64);

/// Helper type to support math on [`TimeSpec`]s. Represents nanoseconds.
///
/// Adding nanoseconds to a [`TimeSpec`] will roll over seconds if needed, in either direction.
///
/// # Examples
///
/// ```
/// # use clock::time::{Nanoseconds, TimeSpec};
/// let mut c = TimeSpec { sec: 1735732800, nsec: 123456789 };
/// assert_eq!(c + Nanoseconds(10), TimeSpec { sec: c.sec, nsec: 123456799 });
/// c.nsec = 5;
/// assert_eq!(c + Nanoseconds(-10), TimeSpec { sec: c.sec - 1, nsec: 999999995 });
/// ```
#[repr(transparent)]
pub struct Nanoseconds(pub i64);

/// Unix time with nanosecond granularity.
///
/// Also used to represent the (normalized) difference between two readings, in which case `sec`
/// may be negative while `nsec` stays in [0, 999999999].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSpec {
	/// Seconds since the Unix epoch
	pub sec: i64,
	/// Nanoseconds since the beginning of `sec`, ranging [0-999999999]
	pub nsec: i64
}

impl TimeSpec {
	/// The whole value expressed in nanoseconds.
	///
	/// Uses `i128` so that no representable [`TimeSpec`] can overflow.
	///
	/// # Examples
	///
	/// ```
	/// # use clock::time::TimeSpec;
	/// assert_eq!(TimeSpec { sec: 2, nsec: 5 }.as_nanos(), 2_000_000_005);
	/// assert_eq!(TimeSpec { sec: -1, nsec: 999_999_999 }.as_nanos(), -1);
	/// ```
	pub fn as_nanos(&self) -> i128 {
		self.sec as i128 * NANOSECONDS_PER_SECOND as i128 + self.nsec as i128
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
impl From<timespec> for TimeSpec {
	/// Convert from `libc::timespec` to [`TimeSpec`] for better math ergonomics
	fn from(value: timespec) -> Self {
		TimeSpec {
			sec: i64::from(value.tv_sec),
			nsec: i64::from(value.tv_nsec)
		}
	}
}

impl Add<Seconds> for TimeSpec {
	type Output = Self;

	/// Add `rhs` seconds to `self`.
	fn add(mut self, rhs: Seconds) -> Self::Output {
		self.sec += rhs.0;
		self
	}
}

impl Add<Nanoseconds> for TimeSpec {
	type Output = Self;

	/// Add `rhs` nanoseconds to `self`, rolling over seconds as needed to ensure `nsec` stays in
	/// the range of [0-999999999].
	fn add(mut self, rhs: Nanoseconds) -> Self::Output {
		let nsec = self.nsec + rhs.0;
		self.sec += nsec.div_euclid(NANOSECONDS_PER_SECOND);
		self.nsec = nsec.rem_euclid(NANOSECONDS_PER_SECOND);
		self
	}
}

impl Add for TimeSpec {
	type Output = Self;

	/// Add `rhs` to `self`, rolling over seconds as needed.
	fn add(self, rhs: TimeSpec) -> Self::Output {
		self + Seconds(rhs.sec) + Nanoseconds(rhs.nsec)
	}
}

impl Sub for TimeSpec {
	type Output = Self;

	/// Subtract `rhs` from `self`, borrowing from seconds as needed so that `nsec` stays in the
	/// range of [0-999999999].
	fn sub(self, rhs: TimeSpec) -> Self::Output {
		self + Seconds(-rhs.sec) + Nanoseconds(-rhs.nsec)
	}
}

/// Get the current time as a Unix timestamp with nanosecond granularity.
///
/// This function will return `None` if `libc::clock_gettime` fails.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use clock::time::now;
/// let c = now().expect("Failed to get current time");
/// assert!(c.sec > 0);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now() -> Option<TimeSpec> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => Some(time.assume_init().into()),
			_ => None
		}
	}
}
