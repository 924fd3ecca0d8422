//! Local civil time as reported by the operating system.
//!
//! These functions defer to libc (`time`, `localtime_r`, `mktime`), so the local timezone is
//! whatever the C library considers local, typically governed by `/etc/localtime` or the `TZ`
//! environment variable. `localtime_r` is used instead of `localtime`, so conversions do not share
//! a static buffer.
//!
//! # Examples
//!
//! ```
//! # use clock::local::{calendar_now, LocalTm};
//! let t = calendar_now().unwrap();
//! let local = LocalTm::new(t).unwrap();
//! assert_eq!(local.timestamp(), Some(t));
//! ```

use core::{mem::MaybeUninit, ptr};
use libc::{c_int, localtime_r, mktime, time_t, tm};

/// Seconds per hour, used to sanity check UTC offsets.
const SECONDS_PER_HOUR: i32 = 3600;

/// Broken-down local calendar time, similar to `libc::tm`.
///
/// Key differences:
/// - `mon` is [0, 11] in `libc::tm` but [1, 12] in [`LocalTm`].
/// - `year` is years since 1900 in `libc::tm` but the absolute Gregorian year in [`LocalTm`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTm {
	/// Seconds, ranged [0, 60] (60 only for a leap second)
	pub sec: u8,
	/// Minutes, ranged [0, 59]
	pub min: u8,
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8,
	/// Month of the year, ranged [1, 12]
	pub mon: u8,
	/// Absolute Gregorian calendar year
	pub year: i32,
	/// Whether daylight savings time is in effect
	pub isdst: bool,
	/// The UTC offset in seconds, i.e. `local = utc + utoff`
	pub utoff: i32
}

impl LocalTm {
	/// Convert a Unix timestamp into local calendar time.
	///
	/// Returns `None` if `timestamp` does not fit the platform's `time_t` or if `localtime_r`
	/// fails.
	pub fn new(timestamp: i64) -> Option<LocalTm> {
		let t = time_t::try_from(timestamp).ok()?;
		let mut out = MaybeUninit::<tm>::uninit();
		// Safety:
		// - localtime_r only reads `t` and only writes `out`
		// - if localtime_r returns non-null, `out` is fully initialized
		let tm = unsafe {
			if localtime_r(&t, out.as_mut_ptr()).is_null() {
				return None;
			}
			out.assume_init()
		};

		Some(LocalTm {
			sec: tm.tm_sec as u8,
			min: tm.tm_min as u8,
			hour: tm.tm_hour as u8,
			day: tm.tm_mday as u8,
			mon: (tm.tm_mon + 1) as u8,
			year: tm.tm_year + 1900,
			isdst: tm.tm_isdst > 0,
			utoff: tm.tm_gmtoff as i32
		})
	}

	/// Convert back to a Unix timestamp with `mktime`.
	///
	/// Returns `None` if `mktime` cannot represent the value.
	pub fn timestamp(&self) -> Option<i64> {
		// Safety: `tm` is a plain C struct for which all-zero is a valid value (the only pointer
		// member, `tm_zone`, becomes null which mktime ignores).
		let mut raw: tm = unsafe { MaybeUninit::zeroed().assume_init() };
		raw.tm_sec = c_int::from(self.sec);
		raw.tm_min = c_int::from(self.min);
		raw.tm_hour = c_int::from(self.hour);
		raw.tm_mday = c_int::from(self.day);
		raw.tm_mon = c_int::from(self.mon) - 1;
		raw.tm_year = self.year - 1900;
		raw.tm_isdst = c_int::from(self.isdst);

		// Safety: mktime reads and normalizes `raw`, which is fully initialized.
		match unsafe { mktime(&mut raw) } {
			-1 => None,
			t => Some(i64::from(t))
		}
	}
}

/// Get the current calendar time (whole seconds since the Unix epoch).
///
/// This is the coarse clock read by C's `time()`; see [`crate::time::now`] for the nanosecond
/// resolution clock.
pub fn calendar_now() -> Option<i64> {
	// Safety: passing null means time() only returns the value and writes nothing.
	match unsafe { libc::time(ptr::null_mut()) } {
		-1 => None,
		t => Some(i64::from(t))
	}
}

/// Get the current UTC offset of the system's local timezone, in seconds.
///
/// Returns `None` if either clock read fails, or if the reported offset is beyond ±26 hours
/// (which no real timezone uses).
///
/// # Examples
///
/// ```
/// # use clock::local::local_utc_offset;
/// let offset = local_utc_offset().unwrap();
/// assert!(offset.abs() <= 26 * 3600);
/// ```
pub fn local_utc_offset() -> Option<i32> {
	let local = LocalTm::new(calendar_now()?)?;
	if local.utoff.abs() > 26 * SECONDS_PER_HOUR {
		return None;
	}
	Some(local.utoff)
}
