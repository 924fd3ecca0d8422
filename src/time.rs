//! Civil time of day with nanosecond precision.
//!
//! A [`Time`] is six fields (hour, minute, second, millisecond, microsecond, nanosecond) bound to
//! a [`Timezone`]. Every field always stays within its range: construction rejects out of range
//! values, and every operation that changes a [`Time`] renormalizes by carrying into (or
//! borrowing from) the next larger unit. Hours wrap at midnight going forward, but there is no
//! date to borrow from going backward, so subtracting past midnight fails with
//! [`Error::NegativeTime`].
//!
//! Times in different timezones compare by re-expressing the right hand side's hour in the left
//! hand side's timezone. That hour wraps forward past midnight but not backward, so 5:00 UTC seen
//! from CST is hour -1 and sorts before every CST time.
//!
//! # Examples
//!
//! ```
//! # use civiltime::{Hours, Milliseconds, Time, Timezone, Unit};
//! let t = Time::with_timezone(0, 0, 1, 1, 0, 0, Timezone::Utc).unwrap();
//! let t = (t - Milliseconds(2)).unwrap();
//! assert_eq!(t.to_string(), "0:00:00.999.0.0");
//!
//! // There is nothing before midnight
//! assert!((t - Hours(1)).is_err());
//!
//! // The same instant in two timezones
//! let utc = Time::with_timezone(7, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
//! let cst = Time::with_timezone(1, 0, 0, 0, 0, 0, Timezone::Cst).unwrap();
//! assert_eq!(utc, cst);
//!
//! let mut t = Time::with_timezone(1, 0, 29, 499, 500, 1, Timezone::Utc).unwrap();
//! t.round(Unit::Second);
//! assert_eq!(t.to_string(), "1:00:30.0.0.0");
//! ```

use std::{cmp::Ordering, fmt, ops::{Add, Sub}};
use clock::{local::{calendar_now, LocalTm}, time::TimeSpec};
use crate::{
	error::Error,
	tz::{default_timezone, Timezone},
	unit::{Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, Unit}
};

/// Hours per day.
pub const HOURS_PER_DAY: i64 = 24;
/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;
/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: i64 = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
/// Milliseconds per second.
pub const MILLISECONDS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute.
pub const MILLISECONDS_PER_MINUTE: i64 = SECONDS_PER_MINUTE * MILLISECONDS_PER_SECOND;
/// Milliseconds per hour.
pub const MILLISECONDS_PER_HOUR: i64 = SECONDS_PER_HOUR * MILLISECONDS_PER_SECOND;
/// Microseconds per millisecond.
pub const MICROSECONDS_PER_MILLISECOND: i64 = 1_000;
/// Microseconds per second.
pub const MICROSECONDS_PER_SECOND: i64 = MILLISECONDS_PER_SECOND * MICROSECONDS_PER_MILLISECOND;
/// Microseconds per minute.
pub const MICROSECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_MINUTE * MICROSECONDS_PER_MILLISECOND;
/// Microseconds per hour.
pub const MICROSECONDS_PER_HOUR: i64 = MILLISECONDS_PER_HOUR * MICROSECONDS_PER_MILLISECOND;
/// Nanoseconds per microsecond.
pub const NANOSECONDS_PER_MICROSECOND: i64 = 1_000;
/// Nanoseconds per millisecond.
pub const NANOSECONDS_PER_MILLISECOND: i64 = MICROSECONDS_PER_MILLISECOND * NANOSECONDS_PER_MICROSECOND;
/// Nanoseconds per second.
pub const NANOSECONDS_PER_SECOND: i64 = MICROSECONDS_PER_SECOND * NANOSECONDS_PER_MICROSECOND;
/// Nanoseconds per minute.
pub const NANOSECONDS_PER_MINUTE: i64 = MICROSECONDS_PER_MINUTE * NANOSECONDS_PER_MICROSECOND;
/// Nanoseconds per hour.
pub const NANOSECONDS_PER_HOUR: i64 = MICROSECONDS_PER_HOUR * NANOSECONDS_PER_MICROSECOND;

/// A time of day in a fixed-offset timezone.
///
/// Fields are ranged:
/// - hour: [0, 23]
/// - minute: [0, 59]
/// - second: [0, 59]
/// - millisecond, microsecond, nanosecond: [0, 999]
///
/// [`Time`] implements [`PartialEq`] and [`PartialOrd`] but not [`Eq`], [`Ord`] or [`Hash`]:
/// comparison first moves the right hand side's hour into the left hand side's timezone, with
/// truncating remainder (an hour past 23 wraps, an hour before 0 stays negative), and the
/// resulting order is not guaranteed to be transitive once three or more timezones are mixed.
/// Sort times from a single timezone, or convert them all with [`Time::set_timezone`] first.
///
/// # Examples
///
/// ```
/// # use civiltime::{Time, Timezone};
/// let t = Time::with_timezone(1, 2, 3, 4, 5, 6, Timezone::Cst).unwrap();
/// assert_eq!(t.to_string(), "1:02:03.4.5.6");
/// assert_eq!(t.hour_at_timezone(Timezone::Utc), 7);
///
/// let err = Time::with_timezone(24, 0, 0, 0, 0, 0, Timezone::Cst).unwrap_err();
/// assert_eq!(err.to_string(), "Time '24:00:00.0.0.0' is invalid");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Time {
	hour: u8,
	minute: u8,
	second: u8,
	millisecond: u16,
	microsecond: u16,
	nanosecond: u16,
	timezone: Timezone
}

/// Render raw field values the same way [`Time`]'s `Display` does.
fn render(fields: [i64; 6]) -> String {
	let [h, m, s, ms, us, ns] = fields;
	format!("{}:{:02}:{:02}.{}.{}.{}", h, m, s, ms, us, ns)
}

impl Time {
	/// Create a time in the process-wide default timezone.
	///
	/// See [`set_default_timezone`](crate::set_default_timezone). Fails with
	/// [`Error::InvalidTime`] if any field is out of range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{ErrorKind, Time};
	/// let t = Time::new(13, 30, 0, 0, 0, 0).unwrap();
	/// assert_eq!((t.hour(), t.minute()), (13, 30));
	/// assert_eq!(Time::new(0, 60, 0, 0, 0, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
	/// ```
	pub fn new(
		hour: u8,
		minute: u8,
		second: u8,
		millisecond: u16,
		microsecond: u16,
		nanosecond: u16
	) -> Result<Time, Error> {
		Time::with_timezone(hour, minute, second, millisecond, microsecond, nanosecond, default_timezone())
	}

	/// Create a time in the given timezone.
	///
	/// Fails with [`Error::InvalidTime`] if any field is out of range.
	pub fn with_timezone(
		hour: u8,
		minute: u8,
		second: u8,
		millisecond: u16,
		microsecond: u16,
		nanosecond: u16,
		timezone: Timezone
	) -> Result<Time, Error> {
		Time::from_fields(
			[hour.into(), minute.into(), second.into(), millisecond.into(), microsecond.into(), nanosecond.into()],
			timezone
		)
	}

	/// Create a time with whole seconds in the process-wide default timezone.
	pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Time, Error> {
		Time::new(hour, minute, second, 0, 0, 0)
	}

	/// Create a time from nanoseconds since midnight, the inverse of
	/// [`Time::total_nanoseconds`].
	///
	/// Fails with [`Error::InvalidTime`] unless `nanoseconds` falls within one day.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone};
	/// let t = Time::from_total_nanoseconds(3_723_004_005_006, Timezone::Utc).unwrap();
	/// assert_eq!(t.to_string(), "1:02:03.4.5.6");
	///
	/// let err = Time::from_total_nanoseconds(-1, Timezone::Utc).unwrap_err();
	/// assert_eq!(err.to_string(), "Time '-1:59:59.999.999.999' is invalid");
	/// ```
	pub fn from_total_nanoseconds(nanoseconds: i64, timezone: Timezone) -> Result<Time, Error> {
		let mut fields = [0; 6];
		let mut rest = nanoseconds;
		// Fields are coarsest first, Unit::ALL is finest first
		for (field, unit) in fields.iter_mut().rev().zip(Unit::ALL) {
			if unit.larger().is_none() {
				*field = rest;
			} else {
				*field = rest.rem_euclid(unit.modulus());
				rest = rest.div_euclid(unit.modulus());
			}
		}
		Time::from_fields(fields, timezone)
	}

	/// Midnight in the process-wide default timezone.
	pub fn midnight() -> Time {
		Time::zero(default_timezone())
	}

	/// Midnight in `timezone`.
	fn zero(timezone: Timezone) -> Time {
		Time {
			hour: 0,
			minute: 0,
			second: 0,
			millisecond: 0,
			microsecond: 0,
			nanosecond: 0,
			timezone
		}
	}

	/// Build a time from fields ordered hour first, validating every one of them.
	fn from_fields(fields: [i64; 6], timezone: Timezone) -> Result<Time, Error> {
		// Unit::ALL is finest first, fields are coarsest first
		let valid = fields.iter()
			.zip(Unit::ALL.iter().rev())
			.all(|(&value, unit)| (0..unit.modulus()).contains(&value));
		if !valid {
			return Err(Error::InvalidTime(render(fields)));
		}

		let [hour, minute, second, millisecond, microsecond, nanosecond] = fields;
		// Casts are lossless after the range check above
		Ok(Time {
			hour: hour as u8,
			minute: minute as u8,
			second: second as u8,
			millisecond: millisecond as u16,
			microsecond: microsecond as u16,
			nanosecond: nanosecond as u16,
			timezone
		})
	}

	/// Sample the current time of day, expressed in `timezone`.
	///
	/// The system's local civil time supplies hour, minute and second; the sub-second fields come
	/// from the high resolution clock's distance past the start of that local second. The hour is
	/// then moved from [`Timezone::Local`] into `timezone`, wrapping at midnight.
	///
	/// The two clocks are read one after the other, so if a second boundary falls between the
	/// reads the sub-second part can reach one second, which fails validation with
	/// [`Error::InvalidTime`]. Fails with [`Error::ClockUnavailable`] if a clock cannot be read.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone};
	/// let t = Time::now(Timezone::Utc).unwrap();
	/// assert_eq!(t.timezone(), Timezone::Utc);
	/// assert!(t.is_valid());
	/// ```
	pub fn now(timezone: Timezone) -> Result<Time, Error> {
		let calendar = calendar_now().ok_or(Error::ClockUnavailable)?;
		let local = LocalTm::new(calendar).ok_or(Error::ClockUnavailable)?;
		let second_start = local.timestamp().ok_or(Error::ClockUnavailable)?;
		let precise = clock::time::now().ok_or(Error::ClockUnavailable)?;

		let since = (precise - TimeSpec { sec: second_start, nsec: 0 }).as_nanos();
		let nanos_per_milli = i128::from(NANOSECONDS_PER_MILLISECOND);
		let nanos_per_micro = i128::from(NANOSECONDS_PER_MICROSECOND);
		let millisecond = since / nanos_per_milli;
		let microsecond = (since - millisecond * nanos_per_milli) / nanos_per_micro;
		let nanosecond = since - millisecond * nanos_per_milli - microsecond * nanos_per_micro;

		let hour = (i64::from(local.hour) + i64::from(Timezone::Local.offset_diff(timezone)))
			.rem_euclid(HOURS_PER_DAY);

		// Saturate so that a wildly skewed clock still renders in the error message
		let narrow = |v: i128| i64::try_from(v).unwrap_or(i64::MAX);
		Time::from_fields(
			[hour, local.min.into(), local.sec.into(), narrow(millisecond), narrow(microsecond), narrow(nanosecond)],
			timezone
		).inspect_err(|e| {
			warn!("sampled wall clock time is invalid: {}", e);
		})
	}

	/// Sample the current time of day in the process-wide default timezone.
	pub fn now_default() -> Result<Time, Error> {
		Time::now(default_timezone())
	}

	/// Check every field against its range.
	///
	/// Always `true` for a [`Time`] built through this crate's API.
	pub fn is_valid(&self) -> bool {
		Unit::ALL.iter().all(|&unit| (0..unit.modulus()).contains(&self.get(unit)))
	}

	/// Hours, ranged [0, 23].
	pub fn hour(&self) -> u8 {
		self.hour
	}

	/// Minutes, ranged [0, 59].
	pub fn minute(&self) -> u8 {
		self.minute
	}

	/// Seconds, ranged [0, 59].
	pub fn second(&self) -> u8 {
		self.second
	}

	/// Milliseconds, ranged [0, 999].
	pub fn millisecond(&self) -> u16 {
		self.millisecond
	}

	/// Microseconds, ranged [0, 999].
	pub fn microsecond(&self) -> u16 {
		self.microsecond
	}

	/// Nanoseconds, ranged [0, 999].
	pub fn nanosecond(&self) -> u16 {
		self.nanosecond
	}

	/// The timezone this time is expressed in.
	pub fn timezone(&self) -> Timezone {
		self.timezone
	}

	/// The field for `unit`.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let t = Time::with_timezone(1, 2, 3, 4, 5, 6, Timezone::Utc).unwrap();
	/// assert_eq!(t.get(Unit::Minute), 2);
	/// assert_eq!(t.get(Unit::Nanosecond), 6);
	/// ```
	pub fn get(&self, unit: Unit) -> i64 {
		match unit {
			Unit::Hour => self.hour.into(),
			Unit::Minute => self.minute.into(),
			Unit::Second => self.second.into(),
			Unit::Millisecond => self.millisecond.into(),
			Unit::Microsecond => self.microsecond.into(),
			Unit::Nanosecond => self.nanosecond.into(),
		}
	}

	/// Overwrite the field for `unit`. `value` must already be within the field's range.
	fn set(&mut self, unit: Unit, value: i64) {
		debug_assert!((0..unit.modulus()).contains(&value));
		match unit {
			Unit::Hour => self.hour = value as u8,
			Unit::Minute => self.minute = value as u8,
			Unit::Second => self.second = value as u8,
			Unit::Millisecond => self.millisecond = value as u16,
			Unit::Microsecond => self.microsecond = value as u16,
			Unit::Nanosecond => self.nanosecond = value as u16,
		}
	}

	/// Total whole `unit`s since midnight.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let t = Time::with_timezone(2, 30, 15, 0, 0, 0, Timezone::Utc).unwrap();
	/// assert_eq!(t.total(Unit::Hour), 2);
	/// assert_eq!(t.total(Unit::Minute), 150);
	/// assert_eq!(t.total(Unit::Second), 9015);
	/// ```
	pub fn total(&self, unit: Unit) -> i64 {
		Unit::ALL.iter()
			.rev()
			.take_while(|&&u| u >= unit)
			.fold(0, |total, &u| total * u.modulus() + self.get(u))
	}

	/// Total whole minutes since midnight.
	pub fn total_minutes(&self) -> i64 {
		self.total(Unit::Minute)
	}

	/// Total whole seconds since midnight.
	pub fn total_seconds(&self) -> i64 {
		self.total(Unit::Second)
	}

	/// Total whole milliseconds since midnight.
	pub fn total_milliseconds(&self) -> i64 {
		self.total(Unit::Millisecond)
	}

	/// Total whole microseconds since midnight.
	pub fn total_microseconds(&self) -> i64 {
		self.total(Unit::Microsecond)
	}

	/// Total nanoseconds since midnight.
	pub fn total_nanoseconds(&self) -> i64 {
		self.total(Unit::Nanosecond)
	}

	/// Add `change` at `unit`, carrying upward one unit at a time.
	///
	/// At each level the new total of that unit (all larger fields included) is split with floor
	/// division into the new field value and the change carried into the next unit. Returns the
	/// updated fields together with the new, unwrapped hour; the hour field itself is left for
	/// the caller to wrap or reject.
	fn carry(mut self, unit: Unit, change: i128) -> (Time, i128) {
		let mut unit = unit;
		let mut change = change;
		while let Some(larger) = unit.larger() {
			let modulus = i128::from(unit.modulus());
			let total = i128::from(self.total(unit)) + change;
			change = total.div_euclid(modulus) - i128::from(self.total(larger));
			// rem_euclid is within [0, modulus), which fits in i64
			self.set(unit, total.rem_euclid(modulus) as i64);
			unit = larger;
		}
		let hour = i128::from(self.hour) + change;
		(self, hour)
	}

	/// Add `amount` of `unit`, returning the new time.
	///
	/// Carries wrap past midnight, e.g. 23:00 plus two hours is 1:00. Fails with
	/// [`Error::NegativeTime`] if the result would be before midnight.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let t = Time::with_timezone(0, 58, 0, 0, 0, 0, Timezone::Utc).unwrap();
	/// assert_eq!(t.checked_add(Unit::Minute, 4).unwrap().to_string(), "1:02:00.0.0.0");
	/// assert_eq!(t.checked_add(Unit::Hour, 23).unwrap().to_string(), "23:58:00.0.0.0");
	/// assert_eq!(t.checked_add(Unit::Hour, 24).unwrap().to_string(), "0:58:00.0.0.0");
	/// assert!(t.checked_add(Unit::Minute, -59).is_err());
	/// ```
	pub fn checked_add(self, unit: Unit, amount: i64) -> Result<Time, Error> {
		self.shifted(unit, i128::from(amount))
	}

	/// Subtract `amount` of `unit`, returning the new time.
	///
	/// Fails with [`Error::NegativeTime`] if the result would be before midnight.
	pub fn checked_sub(self, unit: Unit, amount: i64) -> Result<Time, Error> {
		self.shifted(unit, -i128::from(amount))
	}

	/// Add `amount` of `unit` in place.
	///
	/// On failure `self` is left unchanged.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let mut t = Time::with_timezone(0, 0, 1, 0, 0, 0, Timezone::Utc).unwrap();
	/// t.shift(Unit::Second, -1).unwrap();
	/// assert_eq!(t.to_string(), "0:00:00.0.0.0");
	/// assert!(t.shift(Unit::Nanosecond, -1).is_err());
	/// assert_eq!(t.to_string(), "0:00:00.0.0.0");
	/// ```
	pub fn shift(&mut self, unit: Unit, amount: i64) -> Result<(), Error> {
		*self = self.checked_add(unit, amount)?;
		Ok(())
	}

	fn shifted(self, unit: Unit, change: i128) -> Result<Time, Error> {
		let (mut time, hour) = self.carry(unit, change);
		if hour < 0 {
			trace!("{} {:+} {} carries to hour {}", self, change, unit, hour);
			return Err(Error::NegativeTime);
		}
		time.hour = (hour % i128::from(HOURS_PER_DAY)) as u8;
		Ok(time)
	}

	/// Add one `unit`, wrapping past midnight. Cannot fail since nothing is subtracted.
	fn increment(&mut self, unit: Unit) {
		let (mut time, hour) = self.carry(unit, 1);
		time.hour = hour.rem_euclid(i128::from(HOURS_PER_DAY)) as u8;
		*self = time;
	}

	/// The hour of this time re-expressed in `timezone`, wrapped into [0, 23].
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone};
	/// let t = Time::with_timezone(20, 0, 0, 0, 0, 0, Timezone::Cst).unwrap();
	/// assert_eq!(t.hour_at_timezone(Timezone::Utc), 2);
	/// assert_eq!(t.hour_at_timezone(Timezone::Pst), 18);
	/// ```
	pub fn hour_at_timezone(&self, timezone: Timezone) -> u8 {
		let hour = i64::from(self.hour) + i64::from(self.timezone.offset_diff(timezone));
		hour.rem_euclid(HOURS_PER_DAY) as u8
	}

	/// Move this time into `timezone`.
	///
	/// Only the hour changes, and it always wraps (in both directions), so this cannot fail.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone};
	/// let mut t = Time::with_timezone(23, 0, 0, 0, 0, 0, Timezone::Cst).unwrap();
	/// t.set_timezone(Timezone::Est);
	/// assert_eq!((t.hour(), t.timezone()), (0, Timezone::Est));
	/// t.set_timezone(Timezone::Pst);
	/// assert_eq!((t.hour(), t.timezone()), (21, Timezone::Pst));
	/// ```
	pub fn set_timezone(&mut self, timezone: Timezone) {
		self.hour = self.hour_at_timezone(timezone);
		self.timezone = timezone;
	}

	/// Zero every field below `to`, from the nanosecond up, first adding one of the next larger
	/// unit whenever `bump` says so for the field about to be cleared.
	fn sweep(&mut self, to: Unit, bump: impl Fn(Unit, i64) -> bool) {
		for unit in Unit::ALL.into_iter().take_while(|&u| u < to) {
			let Some(larger) = unit.larger() else { break };
			if bump(unit, self.get(unit)) {
				self.increment(larger);
			}
			self.set(unit, 0);
		}
	}

	/// Round to the nearest `to`, ties up.
	///
	/// Fields are rounded one at a time from the nanosecond up, so a field at or above half its
	/// range adds one to the next field, which may then itself round up. Rounding to the hour
	/// can wrap 23:30 to 0:00.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let mut t = Time::with_timezone(11, 29, 30, 1, 1, 1, Timezone::Utc).unwrap();
	/// t.round(Unit::Hour);
	/// assert_eq!(t.to_string(), "12:00:00.0.0.0");
	/// ```
	pub fn round(&mut self, to: Unit) {
		self.sweep(to, |unit, value| value >= unit.half());
	}

	/// Round up to a multiple of `to`. Already whole values are unchanged.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Time, Timezone, Unit};
	/// let mut t = Time::with_timezone(1, 1, 29, 1, 1, 1, Timezone::Utc).unwrap();
	/// t.ceil(Unit::Second);
	/// assert_eq!(t.to_string(), "1:01:30.0.0.0");
	/// ```
	pub fn ceil(&mut self, to: Unit) {
		self.sweep(to, |_, value| value > 0);
	}

	/// Round down to a multiple of `to`, i.e. zero every field below `to`.
	pub fn floor(&mut self, to: Unit) {
		self.sweep(to, |_, _| false);
	}

	/// Copying version of [`Time::round`].
	pub fn rounded(mut self, to: Unit) -> Time {
		self.round(to);
		self
	}

	/// Copying version of [`Time::ceil`].
	pub fn ceiled(mut self, to: Unit) -> Time {
		self.ceil(to);
		self
	}

	/// Copying version of [`Time::floor`].
	pub fn floored(mut self, to: Unit) -> Time {
		self.floor(to);
		self
	}

	/// The six fields as a tuple, hour first, with the hour taken in `timezone`.
	///
	/// Unlike [`Time::hour_at_timezone`] the hour only wraps forward: 1:00 moved back two hours
	/// is -1, not 23.
	fn key(&self, timezone: Timezone) -> (i16, u8, u8, u16, u16, u16) {
		let hour = i16::from(self.hour) + i16::from(self.timezone.offset_diff(timezone));
		(
			hour % HOURS_PER_DAY as i16,
			self.minute,
			self.second,
			self.millisecond,
			self.microsecond,
			self.nanosecond
		)
	}
}

impl Default for Time {
	/// Midnight in the process-wide default timezone.
	fn default() -> Self {
		Time::midnight()
	}
}

impl fmt::Display for Time {
	/// Render as `h:mm:ss.m.u.n`: the hour unpadded, minutes and seconds padded to two digits,
	/// sub-second fields unpadded.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}:{:02}:{:02}.{}.{}.{}",
			self.hour, self.minute, self.second, self.millisecond, self.microsecond, self.nanosecond
		)
	}
}

impl PartialEq for Time {
	fn eq(&self, other: &Self) -> bool {
		self.key(self.timezone) == other.key(self.timezone)
	}
}

impl PartialOrd for Time {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.key(self.timezone).cmp(&other.key(self.timezone)))
	}
}

macro_rules! amount_ops {
	($($amount:ident),*) => {
		$(
			impl Add<$amount> for Time {
				type Output = Result<Time, Error>;

				/// See [`Time::checked_add`].
				fn add(self, rhs: $amount) -> Self::Output {
					let (unit, amount) = rhs.into();
					self.checked_add(unit, amount)
				}
			}

			impl Sub<$amount> for Time {
				type Output = Result<Time, Error>;

				/// See [`Time::checked_sub`].
				fn sub(self, rhs: $amount) -> Self::Output {
					let (unit, amount) = rhs.into();
					self.checked_sub(unit, amount)
				}
			}
		)*
	};
}

amount_ops!(Hours, Minutes, Seconds, Milliseconds, Microseconds, Nanoseconds);

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
	fn arbitrary(g: &mut quickcheck::Gen) -> Time {
		use quickcheck::Arbitrary;
		let timezones = Timezone::ALL;
		Time {
			hour: u8::arbitrary(g) % 24,
			minute: u8::arbitrary(g) % 60,
			second: u8::arbitrary(g) % 60,
			millisecond: u16::arbitrary(g) % 1000,
			microsecond: u16::arbitrary(g) % 1000,
			nanosecond: u16::arbitrary(g) % 1000,
			timezone: timezones[usize::arbitrary(g) % timezones.len()]
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ErrorKind, tz::{set_default_timezone, DEFAULT_TIMEZONE_LOCK}};
	use quickcheck::{quickcheck, TestResult};

	/// Build a time in a fixed timezone so tests do not depend on the process default.
	fn t(hour: u8, minute: u8, second: u8, ms: u16, us: u16, ns: u16) -> Time {
		Time::with_timezone(hour, minute, second, ms, us, ns, Timezone::Cst).unwrap()
	}

	fn h(hour: u8) -> Time {
		t(hour, 0, 0, 0, 0, 0)
	}

	/// Sample the wall clock, retrying when a second boundary falls between the two clock reads.
	fn sample(timezone: Timezone) -> Time {
		let mut last = None;
		for _ in 0..5 {
			match Time::now(timezone) {
				Ok(time) => return time,
				Err(e @ Error::InvalidTime(_)) => last = Some(e),
				Err(e) => panic!("failed to sample the wall clock: {}", e),
			}
		}
		panic!("wall clock sample kept failing: {:?}", last);
	}

	/// Number of `unit`s in a day.
	fn per_day(unit: Unit) -> i64 {
		Unit::ALL.iter().filter(|&&u| u >= unit).map(|u| u.modulus()).product()
	}

	#[test]
	fn constructor_sets_members_test() {
		let time = t(1, 2, 3, 4, 5, 6);
		assert_eq!(time.hour(), 1);
		assert_eq!(time.minute(), 2);
		assert_eq!(time.second(), 3);
		assert_eq!(time.millisecond(), 4);
		assert_eq!(time.microsecond(), 5);
		assert_eq!(time.nanosecond(), 6);
		assert_eq!(time.timezone(), Timezone::Cst);
	}

	#[test]
	fn constructor_rejects_out_of_range_test() {
		let tz = Timezone::Cst;
		let cases = [
			Time::with_timezone(24, 0, 0, 0, 0, 0, tz),
			Time::with_timezone(0, 61, 0, 0, 0, 0, tz),
			Time::with_timezone(0, 0, 60, 0, 0, 0, tz),
			Time::with_timezone(0, 0, 0, 1001, 0, 0, tz),
			Time::with_timezone(0, 0, 0, 0, 1000, 0, tz),
			Time::with_timezone(0, 0, 0, 0, 0, 1001, tz),
			Time::with_timezone(u8::MAX, u8::MAX, u8::MAX, u16::MAX, u16::MAX, u16::MAX, tz),
		];
		for case in cases {
			assert_eq!(case.unwrap_err().kind(), ErrorKind::InvalidArgument);
		}

		assert_eq!(
			Time::with_timezone(0, 61, 0, 0, 0, 0, tz).unwrap_err(),
			Error::InvalidTime("0:61:00.0.0.0".into())
		);
		assert!(Time::with_timezone(23, 59, 59, 999, 999, 999, tz).is_ok());
	}

	#[test]
	fn default_timezone_used_test() {
		let _guard = DEFAULT_TIMEZONE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
		let original = default_timezone();

		set_default_timezone(Timezone::Utc);
		assert_eq!(Time::new(1, 0, 0, 0, 0, 0).unwrap().timezone(), Timezone::Utc);
		assert_eq!(Time::from_hms(1, 2, 3).unwrap().timezone(), Timezone::Utc);
		set_default_timezone(Timezone::Pst);
		assert_eq!(Time::midnight().timezone(), Timezone::Pst);
		assert_eq!(Time::default().to_string(), "0:00:00.0.0.0");

		set_default_timezone(original);
	}

	#[test]
	fn now_sets_timezone_test() {
		let _ = env_logger::try_init();
		let mut time = sample(Timezone::Cst);
		assert_eq!(time.timezone(), Timezone::Cst);
		assert!(time.is_valid());
		let old_hour = time.hour();
		time.set_timezone(Timezone::Est);
		assert_eq!((i16::from(time.hour()) - i16::from(old_hour)).rem_euclid(24), 1);
	}

	#[test]
	fn now_local_matches_system_test() {
		let time = sample(Timezone::Local);
		let local = LocalTm::new(calendar_now().unwrap()).unwrap();
		// Allow for the hour ticking over between the two reads
		let diff = (i16::from(local.hour) - i16::from(time.hour())).rem_euclid(24);
		assert!(diff <= 1, "now: {}, local hour: {}", time, local.hour);
	}

	#[test]
	fn add_hour_test() {
		assert_eq!((h(1) + Hours(1)).unwrap().hour(), 2);
		assert_eq!((h(22) + Hours(4)).unwrap(), h(2));
		assert_eq!((h(3) - Hours(1)).unwrap().hour(), 2);
	}

	#[test]
	fn sub_hour_rejects_negative_test() {
		let err = (h(0) - Hours(1)).unwrap_err();
		assert_eq!(err, Error::NegativeTime);
		assert_eq!(err.kind(), ErrorKind::OutOfRange);
		assert!((h(5) - Hours(30)).is_err());
		// Exactly a day back is still before midnight
		assert!((h(2) - Hours(26)).is_err());
	}

	#[test]
	fn add_minute_test() {
		assert_eq!((t(0, 1, 0, 0, 0, 0) + Minutes(1)).unwrap().minute(), 2);
		assert_eq!((t(0, 58, 0, 0, 0, 0) + Minutes(4)).unwrap(), t(1, 2, 0, 0, 0, 0));
		assert_eq!((t(0, 3, 0, 0, 0, 0) - Minutes(1)).unwrap().minute(), 2);
		assert_eq!((t(1, 1, 0, 0, 0, 0) - Minutes(2)).unwrap(), t(0, 59, 0, 0, 0, 0));
	}

	#[test]
	fn add_second_test() {
		assert_eq!((t(0, 0, 1, 0, 0, 0) + Seconds(1)).unwrap().second(), 2);
		assert_eq!((t(0, 0, 58, 0, 0, 0) + Seconds(4)).unwrap(), t(0, 1, 2, 0, 0, 0));
		assert_eq!((t(0, 0, 3, 0, 0, 0) - Seconds(1)).unwrap().second(), 2);
		assert_eq!((t(0, 1, 1, 0, 0, 0) - Seconds(2)).unwrap(), t(0, 0, 59, 0, 0, 0));
	}

	#[test]
	fn add_millisecond_test() {
		assert_eq!((t(0, 0, 0, 1, 0, 0) + Milliseconds(1)).unwrap().millisecond(), 2);
		assert_eq!((t(0, 0, 0, 999, 0, 0) + Milliseconds(3)).unwrap(), t(0, 0, 1, 2, 0, 0));
		assert_eq!((t(0, 0, 0, 3, 0, 0) - Milliseconds(1)).unwrap().millisecond(), 2);
		assert_eq!((t(0, 0, 1, 1, 0, 0) - Milliseconds(2)).unwrap(), t(0, 0, 0, 999, 0, 0));
	}

	#[test]
	fn add_microsecond_test() {
		assert_eq!((t(0, 0, 0, 0, 1, 0) + Microseconds(1)).unwrap().microsecond(), 2);
		assert_eq!((t(0, 0, 0, 0, 999, 0) + Microseconds(3)).unwrap(), t(0, 0, 0, 1, 2, 0));
		assert_eq!((t(0, 0, 0, 0, 3, 0) - Microseconds(1)).unwrap().microsecond(), 2);
		assert_eq!((t(0, 0, 0, 1, 1, 0) - Microseconds(2)).unwrap(), t(0, 0, 0, 0, 999, 0));
	}

	#[test]
	fn add_nanosecond_test() {
		assert_eq!((t(0, 0, 0, 0, 0, 1) + Nanoseconds(1)).unwrap().nanosecond(), 2);
		assert_eq!((t(0, 0, 0, 0, 0, 999) + Nanoseconds(3)).unwrap(), t(0, 0, 0, 0, 1, 2));
		assert_eq!((t(0, 0, 0, 0, 0, 3) - Nanoseconds(1)).unwrap().nanosecond(), 2);
		assert_eq!((t(0, 0, 0, 0, 1, 1) - Nanoseconds(2)).unwrap(), t(0, 0, 0, 0, 0, 999));
	}

	#[test]
	fn carry_cascades_through_every_unit_test() {
		let last = t(23, 59, 59, 999, 999, 999);
		assert_eq!((last + Nanoseconds(1)).unwrap(), h(0));
		assert_eq!((h(0) - Nanoseconds(1)).unwrap_err(), Error::NegativeTime);
		assert_eq!((h(1) - Nanoseconds(1)).unwrap(), t(0, 59, 59, 999, 999, 999));
		assert_eq!((h(0) + Nanoseconds(NANOSECONDS_PER_HOUR * 25 + 1)).unwrap(), t(1, 0, 0, 0, 0, 1));
	}

	#[test]
	fn extreme_amounts_do_not_overflow_test() {
		assert!((h(12) + Nanoseconds(i64::MAX)).is_ok());
		assert!((h(12) + Hours(i64::MAX)).is_ok());
		assert!((h(12) - Nanoseconds(i64::MAX)).is_err());
		assert!((h(12) - Hours(i64::MIN)).is_ok());
		assert!((h(12) + Minutes(i64::MIN)).is_err());
	}

	#[test]
	fn shift_is_atomic_test() {
		let mut time = t(0, 0, 0, 5, 0, 0);
		assert!(time.shift(Unit::Millisecond, -6).is_err());
		assert_eq!(time, t(0, 0, 0, 5, 0, 0));
		time.shift(Unit::Millisecond, -5).unwrap();
		assert_eq!(time, h(0));
		time.shift(Unit::Hour, 25).unwrap();
		assert_eq!(time, h(1));
	}

	#[test]
	fn totals_test() {
		let time = t(1, 2, 3, 4, 5, 6);
		assert_eq!(time.total(Unit::Hour), 1);
		assert_eq!(time.total_minutes(), 62);
		assert_eq!(time.total_seconds(), 3723);
		assert_eq!(time.total_milliseconds(), 3_723_004);
		assert_eq!(time.total_microseconds(), 3_723_004_005);
		assert_eq!(time.total_nanoseconds(), 3_723_004_005_006);
		assert_eq!(t(23, 59, 59, 999, 999, 999).total_nanoseconds(), NANOSECONDS_PER_HOUR * 24 - 1);
	}

	#[test]
	fn from_total_nanoseconds_test() {
		let tz = Timezone::Cst;
		assert_eq!(Time::from_total_nanoseconds(0, tz).unwrap(), h(0));
		assert_eq!(Time::from_total_nanoseconds(3_723_004_005_006, tz).unwrap(), t(1, 2, 3, 4, 5, 6));
		assert_eq!(
			Time::from_total_nanoseconds(NANOSECONDS_PER_HOUR * 24 - 1, tz).unwrap(),
			t(23, 59, 59, 999, 999, 999)
		);
		assert_eq!(Time::from_total_nanoseconds(5, tz).unwrap().timezone(), tz);

		let err = Time::from_total_nanoseconds(NANOSECONDS_PER_HOUR * 24, tz).unwrap_err();
		assert_eq!(err, Error::InvalidTime("24:00:00.0.0.0".into()));
		assert_eq!(err.kind(), ErrorKind::InvalidArgument);
		assert!(Time::from_total_nanoseconds(-1, tz).is_err());
		assert!(Time::from_total_nanoseconds(i64::MAX, tz).is_err());
		assert!(Time::from_total_nanoseconds(i64::MIN, tz).is_err());
	}

	#[test]
	fn set_timezone_test() {
		let mut time = h(0);
		time.set_timezone(Timezone::Est);
		assert_eq!(time.hour(), 1);

		let mut time = h(23);
		time.set_timezone(Timezone::Est);
		assert_eq!(time.hour(), 0);

		// Wraps backward too, unlike subtraction
		let mut time = h(1);
		time.set_timezone(Timezone::Pst);
		assert_eq!(time.hour(), 23);
		assert_eq!(time.timezone(), Timezone::Pst);
	}

	#[test]
	fn hour_at_timezone_test() {
		assert_eq!(h(1).hour_at_timezone(Timezone::Utc), 7);
		assert_eq!(h(20).hour_at_timezone(Timezone::Utc), 2);
		assert_eq!(h(3).hour_at_timezone(Timezone::Hst), 23);
	}

	#[test]
	fn unit_conversions_test() {
		assert_eq!(HOURS_PER_DAY, 24);
		assert_eq!(MINUTES_PER_HOUR, 60);
		assert_eq!(SECONDS_PER_MINUTE, 60);
		assert_eq!(SECONDS_PER_HOUR, 3_600);
		assert_eq!(MILLISECONDS_PER_SECOND, 1_000);
		assert_eq!(MILLISECONDS_PER_MINUTE, 60_000);
		assert_eq!(MILLISECONDS_PER_HOUR, 3_600_000);
		assert_eq!(MICROSECONDS_PER_MILLISECOND, 1_000);
		assert_eq!(MICROSECONDS_PER_HOUR, 3_600_000_000);
		assert_eq!(MICROSECONDS_PER_MINUTE, 60_000_000);
		assert_eq!(MICROSECONDS_PER_SECOND, 1_000_000);
		assert_eq!(NANOSECONDS_PER_MICROSECOND, 1_000);
		assert_eq!(NANOSECONDS_PER_HOUR, 3_600_000_000_000);
		assert_eq!(NANOSECONDS_PER_MINUTE, 60_000_000_000);
		assert_eq!(NANOSECONDS_PER_SECOND, 1_000_000_000);
		assert_eq!(NANOSECONDS_PER_MILLISECOND, 1_000_000);
		assert_eq!(per_day(Unit::Nanosecond), NANOSECONDS_PER_HOUR * HOURS_PER_DAY);
	}

	#[test]
	fn display_test() {
		assert_eq!(t(1, 2, 3, 4, 5, 6).to_string(), "1:02:03.4.5.6");
		assert_eq!(t(23, 59, 59, 999, 999, 999).to_string(), "23:59:59.999.999.999");
		assert_eq!(h(0).to_string(), "0:00:00.0.0.0");
	}

	#[test]
	fn greater_than_test() {
		let pairs = [
			(t(2, 0, 0, 0, 0, 0), t(1, 0, 0, 0, 0, 0)),
			(t(0, 2, 0, 0, 0, 0), t(0, 1, 0, 0, 0, 0)),
			(t(0, 0, 2, 0, 0, 0), t(0, 0, 1, 0, 0, 0)),
			(t(0, 0, 0, 2, 0, 0), t(0, 0, 0, 1, 0, 0)),
			(t(0, 0, 0, 0, 2, 0), t(0, 0, 0, 0, 1, 0)),
			(t(0, 0, 0, 0, 0, 2), t(0, 0, 0, 0, 0, 1)),
			(t(1, 0, 0, 0, 0, 0), t(0, 59, 59, 999, 999, 999)),
		];
		for (greater, lesser) in pairs {
			assert!(greater > lesser, "{} > {}", greater, lesser);
			assert!(greater >= lesser, "{} >= {}", greater, lesser);
			assert!(lesser < greater, "{} < {}", lesser, greater);
			assert!(lesser <= greater, "{} <= {}", lesser, greater);
			assert!(greater != lesser, "{} != {}", greater, lesser);
		}
		let same = t(0, 0, 0, 0, 0, 2);
		assert!(same >= t(0, 0, 0, 0, 0, 2));
		assert!(same <= t(0, 0, 0, 0, 0, 2));
		assert!(!(same > t(0, 0, 0, 0, 0, 2)));
	}

	#[test]
	fn equal_to_test() {
		assert_eq!(h(0), h(0));
		for other in [h(1), t(0, 1, 0, 0, 0, 0), t(0, 0, 1, 0, 0, 0), t(0, 0, 0, 1, 0, 0),
		              t(0, 0, 0, 0, 1, 0), t(0, 0, 0, 0, 0, 1)] {
			assert_ne!(h(0), other);
		}
	}

	#[test]
	fn compare_across_timezones_test() {
		let utc = Time::with_timezone(7, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
		assert_eq!(utc, h(1));
		assert_eq!(h(1), utc);

		// Same wall clock fields, different instants: 1:00 EST is 6:00 UTC, 1:00 CST is 7:00 UTC
		let est = Time::with_timezone(1, 0, 0, 0, 0, 0, Timezone::Est).unwrap();
		assert_ne!(est, h(1));
		assert!(est < h(1));
		assert!(h(1) > est);
	}

	#[test]
	fn compare_hour_before_midnight_test() {
		// 5:00 UTC is hour -1 in CST, and 1:00 CST is hour 7 in UTC
		let utc = Time::with_timezone(5, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
		assert!(h(1) > utc);
		assert!(h(1) >= utc);
		assert!(!(h(1) < utc));
		assert!(utc < h(1));
		assert!(utc <= h(1));
		assert!(!(utc > h(1)));
		assert_ne!(h(1), utc);
		assert_ne!(utc, h(1));

		// 20:00 CST wraps forward to hour 2 in UTC, but 2:00 UTC is hour -4 in CST
		let late = Time::with_timezone(2, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
		assert_eq!(late, h(20));
		assert!(h(20) > late);
	}

	#[test]
	fn round_up_test() {
		assert_eq!(t(11, 29, 30, 1, 1, 1).rounded(Unit::Hour), h(12));
		assert_eq!(t(1, 29, 29, 500, 1, 1).rounded(Unit::Minute), t(1, 30, 0, 0, 0, 0));
		assert_eq!(t(1, 0, 29, 499, 500, 1).rounded(Unit::Second), t(1, 0, 30, 0, 0, 0));
		assert_eq!(t(1, 0, 0, 499, 499, 500).rounded(Unit::Millisecond), t(1, 0, 0, 500, 0, 0));
		assert_eq!(t(1, 0, 0, 0, 499, 500).rounded(Unit::Microsecond), t(1, 0, 0, 0, 500, 0));
		assert_eq!(t(23, 30, 0, 0, 0, 0).rounded(Unit::Hour), h(0));
	}

	#[test]
	fn round_down_test() {
		assert_eq!(t(11, 29, 1, 1, 1, 1).rounded(Unit::Hour), h(11));
		assert_eq!(t(1, 29, 29, 1, 1, 1).rounded(Unit::Minute), t(1, 29, 0, 0, 0, 0));
		assert_eq!(t(1, 1, 29, 499, 1, 1).rounded(Unit::Second), t(1, 1, 29, 0, 0, 0));
		assert_eq!(t(1, 1, 1, 499, 499, 1).rounded(Unit::Millisecond), t(1, 1, 1, 499, 0, 0));
		assert_eq!(t(1, 1, 1, 1, 499, 499).rounded(Unit::Microsecond), t(1, 1, 1, 1, 499, 0));
		assert_eq!(t(1, 1, 1, 1, 1, 499).rounded(Unit::Nanosecond), t(1, 1, 1, 1, 1, 499));
	}

	#[test]
	fn ceil_up_test() {
		assert_eq!(t(11, 1, 0, 0, 0, 0).ceiled(Unit::Hour), h(12));
		assert_eq!(t(1, 29, 29, 1, 1, 1).ceiled(Unit::Minute), t(1, 30, 0, 0, 0, 0));
		assert_eq!(t(1, 1, 29, 1, 1, 1).ceiled(Unit::Second), t(1, 1, 30, 0, 0, 0));
		assert_eq!(t(1, 1, 1, 499, 1, 1).ceiled(Unit::Millisecond), t(1, 1, 1, 500, 0, 0));
		assert_eq!(t(1, 1, 1, 1, 499, 1).ceiled(Unit::Microsecond), t(1, 1, 1, 1, 500, 0));
		assert_eq!(t(1, 1, 1, 1, 1, 499).ceiled(Unit::Nanosecond), t(1, 1, 1, 1, 1, 499));
		assert_eq!(t(23, 0, 0, 0, 0, 1).ceiled(Unit::Hour), h(0));
	}

	#[test]
	fn ceil_no_up_test() {
		assert_eq!(h(1).ceiled(Unit::Hour), h(1));
		assert_eq!(t(0, 1, 0, 0, 0, 0).ceiled(Unit::Minute), t(0, 1, 0, 0, 0, 0));
		assert_eq!(t(0, 0, 1, 0, 0, 0).ceiled(Unit::Second), t(0, 0, 1, 0, 0, 0));
		assert_eq!(t(0, 0, 0, 1, 0, 0).ceiled(Unit::Millisecond), t(0, 0, 0, 1, 0, 0));
		assert_eq!(t(0, 0, 0, 0, 1, 0).ceiled(Unit::Microsecond), t(0, 0, 0, 0, 1, 0));
		assert_eq!(t(1, 1, 1, 1, 1, 499).ceiled(Unit::Nanosecond), t(1, 1, 1, 1, 1, 499));
	}

	#[test]
	fn floor_test() {
		assert_eq!(t(1, 59, 0, 0, 0, 0).floored(Unit::Hour), h(1));
		assert_eq!(t(0, 1, 59, 0, 0, 0).floored(Unit::Minute), t(0, 1, 0, 0, 0, 0));
		assert_eq!(t(0, 0, 1, 999, 0, 0).floored(Unit::Second), t(0, 0, 1, 0, 0, 0));
		assert_eq!(t(0, 0, 0, 1, 999, 0).floored(Unit::Millisecond), t(0, 0, 0, 1, 0, 0));
		assert_eq!(t(0, 0, 0, 0, 1, 999).floored(Unit::Microsecond), t(0, 0, 0, 0, 1, 0));
		assert_eq!(t(1, 1, 1, 1, 1, 499).floored(Unit::Nanosecond), t(1, 1, 1, 1, 1, 499));
	}

	#[test]
	fn rounding_in_place_test() {
		let mut time = t(1, 0, 29, 499, 500, 1);
		time.round(Unit::Second);
		assert_eq!(time, t(1, 0, 30, 0, 0, 0));
		time.ceil(Unit::Minute);
		assert_eq!(time, t(1, 1, 0, 0, 0, 0));
		time.floor(Unit::Hour);
		assert_eq!(time, h(1));
	}

	quickcheck! {
		fn prop_carry_roundtrip(time: Time, unit: Unit, amount: i32) -> TestResult {
			let amount = i64::from(amount);
			let total = time.total(unit) + amount;
			if total < 0 || total >= per_day(unit) {
				return TestResult::discard();
			}
			let shifted = time.checked_add(unit, amount).unwrap();
			TestResult::from_bool(shifted.checked_sub(unit, amount).unwrap() == time)
		}

		fn prop_operations_stay_valid(time: Time, unit: Unit, amount: i64) -> bool {
			let shifted = time.checked_add(unit, amount).map_or(true, |t| t.is_valid());
			shifted
				&& time.rounded(unit).is_valid()
				&& time.ceiled(unit).is_valid()
				&& time.floored(unit).is_valid()
		}

		fn prop_failed_sub_goes_before_midnight(time: Time, unit: Unit, amount: u32) -> bool {
			let amount = i64::from(amount);
			let negative = time.total(unit) - amount < 0;
			time.checked_sub(unit, amount).is_err() == negative
		}

		fn prop_floor_idempotent(time: Time, unit: Unit) -> bool {
			let once = time.floored(unit);
			once.floored(unit) == once
		}

		fn prop_floor_ceil_bracket(time: Time, unit: Unit) -> TestResult {
			let ceiled = time.ceiled(unit);
			// Ceiling past 23:59 wraps, so the bracket does not hold there
			if ceiled < time {
				return TestResult::discard();
			}
			TestResult::from_bool(time.floored(unit) <= time && time <= ceiled)
		}

		fn prop_set_timezone_preserves_equality(time: Time, index: usize) -> TestResult {
			let timezone = Timezone::ALL[index % Timezone::ALL.len()];
			// Only holds both ways when the move does not cross midnight
			let hour = i16::from(time.hour()) + i16::from(time.timezone().offset_diff(timezone));
			if !(0..24).contains(&hour) {
				return TestResult::discard();
			}
			let mut moved = time;
			moved.set_timezone(timezone);
			TestResult::from_bool(moved == time && time == moved)
		}

		fn prop_total_nanoseconds_roundtrip(time: Time) -> bool {
			let back = Time::from_total_nanoseconds(time.total_nanoseconds(), time.timezone()).unwrap();
			back == time
		}
	}
}
