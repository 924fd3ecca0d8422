//! Units of time, from nanoseconds to hours.
//!
//! [`Unit`] is the ordered scale that [`Time`](crate::Time) arithmetic and rounding work over. The
//! amount types ([`Hours`], [`Minutes`], ..., [`Nanoseconds`]) pair a signed count with a unit so
//! that times can be shifted with the `+` and `-` operators:
//!
//! ```
//! # use civiltime::{Hours, Milliseconds, Time, Timezone};
//! let t = Time::with_timezone(22, 0, 0, 0, 0, 0, Timezone::Utc).unwrap();
//! let t = (t + Hours(4)).unwrap();
//! assert_eq!(t.to_string(), "2:00:00.0.0.0");
//! let t = (t - Milliseconds(1)).unwrap();
//! assert_eq!(t.to_string(), "1:59:59.999.0.0");
//! ```

use std::{fmt, str::FromStr};
use crate::error::Error;

/// A unit of time of day, ordered from finest ([`Unit::Nanosecond`]) to coarsest
/// ([`Unit::Hour`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
	Nanosecond = 0,
	Microsecond = 1,
	Millisecond = 2,
	Second = 3,
	Minute = 4,
	Hour = 5
}

impl Unit {
	/// Every unit, finest first.
	pub const ALL: [Unit; 6] = [
		Unit::Nanosecond, Unit::Microsecond, Unit::Millisecond, Unit::Second, Unit::Minute, Unit::Hour
	];

	/// How many of this unit make up one of the next larger unit.
	///
	/// For [`Unit::Hour`] this is the number of hours per day.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Unit;
	/// assert_eq!(Unit::Nanosecond.modulus(), 1000);
	/// assert_eq!(Unit::Second.modulus(), 60);
	/// assert_eq!(Unit::Hour.modulus(), 24);
	/// ```
	pub fn modulus(self) -> i64 {
		match self {
			Unit::Nanosecond | Unit::Microsecond | Unit::Millisecond => 1000,
			Unit::Second | Unit::Minute => 60,
			Unit::Hour => 24,
		}
	}

	/// Half of [`modulus`](Unit::modulus): the smallest value that rounds up.
	pub fn half(self) -> i64 {
		self.modulus() / 2
	}

	/// The next more significant unit, or `None` for [`Unit::Hour`].
	pub fn larger(self) -> Option<Unit> {
		Unit::ALL.get(self as usize + 1).copied()
	}

	/// The next less significant unit, or `None` for [`Unit::Nanosecond`].
	pub fn smaller(self) -> Option<Unit> {
		(self as usize).checked_sub(1).map(|i| Unit::ALL[i])
	}

	/// Lowercase singular name, e.g. `"millisecond"`.
	pub fn name(self) -> &'static str {
		match self {
			Unit::Nanosecond => "nanosecond",
			Unit::Microsecond => "microsecond",
			Unit::Millisecond => "millisecond",
			Unit::Second => "second",
			Unit::Minute => "minute",
			Unit::Hour => "hour",
		}
	}

	/// Short name, e.g. `"ms"`.
	fn short_name(self) -> &'static str {
		match self {
			Unit::Nanosecond => "ns",
			Unit::Microsecond => "us",
			Unit::Millisecond => "ms",
			Unit::Second => "s",
			Unit::Minute => "min",
			Unit::Hour => "h",
		}
	}
}

impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}s", self.name())
	}
}

impl FromStr for Unit {
	type Err = Error;

	/// Parse a singular name (`"second"`), plural name (`"seconds"`) or short name (`"s"`).
	///
	/// Matching is case-sensitive.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let singular = s.strip_suffix('s').filter(|rest| !rest.is_empty()).unwrap_or(s);
		Unit::ALL.iter()
			.find(|u| u.short_name() == s || u.name() == s || u.name() == singular)
			.copied()
			.ok_or_else(|| Error::UnknownUnit(s.to_string()))
	}
}

macro_rules! amount {
	($(#[$doc:meta])* $name:ident, $unit:expr) => {
		$(#[$doc])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
		#[repr(transparent)]
		pub struct $name(pub i64);

		impl From<$name> for (Unit, i64) {
			fn from(value: $name) -> Self {
				($unit, value.0)
			}
		}
	};
}

amount!(
	/// A signed number of hours.
	Hours, Unit::Hour
);
amount!(
	/// A signed number of minutes.
	Minutes, Unit::Minute
);
amount!(
	/// A signed number of seconds.
	Seconds, Unit::Second
);
amount!(
	/// A signed number of milliseconds.
	Milliseconds, Unit::Millisecond
);
amount!(
	/// A signed number of microseconds.
	Microseconds, Unit::Microsecond
);
amount!(
	/// A signed number of nanoseconds.
	Nanoseconds, Unit::Nanosecond
);

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
	fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
		use quickcheck::Arbitrary;
		Unit::ALL[usize::arbitrary(g) % Unit::ALL.len()]
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		use quickcheck::Arbitrary;
		Box::new((*self as usize).shrink().map(|n| Unit::ALL[n % Unit::ALL.len()]))
	}
}
