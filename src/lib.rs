//! Time of day values with nanosecond precision and fixed-offset timezones.
//!
//! This crate models a civil time of day (no date) as six ranged fields bound to a timezone
//! label, see [`Time`]. It supports:
//! - Construction with range validation, or sampling of the current wall clock time
//! - Signed arithmetic in any [`Unit`], carrying between fields and wrapping at midnight
//! - Zone-aware comparison
//! - Rounding, ceiling and flooring to any unit
//! - Conversion between [`Timezone`]s
//! - Closed intervals of time of day, see [`TimeRange`]
//!
//! Timezones are a closed set of whole-hour, fixed offsets with no daylight savings rules. There
//! is no date component, so subtracting past midnight is an error rather than a wrap into the
//! previous day.
//!
//! # Examples
//!
//! ```
//! use civiltime::{Hours, Minutes, Time, Timezone, Unit};
//!
//! let t = Time::with_timezone(23, 45, 10, 0, 0, 0, Timezone::Pst).unwrap();
//! let t = (t + Minutes(20)).unwrap();
//! assert_eq!(t.to_string(), "0:05:10.0.0.0");
//! assert!((t - Hours(1)).is_err());
//!
//! let mut utc = t;
//! utc.set_timezone(Timezone::Utc);
//! assert_eq!(utc.hour(), 8);
//! assert_eq!(utc, t);
//!
//! assert_eq!(t.floored(Unit::Minute).to_string(), "0:05:00.0.0.0");
//! ```
//!
//! Constructors without an explicit timezone use a process-wide default, which starts as
//! [`Timezone::Local`]:
//!
//! ```
//! use civiltime::{set_default_timezone, Time, Timezone};
//!
//! set_default_timezone(Timezone::Jst);
//! let t = Time::from_hms(9, 0, 0).unwrap();
//! assert_eq!(t.hour_at_timezone(Timezone::Utc), 0);
//! ```
//!
//! # Crate features
//!
//! - `logging` (default): emit diagnostics through the [`log`](https://docs.rs/log) facade.

#[macro_use]
mod logging;

pub mod error;
pub mod range;
pub mod time;
pub mod tz;
pub mod unit;

pub use error::{Error, ErrorKind};
pub use range::TimeRange;
pub use time::Time;
pub use tz::{default_timezone, set_default_timezone, Timezone};
pub use unit::{Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, Unit};
