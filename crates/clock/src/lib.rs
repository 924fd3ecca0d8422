//! Minimal access to the system clocks.
//!
//! This crate is divided into two halves: [`time`] provides [`TimeSpec`], a Unix timestamp with
//! nanosecond granularity, plus carrying arithmetic on it; [`local`] reads the operating system's
//! notion of local civil time (the broken-down calendar time and its UTC offset).
//!
//! Without any features this crate is `no_std` and only offers the [`TimeSpec`] arithmetic. The
//! `now` feature pulls in [`libc`](https://docs.rs/libc) and enables every function that actually
//! reads a clock: [`time::now`], [`local::calendar_now`], [`local::LocalTm::new`] and
//! [`local::local_utc_offset`].
//!
//! # Examples
//!
//! Carrying nanoseconds into seconds.
//! ```
//! # use clock::time::{Nanoseconds, TimeSpec};
//! let t = TimeSpec { sec: 1735732800, nsec: 999_999_999 };
//! assert_eq!(t + Nanoseconds(2), TimeSpec { sec: 1735732801, nsec: 1 });
//! ```
//!
//! Sampling both clocks.
//! ```
//! # #[cfg(feature = "now")] {
//! # use clock::{local::{calendar_now, LocalTm}, time::now};
//! let calendar = calendar_now().expect("Failed to read calendar clock");
//! let local = LocalTm::new(calendar).expect("Failed to convert to local time");
//! let precise = now().expect("Failed to read realtime clock");
//! assert!(precise.sec >= calendar);
//! assert!(local.hour < 24);
//! # }
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod time;
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub mod local;

pub use time::*;
