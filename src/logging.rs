// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
	($($tt:tt)*) => {
		#[cfg(feature = "logging")]
		{
			$($tt)*
		}
	}
}

macro_rules! error {
	($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! warn {
	($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! debug {
	($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
	($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
