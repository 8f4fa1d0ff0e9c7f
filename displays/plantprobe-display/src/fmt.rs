//! Logging shims
//!
//! Forward to `defmt` when the `defmt` feature is enabled, compile to
//! nothing otherwise so host tests need no logger.

#![allow(unused_macros)]

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}
