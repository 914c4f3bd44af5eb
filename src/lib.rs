//! This is a platform-agnostic Rust driver for the Sensirion SHTC3 humidity and temperature
//! digital sensor using the [`embedded-hal`] or [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Measure temperature and relative humidity in normal or low power mode, with or without
//!   clock stretching, temperature or humidity first.
//! - Verify the CRC-8 of every word read from the device.
//! - Put the device to sleep and wake it up.
//! - Trigger a software reset.
//! - Read the device ID.
//! - blocking API support.
//! - async API support.
//!
//! ## Features
//!
//! - `async`: Enables async API ([`Shtc3Async`]).
//! - `blocking`: Enables blocking API ([`Shtc3`]).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Checksum failures
//!
//! [`Shtc3::measurement`] keeps the historical behavior of reporting a reply with a bad checksum
//! as a zero reading, [`Measurement::SENTINEL`].  The returned [`Measurement`] carries a `valid`
//! flag so the two can be told apart.  [`Shtc3::measure_checked`] returns
//! [`Error::CrcMismatch`] instead.
//!
//! [`Shtc3::read_id`] checks the checksum of the ID register; [`Shtc3::read_id_unchecked`]
//! ignores it, as the construction-time probe does.
//!
//! Command words, timings, the checksum and the conversion formulas follow the Sensirion SHTC3
//! datasheet.
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use shtc3::{ClockStretching, I2cAddr, PowerMode, ReadOrder, Shtc3};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let mut shtc3 = Shtc3::new(i2c, delay, I2cAddr::default()).unwrap();
//!
//! shtc3.wakeup().unwrap();
//! let m = shtc3.measurement(ReadOrder::TemperatureFirst, PowerMode::Normal, ClockStretching::Disabled).unwrap();
//! if m.is_valid() {
//!     println!("{:0.1} %RH, {:0.1} °C", m.humidity_percent(), m.centigrade());
//! }
//! shtc3.sleep().unwrap();
//! ```
//!
//! ## Async Example:
//!
//! ```ignore
//! use shtc3::{ClockStretching, I2cAddr, PowerMode, ReadOrder, Shtc3Async};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal_async::i2c::I2c instance */;
//! let delay = /* embedded_hal_async::delay::DelayNs instance */;
//!
//! let mut shtc3 = Shtc3Async::new(i2c, delay, I2cAddr::default()).await.unwrap();
//!
//! let m = shtc3.measure_checked(ReadOrder::HumidityFirst, PowerMode::LowPower, ClockStretching::Disabled)
//!     .await
//!     .unwrap();
//! println!("{:0.1} %RH, {:0.1} °C", m.humidity_percent(), m.centigrade());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

// Diagnostics are forwarded to `defmt` or `log`.  Without either, the arguments are still
// type-checked through `format_args!` but nothing is emitted.
#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}
#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}
#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(feature = "log")]
macro_rules! warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "blocking")]
mod device_impl;
#[cfg(feature = "async")]
mod device_impl_async;
mod hw_def;
#[cfg(test)]
mod test_util;
mod types;

pub use crate::{hw_def::*, types::*};
