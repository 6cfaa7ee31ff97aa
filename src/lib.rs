//! Driver for the Sensirion SHT3x (SHT30, SHT31, SHT35) temperature and
//! humidity sensors, built on the [`embedded-hal`] I2C and delay traits.
//!
//! The driver takes single-shot measurements: it writes a measurement
//! command, waits for the conversion time of the chosen [`Precision`], then
//! reads back the temperature and humidity words, verifying the CRC of each.
//!
//! The sensor struct holds no bus handle. The I2C bus and a delay are passed
//! to each call, so the bus can be shared with other devices between calls.
//!
//! ```rust,ignore
//! use sht3x_rjw::blocking::Sht3x;
//! use sht3x_rjw::types::Precision;
//!
//! let mut sensor = Sht3x::new(Default::default());
//! sensor.soft_reset(&mut i2c, &mut delay)?;
//! let (celsius, humidity) =
//!     sensor.read_celsius_and_humidity(&mut i2c, &mut delay, Precision::Low)?;
//! ```
//!
//! ## Features
//!
//! - `blocking` (default): the [`blocking`] API.
//! - `async`: the [`asynch`] API, using `embedded-hal-async`.
//! - `log`: debug logging through the `log` crate.
//! - `defmt`: debug logging through `defmt`, and `defmt::Format` impls.
//! - `fixed`: fixed-point conversions in [`conversions::fixed_point`].
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`Precision`]: types::Precision
#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

#[cfg(feature = "async")]
pub mod asynch;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod conversions;
pub mod crc;
pub mod error;
pub mod types;

mod common;
