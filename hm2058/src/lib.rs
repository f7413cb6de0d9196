// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! A pure-Rust driver for the Himax HM2058, a 2MP CMOS image sensor with a YUV422 parallel
//! output.
//!
//! The HM2058 is configured entirely through 8-bit registers behind 16-bit addresses on an I²C
//! bus. Nearly everything the sensor needs is a fixed list of register writes supplied by the
//! vendor, so this crate is mostly data ([`tables`]) with a small amount of logic to play that data
//! back and sequence the sensor's power, clock and reset lines.
//!
//! This library uses the [`embedded-hal`][embedded-hal] I²C and delay traits, so it should work on
//! any platform with an `embedded-hal` implementation. It is also `no_std` compatible. The lines
//! that aren't on the I²C bus (power-down, reset, the supply rails and the master clock) are
//! reached through [`SensorControl`], which the platform implements.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/0.2/embedded_hal/blocking/i2c/index.html
//!
//! # Example
//! ```
//! use embedded_hal::blocking::{delay::DelayMs, i2c};
//! use hm2058::control::{MasterClock, Rails, SensorControl, SignalLevel};
//! use hm2058::settings::Level;
//! use hm2058::Hm2058Driver;
//!
//! struct Board;
//!
//! impl SensorControl for Board {
//!     fn set_power_down(&mut self, level: SignalLevel) { /* drive the PWDN GPIO */ }
//!     fn set_voltage(&mut self, rails: Rails) { /* switch the regulators */ }
//!     fn set_master_clock(&mut self, clock: MasterClock) { /* configure MCLK */ }
//!     fn reset(&mut self, level: SignalLevel, width_ms: u32) { /* pulse RESET */ }
//!     fn set_output_mode(&mut self, mode: u32) { /* reconfigure the capture pipeline */ }
//!     fn wait_output_mode_applied(&mut self) {}
//! }
//!
//! fn start_preview<I2C, D>(i2c_bus: I2C, delay: D) -> Result<(), hm2058::Error<I2C>>
//! where
//!     I2C: i2c::WriteRead + i2c::Write,
//!     D: DelayMs<u32>,
//! {
//!     let mut sensor = Hm2058Driver::new(i2c_bus, Board, delay);
//!     sensor.power_on(true)?;
//!     sensor.identify()?;
//!     sensor.initialize()?;
//!     // Slot 2 is 1280x960
//!     sensor.set_resolution(2)?;
//!     sensor.set_brightness(Level::Plus1)
//! }
//! ```
//! The driver owns the bus, the [`SensorControl`] implementation and the delay, and hands them back
//! from [`Hm2058Driver::release`].
//!
//! # Raw values and the capability table
//! Camera HALs built around this sensor family pass every setting as a bare integer, and expect
//! invalid values to be quietly ignored. Each typed setter on [`Hm2058Driver`] has a `_raw`
//! counterpart taking that integer, and [`dispatch`] maps the HAL's operation table onto them.
//! By default an out of range value is an error; [`OutOfRangePolicy::Ignore`] restores the
//! quiet behavior.

#![no_std]

pub mod control;
pub mod descriptor;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod register;
pub mod settings;
pub mod tables;
#[cfg(test)]
mod test;

pub use control::SensorControl;
pub use descriptor::{SensorDescriptor, HM2058};
pub use dispatch::{ioctl_table, Capability, IoctlTable};
pub use driver::{Hm2058Driver, OutOfRangePolicy};
pub use error::{Error, LibraryError};
pub use register::{Address, RegisterPair, RegisterTable, END_OF_TABLE};
