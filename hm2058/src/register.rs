// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Register addressing and playback of register tables.
//!
//! The HM2058 exposes its configuration as a flat space of 8-bit registers behind 16-bit
//! addresses. Almost everything the driver does is writing a fixed list of values into those
//! registers, so the lists are kept as data ([`RegisterTable`]) and a single function,
//! [`play_table`], turns them into bus traffic.
use core::fmt;

use embedded_hal::blocking::i2c;
use log::trace;

use crate::error::Error;

/// Marker newtype for register addresses accessible over I²C.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Address(u16);

impl Address {
    /// Wrap the given address in an `Address`.
    ///
    /// This function is intended to be used in const contexts, in other cases the
    /// [`From`][core::convert::From] implementations are probably easier to use.
    pub const fn new(address: u16) -> Self {
        Self(address)
    }

    /// The address as it is sent on the wire, most significant byte first.
    pub(crate) fn as_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#06X})", self.0)
    }
}

impl From<u16> for Address {
    fn from(raw_address: u16) -> Self {
        Self::new(raw_address)
    }
}

impl From<Address> for u16 {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// A single register write: an address and the byte to store there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterPair {
    pub address: Address,
    pub value: u8,
}

impl RegisterPair {
    pub const fn new(address: u16, value: u8) -> Self {
        Self {
            address: Address::new(address),
            value,
        }
    }

    /// Whether this pair marks the end of a table.
    pub fn is_end(&self) -> bool {
        *self == END_OF_TABLE
    }
}

/// The reserved pair terminating a register table. It is never written to the sensor.
pub const END_OF_TABLE: RegisterPair = RegisterPair::new(0x00FF, 0xFF);

/// An ordered list of register writes, terminated by [`END_OF_TABLE`].
///
/// Order matters: later writes (the latch registers at the end of most tables in particular)
/// depend on the earlier ones having already landed.
pub type RegisterTable = [RegisterPair];

/// Iterate over the pairs in a table that should actually be written.
///
/// Iteration stops at the first [`END_OF_TABLE`]. A table without a terminator is yielded in
/// full.
pub fn table_entries(table: &RegisterTable) -> impl Iterator<Item = &RegisterPair> + '_ {
    table.iter().take_while(|pair| !pair.is_end())
}

/// Write every pair of `table` to the sensor, in order.
///
/// Playback stops at the end-of-table marker, and aborts at the first write the bus rejects,
/// returning that error. Registers written before the failure keep their new values.
pub fn play_table<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    table: &RegisterTable,
) -> Result<(), Error<I2C>>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    for pair in table_entries(table) {
        trace!("{:?} <- {:#04X}", pair.address, pair.value);
        write_register(bus, i2c_address, pair.address, pair.value)?;
    }
    Ok(())
}

/// Read a single register.
pub fn read_register<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    address: Address,
) -> Result<u8, Error<I2C>>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    let mut value = [0u8; 1];
    bus.write_read(i2c_address, &address.as_bytes(), &mut value)
        .map_err(Error::I2cWriteReadError)?;
    Ok(value[0])
}

/// Write a single register.
pub fn write_register<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    address: Address,
    value: u8,
) -> Result<(), Error<I2C>>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    let address_bytes = address.as_bytes();
    let combined: [u8; 3] = [address_bytes[0], address_bytes[1], value];
    bus.write(i2c_address, &combined).map_err(Error::I2cWriteError)
}
