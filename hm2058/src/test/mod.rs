// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! A minimal recording I²C bus for the unit tests in this crate.
//!
//! The integration tests use the full `MockSensor` from `hm2058-test-data`, which also covers the
//! power and delay collaborators.
extern crate std;

use std::collections::BTreeMap;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

use crate::control::{MasterClock, Rails, SensorControl, SignalLevel};

/// A [`SensorControl`] that does nothing.
pub(crate) struct NoControl;

impl SensorControl for NoControl {
    fn set_power_down(&mut self, _level: SignalLevel) {}
    fn set_voltage(&mut self, _rails: Rails) {}
    fn set_master_clock(&mut self, _clock: MasterClock) {}
    fn reset(&mut self, _level: SignalLevel, _width_ms: u32) {}
    fn set_output_mode(&mut self, _mode: u32) {}
    fn wait_output_mode_applied(&mut self) {}
}

pub(crate) struct NoDelay;

impl DelayMs<u32> for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BusOperation {
    Write { register: u16, value: u8 },
    Read { register: u16 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RecordingError {
    /// The transaction was addressed to a different device.
    UnknownI2cAddress(u8),

    /// The transaction did not have the shape of a register access.
    IllegalOperation,

    /// A failure requested by the test.
    Injected,
}

#[derive(Clone, Debug)]
pub(crate) struct RecordingBus {
    i2c_address: u8,
    registers: BTreeMap<u16, u8>,
    operations: Vec<BusOperation>,
    writes_seen: usize,
    fail_write_at: Option<usize>,
}

impl RecordingBus {
    pub(crate) fn new(i2c_address: u8) -> Self {
        Self {
            i2c_address,
            registers: BTreeMap::new(),
            operations: Vec::new(),
            writes_seen: 0,
            fail_write_at: None,
        }
    }

    pub(crate) fn set_register(&mut self, register: u16, value: u8) {
        self.registers.insert(register, value);
    }

    /// Make the write with the given (zero-based) index fail.
    pub(crate) fn fail_write_at(&mut self, index: usize) {
        self.fail_write_at = Some(index);
    }

    pub(crate) fn operations(&self) -> Vec<BusOperation> {
        self.operations.clone()
    }
}

fn register_from(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

impl i2c::Write for RecordingBus {
    type Error = RecordingError;

    fn write(&mut self, i2c_address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if i2c_address != self.i2c_address {
            return Err(RecordingError::UnknownI2cAddress(i2c_address));
        }
        if bytes.len() != 3 {
            return Err(RecordingError::IllegalOperation);
        }
        let index = self.writes_seen;
        self.writes_seen += 1;
        if self.fail_write_at == Some(index) {
            return Err(RecordingError::Injected);
        }
        let register = register_from(bytes);
        self.registers.insert(register, bytes[2]);
        self.operations.push(BusOperation::Write {
            register,
            value: bytes[2],
        });
        Ok(())
    }
}

impl i2c::WriteRead for RecordingBus {
    type Error = RecordingError;

    fn write_read(
        &mut self,
        i2c_address: u8,
        write_buffer: &[u8],
        out_buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        if i2c_address != self.i2c_address {
            return Err(RecordingError::UnknownI2cAddress(i2c_address));
        }
        if write_buffer.len() != 2 || out_buffer.len() != 1 {
            return Err(RecordingError::IllegalOperation);
        }
        let register = register_from(write_buffer);
        self.operations.push(BusOperation::Read { register });
        out_buffer[0] = self.registers.get(&register).copied().unwrap_or(0);
        Ok(())
    }
}
