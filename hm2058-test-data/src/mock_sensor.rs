// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use hm2058::control::{MasterClock, Rails, SensorControl, SignalLevel};

/// The value an HM2058 returns from register 0x0001.
pub const HM2058_ID_HIGH: u8 = 0x20;

/// The value an HM2058 returns from register 0x0002.
pub const HM2058_ID_LOW: u8 = 0x56;

const ID_HIGH_REGISTER: u16 = 0x0001;
const ID_LOW_REGISTER: u16 = 0x0002;

/// Everything the driver did to the sensor, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    RegisterWrite { register: u16, value: u8 },
    RegisterRead { register: u16 },
    PowerDown(SignalLevel),
    Voltage(Rails),
    MasterClock(MasterClock),
    Reset { level: SignalLevel, width_ms: u32 },
    Delay(u32),
    SetOutputMode(u32),
    WaitOutputModeApplied,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MockError {
    /// An unknown I2C address was given.
    UnknownI2cAddress(u8),

    /// The transaction was not a 16-bit address followed by a single byte.
    IllegalOperation,

    /// The end of table marker was sent to the sensor.
    EndMarkerWritten,

    /// A failure requested by the test.
    Injected,
}

#[derive(Debug, Default)]
struct State {
    registers: BTreeMap<u16, u8>,
    events: Vec<Event>,
    writes_seen: usize,
    fail_write_at: Option<usize>,
    fail_reads: bool,
}

/// A simulated HM2058 and the platform around it.
///
/// The bus, control and delay handles all share one state, so a test can give them to a driver
/// and still inspect the combined event log afterwards.
#[derive(Clone, Debug)]
pub struct MockSensor {
    i2c_address: u8,
    state: Rc<RefCell<State>>,
}

impl MockSensor {
    /// A sensor with every register reading as zero.
    pub fn new(i2c_address: u8) -> Self {
        Self {
            i2c_address,
            state: Rc::new(RefCell::new(State::default())),
        }
    }

    pub fn bus(&self) -> MockBus {
        MockBus {
            i2c_address: self.i2c_address,
            state: Rc::clone(&self.state),
        }
    }

    pub fn control(&self) -> MockControl {
        MockControl {
            state: Rc::clone(&self.state),
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: Rc::clone(&self.state),
        }
    }

    pub fn set_register(&self, register: u16, value: u8) {
        self.state.borrow_mut().registers.insert(register, value);
    }

    /// The current value of a register, if anything has set it.
    pub fn register(&self, register: u16) -> Option<u8> {
        self.state.borrow().registers.get(&register).copied()
    }

    pub fn events(&self) -> Ref<Vec<Event>> {
        Ref::map(self.state.borrow(), |state| &state.events)
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear()
    }

    /// The register writes from the event log, as `(register, value)`.
    pub fn register_writes(&self) -> Vec<(u16, u8)> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::RegisterWrite { register, value } => Some((*register, *value)),
                _ => None,
            })
            .collect()
    }

    /// Every delay requested, in milliseconds.
    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    /// Make the write with the given (zero-based) index fail. Writes before it succeed, and the
    /// failed write is not recorded.
    pub fn fail_write_at(&self, index: usize) {
        self.state.borrow_mut().fail_write_at = Some(index);
    }

    /// Make every register read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }
}

/// An HM2058 that answers the identity check.
pub fn identified_hm2058_at_address(i2c_address: u8) -> MockSensor {
    let sensor = MockSensor::new(i2c_address);
    sensor.set_register(ID_HIGH_REGISTER, HM2058_ID_HIGH);
    sensor.set_register(ID_LOW_REGISTER, HM2058_ID_LOW);
    sensor
}

#[derive(Clone, Debug)]
pub struct MockBus {
    i2c_address: u8,
    state: Rc<RefCell<State>>,
}

impl MockBus {
    fn check_address(&self, i2c_address: u8) -> Result<(), MockError> {
        if i2c_address == self.i2c_address {
            Ok(())
        } else {
            Err(MockError::UnknownI2cAddress(i2c_address))
        }
    }
}

fn register_from(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

impl i2c::Write for MockBus {
    type Error = MockError;

    fn write(&mut self, i2c_address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check_address(i2c_address)?;
        if bytes.len() != 3 {
            return Err(MockError::IllegalOperation);
        }
        let register = register_from(bytes);
        let value = bytes[2];
        if register == 0x00FF && value == 0xFF {
            return Err(MockError::EndMarkerWritten);
        }
        let mut state = self.state.borrow_mut();
        let index = state.writes_seen;
        state.writes_seen += 1;
        if state.fail_write_at == Some(index) {
            return Err(MockError::Injected);
        }
        state.registers.insert(register, value);
        state.events.push(Event::RegisterWrite { register, value });
        Ok(())
    }
}

impl i2c::WriteRead for MockBus {
    type Error = MockError;

    fn write_read(
        &mut self,
        i2c_address: u8,
        write_buffer: &[u8],
        out_buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.check_address(i2c_address)?;
        // Register reads are a 16-bit address out and a single byte back.
        if write_buffer.len() != 2 || out_buffer.len() != 1 {
            return Err(MockError::IllegalOperation);
        }
        let register = register_from(write_buffer);
        let mut state = self.state.borrow_mut();
        state.events.push(Event::RegisterRead { register });
        if state.fail_reads {
            return Err(MockError::Injected);
        }
        out_buffer[0] = state.registers.get(&register).copied().unwrap_or(0);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct MockControl {
    state: Rc<RefCell<State>>,
}

impl MockControl {
    fn push(&self, event: Event) {
        self.state.borrow_mut().events.push(event);
    }
}

impl SensorControl for MockControl {
    fn set_power_down(&mut self, level: SignalLevel) {
        self.push(Event::PowerDown(level));
    }

    fn set_voltage(&mut self, rails: Rails) {
        self.push(Event::Voltage(rails));
    }

    fn set_master_clock(&mut self, clock: MasterClock) {
        self.push(Event::MasterClock(clock));
    }

    fn reset(&mut self, level: SignalLevel, width_ms: u32) {
        self.push(Event::Reset { level, width_ms });
    }

    fn set_output_mode(&mut self, mode: u32) {
        self.push(Event::SetOutputMode(mode));
    }

    fn wait_output_mode_applied(&mut self) {
        self.push(Event::WaitOutputModeApplied);
    }
}

/// Records delays instead of sleeping.
#[derive(Clone, Debug)]
pub struct MockDelay {
    state: Rc<RefCell<State>>,
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().events.push(Event::Delay(ms));
    }
}

#[cfg(test)]
mod test {
    use embedded_hal::blocking::i2c::{Write, WriteRead};

    use super::*;

    #[test]
    fn handles_share_state() {
        let sensor = MockSensor::new(0x24);
        let mut bus = sensor.bus();
        let mut delay = sensor.delay();
        bus.write(0x24, &[0x04, 0xC0, 0xB0]).unwrap();
        delay.delay_ms(20);
        assert_eq!(sensor.register(0x04C0), Some(0xB0));
        assert_eq!(
            *sensor.events(),
            [
                Event::RegisterWrite {
                    register: 0x04C0,
                    value: 0xB0
                },
                Event::Delay(20),
            ]
        );
    }

    #[test]
    fn identity_registers() {
        let sensor = identified_hm2058_at_address(0x24);
        let mut bus = sensor.bus();
        let mut value = [0u8];
        bus.write_read(0x24, &[0x00, 0x02], &mut value).unwrap();
        assert_eq!(value[0], HM2058_ID_LOW);
    }

    #[test]
    fn rejects_end_marker() {
        let sensor = MockSensor::new(0x24);
        let mut bus = sensor.bus();
        assert_eq!(
            bus.write(0x24, &[0x00, 0xFF, 0xFF]),
            Err(MockError::EndMarkerWritten)
        );
        assert!(sensor.events().is_empty());
    }

    #[test]
    fn wrong_i2c_address() {
        let sensor = MockSensor::new(0x24);
        let mut bus = sensor.bus();
        assert_eq!(
            bus.write(0x30, &[0x04, 0xC0, 0xB0]),
            Err(MockError::UnknownI2cAddress(0x30))
        );
    }
}
