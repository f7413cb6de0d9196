// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The non-I²C side of the sensor: power rails, control lines, the master clock and the output
//! pipeline.
//!
//! None of this is reachable over I²C, so the driver asks the platform to do it through
//! [`SensorControl`]. Implementations are expected to apply each request before returning; the
//! driver supplies the settle delays between them.

/// Logic level of a control line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignalLevel {
    Low,
    High,
}

impl SignalLevel {
    pub fn inverted(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Supply voltage for one of the sensor rails.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Voltage {
    /// The rail is switched off.
    Closed,
    Mv1200,
    Mv1300,
    Mv1500,
    Mv1800,
    Mv2500,
    Mv2800,
    Mv3000,
    Mv3300,
}

impl Voltage {
    /// The rail voltage in millivolts, or `None` when the rail is off.
    pub fn millivolts(self) -> Option<u16> {
        match self {
            Self::Closed => None,
            Self::Mv1200 => Some(1200),
            Self::Mv1300 => Some(1300),
            Self::Mv1500 => Some(1500),
            Self::Mv1800 => Some(1800),
            Self::Mv2500 => Some(2500),
            Self::Mv2800 => Some(2800),
            Self::Mv3000 => Some(3000),
            Self::Mv3300 => Some(3300),
        }
    }
}

/// The three rails the HM2058 needs, in the order the platform sets them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rails {
    /// Digital core supply.
    pub dvdd: Voltage,

    /// Analog supply.
    pub avdd: Voltage,

    /// I/O supply.
    pub iovdd: Voltage,
}

impl Rails {
    pub const CLOSED: Self = Self {
        dvdd: Voltage::Closed,
        avdd: Voltage::Closed,
        iovdd: Voltage::Closed,
    };
}

/// State of the master clock fed to the sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MasterClock {
    Disabled,
    Megahertz(u8),
}

/// Platform hooks for everything that isn't a register access.
///
/// These operations have no way to report failure. A platform that can fail here is expected to
/// log it; the identify step after power on is where a dead sensor shows up.
pub trait SensorControl {
    /// Drive the power-down line to `level`.
    fn set_power_down(&mut self, level: SignalLevel);

    /// Switch the supply rails.
    fn set_voltage(&mut self, rails: Rails);

    /// Start, retune or stop the master clock.
    fn set_master_clock(&mut self, clock: MasterClock);

    /// Pulse the reset line to `level` for `width_ms` milliseconds, then release it.
    fn reset(&mut self, level: SignalLevel, width_ms: u32);

    /// Ask the output pipeline to switch to a new output mode.
    fn set_output_mode(&mut self, mode: u32);

    /// Block until the last requested output mode is active.
    fn wait_output_mode_applied(&mut self);
}

impl<T: SensorControl + ?Sized> SensorControl for &mut T {
    fn set_power_down(&mut self, level: SignalLevel) {
        (**self).set_power_down(level)
    }

    fn set_voltage(&mut self, rails: Rails) {
        (**self).set_voltage(rails)
    }

    fn set_master_clock(&mut self, clock: MasterClock) {
        (**self).set_master_clock(clock)
    }

    fn reset(&mut self, level: SignalLevel, width_ms: u32) {
        (**self).reset(level, width_ms)
    }

    fn set_output_mode(&mut self, mode: u32) {
        (**self).set_output_mode(mode)
    }

    fn wait_output_mode_applied(&mut self) {
        (**self).wait_output_mode_applied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inverted_levels() {
        assert_eq!(SignalLevel::Low.inverted(), SignalLevel::High);
        assert_eq!(SignalLevel::High.inverted(), SignalLevel::Low);
    }

    #[test]
    fn closed_rails_have_no_voltage() {
        assert_eq!(Rails::CLOSED.dvdd.millivolts(), None);
        assert_eq!(Voltage::Mv2800.millivolts(), Some(2800));
    }
}
