// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use embedded_hal::blocking::i2c;

use crate::dispatch::Capability;

/// Errors that don't involve I²C.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LibraryError {
    /// A raw level or mode value was outside of the range accepted by a setting.
    ///
    /// Only returned under [`OutOfRangePolicy::Reject`][crate::OutOfRangePolicy::Reject].
    InvalidParameter { setting: &'static str, value: u32 },

    /// The identity registers did not hold the values an HM2058 reports.
    NotIdentified { id_high: u8, id_low: u8 },

    /// The resolution table slot is either unused or past the end of the table.
    EmptyResolutionSlot(usize),

    /// The HM2058 does not provide this capability.
    Unsupported(Capability),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidParameter { setting, value } => {
                write!(f, "{} is not a valid value for {}", value, setting)
            }
            LibraryError::NotIdentified { id_high, id_low } => write!(
                f,
                "sensor identified as {:#04X}{:02X}, not an HM2058",
                id_high, id_low
            ),
            LibraryError::EmptyResolutionSlot(index) => {
                write!(f, "no register table in resolution slot {}", index)
            }
            LibraryError::Unsupported(capability) => {
                write!(f, "{:?} is not supported by the HM2058", capability)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LibraryError {}

pub enum Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    /// Errors from a combined write-read (register read) on the I²C bus.
    I2cWriteReadError(<I2C as i2c::WriteRead>::Error),

    /// Errors from a plain write (register write) on the I²C bus.
    I2cWriteError(<I2C as i2c::Write>::Error),

    /// Errors originating from within this library.
    LibraryError(LibraryError),
}

// Clone and PartialEq are written out since a derive wouldn't bound the qualified error types.
impl<I2C> Clone for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: Clone,
    <I2C as i2c::Write>::Error: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Error::I2cWriteReadError(err) => Error::I2cWriteReadError(err.clone()),
            Error::I2cWriteError(err) => Error::I2cWriteError(err.clone()),
            Error::LibraryError(err) => Error::LibraryError(err.clone()),
        }
    }
}

impl<I2C> PartialEq for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: PartialEq,
    <I2C as i2c::Write>::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::I2cWriteReadError(a), Error::I2cWriteReadError(b)) => a == b,
            (Error::I2cWriteError(a), Error::I2cWriteError(b)) => a == b,
            (Error::LibraryError(a), Error::LibraryError(b)) => a == b,
            _ => false,
        }
    }
}

// Custom Debug implementation so that I2C doesn't need to implement Debug (like the one from
// linux-embedded-hal).
impl<I2C> fmt::Debug for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: fmt::Debug,
    <I2C as i2c::Write>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2cWriteReadError(err) => {
                f.debug_tuple("Error::I2cWriteReadError").field(err).finish()
            }
            Error::I2cWriteError(err) => f.debug_tuple("Error::I2cWriteError").field(err).finish(),
            Error::LibraryError(err) => f.debug_tuple("Error::LibraryError").field(err).finish(),
        }
    }
}

impl<I2C> fmt::Display for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: fmt::Debug,
    <I2C as i2c::Write>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2cWriteReadError(err) => write!(f, "I2C read error: {:?}", err),
            Error::I2cWriteError(err) => write!(f, "I2C write error: {:?}", err),
            Error::LibraryError(err) => write!(f, "Library Error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: std::error::Error + 'static,
    <I2C as i2c::Write>::Error: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::I2cWriteReadError(err) => Some(err),
            Error::I2cWriteError(err) => Some(err),
            Error::LibraryError(err) => Some(err),
        }
    }
}

impl<I2C> From<LibraryError> for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    fn from(lib_err: LibraryError) -> Self {
        Self::LibraryError(lib_err)
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::string::ToString;

    use super::{Error, LibraryError};
    use crate::dispatch::Capability;
    use crate::test::{RecordingBus, RecordingError};

    #[test]
    fn display_not_identified() {
        let err = LibraryError::NotIdentified {
            id_high: 0x20,
            id_low: 0x40,
        };
        assert_eq!(err.to_string(), "sensor identified as 0x2040, not an HM2058");
    }

    #[test]
    fn display_invalid_parameter() {
        let err = LibraryError::InvalidParameter {
            setting: "brightness",
            value: 7,
        };
        assert_eq!(err.to_string(), "7 is not a valid value for brightness");
    }

    #[test]
    fn display_unsupported() {
        let err = LibraryError::Unsupported(Capability::SetZoom);
        assert_eq!(err.to_string(), "SetZoom is not supported by the HM2058");
    }

    #[test]
    fn clone_and_compare() {
        let err: Error<RecordingBus> = LibraryError::EmptyResolutionSlot(4).into();
        assert_eq!(err.clone(), err);
        assert_ne!(err, Error::LibraryError(LibraryError::EmptyResolutionSlot(5)));
        let bus_err: Error<RecordingBus> = Error::I2cWriteError(RecordingError::Injected);
        assert_eq!(bus_err.clone(), bus_err);
        assert_ne!(bus_err, Error::I2cWriteReadError(RecordingError::Injected));
    }
}
