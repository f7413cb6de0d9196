// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Typed values for the adjustable sensor settings.
//!
//! The camera HAL passes settings around as bare ordinals. Each type here converts from that
//! ordinal with [`TryFromPrimitive`][num_enum::TryFromPrimitive], and the ordinal doubles as the
//! index into the matching table in [`tables`][crate::tables].
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A seven step adjustment, used for brightness, contrast and exposure compensation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum Level {
    Minus3 = 0,
    Minus2,
    Minus1,
    Zero,
    Plus1,
    Plus2,
    Plus3,
}

impl Level {
    /// The number of steps, as advertised in the sensor descriptor.
    pub const STEPS: u32 = 7;

    /// The signed offset from the neutral setting, -3 through 3.
    pub fn offset(self) -> i8 {
        (self as u32 as i8) - 3
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Zero
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum ImageEffect {
    Normal = 0,
    BlackWhite,
    Red,
    Green,
    Blue,
    Yellow,
    Negative,
    Canvas,
}

/// White balance presets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum WhiteBalance {
    Auto = 0,
    Office,
    Incandescent,
    Fluorescent,
    Home,
    Sun,
    Cloud,
}

/// Mains frequency to avoid banding against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum AntiFlicker {
    Hz50 = 0,
    Hz60,
}

/// The scene environment requested for preview.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum Environment {
    Normal = 0,
    Night,
    Sunny,
}

impl Environment {
    /// The exposure work mode used for this environment.
    pub fn work_mode(self) -> WorkMode {
        match self {
            Self::Normal | Self::Sunny => WorkMode::Normal,
            Self::Night => WorkMode::Night,
        }
    }
}

/// Exposure limits used while previewing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum WorkMode {
    Normal = 0,
    Night,
}

/// Automatic exposure on or off, 0 and 1 from the HAL.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum AeMode {
    Disable = 0,
    Enable,
}

/// Exposure limits used while recording video.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum VideoMode {
    Normal = 0,
    Night,
}
