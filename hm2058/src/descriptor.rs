// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The static description of the HM2058 published to the camera HAL.
//!
//! Nothing in here changes at runtime. The HAL uses [`HM2058`] to enumerate the sensor and to
//! negotiate output modes, and the driver reads its power sequencing parameters from it.
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

use crate::control::{MasterClock, Rails, SensorControl, SignalLevel, Voltage};
use crate::dispatch::{self, IoctlTable};
use crate::register::{Address, RegisterTable};
use crate::settings::Level;
use crate::tables;

/// Pixel formats a resolution can produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Yuv422,
    Yuv420,
    RawRgb,
    Jpeg,
}

/// Component order of YUV422 data on the parallel bus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImagePattern {
    Yuyv,
    Yvyu,
    Uyvy,
    Vyuy,
}

/// Physical interface between the sensor and the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interface {
    /// Parallel CCIR601 with discrete sync lines.
    Ccir601 {
        bus_width: u8,
        pixel_width: u8,
        is_loose: bool,
    },
}

/// Polarity of the parallel bus synchronization signals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignalPolarity {
    pub pixel_clock: SignalLevel,
    pub vsync: SignalLevel,
    pub hsync: SignalLevel,
}

/// How the sensor is addressed on the I²C bus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BusConfig {
    /// Write address of the sensor.
    pub write_address: u8,

    /// Read address of the sensor. The HM2058 uses the same address for both.
    pub read_address: u8,

    /// Register addresses are 16 bits.
    pub wide_register_address: bool,

    /// Register values are 16 bits.
    pub wide_register_value: bool,

    pub frequency_khz: u16,
}

/// A register value that only an HM2058 returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IdentifyCode {
    pub address: Address,
    pub expected: u8,
}

/// Binds a register table to the output it produces.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionEntry {
    pub table: &'static RegisterTable,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub format: ImageFormat,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Cropping applied by the host to a resolution's raw output.
///
/// Entries line up with the resolution table; an unused slot is all zeros.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrimEntry {
    pub start_x: u16,
    pub start_y: u16,
    pub width: u16,
    pub height: u16,
    /// Line time, in units of the pixel clock.
    pub line_time: u32,
    pub bps_per_lane: u16,
    pub frame_line: u16,
    pub scaler_trim: Rect,
}

/// Number of resolution slots the HAL reserves per sensor.
pub const RESOLUTION_SLOTS: usize = 9;

/// Bits of [`SensorDescriptor::environment_modes`].
pub mod environment {
    pub const NORMAL: u32 = 1 << 0;
    pub const NIGHT: u32 = 1 << 1;
    pub const SUNNY: u32 = 1 << 2;
}

/// Bits of [`SensorDescriptor::image_effects`].
pub mod effect {
    pub const NORMAL: u32 = 1 << 0;
    pub const BLACKWHITE: u32 = 1 << 1;
    pub const RED: u32 = 1 << 2;
    pub const GREEN: u32 = 1 << 3;
    pub const BLUE: u32 = 1 << 4;
    pub const YELLOW: u32 = 1 << 5;
    pub const NEGATIVE: u32 = 1 << 6;
    pub const CANVAS: u32 = 1 << 7;
}

/// Everything the camera HAL needs to know about a sensor before talking to it.
///
/// The operations themselves live in the capability table, see
/// [`ioctl_table`][Self::ioctl_table].
#[derive(Clone, Debug)]
pub struct SensorDescriptor {
    pub name: &'static str,
    pub bus: BusConfig,
    pub sync_polarity: SignalPolarity,
    /// Bitmask of supported preview environments, see [`environment`].
    pub environment_modes: u32,
    /// Bitmask of supported image effects, see [`effect`].
    pub image_effects: u32,
    /// Bitmask of white balance modes advertised to the HAL.
    pub white_balance_modes: u32,
    /// Number of steps for brightness, contrast, sharpness and saturation.
    pub level_steps: u32,
    pub reset_pulse_level: SignalLevel,
    pub reset_pulse_width_ms: u32,
    /// Level of the power-down line that puts the sensor into standby.
    pub power_down_level: SignalLevel,
    /// Registers read to confirm the part is an HM2058.
    pub identify_codes: [IdentifyCode; 2],
    pub rails: Rails,
    /// Wait after raising the rails, before starting the clock.
    pub rail_settle_ms: u32,
    pub master_clock: MasterClock,
    /// Wait after starting the clock, before leaving power-down.
    pub clock_settle_ms: u32,
    pub max_width: u16,
    pub max_height: u16,
    pub image_format: ImageFormat,
    pub image_pattern: ImagePattern,
    pub resolutions: &'static [Option<ResolutionEntry>; RESOLUTION_SLOTS],
    pub trims: &'static [TrimEntry; RESOLUTION_SLOTS],
    pub preview_skip_frames: u32,
    pub capture_skip_frames: u32,
    pub preview_decimation: u32,
    pub video_preview_decimation: u32,
    /// Frames to drop after a setting changes.
    pub change_setting_skip_frames: u32,
    pub interface: Interface,
}

impl SensorDescriptor {
    /// Look up a resolution slot. Unused and out of range slots are both `None`.
    pub fn resolution(&self, index: usize) -> Option<&ResolutionEntry> {
        self.resolutions.get(index).and_then(Option::as_ref)
    }

    /// Look up the trim geometry paired with a resolution slot.
    pub fn trim(&self, index: usize) -> Option<&TrimEntry> {
        self.trims.get(index)
    }

    /// Iterate over the populated resolution slots, with their slot index.
    pub fn resolutions(&self) -> impl Iterator<Item = (usize, &ResolutionEntry)> {
        self.resolutions
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().map(|entry| (index, entry)))
    }

    /// The capability table for driving this sensor through [`Hm2058Driver`][crate::Hm2058Driver].
    pub fn ioctl_table<I2C, C, D>(&self) -> IoctlTable<I2C, C, D>
    where
        I2C: i2c::WriteRead + i2c::Write,
        C: SensorControl,
        D: DelayMs<u32>,
    {
        dispatch::ioctl_table()
    }

    /// Find the slot producing a given output size.
    ///
    /// The common initialization slot reports a 0x0 size, so it is never matched.
    pub fn find_resolution(&self, width: u16, height: u16) -> Option<usize> {
        self.resolutions()
            .find(|(_, entry)| entry.width == width && entry.height == height && width != 0)
            .map(|(index, _)| index)
    }
}

const fn resolution(
    table: &'static RegisterTable,
    width: u16,
    height: u16,
) -> Option<ResolutionEntry> {
    Some(ResolutionEntry {
        table,
        width,
        height,
        bits_per_pixel: 24,
        format: ImageFormat::Yuv422,
    })
}

const fn trim(width: u16, height: u16, line_time: u32, bps_per_lane: u16) -> TrimEntry {
    TrimEntry {
        start_x: 0,
        start_y: 0,
        width,
        height,
        line_time,
        bps_per_lane,
        frame_line: 0,
        scaler_trim: Rect {
            x: 0,
            y: 0,
            width,
            height,
        },
    }
}

/// Slot 0 is the common initialization table, slots 1-4 the first YUV422 preview group and
/// slots 5-8 the (unused) second group.
pub static RESOLUTIONS: [Option<ResolutionEntry>; RESOLUTION_SLOTS] = [
    resolution(tables::YUV_COMMON, 0, 0),
    resolution(tables::YUV_640X480, 640, 480),
    resolution(tables::YUV_1280X960, 1280, 960),
    resolution(tables::YUV_1600X1200, 1600, 1200),
    None,
    None,
    None,
    None,
    None,
];

pub static TRIMS: [TrimEntry; RESOLUTION_SLOTS] = [
    trim(0, 0, 0, 0),
    trim(640, 480, 68, 56),
    trim(1280, 960, 122, 42),
    trim(1600, 1200, 122, 42),
    trim(0, 0, 0, 0),
    trim(0, 0, 0, 0),
    trim(0, 0, 0, 0),
    trim(0, 0, 0, 0),
    trim(0, 0, 0, 0),
];

/// The HM2058 descriptor.
pub static HM2058: SensorDescriptor = SensorDescriptor {
    name: "HM2058",
    bus: BusConfig {
        write_address: 0x24,
        read_address: 0x24,
        wide_register_address: true,
        wide_register_value: false,
        frequency_khz: 400,
    },
    sync_polarity: SignalPolarity {
        pixel_clock: SignalLevel::Low,
        vsync: SignalLevel::High,
        hsync: SignalLevel::High,
    },
    environment_modes: environment::NORMAL | environment::NIGHT | environment::SUNNY,
    image_effects: effect::NORMAL
        | effect::BLACKWHITE
        | effect::RED
        | effect::GREEN
        | effect::BLUE
        | effect::YELLOW
        | effect::NEGATIVE
        | effect::CANVAS,
    white_balance_modes: 0,
    level_steps: Level::STEPS,
    reset_pulse_level: SignalLevel::Low,
    reset_pulse_width_ms: 10,
    power_down_level: SignalLevel::High,
    identify_codes: [
        IdentifyCode {
            address: Address::new(0x0001),
            expected: 0x20,
        },
        IdentifyCode {
            address: Address::new(0x0002),
            expected: 0x56,
        },
    ],
    rails: Rails {
        dvdd: Voltage::Mv1800,
        avdd: Voltage::Mv2800,
        iovdd: Voltage::Mv1800,
    },
    rail_settle_ms: 10,
    master_clock: MasterClock::Megahertz(24),
    clock_settle_ms: 5,
    max_width: 1600,
    max_height: 1200,
    image_format: ImageFormat::Yuv422,
    image_pattern: ImagePattern::Yuyv,
    resolutions: &RESOLUTIONS,
    trims: &TRIMS,
    preview_skip_frames: 1,
    capture_skip_frames: 3,
    preview_decimation: 0,
    video_preview_decimation: 0,
    change_setting_skip_frames: 1,
    interface: Interface::Ccir601 {
        bus_width: 8,
        pixel_width: 16,
        is_loose: true,
    },
};
