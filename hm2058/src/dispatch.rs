// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The capability table connecting the driver to a camera HAL.
//!
//! HALs written for this family of sensors drive every sensor through one fixed list of
//! operations, each taking a single integer parameter. [`Capability`] names the slots of that list
//! in HAL order, and [`ioctl_table`] fills in the ones the HM2058 implements. Anything else is
//! `None`, which callers should treat as "this sensor can't do that" rather than as a failure.
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::control::SensorControl;
use crate::driver::Hm2058Driver;
use crate::error::{Error, LibraryError};

/// One slot of the HAL operation table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum Capability {
    Reset = 0,
    Power,
    EnterSleep,
    Identify,
    WriteRegister,
    ReadRegister,
    CustomFunction1,
    GetTrim,
    AeEnable,
    HorizontalMirror,
    VerticalMirror,
    Brightness,
    Contrast,
    Sharpness,
    Saturation,
    PreviewMode,
    ImageEffect,
    BeforeSnapshot,
    AfterSnapshot,
    Flash,
    ReadAe,
    WriteAe,
    ReadGain,
    WriteGain,
    ReadGainScale,
    SetFrameRate,
    AfEnable,
    AfGetStatus,
    WhiteBalance,
    GetSkipFrame,
    Iso,
    ExposureCompensation,
    CheckImageFormatSupport,
    ChangeImageFormat,
    SetZoom,
    GetExif,
    SetFocus,
    AntiBandingFlicker,
    VideoMode,
    PickJpegStream,
    MeterMode,
    GetStatus,
    StreamOn,
    StreamOff,
    ConfigureOtp,
}

impl Capability {
    /// The number of slots in the table.
    pub const COUNT: usize = 45;

    /// Every capability, in table order.
    pub const ALL: [Capability; Self::COUNT] = [
        Self::Reset,
        Self::Power,
        Self::EnterSleep,
        Self::Identify,
        Self::WriteRegister,
        Self::ReadRegister,
        Self::CustomFunction1,
        Self::GetTrim,
        Self::AeEnable,
        Self::HorizontalMirror,
        Self::VerticalMirror,
        Self::Brightness,
        Self::Contrast,
        Self::Sharpness,
        Self::Saturation,
        Self::PreviewMode,
        Self::ImageEffect,
        Self::BeforeSnapshot,
        Self::AfterSnapshot,
        Self::Flash,
        Self::ReadAe,
        Self::WriteAe,
        Self::ReadGain,
        Self::WriteGain,
        Self::ReadGainScale,
        Self::SetFrameRate,
        Self::AfEnable,
        Self::AfGetStatus,
        Self::WhiteBalance,
        Self::GetSkipFrame,
        Self::Iso,
        Self::ExposureCompensation,
        Self::CheckImageFormatSupport,
        Self::ChangeImageFormat,
        Self::SetZoom,
        Self::GetExif,
        Self::SetFocus,
        Self::AntiBandingFlicker,
        Self::VideoMode,
        Self::PickJpegStream,
        Self::MeterMode,
        Self::GetStatus,
        Self::StreamOn,
        Self::StreamOff,
        Self::ConfigureOtp,
    ];
}

/// A populated slot: takes the driver and the raw HAL parameter.
pub type Handler<I2C, C, D> = fn(&mut Hm2058Driver<I2C, C, D>, u32) -> Result<(), Error<I2C>>;

pub type IoctlTable<I2C, C, D> = [Option<Handler<I2C, C, D>>; Capability::COUNT];

/// The handler for a single capability, if the HM2058 has one.
pub fn handler<I2C, C, D>(capability: Capability) -> Option<Handler<I2C, C, D>>
where
    I2C: i2c::WriteRead + i2c::Write,
    C: SensorControl,
    D: DelayMs<u32>,
{
    let handler: Handler<I2C, C, D> = match capability {
        // Only 1 powers up, anything else powers down.
        Capability::Power => |driver, param| driver.power_on(param == 1),
        Capability::Identify => |driver, _| driver.identify(),
        Capability::AeEnable => |driver, param| driver.set_ae_enable_raw(param),
        Capability::Brightness => |driver, param| driver.set_brightness_raw(param),
        Capability::Contrast => |driver, param| driver.set_contrast_raw(param),
        Capability::PreviewMode => |driver, param| driver.set_preview_mode_raw(param),
        Capability::ImageEffect => |driver, param| driver.set_image_effect_raw(param),
        Capability::BeforeSnapshot => |driver, param| driver.before_snapshot(param),
        Capability::AfterSnapshot => |driver, param| driver.after_snapshot(param),
        Capability::WhiteBalance => |driver, param| driver.set_white_balance_raw(param),
        Capability::ExposureCompensation => {
            |driver, param| driver.set_exposure_compensation_raw(param)
        }
        Capability::AntiBandingFlicker => |driver, param| driver.set_anti_flicker_raw(param),
        Capability::VideoMode => |driver, param| driver.set_video_mode_raw(param),
        _ => return None,
    };
    Some(handler)
}

/// Build the full operation table, with `None` in every unsupported slot.
pub fn ioctl_table<I2C, C, D>() -> IoctlTable<I2C, C, D>
where
    I2C: i2c::WriteRead + i2c::Write,
    C: SensorControl,
    D: DelayMs<u32>,
{
    let mut table: IoctlTable<I2C, C, D> = [None; Capability::COUNT];
    for (slot, capability) in table.iter_mut().zip(Capability::ALL) {
        *slot = handler(capability);
    }
    table
}

impl<I2C, C, D> Hm2058Driver<I2C, C, D>
where
    I2C: i2c::WriteRead + i2c::Write,
    C: SensorControl,
    D: DelayMs<u32>,
{
    /// Whether the HM2058 implements a capability.
    pub fn supports(&self, capability: Capability) -> bool {
        handler::<I2C, C, D>(capability).is_some()
    }

    /// Run a capability with a raw HAL parameter.
    ///
    /// Unsupported capabilities return [`LibraryError::Unsupported`] without touching the sensor.
    pub fn ioctl(&mut self, capability: Capability, param: u32) -> Result<(), Error<I2C>> {
        let handler = handler::<I2C, C, D>(capability)
            .ok_or(LibraryError::Unsupported(capability))?;
        handler(self, param)
    }
}
