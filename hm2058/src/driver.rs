// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use log::{debug, info, warn};
use num_enum::TryFromPrimitive;
use paste::paste;

use crate::control::{MasterClock, Rails, SensorControl};
use crate::descriptor::{SensorDescriptor, HM2058};
use crate::error::{Error, LibraryError};
use crate::register::{play_table, read_register, write_register, Address, RegisterTable};
use crate::settings::*;
use crate::tables;

/// The AE control register. Bit 0 disables automatic exposure.
const AE_CONTROL: Address = Address::new(0x0380);
const AE_DISABLE: u8 = 0x01;

/// Written before switching the output pipeline to capture.
const SNAPSHOT_CONTROL: Address = Address::new(0x0300);
const SNAPSHOT_VALUE: u8 = 0xC1;

const PREVIEW_SETTLE_MS: u32 = 20;
const ANTI_FLICKER_SETTLE_MS: u32 = 200;

/// What to do with a raw level or mode that a setting doesn't have.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutOfRangePolicy {
    /// Return [`LibraryError::InvalidParameter`] without touching the sensor.
    Reject,

    /// Log a warning and return `Ok(())` without touching the sensor.
    ///
    /// This matches the behavior camera HALs written against the vendor driver expect.
    Ignore,
}

impl Default for OutOfRangePolicy {
    fn default() -> Self {
        Self::Reject
    }
}

/// DRY macro for the `set_*_raw` methods that convert a HAL ordinal before calling the typed
/// setter.
macro_rules! set_from_raw {
    { $setting:ident, $typ:ty, $name:literal, $doc:literal } => {
    paste! {
        #[doc = $doc]
        pub fn [< set_ $setting _raw >](&mut self, raw: u32) -> Result<(), Error<I2C>> {
            match self.checked::<$typ>($name, raw)? {
                Some(value) => self.[< set_ $setting >](value),
                None => Ok(()),
            }
        }
    }};
}

/// Driver for an HM2058 on an I²C bus.
///
/// Besides the bus, the driver needs a way to reach the power, reset and clock lines (a
/// [`SensorControl`]) and a millisecond delay for the settle times the sensor needs between some
/// steps.
///
/// The driver keeps no record of the sensor's settings; every setter writes its registers
/// unconditionally.
#[derive(Clone, Debug)]
pub struct Hm2058Driver<I2C, C, D> {
    /// The I²C bus the sensor is accessible on.
    bus: I2C,

    /// The I²C address the sensor is accessible at.
    address: u8,

    control: C,

    delay: D,

    out_of_range_policy: OutOfRangePolicy,
}

impl<I2C, C, D> Hm2058Driver<I2C, C, D>
where
    I2C: i2c::WriteRead + i2c::Write,
    C: SensorControl,
    D: DelayMs<u32>,
{
    /// Create a driver for a sensor at the default address (0x24).
    ///
    /// Nothing is sent to the sensor; call [`power_on`][Self::power_on] and
    /// [`identify`][Self::identify] before anything else.
    pub fn new(bus: I2C, control: C, delay: D) -> Self {
        Self::with_address(bus, HM2058.bus.write_address, control, delay)
    }

    /// Create a driver for a sensor at a non-default I²C address.
    pub fn with_address(bus: I2C, address: u8, control: C, delay: D) -> Self {
        Self {
            bus,
            address,
            control,
            delay,
            out_of_range_policy: OutOfRangePolicy::default(),
        }
    }

    /// Take the driver apart, returning the bus, control and delay.
    pub fn release(self) -> (I2C, C, D) {
        (self.bus, self.control, self.delay)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// The static description of the sensor.
    pub fn descriptor(&self) -> &'static SensorDescriptor {
        &HM2058
    }

    pub fn out_of_range_policy(&self) -> OutOfRangePolicy {
        self.out_of_range_policy
    }

    pub fn set_out_of_range_policy(&mut self, policy: OutOfRangePolicy) {
        self.out_of_range_policy = policy;
    }

    /// Convert a raw ordinal into a setting, applying the out of range policy.
    ///
    /// `Ok(None)` means the value was out of range and should be skipped.
    fn checked<T>(&self, setting: &'static str, raw: u32) -> Result<Option<T>, Error<I2C>>
    where
        T: TryFromPrimitive<Primitive = u32>,
    {
        match T::try_from_primitive(raw) {
            Ok(value) => Ok(Some(value)),
            Err(_) => match self.out_of_range_policy {
                OutOfRangePolicy::Reject => {
                    Err(LibraryError::InvalidParameter { setting, value: raw }.into())
                }
                OutOfRangePolicy::Ignore => {
                    warn!("ignoring out of range {}: {}", setting, raw);
                    Ok(None)
                }
            },
        }
    }

    fn play(&mut self, table: &RegisterTable) -> Result<(), Error<I2C>> {
        play_table(&mut self.bus, self.address, table)
    }

    /// Latch the pending shadow register changes.
    fn commit(&mut self) -> Result<(), Error<I2C>> {
        self.play(tables::COMMIT)
    }

    fn play_and_commit(&mut self, table: &RegisterTable) -> Result<(), Error<I2C>> {
        self.play(table)?;
        self.commit()
    }

    /// Read a single sensor register.
    pub fn read_register(&mut self, address: Address) -> Result<u8, Error<I2C>> {
        read_register(&mut self.bus, self.address, address)
    }

    /// Write a single sensor register.
    pub fn write_register(&mut self, address: Address, value: u8) -> Result<(), Error<I2C>> {
        write_register(&mut self.bus, self.address, address, value)
    }

    /// Check that the device on the bus is an HM2058.
    ///
    /// Both identity registers are read before comparing. A mismatch in either is
    /// [`LibraryError::NotIdentified`]; a failed read is returned as the bus error.
    pub fn identify(&mut self) -> Result<(), Error<I2C>> {
        let [high, low] = HM2058.identify_codes;
        let id_high = self.read_register(high.address)?;
        debug!("identify: id high {:#04X}", id_high);
        let id_low = self.read_register(low.address)?;
        debug!("identify: id low {:#04X}", id_low);
        if id_high == high.expected && id_low == low.expected {
            info!("identified HM2058 at {:#04X}", self.address);
            Ok(())
        } else {
            Err(LibraryError::NotIdentified { id_high, id_low }.into())
        }
    }

    /// Power the sensor up or down.
    ///
    /// Powering up raises the rails, starts the master clock and releases the sensor from
    /// power-down and reset, waiting between steps for things to settle. Powering down doesn't
    /// wait at all.
    pub fn power_on(&mut self, enable: bool) -> Result<(), Error<I2C>> {
        let power_down = HM2058.power_down_level;
        if enable {
            let rails = HM2058.rails;
            debug!(
                "power on: dvdd {:?} mV, avdd {:?} mV, iovdd {:?} mV",
                rails.dvdd.millivolts(),
                rails.avdd.millivolts(),
                rails.iovdd.millivolts()
            );
            self.control.set_power_down(power_down);
            self.control.set_voltage(rails);
            self.delay.delay_ms(HM2058.rail_settle_ms);
            self.control.set_master_clock(HM2058.master_clock);
            self.delay.delay_ms(HM2058.clock_settle_ms);
            self.control.set_power_down(power_down.inverted());
            self.control
                .reset(HM2058.reset_pulse_level, HM2058.reset_pulse_width_ms);
        } else {
            self.control.set_power_down(power_down);
            self.control.set_master_clock(MasterClock::Disabled);
            self.control.set_voltage(Rails::CLOSED);
        }
        info!("power {}", if enable { "on" } else { "off" });
        Ok(())
    }

    /// Load the common configuration. Must be played once after power on, before selecting a
    /// resolution.
    pub fn initialize(&mut self) -> Result<(), Error<I2C>> {
        self.set_resolution(0)
    }

    /// Play the register table in a resolution slot of the descriptor.
    pub fn set_resolution(&mut self, index: usize) -> Result<(), Error<I2C>> {
        let entry = HM2058
            .resolution(index)
            .ok_or(LibraryError::EmptyResolutionSlot(index))?;
        debug!(
            "set_resolution: slot {} ({}x{})",
            index, entry.width, entry.height
        );
        self.play(entry.table)
    }

    /// Turn automatic exposure on or off.
    ///
    /// The other bits in the AE control register are kept as they are.
    pub fn set_ae_enable(&mut self, mode: AeMode) -> Result<(), Error<I2C>> {
        let current = self.read_register(AE_CONTROL)?;
        let updated = match mode {
            AeMode::Enable => current & !AE_DISABLE,
            AeMode::Disable => current | AE_DISABLE,
        };
        debug!("set_ae_enable: {:?}", mode);
        self.write_register(AE_CONTROL, updated)?;
        self.commit()
    }

    pub fn set_brightness(&mut self, level: Level) -> Result<(), Error<I2C>> {
        debug!("set_brightness: {:+}", level.offset());
        self.play_and_commit(tables::BRIGHTNESS[level as usize])
    }

    pub fn set_contrast(&mut self, level: Level) -> Result<(), Error<I2C>> {
        debug!("set_contrast: {:+}", level.offset());
        self.play_and_commit(tables::CONTRAST[level as usize])
    }

    /// Shift the auto exposure target.
    pub fn set_exposure_compensation(&mut self, level: Level) -> Result<(), Error<I2C>> {
        debug!("set_exposure_compensation: {:+}", level.offset());
        self.play_and_commit(tables::EXPOSURE_COMPENSATION[level as usize])
    }

    pub fn set_image_effect(&mut self, effect: ImageEffect) -> Result<(), Error<I2C>> {
        debug!("set_image_effect: {:?}", effect);
        self.play_and_commit(tables::IMAGE_EFFECT[effect as usize])
    }

    pub fn set_white_balance(&mut self, mode: WhiteBalance) -> Result<(), Error<I2C>> {
        debug!("set_white_balance: {:?}", mode);
        self.play_and_commit(tables::WHITE_BALANCE[mode as usize])
    }

    /// Set the banding filter, then wait for the exposure loop to settle.
    pub fn set_anti_flicker(&mut self, frequency: AntiFlicker) -> Result<(), Error<I2C>> {
        debug!("set_anti_flicker: {:?}", frequency);
        self.play_and_commit(tables::ANTI_FLICKER[frequency as usize])?;
        self.delay.delay_ms(ANTI_FLICKER_SETTLE_MS);
        Ok(())
    }

    pub fn set_work_mode(&mut self, mode: WorkMode) -> Result<(), Error<I2C>> {
        debug!("set_work_mode: {:?}", mode);
        self.play_and_commit(tables::WORK_MODE[mode as usize])
    }

    /// Pick the work mode for a preview environment, then wait for the sensor to settle.
    pub fn set_preview_mode(&mut self, environment: Environment) -> Result<(), Error<I2C>> {
        debug!("set_preview_mode: {:?}", environment);
        self.set_work_mode(environment.work_mode())?;
        self.delay.delay_ms(PREVIEW_SETTLE_MS);
        Ok(())
    }

    /// Set the preview environment from a raw HAL value.
    ///
    /// An ignored out of range value still waits for the settle time.
    pub fn set_preview_mode_raw(&mut self, raw: u32) -> Result<(), Error<I2C>> {
        match self.checked::<Environment>("preview mode", raw)? {
            Some(environment) => self.set_preview_mode(environment),
            None => {
                self.delay.delay_ms(PREVIEW_SETTLE_MS);
                Ok(())
            }
        }
    }

    /// Set the exposure limits for video recording.
    ///
    /// Unlike the other settings, this one is not committed; it takes effect with the next
    /// resolution or mode change.
    pub fn set_video_mode(&mut self, mode: VideoMode) -> Result<(), Error<I2C>> {
        debug!("set_video_mode: {:?}", mode);
        self.play(tables::VIDEO_MODE[mode as usize])
    }

    set_from_raw! {
        ae_enable,
        AeMode,
        "ae enable",
        "Turn automatic exposure on (1) or off (0) from a raw HAL value."
    }

    set_from_raw! {
        brightness,
        Level,
        "brightness",
        "Set the brightness from a HAL level, 0 (darkest) through 6."
    }

    set_from_raw! {
        contrast,
        Level,
        "contrast",
        "Set the contrast from a HAL level, 0 through 6."
    }

    set_from_raw! {
        exposure_compensation,
        Level,
        "exposure compensation",
        "Set the exposure compensation from a HAL level, 0 through 6."
    }

    set_from_raw! {
        image_effect,
        ImageEffect,
        "image effect",
        "Set the image effect from its HAL ordinal."
    }

    set_from_raw! {
        white_balance,
        WhiteBalance,
        "white balance",
        "Set the white balance preset from its HAL ordinal. 0 is automatic."
    }

    set_from_raw! {
        anti_flicker,
        AntiFlicker,
        "anti-flicker",
        "Set the banding filter from a HAL value, 0 for 50Hz and 1 for 60Hz."
    }

    set_from_raw! {
        work_mode,
        WorkMode,
        "work mode",
        "Set the preview exposure limits from a HAL value, 0 for normal and 1 for night."
    }

    set_from_raw! {
        video_mode,
        VideoMode,
        "video mode",
        "Set the video exposure limits from a HAL value, 0 for normal and 1 for night."
    }

    /// Switch to capture.
    ///
    /// The upper 16 bits of `param` select the capture mode and are only logged, the lower 16
    /// bits are the output mode. Blocks until the output pipeline has switched over.
    pub fn before_snapshot(&mut self, param: u32) -> Result<(), Error<I2C>> {
        let capture_mode = param >> 16;
        let output_mode = param & 0xFFFF;
        info!(
            "before snapshot: capture mode {}, output mode {}",
            capture_mode, output_mode
        );
        self.write_register(SNAPSHOT_CONTROL, SNAPSHOT_VALUE)?;
        self.control.set_output_mode(output_mode);
        self.control.wait_output_mode_applied();
        Ok(())
    }

    /// Return to the preview output mode. Doesn't wait for the switch to finish.
    pub fn after_snapshot(&mut self, param: u32) -> Result<(), Error<I2C>> {
        debug!("after snapshot: output mode {}", param);
        self.control.set_output_mode(param);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::control::SignalLevel;
    use crate::test::{BusOperation, RecordingBus};

    #[derive(Debug, Default)]
    struct NullControl {
        output_modes: Vec<u32>,
        waits: usize,
    }

    impl SensorControl for NullControl {
        fn set_power_down(&mut self, _level: SignalLevel) {}

        fn set_voltage(&mut self, _rails: Rails) {}

        fn set_master_clock(&mut self, _clock: MasterClock) {}

        fn reset(&mut self, _level: SignalLevel, _width_ms: u32) {}

        fn set_output_mode(&mut self, mode: u32) {
            self.output_modes.push(mode);
        }

        fn wait_output_mode_applied(&mut self) {
            self.waits += 1;
        }
    }

    #[derive(Debug, Default)]
    struct TotalDelay(u32);

    impl DelayMs<u32> for TotalDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.0 += ms;
        }
    }

    type TestDriver = Hm2058Driver<RecordingBus, NullControl, TotalDelay>;

    fn driver() -> TestDriver {
        Hm2058Driver::new(
            RecordingBus::new(0x24),
            NullControl::default(),
            TotalDelay::default(),
        )
    }

    fn writes(driver: TestDriver) -> Vec<(u16, u8)> {
        let (bus, _, _) = driver.release();
        bus.operations()
            .into_iter()
            .filter_map(|op| match op {
                BusOperation::Write { register, value } => Some((register, value)),
                _ => None,
            })
            .collect()
    }

    const COMMIT: [(u16, u8); 3] = [(0x0000, 0x01), (0x0100, 0x01), (0x0101, 0x01)];

    #[test]
    fn default_address_and_policy() {
        let driver = driver();
        assert_eq!(driver.address(), 0x24);
        assert_eq!(driver.out_of_range_policy(), OutOfRangePolicy::Reject);
    }

    #[test]
    fn contrast_then_commit() {
        let mut driver = driver();
        driver.set_contrast(Level::Zero).unwrap();
        let mut expected = std::vec![(0x04B0, 0x50)];
        expected.extend_from_slice(&COMMIT);
        assert_eq!(writes(driver), expected);
    }

    #[test]
    fn video_mode_is_not_committed() {
        let mut driver = driver();
        driver.set_video_mode(VideoMode::Night).unwrap();
        assert_eq!(writes(driver), [(0x038F, 0x0A), (0x0390, 0x00)]);
    }

    #[test]
    fn raw_rejected() {
        let mut driver = driver();
        let result = driver.set_image_effect_raw(8);
        assert!(matches!(
            result,
            Err(Error::LibraryError(LibraryError::InvalidParameter {
                setting: "image effect",
                value: 8
            }))
        ));
        assert!(writes(driver).is_empty());
    }

    #[test]
    fn raw_ignored() {
        let mut driver = driver();
        driver.set_out_of_range_policy(OutOfRangePolicy::Ignore);
        driver.set_white_balance_raw(7).unwrap();
        driver.set_ae_enable_raw(2).unwrap();
        assert!(writes(driver).is_empty());
    }

    #[test]
    fn ae_enable_keeps_other_bits() {
        let mut driver = driver();
        driver.bus.set_register(0x0380, 0xFE);
        driver.set_ae_enable(AeMode::Disable).unwrap();
        assert_eq!(driver.read_register(AE_CONTROL).unwrap(), 0xFF);
        driver.set_ae_enable(AeMode::Enable).unwrap();
        assert_eq!(driver.read_register(AE_CONTROL).unwrap(), 0xFE);
    }

    #[test]
    fn empty_resolution_slot() {
        let mut driver = driver();
        let result = driver.set_resolution(5);
        assert!(matches!(
            result,
            Err(Error::LibraryError(LibraryError::EmptyResolutionSlot(5)))
        ));
        assert!(writes(driver).is_empty());
    }

    #[test]
    fn settle_delays() {
        let mut driver = driver();
        driver.set_anti_flicker(AntiFlicker::Hz60).unwrap();
        assert_eq!(driver.delay.0, 200);
        driver.set_preview_mode(Environment::Sunny).unwrap();
        assert_eq!(driver.delay.0, 220);
        driver.set_out_of_range_policy(OutOfRangePolicy::Ignore);
        driver.set_anti_flicker_raw(2).unwrap();
        assert_eq!(driver.delay.0, 220);
        driver.set_preview_mode_raw(3).unwrap();
        assert_eq!(driver.delay.0, 240);
    }

    #[test]
    fn power_on_waits_descriptor_delays() {
        let mut driver = driver();
        driver.power_on(true).unwrap();
        assert_eq!(driver.delay.0, HM2058.rail_settle_ms + HM2058.clock_settle_ms);
        driver.power_on(false).unwrap();
        assert_eq!(driver.delay.0, 15);
    }

    #[test]
    fn snapshot_output_modes() {
        let mut driver = driver();
        driver.before_snapshot(0x0002_0003).unwrap();
        driver.after_snapshot(1).unwrap();
        assert_eq!(driver.control.output_modes, [3, 1]);
        assert_eq!(driver.control.waits, 1);
        assert_eq!(writes(driver), [(0x0300, 0xC1)]);
    }
}
