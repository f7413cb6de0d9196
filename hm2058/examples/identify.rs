use std::env;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{bail, Context};
use embedded_hal::digital::v2::OutputPin;
use linux_embedded_hal::{Delay, I2cdev, Pin};

use hm2058::control::{MasterClock, Rails, SensorControl, SignalLevel};
use hm2058::Hm2058Driver;

/// Power-down and reset on sysfs GPIOs. The rails and master clock are assumed to be always on.
struct GpioControl {
    power_down: Pin,
    reset: Pin,
}

fn drive(pin: &mut Pin, level: SignalLevel) {
    let result = match level {
        SignalLevel::Low => pin.set_low(),
        SignalLevel::High => pin.set_high(),
    };
    if let Err(err) = result {
        eprintln!("Unable to drive GPIO: {}", err);
    }
}

impl SensorControl for GpioControl {
    fn set_power_down(&mut self, level: SignalLevel) {
        drive(&mut self.power_down, level);
    }

    fn set_voltage(&mut self, rails: Rails) {
        println!("Rails requested: {:?}", rails);
    }

    fn set_master_clock(&mut self, clock: MasterClock) {
        println!("Master clock requested: {:?}", clock);
    }

    fn reset(&mut self, level: SignalLevel, width_ms: u32) {
        drive(&mut self.reset, level);
        sleep(Duration::from_millis(width_ms.into()));
        drive(&mut self.reset, level.inverted());
    }

    fn set_output_mode(&mut self, _mode: u32) {}

    fn wait_output_mode_applied(&mut self) {}
}

fn parse_gpio(arg: &str) -> anyhow::Result<Pin> {
    let number: u64 = arg
        .parse()
        .with_context(|| format!("{} is not a GPIO number", arg))?;
    Ok(Pin::new(number))
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        bail!("Three arguments required: <I2C bus> <power-down GPIO> <reset GPIO>");
    }
    let bus_path = Path::new(&args[1]);
    let bus = I2cdev::new(bus_path).context("The given path should work as an I2C device")?;
    let control = GpioControl {
        power_down: parse_gpio(&args[2])?,
        reset: parse_gpio(&args[3])?,
    };
    let mut sensor = Hm2058Driver::new(bus, control, Delay);
    sensor.power_on(true)?;
    let identified = sensor.identify();
    sensor.power_on(false)?;
    match identified {
        Ok(()) => println!("Found an HM2058 at {:#04X}", sensor.address()),
        Err(err) => println!("No HM2058 found: {}", err),
    }
    Ok(())
}
