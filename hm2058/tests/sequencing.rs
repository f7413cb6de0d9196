// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use hm2058::control::{MasterClock, Rails, SignalLevel, Voltage};
use hm2058::{Capability, Error, Hm2058Driver, LibraryError, OutOfRangePolicy};
use hm2058_test_data::{
    identified_hm2058_at_address, Event, MockBus, MockControl, MockDelay, MockError, MockSensor,
};

type MockDriver = Hm2058Driver<MockBus, MockControl, MockDelay>;

fn driver_for(sensor: &MockSensor) -> MockDriver {
    Hm2058Driver::new(sensor.bus(), sensor.control(), sensor.delay())
}

#[test]
fn power_on_sequence() {
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.power_on(true).unwrap();
    assert_eq!(
        *sensor.events(),
        [
            Event::PowerDown(SignalLevel::High),
            Event::Voltage(Rails {
                dvdd: Voltage::Mv1800,
                avdd: Voltage::Mv2800,
                iovdd: Voltage::Mv1800,
            }),
            Event::Delay(10),
            Event::MasterClock(MasterClock::Megahertz(24)),
            Event::Delay(5),
            Event::PowerDown(SignalLevel::Low),
            Event::Reset {
                level: SignalLevel::Low,
                width_ms: 10
            },
        ]
    );
}

#[test]
fn power_off_sequence() {
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.power_on(false).unwrap();
    assert_eq!(
        *sensor.events(),
        [
            Event::PowerDown(SignalLevel::High),
            Event::MasterClock(MasterClock::Disabled),
            Event::Voltage(Rails::CLOSED),
        ]
    );
}

#[test]
fn identify_hm2058() {
    let sensor = identified_hm2058_at_address(0x24);
    let mut driver = driver_for(&sensor);
    driver.identify().unwrap();
    assert_eq!(
        *sensor.events(),
        [
            Event::RegisterRead { register: 0x0001 },
            Event::RegisterRead { register: 0x0002 },
        ]
    );
}

#[test]
fn identify_single_mismatch() {
    for (high, low) in [(0x20, 0x55), (0x21, 0x56), (0x00, 0x00)] {
        let sensor = MockSensor::new(0x24);
        sensor.set_register(0x0001, high);
        sensor.set_register(0x0002, low);
        let mut driver = driver_for(&sensor);
        match driver.identify() {
            Err(Error::LibraryError(LibraryError::NotIdentified { id_high, id_low })) => {
                assert_eq!((id_high, id_low), (high, low));
            }
            other => panic!("expected NotIdentified, got {:?}", other),
        }
    }
}

#[test]
fn identify_read_failure() {
    let sensor = identified_hm2058_at_address(0x24);
    sensor.fail_reads(true);
    let mut driver = driver_for(&sensor);
    assert!(matches!(
        driver.identify(),
        Err(Error::I2cWriteReadError(MockError::Injected))
    ));
}

#[test]
fn alternate_address() {
    let sensor = identified_hm2058_at_address(0x30);
    let mut driver =
        Hm2058Driver::with_address(sensor.bus(), 0x30, sensor.control(), sensor.delay());
    driver.identify().unwrap();
    let mut wrong = driver_for(&sensor);
    assert!(matches!(
        wrong.identify(),
        Err(Error::I2cWriteReadError(MockError::UnknownI2cAddress(0x24)))
    ));
}

#[test]
fn before_snapshot_waits() {
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.before_snapshot(0x0001_0002).unwrap();
    assert_eq!(
        *sensor.events(),
        [
            Event::RegisterWrite {
                register: 0x0300,
                value: 0xC1
            },
            Event::SetOutputMode(2),
            Event::WaitOutputModeApplied,
        ]
    );
}

#[test]
fn after_snapshot_does_not_wait() {
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.after_snapshot(1).unwrap();
    assert_eq!(*sensor.events(), [Event::SetOutputMode(1)]);
}

#[test]
fn dispatch_populated_slots() {
    let sensor = identified_hm2058_at_address(0x24);
    let mut driver = driver_for(&sensor);
    driver.ioctl(Capability::Identify, 0).unwrap();
    sensor.clear_events();
    driver.ioctl(Capability::Brightness, 6).unwrap();
    assert_eq!(
        sensor.register_writes(),
        [(0x04C0, 0x30), (0x0000, 0x01), (0x0100, 0x01), (0x0101, 0x01)]
    );
    sensor.clear_events();
    driver.ioctl(Capability::Power, 0).unwrap();
    assert_eq!(sensor.events().len(), 3);
    sensor.clear_events();
    driver.ioctl(Capability::AfterSnapshot, 4).unwrap();
    assert_eq!(*sensor.events(), [Event::SetOutputMode(4)]);
}

#[test]
fn dispatch_power_off_unless_one() {
    for param in [0, 2, u32::MAX] {
        let sensor = MockSensor::new(0x24);
        let mut driver = driver_for(&sensor);
        driver.ioctl(Capability::Power, param).unwrap();
        assert_eq!(
            *sensor.events(),
            [
                Event::PowerDown(SignalLevel::High),
                Event::MasterClock(MasterClock::Disabled),
                Event::Voltage(Rails::CLOSED),
            ]
        );
    }
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.ioctl(Capability::Power, 1).unwrap();
    assert_eq!(sensor.delays(), [10, 5]);
}

#[test]
fn dispatch_null_slots() {
    let sensor = MockSensor::new(0x24);
    let mut driver = driver_for(&sensor);
    driver.set_out_of_range_policy(OutOfRangePolicy::Ignore);
    for capability in [
        Capability::Reset,
        Capability::ReadRegister,
        Capability::HorizontalMirror,
        Capability::SetFrameRate,
        Capability::Iso,
        Capability::StreamOn,
        Capability::ConfigureOtp,
    ] {
        assert!(!driver.supports(capability));
        assert!(matches!(
            driver.ioctl(capability, 1),
            Err(Error::LibraryError(LibraryError::Unsupported(c))) if c == capability
        ));
    }
    assert!(sensor.events().is_empty());
}

#[test]
fn ioctl_table_matches_supports() {
    let sensor = MockSensor::new(0x24);
    let driver = driver_for(&sensor);
    let table: hm2058::IoctlTable<MockBus, MockControl, MockDelay> = hm2058::ioctl_table();
    for capability in Capability::ALL {
        assert_eq!(
            table[capability as usize].is_some(),
            driver.supports(capability)
        );
    }
}
