// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
mod mock_sensor;

pub use mock_sensor::{
    identified_hm2058_at_address, Event, MockBus, MockControl, MockDelay, MockError, MockSensor,
    HM2058_ID_HIGH, HM2058_ID_LOW,
};
