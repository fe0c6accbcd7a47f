//! Shared harness for the integration suites: a fully mocked device core.

#![allow(dead_code)]

use platform::mocks::{
    FakeClock, FixedCalendar, MockAppHost, MockDisplay, MockInput, MockNetwork, MockSleep,
    MockStrip, MockTone, MockWatchdog,
};
use runtime::{BehaviorState, DeviceCore, Peripherals};

pub type TestCore = DeviceCore<
    FakeClock,
    FixedCalendar,
    MockDisplay,
    MockStrip,
    MockTone,
    MockNetwork,
    MockInput,
    MockWatchdog,
    MockSleep,
    MockAppHost,
>;

pub fn new_core() -> TestCore {
    DeviceCore::new(Peripherals {
        clock: FakeClock::new(),
        calendar: FixedCalendar::unset(),
        display: MockDisplay::new(),
        strip: MockStrip::new(),
        tone: MockTone::new(),
        net: MockNetwork::new(),
        input: MockInput::new(),
        watchdog: MockWatchdog::new(),
        sleep: MockSleep::new(),
        apps: MockAppHost::new(),
    })
}

/// Tick `times` times, moving the clock `step_ms` forward before each tick.
pub fn run_ticks(core: &mut TestCore, times: u32, step_ms: u32) {
    for _ in 0..times {
        core.peripherals().clock.advance(step_ms);
        core.tick();
    }
}

/// Drive a cooperative boot with the network behaving, until home.
pub fn boot_to_home(core: &mut TestCore) {
    core.peripherals_mut().net.connected = true;
    core.peripherals_mut().net.time_initialized = true;
    let mut guard = 0;
    while core.behavior_state() != BehaviorState::Home {
        run_ticks(core, 1, 50);
        guard += 1;
        assert!(guard < 1000, "boot never reached home");
    }
    // Let the power-on jingle finish so its accents do not bleed into
    // strip assertions.
    run_ticks(core, 30, 100);
}
