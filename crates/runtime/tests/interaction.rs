//! Input navigation, notifications, the timer animation, and error screens.

mod common;

use common::{boot_to_home, new_core, run_ticks};
use patterns::color;
use platform::mocks::FrameKind;
use platform::{InputEvent, RGB8, STRIP_LEN};
use runtime::{BehaviorState, ErrorRecord, TickOutcome};

#[test]
fn rotary_press_toggles_the_menu() {
    let mut core = new_core();
    boot_to_home(&mut core);

    core.peripherals_mut().input.push(InputEvent::RotaryPress);
    run_ticks(&mut core, 2, 50);
    assert_eq!(core.behavior_state(), BehaviorState::Menu);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Menu));
    // The strip shows the breathing depth indicator.
    let shown = core.peripherals().strip.shown;
    assert_ne!(shown[0], color::OFF);
    assert_eq!(shown[1], color::OFF);

    core.peripherals_mut().input.push(InputEvent::RotaryPress);
    run_ticks(&mut core, 2, 50);
    assert_eq!(core.behavior_state(), BehaviorState::Home);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Home));
}

#[test]
fn rotary_turn_in_menu_walks_depth_pixels() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.peripherals_mut().input.push(InputEvent::RotaryPress);
    run_ticks(&mut core, 2, 50);
    core.peripherals_mut().input.push(InputEvent::RotaryTurn(2));
    run_ticks(&mut core, 3, 100);
    let shown = core.peripherals().strip.shown;
    assert_ne!(shown[2], color::OFF);
    assert_eq!(shown[3], color::OFF);
}

#[test]
fn timer_mode_drops_land_with_a_tone() {
    let mut core = new_core();
    boot_to_home(&mut core);
    // Home cycle: full -> week -> timer.
    core.peripherals_mut().input.push(InputEvent::RotaryTurn(1));
    core.peripherals_mut().input.push(InputEvent::RotaryTurn(1));
    run_ticks(&mut core, 1, 50);

    // Wait out the power-on jingle so only drop tones remain in question.
    run_ticks(&mut core, 40, 125);
    let before = core.peripherals().tone.tones.len();

    // One full drop: spawn, seven falls, landing.
    run_ticks(&mut core, 10, 125);
    let p = core.peripherals();
    assert!(p.tone.tones.len() > before, "no landing tone");
    assert_eq!(p.tone.tones.last().map(|&(_, d)| d), Some(75));
    assert_eq!(p.strip.shown[7], color::rainbow(0));
}

#[test]
fn notification_preempts_and_input_dismisses() {
    let mut core = new_core();
    boot_to_home(&mut core);

    core.notify_for("Pomodoro", "Break time", "bell", 10_000);
    run_ticks(&mut core, 1, 50);
    assert_eq!(
        core.peripherals().display.last_frame,
        Some(FrameKind::Notification)
    );

    // First input only dismisses; it does not reach navigation.
    core.peripherals_mut().input.push(InputEvent::RotaryPress);
    run_ticks(&mut core, 1, 50);
    assert_eq!(core.behavior_state(), BehaviorState::Home);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Home));
}

#[test]
fn notification_expires_on_its_own() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.notify_for("Short", "", "", 1_000);
    run_ticks(&mut core, 1, 50);
    assert_eq!(
        core.peripherals().display.last_frame,
        Some(FrameKind::Notification)
    );
    run_ticks(&mut core, 25, 50);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Home));
}

#[test]
fn notification_defaults_to_the_standard_hold_time() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.notify("Timer", "Done", "clock");
    run_ticks(&mut core, 1, 50);
    assert_eq!(
        core.peripherals().display.last_frame,
        Some(FrameKind::Notification)
    );
    // Still up just before the five-second hold elapses.
    run_ticks(&mut core, 9, 500);
    assert_eq!(
        core.peripherals().display.last_frame,
        Some(FrameKind::Notification)
    );
    run_ticks(&mut core, 2, 500);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Home));
}

#[test]
fn warning_screen_counts_down_and_returns() {
    let mut core = new_core();
    boot_to_home(&mut core);

    core.report_error(ErrorRecord::warning(0x0301, "Sensor hiccup", "retrying"));
    run_ticks(&mut core, 1, 50);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Error));
    assert_eq!(core.peripherals().display.last_error_code, Some(0x0301));

    // Auto-clears after the countdown; the device was never in Error state.
    run_ticks(&mut core, 110, 50);
    assert_eq!(core.behavior_state(), BehaviorState::Home);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Home));
}

#[test]
fn fatal_error_requests_restart_after_grace() {
    let mut core = new_core();
    boot_to_home(&mut core);

    core.report_error(ErrorRecord::fatal(0x0401, "Storage dead", "mount failed"));
    let mut outcome = TickOutcome::Continue;
    let mut guard = 0;
    while outcome == TickOutcome::Continue {
        core.peripherals().clock.advance(500);
        outcome = core.tick();
        guard += 1;
        assert!(guard < 100, "restart never requested");
    }
    assert_eq!(outcome, TickOutcome::Restart);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Error));
    assert_eq!(core.behavior_state(), BehaviorState::Error);
}

#[test]
fn long_press_restarts_from_a_fatal_screen() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.report_error(ErrorRecord::fatal(0x0402, "Storage dead", ""));
    run_ticks(&mut core, 1, 50);

    core.peripherals_mut().input.push(InputEvent::SideButtonLong);
    core.peripherals().clock.advance(50);
    assert_eq!(core.tick(), TickOutcome::Restart);
}

#[test]
fn display_fault_surfaces_as_an_error_record() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.peripherals_mut().display.fail_next = true;
    run_ticks(&mut core, 1, 50);
    // The failed present raised a record; the next frame shows it.
    run_ticks(&mut core, 1, 50);
    assert_eq!(core.peripherals().display.last_frame, Some(FrameKind::Error));
    assert_eq!(core.peripherals().display.last_error_code, Some(0x0201));
}

#[test]
fn clip_requests_reach_the_audio_driver() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.play_clip("startup");
    assert_eq!(
        core.peripherals().tone.clips.first().map(|c| c.as_str()),
        Some("startup")
    );

    // The finished event is drained on the next tick.
    core.peripherals_mut().tone.playback_finished = true;
    run_ticks(&mut core, 1, 50);
    assert!(!core.peripherals().tone.playback_finished);
}

#[test]
fn clip_failure_surfaces_as_an_audio_fault() {
    let mut core = new_core();
    boot_to_home(&mut core);
    core.play_clip("a name far longer than any driver-side clip identifier");
    run_ticks(&mut core, 1, 50);
    assert_eq!(core.peripherals().display.last_error_code, Some(0x0203));
}

#[test]
fn app_takeover_shows_the_staged_frame() {
    let mut core = new_core();
    boot_to_home(&mut core);

    let mut frame = [color::OFF; STRIP_LEN];
    frame[0] = RGB8::new(10, 20, 30);
    frame[7] = RGB8::new(40, 50, 60);
    core.set_custom_frame(frame);

    core.peripherals_mut().apps.active = true;
    run_ticks(&mut core, 3, 50);
    assert_eq!(core.behavior_state(), BehaviorState::App);
    assert_eq!(core.peripherals().strip.shown[0], RGB8::new(10, 20, 30));
    assert_eq!(core.peripherals().strip.shown[7], RGB8::new(40, 50, 60));
    assert_eq!(core.peripherals().strip.shown[3], color::OFF);

    // Restaging while the app is active repaints on the next refresh.
    frame[3] = RGB8::new(70, 80, 90);
    core.set_custom_frame(frame);
    run_ticks(&mut core, 3, 100);
    assert_eq!(core.peripherals().strip.shown[3], RGB8::new(70, 80, 90));

    core.peripherals_mut().apps.active = false;
    run_ticks(&mut core, 2, 50);
    assert_eq!(core.behavior_state(), BehaviorState::Home);
}
