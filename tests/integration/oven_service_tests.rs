//! Oven service end to end: real cadence thread, real drivers, shortened
//! tick interval, inputs posted from the test thread.

use std::time::{Duration, Instant};

use microwave::adapters::memory::MemoryOutput;
use microwave::app::ports::HeatingElement;
use microwave::app::service::Oven;
use microwave::config::OvenConfig;
use microwave::events::Event;
use microwave::fsm::Phase;

fn fast_config() -> OvenConfig {
    OvenConfig {
        time_step_secs: 3,
        tick_interval_ms: 20,
        ..OvenConfig::default()
    }
}

fn wait_for(out: &MemoryOutput, line: &str) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if out.contains(line) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn cooking_runs_to_completion_on_the_service_thread() {
    let out = MemoryOutput::new();
    let oven = Oven::new(fast_config(), out.clone()).unwrap();
    let power = oven.power_button();
    let time = oven.time_button();
    let start = oven.start_cancel_button();
    let shutdown = oven.shutdown_handle();
    let handle = oven.spawn().unwrap();

    power.press();
    time.press();
    start.press();

    assert!(wait_for(&out, "Light is turned off"), "run never completed");
    shutdown.post(Event::Shutdown);
    let oven = handle.join().unwrap();

    assert_eq!(oven.phase(), Phase::Ready);
    assert_eq!(
        out.lines(),
        vec![
            "Display shows: 50 W",
            "Display shows: 00:03",
            "Display cleared",
            "Light is turned on",
            "PowerTube works with 50 %",
            "Display shows: 00:02",
            "Display shows: 00:01",
            "PowerTube turned off",
            "Light is turned off",
            "Display cleared",
        ]
    );
}

#[test]
fn door_interrupts_a_running_cook() {
    let out = MemoryOutput::new();
    let config = OvenConfig {
        time_step_secs: 600,
        ..fast_config()
    };
    let oven = Oven::new(config, out.clone()).unwrap();
    let power = oven.power_button();
    let time = oven.time_button();
    let start = oven.start_cancel_button();
    let mut door = oven.door();
    let shutdown = oven.shutdown_handle();
    let handle = oven.spawn().unwrap();

    power.press();
    time.press();
    start.press();
    assert!(wait_for(&out, "Display shows: 09:58"));

    door.open();
    assert!(wait_for(&out, "PowerTube turned off"));
    // Let any period already in flight reach the loop.
    std::thread::sleep(Duration::from_millis(100));
    door.close();
    shutdown.post(Event::Shutdown);
    let oven = handle.join().unwrap();

    let lines = out.lines();
    let off = lines
        .iter()
        .position(|l| l == "PowerTube turned off")
        .unwrap();
    assert_eq!(
        &lines[off..],
        &["PowerTube turned off", "Display cleared", "Light is turned off"]
    );
    assert_eq!(oven.phase(), Phase::Ready);
    assert!(!oven.panel().cook().element().is_on());
}

#[test]
fn shutdown_mid_run_turns_the_tube_off() {
    let out = MemoryOutput::new();
    let config = OvenConfig {
        time_step_secs: 600,
        ..fast_config()
    };
    let oven = Oven::new(config, out.clone()).unwrap();
    let sender = oven.sender();
    let handle = oven.spawn().unwrap();

    for event in [
        Event::PowerPressed,
        Event::TimePressed,
        Event::StartCancelPressed,
        Event::Shutdown,
    ] {
        sender.post(event);
    }
    let oven = handle.join().unwrap();

    assert!(!oven.panel().cook().element().is_on());
    assert_eq!(out.count("PowerTube turned off"), 1);
}
