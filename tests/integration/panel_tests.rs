//! Front panel → devices: exact call sequences for every transition.

use microwave::Error;
use microwave::app::ports::{CookControl, LightPort};
use microwave::config::OvenConfig;
use microwave::fsm::{PanelEvent, Phase};

use crate::mock_hw::{HwCall, MockPanel, mock_panel, mock_panel_with};

fn press(panel: &mut MockPanel, event: PanelEvent, n: usize) {
    for _ in 0..n {
        panel.handle(event);
    }
}

fn start_cooking(panel: &mut MockPanel, power_presses: usize, time_presses: usize) {
    press(panel, PanelEvent::PowerPressed, power_presses);
    press(panel, PanelEvent::TimePressed, time_presses);
    panel.handle(PanelEvent::StartCancelPressed);
}

#[test]
fn selection_is_shown_on_every_press() {
    let (mut panel, log) = mock_panel();
    press(&mut panel, PanelEvent::PowerPressed, 2);
    press(&mut panel, PanelEvent::TimePressed, 2);
    assert_eq!(
        log.calls(),
        vec![
            HwCall::ShowPower(50),
            HwCall::ShowPower(100),
            HwCall::ShowTime(1, 0),
            HwCall::ShowTime(2, 0),
        ]
    );
    assert_eq!(panel.pending_power(), Some(100));
    assert_eq!(panel.pending_duration(), Some(120));
}

#[test]
fn start_clears_then_lights_then_cooks() {
    let (mut panel, log) = mock_panel();
    press(&mut panel, PanelEvent::PowerPressed, 1);
    press(&mut panel, PanelEvent::TimePressed, 1);
    log.clear();

    panel.handle(PanelEvent::StartCancelPressed);
    assert_eq!(panel.phase(), Phase::Cooking);
    assert_eq!(
        log.calls(),
        vec![
            HwCall::ClearDisplay,
            HwCall::LightOn,
            HwCall::StartCooking {
                power: 50,
                duration_secs: 60
            },
        ]
    );
}

#[test]
fn natural_completion_turns_light_off_and_clears() {
    let (mut panel, log) = mock_panel();
    start_cooking(&mut panel, 1, 1);
    log.clear();

    for _ in 0..59 {
        panel.on_timer_cadence(1);
        assert_eq!(panel.phase(), Phase::Cooking);
    }
    panel.on_timer_cadence(1);

    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(log.calls(), vec![HwCall::LightOff, HwCall::ClearDisplay]);
    assert!(!panel.light().is_on());

    // Nothing left to complete.
    panel.on_timer_cadence(1);
    assert_eq!(log.calls().len(), 2);
}

#[test]
fn cancel_while_cooking_stops_without_completion() {
    let (mut panel, log) = mock_panel();
    start_cooking(&mut panel, 1, 1);
    log.clear();

    panel.handle(PanelEvent::StartCancelPressed);
    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(
        log.calls(),
        vec![HwCall::StopCooking, HwCall::LightOff, HwCall::ClearDisplay]
    );
    assert!(!panel.cook().is_cooking());
    assert_eq!(panel.cook().stops_while_idle, 0);
}

#[test]
fn cancel_during_selection_only_clears() {
    let (mut panel, log) = mock_panel();
    press(&mut panel, PanelEvent::PowerPressed, 4);
    log.clear();

    panel.handle(PanelEvent::StartCancelPressed);
    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(log.calls(), vec![HwCall::ClearDisplay]);
    assert_eq!(panel.pending_power(), None);

    // A fresh selection starts over at the first step.
    panel.handle(PanelEvent::PowerPressed);
    assert_eq!(panel.pending_power(), Some(50));
}

#[test]
fn start_cancel_in_ready_is_a_no_op() {
    let (mut panel, log) = mock_panel();
    panel.handle(PanelEvent::StartCancelPressed);
    panel.handle(PanelEvent::TimePressed);
    assert_eq!(panel.phase(), Phase::Ready);
    assert!(log.calls().is_empty());
}

#[test]
fn door_open_discards_selection_and_lights_cavity() {
    // Power ×3 → 150, time ×1 → 60 s, then the door opens.
    let (mut panel, log) = mock_panel();
    press(&mut panel, PanelEvent::PowerPressed, 3);
    panel.handle(PanelEvent::TimePressed);
    assert_eq!(panel.pending_power(), Some(150));
    assert_eq!(panel.pending_duration(), Some(60));
    log.clear();

    panel.handle(PanelEvent::DoorOpened);
    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(panel.pending_power(), None);
    assert_eq!(panel.pending_duration(), None);
    assert_eq!(log.calls(), vec![HwCall::ClearDisplay, HwCall::LightOn]);

    panel.handle(PanelEvent::DoorClosed);
    assert_eq!(log.calls().last(), Some(&HwCall::LightOff));
    assert!(!log.any_start());
}

#[test]
fn door_open_while_cooking_stops_then_lights() {
    let (mut panel, log) = mock_panel();
    start_cooking(&mut panel, 2, 3);
    panel.on_timer_cadence(1);
    log.clear();

    panel.handle(PanelEvent::DoorOpened);
    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(
        log.calls(),
        vec![HwCall::StopCooking, HwCall::LightOn, HwCall::ClearDisplay]
    );
    assert!(!panel.cook().is_cooking());
    assert!(panel.light().is_on());
}

#[test]
fn door_open_in_ready_only_lights() {
    let (mut panel, log) = mock_panel();
    panel.handle(PanelEvent::DoorOpened);
    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(log.calls(), vec![HwCall::LightOn]);
    assert!(panel.door_open());
}

#[test]
fn buttons_are_ignored_while_door_is_open() {
    let (mut panel, log) = mock_panel();
    panel.handle(PanelEvent::DoorOpened);
    log.clear();

    press(&mut panel, PanelEvent::PowerPressed, 2);
    press(&mut panel, PanelEvent::TimePressed, 2);
    panel.handle(PanelEvent::StartCancelPressed);
    assert_eq!(panel.phase(), Phase::Ready);
    assert!(log.calls().is_empty());

    panel.handle(PanelEvent::DoorClosed);
    panel.handle(PanelEvent::PowerPressed);
    assert_eq!(panel.phase(), Phase::SelectingPower);
}

#[test]
fn rejected_start_aborts_to_ready() {
    let (mut panel, log) = mock_panel();
    panel.cook_mut().reject_start = Some(Error::OutOfRange {
        field: "power",
        value: 150,
        min: 1,
        max: 100,
    });
    start_cooking(&mut panel, 3, 1);

    assert_eq!(panel.phase(), Phase::Ready);
    assert_eq!(panel.pending_power(), None);
    assert!(!panel.cook().is_cooking());
    assert!(!panel.light().is_on());
    assert_eq!(
        &log.calls()[4..],
        &[
            HwCall::ClearDisplay,
            HwCall::LightOn,
            HwCall::StartCooking {
                power: 150,
                duration_secs: 60
            },
            HwCall::LightOff,
            HwCall::ClearDisplay,
        ]
    );
}

#[test]
fn time_selection_caps_at_configured_maximum() {
    let config = OvenConfig {
        max_duration_secs: 150,
        ..OvenConfig::default()
    };
    let (mut panel, log) = mock_panel_with(config);
    panel.handle(PanelEvent::PowerPressed);
    press(&mut panel, PanelEvent::TimePressed, 4);
    assert_eq!(panel.pending_duration(), Some(150));
    assert_eq!(log.calls().last(), Some(&HwCall::ShowTime(2, 30)));
}

#[test]
fn custom_power_step_wraps_at_custom_maximum() {
    let config = OvenConfig {
        power_step_w: 25,
        max_power_w: 100,
        ..OvenConfig::default()
    };
    let (mut panel, _) = mock_panel_with(config);
    press(&mut panel, PanelEvent::PowerPressed, 4);
    assert_eq!(panel.pending_power(), Some(100));
    panel.handle(PanelEvent::PowerPressed);
    assert_eq!(panel.pending_power(), Some(25));
}
