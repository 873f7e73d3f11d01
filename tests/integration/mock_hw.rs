//! Mock panel hardware for integration tests.
//!
//! Every mock records into one shared, ordered call log so tests can
//! assert on the exact sequence the front panel drives its devices in.

use std::cell::RefCell;
use std::rc::Rc;

use microwave::app::ports::{CookControl, DisplayPort, LightPort};
use microwave::config::OvenConfig;
use microwave::events::CompletionSignal;
use microwave::fsm::UserInterface;
use microwave::{Error, Result};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    ShowPower(u32),
    ShowTime(u32, u32),
    ClearDisplay,
    LightOn,
    LightOff,
    StartCooking { power: u32, duration_secs: u32 },
    StopCooking,
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<HwCall>>>);

impl CallLog {
    pub fn push(&self, call: HwCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<HwCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn any_start(&self) -> bool {
        self.0
            .borrow()
            .iter()
            .any(|c| matches!(c, HwCall::StartCooking { .. }))
    }
}

// ── Display / light ───────────────────────────────────────────

pub struct MockDisplay {
    log: CallLog,
}

impl DisplayPort for MockDisplay {
    fn show_power(&mut self, watts: u32) {
        self.log.push(HwCall::ShowPower(watts));
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.log.push(HwCall::ShowTime(minutes, seconds));
    }

    fn clear(&mut self) {
        self.log.push(HwCall::ClearDisplay);
    }
}

pub struct MockLight {
    log: CallLog,
    on: bool,
}

impl LightPort for MockLight {
    fn turn_on(&mut self) {
        self.on = true;
        self.log.push(HwCall::LightOn);
    }

    fn turn_off(&mut self) {
        self.on = false;
        self.log.push(HwCall::LightOff);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ── Cook controller ───────────────────────────────────────────

/// Counts cadence periods down and raises completion at zero; can be
/// told to reject the next start.
pub struct MockCook {
    log: CallLog,
    done: CompletionSignal,
    remaining: Option<u32>,
    pub reject_start: Option<Error>,
    pub stops_while_idle: u32,
}

impl CookControl for MockCook {
    fn start_cooking(&mut self, power: u32, duration_secs: u32) -> Result<()> {
        self.log.push(HwCall::StartCooking {
            power,
            duration_secs,
        });
        if let Some(e) = self.reject_start.take() {
            return Err(e);
        }
        if self.remaining.is_some() {
            return Err(Error::AlreadyActive);
        }
        self.remaining = Some(duration_secs);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.log.push(HwCall::StopCooking);
        if self.remaining.take().is_none() {
            self.stops_while_idle += 1;
            return Err(Error::InvalidState("cook controller already idle"));
        }
        Ok(())
    }

    fn on_timer_cadence(&mut self, _epoch: u32) {
        match self.remaining {
            Some(1) => {
                self.remaining = None;
                self.done.notify();
            }
            Some(n) => self.remaining = Some(n - 1),
            None => {}
        }
    }

    fn is_cooking(&self) -> bool {
        self.remaining.is_some()
    }
}

// ── Assembled panel ───────────────────────────────────────────

pub type MockPanel = UserInterface<MockCook, MockDisplay, MockLight>;

/// A started panel on mock devices plus the shared call log.
pub fn mock_panel() -> (MockPanel, CallLog) {
    mock_panel_with(OvenConfig::default())
}

pub fn mock_panel_with(config: OvenConfig) -> (MockPanel, CallLog) {
    let log = CallLog::default();
    let done = CompletionSignal::new();
    let cook = MockCook {
        log: log.clone(),
        done: done.clone(),
        remaining: None,
        reject_start: None,
        stops_while_idle: 0,
    };
    let mut panel = UserInterface::new(
        config,
        cook,
        MockDisplay { log: log.clone() },
        MockLight {
            log: log.clone(),
            on: false,
        },
        done,
    );
    panel.start();
    (panel, log)
}
