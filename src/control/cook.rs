//! Cook controller: one cooking run at a time.
//!
//! Orchestrates the countdown timer and the power tube:
//!
//! ```text
//!            start_cooking                 Expired
//!   IDLE ─────────────────────▶ RUNNING ──────────────▶ IDLE  (+ cooking_is_done)
//!     ▲                            │
//!     └────────── stop ────────────┘                          (no notification)
//! ```
//!
//! Every Tick is rendered on the display as minutes:seconds.  Natural
//! expiration turns the tube off and notifies the listener handed in at
//! construction; a user stop never does.

use log::{debug, info, warn};

use crate::app::ports::{
    CookControl, CookingListener, CountdownTimer, DisplayPort, HeatingElement, TimerNotice,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookState {
    Idle,
    Running,
}

pub struct CookController<T, H, D, L>
where
    T: CountdownTimer,
    H: HeatingElement,
    D: DisplayPort,
    L: CookingListener,
{
    timer: T,
    element: H,
    display: D,
    listener: L,
    state: CookState,
}

impl<T, H, D, L> CookController<T, H, D, L>
where
    T: CountdownTimer,
    H: HeatingElement,
    D: DisplayPort,
    L: CookingListener,
{
    pub fn new(timer: T, element: H, display: D, listener: L) -> Self {
        Self {
            timer,
            element,
            display,
            listener,
            state: CookState::Idle,
        }
    }

    pub fn state(&self) -> CookState {
        self.state
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn element(&self) -> &H {
        &self.element
    }
}

impl<T, H, D, L> CookControl for CookController<T, H, D, L>
where
    T: CountdownTimer,
    H: HeatingElement,
    D: DisplayPort,
    L: CookingListener,
{
    fn start_cooking(&mut self, power: u32, duration_secs: u32) -> Result<()> {
        if self.state == CookState::Running {
            warn!("CookController: start_cooking while a run is active");
            return Err(Error::AlreadyActive);
        }
        if duration_secs == 0 {
            return Err(Error::OutOfRange {
                field: "duration",
                value: 0,
                min: 1,
                max: u32::MAX,
            });
        }

        self.element.turn_on(power)?;
        if let Err(e) = self.timer.start(duration_secs) {
            // Never leave the tube on for a run that did not start.
            self.element.turn_off();
            return Err(e);
        }

        self.state = CookState::Running;
        info!("COOK | started: {} % for {} s", power, duration_secs);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.state == CookState::Idle {
            return Err(Error::InvalidState("cook controller already idle"));
        }

        self.timer.stop();
        self.element.turn_off();
        self.state = CookState::Idle;
        info!("COOK | stopped with {} s remaining", self.timer.remaining_secs());
        Ok(())
    }

    fn on_timer_cadence(&mut self, epoch: u32) {
        match self.timer.on_cadence(epoch) {
            Some(TimerNotice::Tick(remaining)) => {
                self.display.show_time(remaining / 60, remaining % 60);
            }
            Some(TimerNotice::Expired) => {
                self.element.turn_off();
                self.state = CookState::Idle;
                info!("COOK | completed");
                self.listener.cooking_is_done();
            }
            None => debug!("CookController: cadence period discarded"),
        }
    }

    fn is_cooking(&self) -> bool {
        self.state == CookState::Running
    }
}
