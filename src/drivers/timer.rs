//! Countdown timer.
//!
//! Owns the remaining-seconds counter and the running flag.  Periods are
//! produced by an injected [`Cadence`] and delivered back through
//! [`CountdownTimer::on_cadence`] on the consumer thread, tagged with the
//! run epoch they were armed for.
//!
//! ## Stop ordering
//!
//! Every `start` opens a new epoch.  A period tagged with an old epoch,
//! or arriving while stopped, is discarded.  Because `stop`, `start` and
//! `on_cadence` all run on the consumer thread, once `stop` returns no
//! Tick or Expired can be produced for that run, even if the cadence had
//! already queued a period.

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};

use crate::app::ports::{Cadence, CountdownTimer, TimerNotice};
use crate::error::{Error, Result};

pub struct Timer<C: Cadence> {
    cadence: C,
    remaining: u32,
    running: bool,
    epoch: u32,
}

impl<C: Cadence> Timer<C> {
    pub fn new(cadence: C) -> Self {
        Self {
            cadence,
            remaining: 0,
            running: false,
            epoch: 0,
        }
    }

    /// Epoch of the current (or most recent) run.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl<C: Cadence> CountdownTimer for Timer<C> {
    fn start(&mut self, duration_secs: u32) -> Result<()> {
        if self.running {
            return Err(Error::InvalidState("timer already running"));
        }
        if duration_secs == 0 {
            return Err(Error::OutOfRange {
                field: "duration",
                value: 0,
                min: 1,
                max: u32::MAX,
            });
        }

        self.epoch = self.epoch.wrapping_add(1);
        self.remaining = duration_secs;
        self.running = true;
        self.cadence.arm(self.epoch);
        debug!("Timer: run {} started, {} s", self.epoch, duration_secs);
        Ok(())
    }

    fn stop(&mut self) {
        if self.running {
            debug!("Timer: run {} stopped at {} s", self.epoch, self.remaining);
        }
        self.running = false;
        self.cadence.disarm();
    }

    fn on_cadence(&mut self, epoch: u32) -> Option<TimerNotice> {
        if !self.running || epoch != self.epoch {
            trace!(
                "Timer: discarding stale period (epoch {}, current {}, running {})",
                epoch, self.epoch, self.running
            );
            return None;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            self.cadence.disarm();
            debug!("Timer: run {} expired", self.epoch);
            Some(TimerNotice::Expired)
        } else {
            Some(TimerNotice::Tick(self.remaining))
        }
    }

    fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

// ── Caller-driven cadence ─────────────────────────────────────

/// Cadence with no clock of its own: the caller observes the armed
/// epoch and feeds periods in by hand.  Used for simulation and tests.
/// Clones share state.
#[derive(Clone, Default)]
pub struct ManualCadence {
    armed: Arc<Mutex<Option<u32>>>,
}

impl ManualCadence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch currently armed, if any.
    pub fn armed_epoch(&self) -> Option<u32> {
        *self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_armed(&self) -> bool {
        self.armed_epoch().is_some()
    }
}

impl Cadence for ManualCadence {
    fn arm(&mut self, epoch: u32) {
        *self.armed.lock().unwrap_or_else(PoisonError::into_inner) = Some(epoch);
    }

    fn disarm(&mut self) {
        *self.armed.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
