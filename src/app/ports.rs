//! Port traits: the boundary between the control core and its devices.
//!
//! ```text
//!   Device adapter ──▶ Port trait ──▶ CookController / UserInterface
//! ```
//!
//! Each device is a small capability set.  Concrete drivers (or test
//! doubles) are injected at construction through generics, so the core
//! never touches an output stream or a thread directly.

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Status sink (core → human-readable output)
// ───────────────────────────────────────────────────────────────

/// Accepts one line of human-readable text per event.
///
/// Takes `&self` so several drivers can share one sink by cloning a
/// cheap handle to it.
pub trait StatusSink {
    fn output_line(&self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Front-panel devices
// ───────────────────────────────────────────────────────────────

/// Numeric display on the front panel.
pub trait DisplayPort {
    /// Show a power level in watts.
    fn show_power(&mut self, watts: u32);

    /// Show a time as minutes:seconds.
    fn show_time(&mut self, minutes: u32, seconds: u32);

    fn clear(&mut self);
}

/// Cavity light.
pub trait LightPort {
    fn turn_on(&mut self);
    fn turn_off(&mut self);
    fn is_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Heating element (the power tube)
// ───────────────────────────────────────────────────────────────

/// Heating element driver.
pub trait HeatingElement {
    /// Energise at `power` percent.
    ///
    /// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) outside
    /// 1–100 and with [`Error::AlreadyActive`](crate::Error::AlreadyActive)
    /// if already on.  A failed call changes nothing.
    fn turn_on(&mut self, power: u32) -> Result<()>;

    /// De-energise.  Idempotent; always reports the off status.
    fn turn_off(&mut self);

    fn is_on(&self) -> bool;

    /// Current power percentage (0 when off).
    fn power(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Countdown timer and its cadence source
// ───────────────────────────────────────────────────────────────

/// Notification produced by one elapsed countdown period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerNotice {
    /// A second elapsed; carries the new remaining seconds (> 0).
    Tick(u32),
    /// The countdown reached zero.  Terminal for this run.
    Expired,
}

/// Countdown timer.
pub trait CountdownTimer {
    /// Begin counting down `duration_secs`.  Fails with
    /// [`Error::InvalidState`](crate::Error::InvalidState) if running.
    fn start(&mut self, duration_secs: u32) -> Result<()>;

    /// Stop immediately.  Cadence ticks that arrive afterwards are
    /// discarded.
    fn stop(&mut self);

    /// Handle one cadence period tagged with the run `epoch` it was
    /// armed for.  Returns `None` for stale or stopped-run ticks.
    fn on_cadence(&mut self, epoch: u32) -> Option<TimerNotice>;

    fn remaining_secs(&self) -> u32;

    fn is_running(&self) -> bool;
}

/// Periodic wake-up source driving a [`CountdownTimer`].
///
/// `arm` (re)starts the fixed cadence from zero for the run `epoch`;
/// every elapsed period must be delivered back to the timer's
/// `on_cadence` on the consumer thread, tagged with that epoch.
pub trait Cadence {
    fn arm(&mut self, epoch: u32);
    fn disarm(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Cook controller seams
// ───────────────────────────────────────────────────────────────

/// Receives the natural-completion notification of a cooking run.
pub trait CookingListener {
    fn cooking_is_done(&mut self);
}

/// What the front panel needs from the cook controller.
pub trait CookControl {
    /// Start a run.  Fails without side effects if already running or
    /// if the element rejects `power`.
    fn start_cooking(&mut self, power: u32, duration_secs: u32) -> Result<()>;

    /// Stop a run.  Fails with
    /// [`Error::InvalidState`](crate::Error::InvalidState) when idle.
    fn stop(&mut self) -> Result<()>;

    /// Forward one cadence period from the event loop.
    fn on_timer_cadence(&mut self, epoch: u32);

    fn is_cooking(&self) -> bool;
}
