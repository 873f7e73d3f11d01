//! `UserInterface`: the front panel bound to its devices.
//!
//! Wraps the phase table engine and applies the actions each dispatch
//! queues, in order, to the display, the light and the cook controller.
//! A rejected `StartCooking` is the only action that can fail in a way
//! the panel has to react to: it aborts back to `Ready` with the light
//! off and the display cleared, so the element is never left running
//! for a phase that is not `Cooking`.

use log::{error, warn};

use super::context::PanelContext;
use super::states::build_phase_table;
use super::{Fsm, PanelAction, PanelEvent, Phase};
use crate::app::ports::{CookControl, DisplayPort, LightPort};
use crate::config::OvenConfig;
use crate::events::CompletionSignal;

pub struct UserInterface<C, D, L>
where
    C: CookControl,
    D: DisplayPort,
    L: LightPort,
{
    fsm: Fsm,
    ctx: PanelContext,
    cook: C,
    display: D,
    light: L,
    /// Raised by the cook controller on natural expiration.
    done: CompletionSignal,
}

impl<C, D, L> UserInterface<C, D, L>
where
    C: CookControl,
    D: DisplayPort,
    L: LightPort,
{
    /// `done` must be the signal the cook controller was built with.
    ///
    /// Does **not** start the engine; call [`start`](Self::start) next.
    pub fn new(config: OvenConfig, cook: C, display: D, light: L, done: CompletionSignal) -> Self {
        Self {
            fsm: Fsm::new(build_phase_table(), Phase::Ready),
            ctx: PanelContext::new(config),
            cook,
            display,
            light,
            done,
        }
    }

    pub fn start(&mut self) {
        self.fsm.start(&mut self.ctx);
    }

    /// Process one panel event to completion.
    pub fn handle(&mut self, event: PanelEvent) {
        self.fsm.dispatch(event, &mut self.ctx);
        for action in self.ctx.take_actions() {
            self.apply(action);
        }
    }

    /// Forward one cadence period to the cook controller, then react to a
    /// completion it may have raised.
    pub fn on_timer_cadence(&mut self, epoch: u32) {
        self.cook.on_timer_cadence(epoch);
        if self.done.take() {
            self.handle(PanelEvent::CookingDone);
        }
    }

    fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::ShowPower(watts) => self.display.show_power(watts),
            PanelAction::ShowTime { minutes, seconds } => {
                self.display.show_time(minutes, seconds)
            }
            PanelAction::ClearDisplay => self.display.clear(),
            PanelAction::LightOn => self.light.turn_on(),
            PanelAction::LightOff => self.light.turn_off(),
            PanelAction::StartCooking {
                power,
                duration_secs,
            } => {
                if let Err(e) = self.cook.start_cooking(power, duration_secs) {
                    error!(
                        "PANEL | start cooking ({} W, {} s) rejected: {}",
                        power, duration_secs, e
                    );
                    self.light.turn_off();
                    self.display.clear();
                    self.fsm.force_transition(Phase::Ready, &mut self.ctx);
                }
            }
            PanelAction::StopCooking => {
                if let Err(e) = self.cook.stop() {
                    warn!("PANEL | stop ignored: {}", e);
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.fsm.current_phase()
    }

    pub fn pending_power(&self) -> Option<u32> {
        self.ctx.power_w
    }

    pub fn pending_duration(&self) -> Option<u32> {
        self.ctx.duration_secs
    }

    pub fn door_open(&self) -> bool {
        self.ctx.door_open
    }

    pub fn cook(&self) -> &C {
        &self.cook
    }

    pub fn cook_mut(&mut self) -> &mut C {
        &mut self.cook
    }

    pub fn light(&self) -> &L {
        &self.light
    }
}
