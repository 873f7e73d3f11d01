//! Oven service: assembles the control core and owns the event loop.
//!
//! [`Oven`] builds every driver from one configuration and one status
//! sink, then consumes [`Event`]s one at a time in arrival order.  All
//! producers (buttons, door, cadence thread) only ever post into the
//! queue, so no two handlers run interleaved.
//!
//! ```text
//!  Button ─┐
//!  Door   ─┼─▶ EventQueue ──▶ ┌──────────────────────────────────┐
//!  Cadence─┘                  │ Oven                             │
//!                             │  UserInterface ─▶ CookController │ ──▶ StatusSink
//!                             │   Display · Light   Timer · Tube │
//!                             └──────────────────────────────────┘
//! ```

use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Context;
use log::{info, warn};

use crate::app::ports::{CookControl, StatusSink};
use crate::config::OvenConfig;
use crate::control::cook::CookController;
use crate::drivers::button::{Button, ButtonKind};
use crate::drivers::display::Display;
use crate::drivers::door::Door;
use crate::drivers::light::Light;
use crate::drivers::power_tube::PowerTube;
use crate::drivers::ticker::TickerCadence;
use crate::drivers::timer::Timer;
use crate::events::{CompletionSignal, Event, EventQueue, EventSender};
use crate::fsm::{Phase, UserInterface};

/// Cook controller wired to the threaded cadence and real drivers.
pub type OvenCook<S> =
    CookController<Timer<TickerCadence>, PowerTube<S>, Display<S>, CompletionSignal>;

/// Front panel wired to [`OvenCook`].
pub type OvenPanel<S> = UserInterface<OvenCook<S>, Display<S>, Light<S>>;

// ───────────────────────────────────────────────────────────────
// Oven
// ───────────────────────────────────────────────────────────────

pub struct Oven<S: StatusSink + Clone> {
    queue: Arc<EventQueue>,
    panel: OvenPanel<S>,
    events_handled: u64,
}

impl<S: StatusSink + Clone> Oven<S> {
    /// Validate `config`, start the cadence thread and wire the panel.
    pub fn new(config: OvenConfig, sink: S) -> anyhow::Result<Self> {
        config.validate()?;

        let queue = Arc::new(EventQueue::new());
        let cadence = TickerCadence::spawn(config.tick_interval_ms, EventSender::new(queue.clone()))
            .context("starting cadence thread")?;

        let done = CompletionSignal::new();
        let display = Display::new(sink.clone());
        let cook = CookController::new(
            Timer::new(cadence),
            PowerTube::new(sink.clone()),
            display.clone(),
            done.clone(),
        );
        let mut panel = UserInterface::new(config, cook, display, Light::new(sink), done);
        panel.start();

        info!("Oven ready");
        Ok(Self {
            queue,
            panel,
            events_handled: 0,
        })
    }

    // ── Input handles ─────────────────────────────────────────

    pub fn sender(&self) -> EventSender {
        EventSender::new(self.queue.clone())
    }

    pub fn power_button(&self) -> Button {
        Button::new(ButtonKind::Power, self.sender())
    }

    pub fn time_button(&self) -> Button {
        Button::new(ButtonKind::Time, self.sender())
    }

    pub fn start_cancel_button(&self) -> Button {
        Button::new(ButtonKind::StartCancel, self.sender())
    }

    /// A door switch posting into this oven.  Create one per physical
    /// door; it starts closed.
    pub fn door(&self) -> Door {
        Door::new(self.sender())
    }

    /// Post [`Event::Shutdown`] through this handle to end [`run`](Self::run).
    pub fn shutdown_handle(&self) -> EventSender {
        self.sender()
    }

    // ── Event loop ────────────────────────────────────────────

    /// Process one event to completion.
    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        self.events_handled += 1;
        match event {
            Event::TimerCadence { epoch } => self.panel.on_timer_cadence(epoch),
            Event::Shutdown => {
                self.shutdown();
                return ControlFlow::Break(());
            }
            other => {
                if let Some(panel_event) = other.panel_event() {
                    self.panel.handle(panel_event);
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Consume events until [`Event::Shutdown`].
    pub fn run(&mut self) {
        info!("Oven event loop running");
        while self.handle(self.queue.next()).is_continue() {}
        info!("Oven event loop stopped after {} events", self.events_handled);
    }

    fn shutdown(&mut self) {
        if self.panel.cook().is_cooking() {
            warn!("Oven: shutdown while cooking, stopping run");
            if let Err(e) = self.panel.cook_mut().stop() {
                warn!("Oven: stop on shutdown failed: {}", e);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.panel.phase()
    }

    pub fn panel(&self) -> &OvenPanel<S> {
        &self.panel
    }

    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }
}

impl<S: StatusSink + Clone + Send + 'static> Oven<S> {
    /// Run the event loop on a dedicated thread.  The oven is handed
    /// back when the loop ends.
    pub fn spawn(mut self) -> std::io::Result<JoinHandle<Self>> {
        std::thread::Builder::new()
            .name("oven".into())
            .spawn(move || {
                self.run();
                self
            })
    }
}
