//! Event system feeding the oven's single consumer loop.
//!
//! Events are produced by:
//! - Front-panel buttons (one event per physical press)
//! - The door sensor (one event per open/close transition)
//! - The countdown cadence thread (one event per elapsed tick)
//! - Software (shutdown request)
//!
//! Events are consumed by the service loop, which processes them one at
//! a time in arrival order, so no two handlers ever run interleaved.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Buttons     │────▶│              │     │              │
//! │ Door        │────▶│  EventQueue  │────▶│  Oven loop   │
//! │ Cadence     │────▶│  (bounded)   │     │  (consumer)  │
//! │ Software    │────▶│              │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use std::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use futures_lite::future::block_on;

use crate::app::ports::CookingListener;
use crate::fsm::PanelEvent;

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 16;

/// Everything the oven loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // ── Interlock ─────────────────────────────────────────
    /// Door switch reported open.
    DoorOpened,
    /// Door switch reported closed.
    DoorClosed,

    // ── User input ────────────────────────────────────────
    PowerPressed,
    TimePressed,
    StartCancelPressed,

    // ── Timing ────────────────────────────────────────────
    /// One countdown period elapsed for the timer run tagged `epoch`.
    TimerCadence { epoch: u32 },

    // ── Housekeeping ──────────────────────────────────────
    /// Stop the service loop.
    Shutdown,
}

impl Event {
    /// The front-panel view of this event, if the panel handles it.
    pub fn panel_event(self) -> Option<PanelEvent> {
        match self {
            Self::DoorOpened => Some(PanelEvent::DoorOpened),
            Self::DoorClosed => Some(PanelEvent::DoorClosed),
            Self::PowerPressed => Some(PanelEvent::PowerPressed),
            Self::TimePressed => Some(PanelEvent::TimePressed),
            Self::StartCancelPressed => Some(PanelEvent::StartCancelPressed),
            Self::TimerCadence { .. } | Self::Shutdown => None,
        }
    }
}

// ── Bounded MPSC queue ────────────────────────────────────────
//
// Producers (input thread, cadence thread) block while the queue is
// full rather than dropping presses; the single consumer is the oven
// loop.

/// Bounded multi-producer event queue.
pub struct EventQueue {
    channel: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_CAP>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Post an event, waiting for space if the queue is full.
    /// Must not be called from the consumer thread.
    pub fn post(&self, event: Event) {
        block_on(self.channel.send(event));
    }

    /// Post from async context, waiting for space.
    pub async fn send(&self, event: Event) {
        self.channel.send(event).await;
    }

    /// Block until the next event arrives.
    pub fn next(&self) -> Event {
        block_on(self.channel.receive())
    }

    /// Pop the next event if one is pending.
    pub fn try_next(&self) -> Option<Event> {
        self.channel.try_receive().ok()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

/// Cloneable producer handle onto a shared [`EventQueue`].
#[derive(Clone)]
pub struct EventSender {
    queue: Arc<EventQueue>,
}

impl EventSender {
    pub fn new(queue: Arc<EventQueue>) -> Self {
        Self { queue }
    }

    pub fn post(&self, event: Event) {
        self.queue.post(event);
    }

    pub async fn send(&self, event: Event) {
        self.queue.send(event).await;
    }
}

// ── Completion notification ──────────────────────────────────

/// One-shot "cooking is done" notification.
///
/// The cook controller receives a clone at construction and raises it
/// on natural expiration; the front panel holds the other clone and
/// takes it right after forwarding a cadence tick, inside the same
/// consumer context.
#[derive(Clone, Default)]
pub struct CompletionSignal {
    inner: Arc<Signal<CriticalSectionRawMutex, ()>>,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self) {
        self.inner.signal(());
    }

    /// Consume a pending notification. Returns `true` at most once per
    /// `notify`.
    pub fn take(&self) -> bool {
        self.inner.try_take().is_some()
    }
}

impl CookingListener for CompletionSignal {
    fn cooking_is_done(&mut self) {
        self.notify();
    }
}
