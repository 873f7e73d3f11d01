//! Front-panel push buttons.
//!
//! Each button exposes a single `press` with no parameters and posts
//! exactly one event per press.  Debouncing, if any, belongs to the
//! hardware below this driver; the control core never repeats or
//! filters presses.

use log::debug;

use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Power,
    Time,
    StartCancel,
}

impl ButtonKind {
    fn event(self) -> Event {
        match self {
            Self::Power => Event::PowerPressed,
            Self::Time => Event::TimePressed,
            Self::StartCancel => Event::StartCancelPressed,
        }
    }
}

#[derive(Clone)]
pub struct Button {
    kind: ButtonKind,
    sender: EventSender,
}

impl Button {
    pub fn new(kind: ButtonKind, sender: EventSender) -> Self {
        Self { kind, sender }
    }

    pub fn press(&self) {
        debug!("button: {:?} pressed", self.kind);
        self.sender.post(self.kind.event());
    }
}
