//! Door switch.
//!
//! Owns the door state and posts one event per transition.  Opening an
//! already-open door (or closing a closed one) posts nothing.

use log::warn;

use crate::events::{Event, EventSender};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorState {
    pub is_open: bool,
}

pub struct Door {
    state: DoorState,
    sender: EventSender,
}

impl Door {
    /// A closed door.
    pub fn new(sender: EventSender) -> Self {
        Self {
            state: DoorState::default(),
            sender,
        }
    }

    pub fn open(&mut self) {
        if self.state.is_open {
            warn!("door: open while already open");
            return;
        }
        self.state.is_open = true;
        self.sender.post(Event::DoorOpened);
    }

    pub fn close(&mut self) {
        if !self.state.is_open {
            warn!("door: close while already closed");
            return;
        }
        self.state.is_open = false;
        self.sender.post(Event::DoorClosed);
    }

    pub fn state(&self) -> DoorState {
        self.state
    }
}
