//! Cavity light driver.
//!
//! Tracks its own on/off state and only reports a change: turning on
//! a light that is already on emits nothing.

use crate::app::ports::{LightPort, StatusSink};

pub struct Light<S: StatusSink> {
    on: bool,
    output: S,
}

impl<S: StatusSink> Light<S> {
    pub fn new(output: S) -> Self {
        Self { on: false, output }
    }
}

impl<S: StatusSink> LightPort for Light<S> {
    fn turn_on(&mut self) {
        if !self.on {
            self.on = true;
            self.output.output_line("Light is turned on");
        }
    }

    fn turn_off(&mut self) {
        if self.on {
            self.on = false;
            self.output.output_line("Light is turned off");
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
