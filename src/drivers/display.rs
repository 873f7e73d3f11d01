//! Front-panel display driver.
//!
//! Stateless: every call renders one status line.  Several `Display`
//! handles may share a sink; the front panel and the cook controller
//! each hold one.

use core::fmt::Write;

use log::warn;

use crate::app::ports::{DisplayPort, StatusSink};

/// Longest rendered line ("Display shows: 4294967295 W").
const LINE_CAP: usize = 32;

#[derive(Clone)]
pub struct Display<S: StatusSink> {
    output: S,
}

impl<S: StatusSink> Display<S> {
    pub fn new(output: S) -> Self {
        Self { output }
    }

    fn render(&self, args: core::fmt::Arguments<'_>) {
        let mut line = heapless::String::<LINE_CAP>::new();
        if line.write_fmt(args).is_err() {
            warn!("Display: line truncated");
        }
        self.output.output_line(&line);
    }
}

impl<S: StatusSink> DisplayPort for Display<S> {
    fn show_power(&mut self, watts: u32) {
        self.render(format_args!("Display shows: {} W", watts));
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.render(format_args!("Display shows: {:02}:{:02}", minutes, seconds));
    }

    fn clear(&mut self) {
        self.output.output_line("Display cleared");
    }
}
