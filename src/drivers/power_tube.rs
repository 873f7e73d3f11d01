//! Power tube (magnetron) driver, the oven's heating element.
//!
//! ## Safety contract
//!
//! The tube must never be energised twice without an intervening
//! `turn_off`: a second `turn_on` is a sequencing bug upstream and is
//! rejected, not absorbed.  Door interlocking is enforced by the front
//! panel; this driver is a dumb actuator that only guards its own
//! preconditions.

use log::{debug, warn};

use crate::app::ports::{HeatingElement, StatusSink};
use crate::error::{Error, Result};

/// Lowest accepted power percentage.
pub const MIN_POWER: u32 = 1;
/// Highest accepted power percentage.
pub const MAX_POWER: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeState {
    Off,
    On { power: u32 },
}

pub struct PowerTube<S: StatusSink> {
    state: TubeState,
    output: S,
}

impl<S: StatusSink> PowerTube<S> {
    pub fn new(output: S) -> Self {
        Self {
            state: TubeState::Off,
            output,
        }
    }

    pub fn state(&self) -> TubeState {
        self.state
    }
}

impl<S: StatusSink> HeatingElement for PowerTube<S> {
    fn turn_on(&mut self, power: u32) -> Result<()> {
        if !(MIN_POWER..=MAX_POWER).contains(&power) {
            warn!("PowerTube: rejected power {}", power);
            return Err(Error::OutOfRange {
                field: "power",
                value: power,
                min: MIN_POWER,
                max: MAX_POWER,
            });
        }
        if let TubeState::On { power: active } = self.state {
            warn!("PowerTube: turn_on({}) while on at {}", power, active);
            return Err(Error::AlreadyActive);
        }

        self.state = TubeState::On { power };
        self.output
            .output_line(&format!("PowerTube works with {} %", power));
        Ok(())
    }

    fn turn_off(&mut self) {
        if self.state == TubeState::Off {
            debug!("PowerTube: turn_off while already off");
        }
        self.state = TubeState::Off;
        self.output.output_line("PowerTube turned off");
    }

    fn is_on(&self) -> bool {
        matches!(self.state, TubeState::On { .. })
    }

    fn power(&self) -> u32 {
        match self.state {
            TubeState::On { power } => power,
            TubeState::Off => 0,
        }
    }
}
