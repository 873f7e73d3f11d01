//! Shared mutable context threaded through every panel handler.
//!
//! `PanelContext` is the blackboard phase handlers read from and write
//! to: the pending user selection, the door interlock flag, and the
//! queue of side effects the panel applies after each dispatch.

use heapless::Vec;
use log::error;

use super::PanelAction;
use crate::config::OvenConfig;

/// Most actions a single dispatch ever queues.
pub const MAX_ACTIONS: usize = 4;

pub struct PanelContext {
    // -- Selection --
    /// Power chosen so far (watts).  `None` until the first power press.
    pub power_w: Option<u32>,
    /// Duration chosen so far (seconds).  `None` until the first time press.
    pub duration_secs: Option<u32>,

    // -- Interlock --
    /// Last reported door position.
    pub door_open: bool,

    // -- Outputs --
    /// Side effects to apply, in order, after the dispatch returns.
    pub actions: Vec<PanelAction, MAX_ACTIONS>,

    // -- Configuration --
    pub config: OvenConfig,
}

impl PanelContext {
    pub fn new(config: OvenConfig) -> Self {
        Self {
            power_w: None,
            duration_secs: None,
            door_open: false,
            actions: Vec::new(),
            config,
        }
    }

    /// Queue one side effect.
    pub fn act(&mut self, action: PanelAction) {
        if self.actions.push(action).is_err() {
            error!("Panel: action queue full, dropped {:?}", action);
        }
    }

    /// Drain the queued side effects.
    pub fn take_actions(&mut self) -> Vec<PanelAction, MAX_ACTIONS> {
        core::mem::take(&mut self.actions)
    }

    /// Forget the pending power and time selection.
    pub fn reset_selection(&mut self) {
        self.power_w = None;
        self.duration_secs = None;
    }
}
