//! Function-pointer finite state machine for the front panel.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  PhaseTable                                                       │
//! │  ┌────────────────┬───────────┬──────────┬──────────────────────┐ │
//! │  │ Phase          │ on_enter  │ on_exit  │ on_event             │ │
//! │  ├────────────────┼───────────┼──────────┼──────────────────────┤ │
//! │  │ Ready          │ fn(ctx)   │ -        │ fn(ctx,ev)->Option<> │ │
//! │  │ SelectingPower │ -         │ -        │ fn(ctx,ev)->Option<> │ │
//! │  │ SelectingTime  │ -         │ -        │ fn(ctx,ev)->Option<> │ │
//! │  │ Cooking        │ fn(ctx)   │ fn(ctx)  │ fn(ctx,ev)->Option<> │ │
//! │  └────────────────┴───────────┴──────────┴──────────────────────┘ │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each event is offered to the door interlock first.  Door transitions
//! never reach the phase table; button presses while the door is open
//! are dropped.  Everything else goes to `on_event` of the **current**
//! phase, which may queue [`PanelAction`]s on the context and return the
//! next phase.  The engine then runs `on_exit` / `on_enter` and moves the
//! current pointer.  The caller applies the queued actions in order.

pub mod context;
pub mod panel;
pub mod states;

use context::PanelContext;
pub use panel::UserInterface;
use log::{debug, info};

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// Front-panel phase.  Must stay in sync with [`states::build_phase_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Ready = 0,
    SelectingPower = 1,
    SelectingTime = 2,
    Cooking = 3,
}

impl Phase {
    /// Total number of phases, used to size the table array.
    pub const COUNT: usize = 4;

    /// Convert an index back to `Phase`.  Out-of-range indices assert in
    /// debug builds and fall back to `Ready`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Ready,
            1 => Self::SelectingPower,
            2 => Self::SelectingTime,
            3 => Self::Cooking,
            _ => {
                debug_assert!(false, "invalid phase index: {idx}");
                Self::Ready
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Events and actions
// ---------------------------------------------------------------------------

/// Inputs the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    PowerPressed,
    TimePressed,
    StartCancelPressed,
    DoorOpened,
    DoorClosed,
    /// The cook controller reported natural expiration.
    CookingDone,
}

impl PanelEvent {
    pub fn is_button(self) -> bool {
        matches!(
            self,
            Self::PowerPressed | Self::TimePressed | Self::StartCancelPressed
        )
    }
}

/// Side effects requested by phase handlers, applied in queue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    ShowPower(u32),
    ShowTime { minutes: u32, seconds: u32 },
    ClearDisplay,
    LightOn,
    LightOff,
    StartCooking { power: u32, duration_secs: u32 },
    StopCooking,
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type PhaseActionFn = fn(&mut PanelContext);

/// Signature for the per-event handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type PhaseEventFn = fn(&mut PanelContext, PanelEvent) -> Option<Phase>;

/// Static descriptor for one phase.
pub struct PhaseDescriptor {
    pub id: Phase,
    pub name: &'static str,
    pub on_enter: Option<PhaseActionFn>,
    pub on_exit: Option<PhaseActionFn>,
    pub on_event: PhaseEventFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `Phase as usize`.
    table: [PhaseDescriptor; Phase::COUNT],
    current: usize,
}

impl Fsm {
    pub fn new(table: [PhaseDescriptor; Phase::COUNT], initial: Phase) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter`.  Call once after construction.
    pub fn start(&mut self, ctx: &mut PanelContext) {
        info!("Panel starting in phase: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Offer one event to the panel.  Returns the new phase if it moved.
    pub fn dispatch(&mut self, event: PanelEvent, ctx: &mut PanelContext) -> Option<Phase> {
        let current = self.current_phase();

        let next = match event {
            PanelEvent::DoorOpened => states::door_opened(ctx, current),
            PanelEvent::DoorClosed => states::door_closed(ctx, current),
            ev if ev.is_button() && ctx.door_open => {
                debug!("Panel: {:?} ignored, door open", ev);
                None
            }
            ev => (self.table[self.current].on_event)(ctx, ev),
        };

        match next {
            Some(next_id) if next_id as usize != self.current => {
                self.transition(next_id, ctx);
                Some(next_id)
            }
            _ => None,
        }
    }

    /// Jump straight to `next` (used when an action fails after the
    /// handler already chose a phase).
    pub fn force_transition(&mut self, next: Phase, ctx: &mut PanelContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    pub fn current_phase(&self) -> Phase {
        Phase::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: Phase, ctx: &mut PanelContext) {
        let next_idx = next_id as usize;

        info!(
            "Panel transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
