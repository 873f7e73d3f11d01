//! Concrete phase handlers and table builder.
//!
//! ```text
//!  READY ──[power]──▶ SELECTING_POWER ──[time]──▶ SELECTING_TIME
//!    ▲                  │  ▲  [power]               │  ▲  [time]
//!    │                  │  └──────┘                 │  └─────┘
//!    ├────[start/cancel]┘                           │
//!    ├────────────────────────────[start/cancel]────┤
//!    │                                        [start/cancel]
//!    │                                              ▼
//!    └──────[start/cancel | cooking done]────── COOKING
//!
//!  Any phase ──[door opened]──▶ READY (light on)
//! ```

use super::context::PanelContext;
use super::{PanelAction, PanelEvent, Phase, PhaseDescriptor};
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static phase table.  Called once at startup.
pub fn build_phase_table() -> [PhaseDescriptor; Phase::COUNT] {
    [
        // Index 0: Ready
        PhaseDescriptor {
            id: Phase::Ready,
            name: "Ready",
            on_enter: Some(ready_enter),
            on_exit: None,
            on_event: ready_event,
        },
        // Index 1: SelectingPower
        PhaseDescriptor {
            id: Phase::SelectingPower,
            name: "SelectingPower",
            on_enter: None,
            on_exit: None,
            on_event: selecting_power_event,
        },
        // Index 2: SelectingTime
        PhaseDescriptor {
            id: Phase::SelectingTime,
            name: "SelectingTime",
            on_enter: None,
            on_exit: None,
            on_event: selecting_time_event,
        },
        // Index 3: Cooking
        PhaseDescriptor {
            id: Phase::Cooking,
            name: "Cooking",
            on_enter: Some(cooking_enter),
            on_exit: Some(cooking_exit),
            on_event: cooking_event,
        },
    ]
}

fn show_duration(ctx: &mut PanelContext, secs: u32) {
    ctx.act(PanelAction::ShowTime {
        minutes: secs / 60,
        seconds: secs % 60,
    });
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY
// ═══════════════════════════════════════════════════════════════════════════

fn ready_enter(ctx: &mut PanelContext) {
    ctx.reset_selection();
}

fn ready_event(ctx: &mut PanelContext, event: PanelEvent) -> Option<Phase> {
    match event {
        PanelEvent::PowerPressed => {
            let power = ctx.config.power_step_w;
            ctx.power_w = Some(power);
            ctx.act(PanelAction::ShowPower(power));
            Some(Phase::SelectingPower)
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SELECTING_POWER
// ═══════════════════════════════════════════════════════════════════════════

fn selecting_power_event(ctx: &mut PanelContext, event: PanelEvent) -> Option<Phase> {
    match event {
        PanelEvent::PowerPressed => {
            let step = ctx.config.power_step_w;
            let power = match ctx.power_w {
                Some(p) if p < ctx.config.max_power_w => p + step,
                _ => step,
            };
            ctx.power_w = Some(power);
            ctx.act(PanelAction::ShowPower(power));
            None
        }
        PanelEvent::TimePressed => {
            let secs = ctx.config.time_step_secs;
            ctx.duration_secs = Some(secs);
            show_duration(ctx, secs);
            Some(Phase::SelectingTime)
        }
        PanelEvent::StartCancelPressed => {
            ctx.act(PanelAction::ClearDisplay);
            Some(Phase::Ready)
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SELECTING_TIME
// ═══════════════════════════════════════════════════════════════════════════

fn selecting_time_event(ctx: &mut PanelContext, event: PanelEvent) -> Option<Phase> {
    match event {
        PanelEvent::TimePressed => {
            let secs = ctx
                .duration_secs
                .unwrap_or(0)
                .saturating_add(ctx.config.time_step_secs)
                .min(ctx.config.max_duration_secs);
            ctx.duration_secs = Some(secs);
            show_duration(ctx, secs);
            None
        }
        PanelEvent::StartCancelPressed => {
            let power = ctx.power_w.unwrap_or(ctx.config.power_step_w);
            let duration_secs = ctx.duration_secs.unwrap_or(ctx.config.time_step_secs);
            ctx.act(PanelAction::ClearDisplay);
            ctx.act(PanelAction::LightOn);
            ctx.act(PanelAction::StartCooking {
                power,
                duration_secs,
            });
            Some(Phase::Cooking)
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOKING
// ═══════════════════════════════════════════════════════════════════════════

fn cooking_enter(ctx: &mut PanelContext) {
    info!(
        "COOKING: {} W for {} s",
        ctx.power_w.unwrap_or(0),
        ctx.duration_secs.unwrap_or(0)
    );
}

fn cooking_exit(_ctx: &mut PanelContext) {
    debug!("COOKING: leaving");
}

fn cooking_event(ctx: &mut PanelContext, event: PanelEvent) -> Option<Phase> {
    match event {
        PanelEvent::StartCancelPressed => {
            ctx.act(PanelAction::StopCooking);
            ctx.act(PanelAction::LightOff);
            ctx.act(PanelAction::ClearDisplay);
            Some(Phase::Ready)
        }
        PanelEvent::CookingDone => {
            ctx.act(PanelAction::LightOff);
            ctx.act(PanelAction::ClearDisplay);
            Some(Phase::Ready)
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Door interlock (evaluated before the table)
// ═══════════════════════════════════════════════════════════════════════════

/// Opening the door aborts whatever the panel was doing.
pub fn door_opened(ctx: &mut PanelContext, current: Phase) -> Option<Phase> {
    ctx.door_open = true;
    match current {
        Phase::Cooking => {
            ctx.act(PanelAction::StopCooking);
            ctx.act(PanelAction::LightOn);
            ctx.act(PanelAction::ClearDisplay);
            Some(Phase::Ready)
        }
        Phase::SelectingPower | Phase::SelectingTime => {
            ctx.act(PanelAction::ClearDisplay);
            ctx.act(PanelAction::LightOn);
            Some(Phase::Ready)
        }
        Phase::Ready => {
            ctx.act(PanelAction::LightOn);
            None
        }
    }
}

/// Closing the door only switches the light off; the phase is kept.
pub fn door_closed(ctx: &mut PanelContext, _current: Phase) -> Option<Phase> {
    ctx.door_open = false;
    ctx.act(PanelAction::LightOff);
    None
}
