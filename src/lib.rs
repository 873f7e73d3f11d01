//! Microwave oven control core.
//!
//! A countdown timer, a power tube driver, a cook controller and the
//! front-panel state machine, wired together by the [`app::service::Oven`]
//! event loop.  Devices are reached only through the port traits in
//! [`app::ports`], so every component runs against test doubles.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod events;
pub mod fsm;

mod error;

pub use error::{Error, Result};
