//! Application layer: device ports and the oven service.
//!
//! The control core (cook controller and front panel) only ever talks to
//! devices through the **port traits** in [`ports`]; [`service`] wires
//! concrete drivers to those ports and owns the event loop.

pub mod ports;
pub mod service;
