//! Device drivers: actuators, the countdown timer and its cadence, and
//! front-panel inputs.

pub mod button;
pub mod display;
pub mod door;
pub mod light;
pub mod power_tube;
pub mod ticker;
pub mod timer;
