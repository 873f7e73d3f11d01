//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters or in-memory status sinks.  Everything runs on
//! the host with no real oven attached.

mod mock_hw;
mod oven_service_tests;
mod panel_tests;
