//! Cooking-run control.

pub mod cook;
