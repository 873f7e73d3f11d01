//! Unified error types for the oven control core.
//!
//! Every failure in the core is a local contract violation detected at
//! the point of misuse: nothing here is transient and nothing is retried.
//! All variants are `Copy` so they can be passed back through the cook
//! controller and front panel without allocation.

use core::fmt;

/// Every fallible operation in the control core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A numeric argument fell outside its accepted range.
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// The heating element (or the cook controller driving it) is
    /// already active; it must be stopped before it can be restarted.
    AlreadyActive,
    /// The operation is not valid in the component's current state.
    InvalidState(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} {value} must be between {min} and {max} (incl.)"),
            Self::AlreadyActive => write!(f, "already active"),
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
