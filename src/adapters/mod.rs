//! Adapters: concrete implementations of the status sink port.
//!
//! | Adapter   | Implements | Connects to            |
//! |-----------|------------|------------------------|
//! | `console` | StatusSink | stdout                 |
//! | `memory`  | StatusSink | shared in-memory lines |

pub mod console;
pub mod memory;
