//! Watch face library - display state and redraw engine.
//!
//! This library contains everything that can be tested on the host machine:
//! time/date formatting, battery level encoding, the display state with its
//! four update entry points, the region-scoped renderer, and the lifecycle
//! controller that wires event sources to state updates.
//!
//! The simulator binary (`watchface-simulator`) adds the desktop window and
//! simulated event sources on top of this crate.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p watchface-core
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while consumers can build the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod display_state;
pub mod element;
pub mod event_log;
pub mod events;
pub mod format;
pub mod level;
pub mod lifecycle;
pub mod render;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use display_state::DisplayState;
pub use element::{Element, RedrawDiff};
pub use event_log::EventLog;
pub use events::{BatteryObserver, BatteryReading, BatterySource, ConnectivityObserver, ConnectivitySource, TickObserver};
pub use lifecycle::{LifecycleController, LifecycleError, Phase};
