//! Timing constants for the simulator.
//!
//! Defined here rather than in the core crate because `std::time::Duration`
//! is not available in `no_std` builds.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early; the face itself only redraws on events.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
