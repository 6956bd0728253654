//! Session statistics for the debug page.

use core::fmt::Write;
use std::time::Instant;

use heapless::String;

/// Counters for everything the simulator pushed through the face, plus the
/// session uptime.
pub struct SimStats {
    start_time: Instant,
    pub frames: u32,
    pub battery_events: u32,
    pub link_events: u32,
    pub ticks: u32,
}

impl SimStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            frames: 0,
            battery_events: 0,
            link_events: 0,
            ticks: 0,
        }
    }

    /// Session uptime as an `HH:MM:SS` string.
    pub fn uptime_string(&self) -> String<12> {
        let secs = self.start_time.elapsed().as_secs();
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let secs = secs % 60;

        let mut s = String::new();
        let _ = write!(s, "{hours:02}:{mins:02}:{secs:02}");
        s
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
