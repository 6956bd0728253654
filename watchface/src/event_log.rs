//! Event logging.
//!
//! A fixed-size ring buffer of short, human-readable lines describing what
//! the face did: startup, battery readings, link flips, ticks. Hosts push a
//! line per noteworthy event and render the buffer wherever they like; the
//! simulator shows it as a terminal on its debug page.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("Face started");
//! log.push("Battery 80%");
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

/// Number of log lines kept before the oldest is dropped.
pub const LOG_CAPACITY: usize = 8;

/// Maximum characters per log line. Longer messages are cut, not refused.
pub const LOG_LINE_LENGTH: usize = 32;

/// Ring buffer of the most recent event lines, oldest first.
pub struct EventLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_CAPACITY>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { lines: Deque::new() }
    }

    /// Append a line, dropping the oldest when the buffer is full and
    /// truncating the message to [`LOG_LINE_LENGTH`] characters.
    pub fn push(&mut self, message: &str) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in message.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.lines.push_back(line).ok();
    }

    /// Iterate over the kept lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_push_and_len() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("Face started");
        assert_eq!(log.len(), 1);

        log.push("Battery 80%");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().unwrap(), "Face started");
    }

    #[test]
    fn test_ring_drops_the_oldest_line() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAPACITY {
            let mut message: String<16> = String::new();
            let _ = write!(message, "event {i}");
            log.push(&message);
        }
        assert_eq!(log.len(), LOG_CAPACITY);

        log.push("one more");
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.iter().next().unwrap(), "event 1");
    }

    #[test]
    fn test_long_lines_are_cut_not_refused() {
        let mut log = EventLog::new();
        log.push("a message far longer than the line limit allows, well past it");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.chars().count(), LOG_LINE_LENGTH);
    }
}
