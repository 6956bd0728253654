//! Owned state behind the face.
//!
//! [`DisplayState`] holds everything the renderer reads: the encoded battery
//! width, the charging and link flags, and the pre-formatted time and date
//! strings. Strings are formatted once per update and cached here, so the
//! renderer never formats anything per frame.
//!
//! Each update entry point mutates its fields and returns the [`RedrawDiff`]
//! naming the elements that depend on them. Updates are idempotent: applying
//! the same input twice leaves identical state and returns an identical diff.

use chrono::NaiveDateTime;
use heapless::String;

use crate::element::RedrawDiff;
use crate::format::{DATE_TEXT_LEN, TIME_TEXT_LEN, format_date, format_time};
use crate::level::encode_level;

// =============================================================================
// Display State
// =============================================================================

/// State of every dynamic element on the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    battery_width: u8,
    is_charging: bool,
    is_connected: bool,
    time_text: String<TIME_TEXT_LEN>,
    date_text: String<DATE_TEXT_LEN>,
}

impl DisplayState {
    /// Create the state for a face that has not received any readings yet:
    /// empty bar, not charging, no link, blank text.
    pub const fn new() -> Self {
        Self {
            battery_width: 0,
            is_charging: false,
            is_connected: false,
            time_text: String::new(),
            date_text: String::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Encoded battery bar width in pixels, in `0..=10`.
    pub const fn battery_width(&self) -> u8 {
        self.battery_width
    }

    /// Whether the charger is plugged in.
    pub const fn is_charging(&self) -> bool {
        self.is_charging
    }

    /// Whether the phone link is up.
    pub const fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Cached time readout, e.g. `"09:41"`.
    pub fn time_text(&self) -> &str {
        self.time_text.as_str()
    }

    /// Cached date line, e.g. `"June 1"`.
    pub fn date_text(&self) -> &str {
        self.date_text.as_str()
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Apply a battery reading. The percentage is encoded down to a bar width
    /// and the charging flag stored as-is. The bolt is part of the diff even
    /// when only the level moved, so a plug/unplug never leaves a stale icon.
    pub fn update_battery(&mut self, percent: u8, charging: bool) -> RedrawDiff {
        self.battery_width = encode_level(percent);
        self.is_charging = charging;
        RedrawDiff::BATTERY
    }

    /// Apply a link state change.
    pub fn update_connection(&mut self, connected: bool) -> RedrawDiff {
        self.is_connected = connected;
        RedrawDiff::CONNECTION
    }

    /// Reformat the time readout from a wall-clock instant.
    pub fn update_time(&mut self, now: NaiveDateTime, use_24h: bool) -> RedrawDiff {
        self.time_text = format_time(now, use_24h);
        RedrawDiff::TIME
    }

    /// Reformat the date line from a wall-clock instant.
    pub fn update_date(&mut self, now: NaiveDateTime) -> RedrawDiff {
        self.date_text = format_date(now);
        RedrawDiff::DATE
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_new_state_is_blank() {
        let state = DisplayState::new();
        assert_eq!(state.battery_width(), 0);
        assert!(!state.is_charging());
        assert!(!state.is_connected());
        assert_eq!(state.time_text(), "");
        assert_eq!(state.date_text(), "");
        assert_eq!(state, DisplayState::default());
    }

    #[test]
    fn test_battery_update_encodes_and_stores() {
        let mut state = DisplayState::new();
        let diff = state.update_battery(55, true);
        assert_eq!(state.battery_width(), 5);
        assert!(state.is_charging());
        assert_eq!(diff, RedrawDiff::BATTERY);
    }

    #[test]
    fn test_battery_update_touches_nothing_else() {
        let mut state = DisplayState::new();
        state.update_connection(true);
        state.update_time(at(9, 41), false);
        state.update_date(at(9, 41));

        state.update_battery(80, false);
        assert!(state.is_connected());
        assert_eq!(state.time_text(), "09:41");
        assert_eq!(state.date_text(), "June 1");
    }

    #[test]
    fn test_connection_update() {
        let mut state = DisplayState::new();
        let diff = state.update_connection(true);
        assert!(state.is_connected());
        assert_eq!(diff, RedrawDiff::CONNECTION);

        let diff = state.update_connection(false);
        assert!(!state.is_connected());
        assert_eq!(diff, RedrawDiff::CONNECTION);
    }

    #[test]
    fn test_time_update_caches_formatted_text() {
        let mut state = DisplayState::new();
        let diff = state.update_time(at(21, 5), false);
        assert_eq!(state.time_text(), "09:05");
        assert_eq!(diff, RedrawDiff::TIME);

        let diff = state.update_time(at(21, 5), true);
        assert_eq!(state.time_text(), "21:05");
        assert_eq!(diff, RedrawDiff::TIME);
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let mut state = DisplayState::new();
        let first = state.update_date(at(9, 0));
        let snapshot = state.clone();
        let second = state.update_date(at(15, 30));

        // Same calendar day: identical text, identical diff.
        assert_eq!(state, snapshot);
        assert_eq!(first, second);
        assert_eq!(state.date_text(), "June 1");
    }
}
