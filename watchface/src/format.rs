//! Time and date formatting.
//!
//! Pure functions from a wall-clock instant to the bounded strings the face
//! displays. Formatting goes through `core::fmt::Write` into heapless
//! strings; nothing here allocates.
//!
//! # Format Quirks
//!
//! Two behaviors are carried over from the face this engine replaces and are
//! pinned by tests:
//! - 12-hour mode emits `"hh:mm"` with no AM/PM marker.
//! - The date is truncated to 11 characters, so `"September 28"` renders as
//!   `"September 2"`. Truncation is silent.

use core::fmt::Write;

use chrono::{Datelike, Month, NaiveDateTime, Timelike};
use heapless::String;

/// Capacity of the time string: `"hh:mm"` plus headroom.
pub const TIME_TEXT_LEN: usize = 6;

/// Capacity of the date string: `"Month D"` truncates past 11 characters.
pub const DATE_TEXT_LEN: usize = 11;

/// Format the time of day as `"HH:MM"` (24h) or `"hh:mm"` (12h).
///
/// In 12-hour mode the hour runs 01-12 and midnight formats as `"12:mm"`.
pub fn format_time(now: NaiveDateTime, use_24h: bool) -> String<TIME_TEXT_LEN> {
    let hour = if use_24h { now.hour() } else { now.hour12().1 };
    let minute = now.minute();

    let mut text = String::new();
    let _ = write!(text, "{hour:02}:{minute:02}");
    text
}

/// Format the date as `"Month D"` (full month name, day without leading zero),
/// truncated to [`DATE_TEXT_LEN`] characters.
pub fn format_date(now: NaiveDateTime) -> String<DATE_TEXT_LEN> {
    let mut full: String<16> = String::new();
    let _ = write!(full, "{} {}", month_name(now.month()), now.day());

    let mut text = String::new();
    for c in full.chars().take(DATE_TEXT_LEN) {
        let _ = text.push(c);
    }
    text
}

/// Full English month name for a 1-based month number.
fn month_name(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(m) => m.name(),
        Err(_) => "",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
