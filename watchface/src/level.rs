//! Battery level encoding.
//!
//! Converts a charge percentage into the pixel width of the battery bar fill.
//! The track is [`MAX_BAR_WIDTH`] pixels wide and one bar pixel represents 10
//! percent, so the encoding is a plain floor division: 1-9 percent collapse
//! to width 0. That resolution loss is intentional and must not be "fixed"
//! by rounding to nearest.

/// Widest possible bar fill, in pixels. Matches the track width in
/// [`crate::config::BATTERY_BAR_RECT`].
pub const MAX_BAR_WIDTH: u8 = 10;

/// Encode a charge percentage as a bar fill width in `[0, 10]`.
///
/// Percentages above 100 are clamped; the sources never promise a valid
/// range.
pub const fn encode_level(percent: u8) -> u8 {
    let clamped = if percent > 100 { 100 } else { percent };
    clamped / 10
}

// =============================================================================
// Unit Tests
// =============================================================================
