//! Color constants for the watch face.
//!
//! The face itself is monochrome (white on black, matching the original
//! 1-bit display it was designed for); the remaining colors are used by the
//! simulator's debug page.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Face Colors
// =============================================================================

/// Pure black (0, 0, 0). Background of the whole face.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text, icons, and the battery bar fill.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Debug Page Colors
// =============================================================================

/// Pure green (0, 63, 0). Debug page headings and log prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Debug page highlights.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Orange for log text. RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for divider lines. RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
