//! Display and layout configuration constants.
//!
//! The geometry is the original 144x168 face laid out 1:1: status icons along
//! the top edge, the time readout across the middle, the date line below it.
//! Positions are pre-computed as `const` so the rendering code never does
//! per-frame layout arithmetic.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate. Used for centering the text elements.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Element Regions
// =============================================================================

/// Battery shell outline in the top-right corner (13x8 body + 2x4 nub).
pub const BATTERY_SHELL_RECT: Rectangle = Rectangle::new(Point::new(126, 4), Size::new(15, 8));

/// Battery fill track, nested 2 px inside the shell interior.
/// The track is 10 px wide: one pixel per encoded level unit.
pub const BATTERY_BAR_RECT: Rectangle = Rectangle::new(Point::new(128, 6), Size::new(10, 4));

/// Charging bolt, left of the battery shell.
pub const CHARGING_ICON_RECT: Rectangle = Rectangle::new(Point::new(117, 4), Size::new(7, 8));

/// Bluetooth rune in the top-left corner.
pub const BLUETOOTH_ICON_RECT: Rectangle = Rectangle::new(Point::new(3, 3), Size::new(7, 10));

/// Band holding the time readout. Ends above the date band so the two
/// text regions never overlap.
pub const TIME_RECT: Rectangle = Rectangle::new(Point::new(0, 52), Size::new(SCREEN_WIDTH, 44));

/// Band holding the date line.
pub const DATE_RECT: Rectangle = Rectangle::new(Point::new(0, 100), Size::new(SCREEN_WIDTH, 26));

// =============================================================================
// Text Anchors
// =============================================================================

/// Anchor for the time readout: the center of `TIME_RECT`. Text is drawn
/// middle-baseline centered, so the glyph box stays inside the band.
pub const TIME_ANCHOR: Point = Point::new(CENTER_X, TIME_RECT.top_left.y + (TIME_RECT.size.height / 2) as i32);

/// Anchor for the date line: the center of `DATE_RECT`.
pub const DATE_ANCHOR: Point = Point::new(CENTER_X, DATE_RECT.top_left.y + (DATE_RECT.size.height / 2) as i32);
