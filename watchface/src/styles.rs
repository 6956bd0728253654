//! Pre-computed text styles.
//!
//! Styles are `const` so they live in the binary's read-only data and cost
//! nothing to reference from the drawing code.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::WHITE;

/// Centered text anchored at the middle of the glyph box. Both face text
/// elements are drawn from the center point of their band.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Large white numerals for the time readout (`ProFont` 24pt).
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Medium white text for the date line (10x20 pixels).
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Small font (6x10 pixels) for the simulator debug page.
/// Usage: `MonoTextStyle::new(LABEL_FONT, color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;
