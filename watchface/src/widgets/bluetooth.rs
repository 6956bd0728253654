//! Bluetooth link rune.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::colors::WHITE;

/// Draw the bluetooth rune inside a 7x10 box: a vertical spine with two
/// crossing strokes through the mirrored arrow heads.
pub fn draw_bluetooth_icon<D>(display: &mut D, origin: Point)
where
    D: DrawTarget<Color = Rgb565>,
{
    let rune_style = PrimitiveStyle::with_stroke(WHITE, 1);
    let (x, y) = (origin.x, origin.y);
    let segments = [
        (Point::new(x + 3, y), Point::new(x + 3, y + 9)),
        (Point::new(x + 3, y), Point::new(x + 6, y + 2)),
        (Point::new(x + 6, y + 2), Point::new(x, y + 7)),
        (Point::new(x + 3, y + 9), Point::new(x + 6, y + 7)),
        (Point::new(x + 6, y + 7), Point::new(x, y + 2)),
    ];
    for (start, end) in segments {
        Line::new(start, end)
            .into_styled(rune_style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
