//! Battery shell, fill bar and charging bolt.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::colors::WHITE;
use crate::level::MAX_BAR_WIDTH;

/// Body width of the shell, without the nub.
const SHELL_BODY_WIDTH: u32 = 13;
/// Shell height.
const SHELL_HEIGHT: u32 = 8;
/// Fill bar height.
const BAR_HEIGHT: u32 = 4;

/// Draw the battery outline: a one pixel stroke body with a solid nub on the
/// right edge. Painted once as chrome; level changes never touch it.
pub fn draw_battery_shell<D>(display: &mut D, origin: Point)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(origin, Size::new(SHELL_BODY_WIDTH, SHELL_HEIGHT))
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();
    Rectangle::new(
        Point::new(origin.x + SHELL_BODY_WIDTH as i32, origin.y + 2),
        Size::new(2, 4),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(display)
    .ok();
}

/// Draw the level fill bar. A zero width draws nothing at all; widths above
/// the track are capped so the fill stays inside the shell.
pub fn draw_battery_bar<D>(display: &mut D, origin: Point, width: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    if width == 0 {
        return;
    }
    let width = width.min(MAX_BAR_WIDTH);
    Rectangle::new(origin, Size::new(u32::from(width), BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

/// Draw the charging bolt, a zigzag stroke inside a 7x8 box.
pub fn draw_charging_bolt<D>(display: &mut D, origin: Point)
where
    D: DrawTarget<Color = Rgb565>,
{
    let bolt_style = PrimitiveStyle::with_stroke(WHITE, 1);
    let (x, y) = (origin.x, origin.y);
    Line::new(Point::new(x + 5, y), Point::new(x + 2, y + 3))
        .into_styled(bolt_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x + 2, y + 3), Point::new(x + 4, y + 3))
        .into_styled(bolt_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x + 4, y + 3), Point::new(x + 1, y + 7))
        .into_styled(bolt_style)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
