//! Test-only draw target that records where drawing happened.
//!
//! `MockDisplay` is 64x64 and rejects overdraw, which is ideal for single
//! icons but too small for whole-face renders. [`RecordingDisplay`] is
//! screen-sized, tolerates overdraw, and answers the one question the
//! renderer tests ask: which pixels did a call touch?

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen-sized draw target that logs every written pixel coordinate.
pub struct RecordingDisplay {
    touched: std::vec::Vec<Point>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            touched: std::vec::Vec::new(),
        }
    }

    /// Forget everything drawn so far. Lets one test paint chrome, reset,
    /// then measure a single redraw in isolation.
    pub fn reset(&mut self) {
        self.touched.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.touched.is_empty()
    }

    /// Bounding box of all touched pixels, zero sized when nothing was drawn.
    pub fn touched_region(&self) -> Rectangle {
        let mut points = self.touched.iter();
        let Some(first) = points.next() else {
            return Rectangle::new(Point::zero(), Size::zero());
        };
        let (mut min, mut max) = (*first, *first);
        for p in points {
            min = min.component_min(*p);
            max = max.component_max(*p);
        }
        Rectangle::with_corners(min, max)
    }

    /// Whether any touched pixel lies inside `region`. Checked per pixel, not
    /// via the bounding box, so sparse strokes cannot fake an overlap.
    pub fn touches(&self, region: &Rectangle) -> bool {
        self.touched.iter().any(|p| region.contains(*p))
    }

    /// Whether every touched pixel lies inside `region`.
    pub fn contained_in(&self, region: &Rectangle) -> bool {
        self.touched.iter().all(|p| region.contains(*p))
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, _) in pixels {
            self.touched.push(point);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_recording_tracks_the_drawn_area() {
        let mut display = RecordingDisplay::new();
        assert!(display.is_blank());
        assert!(display.touched_region().is_zero_sized());

        Rectangle::new(Point::new(10, 20), Size::new(4, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(&mut display)
            .unwrap();

        assert_eq!(
            display.touched_region(),
            Rectangle::new(Point::new(10, 20), Size::new(4, 3))
        );
        assert!(display.touches(&Rectangle::new(Point::new(12, 21), Size::new(1, 1))));
        assert!(!display.touches(&Rectangle::new(Point::new(50, 50), Size::new(5, 5))));
        assert!(display.contained_in(&Rectangle::new(Point::new(10, 20), Size::new(4, 3))));

        display.reset();
        assert!(display.is_blank());
    }
}
