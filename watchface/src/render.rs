//! Region-scoped rendering.
//!
//! A redraw is always scoped to exactly one element: the element's region is
//! cleared to the background, then the current content for that element is
//! painted back into it. Conditional elements (the bar at width zero, the
//! icons while their flag is off) leave the cleared region empty instead of
//! painting anything.
//!
//! The renderer is driven entirely by [`RedrawDiff`] values returned from
//! state updates. It never compares old and new state itself.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{DATE_ANCHOR, TIME_ANCHOR};
use crate::display_state::DisplayState;
use crate::element::{Element, RedrawDiff};
use crate::styles::{CENTERED, DATE_STYLE, TIME_STYLE};
use crate::widgets::{draw_battery_bar, draw_battery_shell, draw_bluetooth_icon, draw_charging_bolt};

fn clear_region<D>(display: &mut D, region: Rectangle)
where
    D: DrawTarget<Color = Rgb565>,
{
    region
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();
}

/// Paint the static chrome: the full-screen background and the battery shell.
/// Done once at startup; dynamic redraws never repaint these.
pub fn draw_chrome<D>(display: &mut D, state: &DisplayState)
where
    D: DrawTarget<Color = Rgb565>,
{
    render_element(display, state, Element::Background);
    render_element(display, state, Element::BatteryShell);
}

/// Redraw one element: clear its region, then paint its current content.
pub fn render_element<D>(display: &mut D, state: &DisplayState, element: Element)
where
    D: DrawTarget<Color = Rgb565>,
{
    let region = element.region();
    clear_region(display, region);
    match element {
        Element::Background => {}
        Element::BatteryShell => draw_battery_shell(display, region.top_left),
        Element::BatteryBar => draw_battery_bar(display, region.top_left, state.battery_width()),
        Element::ChargingIcon => {
            if state.is_charging() {
                draw_charging_bolt(display, region.top_left);
            }
        }
        Element::BluetoothIcon => {
            if state.is_connected() {
                draw_bluetooth_icon(display, region.top_left);
            }
        }
        Element::TimeText => {
            Text::with_text_style(state.time_text(), TIME_ANCHOR, TIME_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
        Element::DateText => {
            Text::with_text_style(state.date_text(), DATE_ANCHOR, DATE_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
    }
}

/// Redraw every element a diff names, in paint order.
pub fn render_diff<D>(display: &mut D, state: &DisplayState, diff: RedrawDiff)
where
    D: DrawTarget<Color = Rgb565>,
{
    for element in Element::DYNAMIC {
        if diff.contains(element) {
            render_element(display, state, element);
        }
    }
}

/// Redraw all dynamic elements. Used right after the chrome at startup.
pub fn render_all<D>(display: &mut D, state: &DisplayState)
where
    D: DrawTarget<Color = Rgb565>,
{
    for element in Element::DYNAMIC {
        render_element(display, state, element);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
