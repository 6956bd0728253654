//! Debug page rendering.
//!
//! A terminal-style page on the simulator's second framebuffer: the face
//! state on the left, event counters on the right, and the tail of the event
//! log at the bottom. Drawn from scratch every frame; only the face itself
//! uses diff-scoped redraws.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use watchface_core::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use watchface_core::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_core::styles::LABEL_FONT;
use watchface_core::{DisplayState, EventLog};

use crate::stats::SimStats;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 30;
const STATS_Y: i32 = 42;
const STAT_LINE_HEIGHT: i32 = 13;
const DATE_ROW_Y: i32 = 94;
const LOG_DIVIDER_Y: i32 = 106;
const LOG_Y: i32 = 116;
const LOG_LINE_HEIGHT: i32 = 12;
/// Log lines that fit between the divider and the bottom edge.
const VISIBLE_LOG_LINES: usize = 4;
const COL1_X: i32 = 4;
const COL2_X: i32 = 76;

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &DisplayState,
    stats: &SimStats,
    log: &EventLog,
) {
    display.clear(BLACK).ok();
    draw_header(display, stats);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_state_column(display, face);
    draw_events_column(display, stats);
    draw_date_row(display, face);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    stats: &SimStats,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("FACE DEBUG", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = stats.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(COL2_X, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    Text::new("STATE", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("EVENTS", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

fn draw_state_column(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &DisplayState,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    let x = COL1_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Bar:  {}/10", face.battery_width());
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let charger = if face.is_charging() { "Chrg: on" } else { "Chrg: off" };
    Text::new(charger, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let link = if face.is_connected() { "Link: up" } else { "Link: down" };
    Text::new(link, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Time: {}", face.time_text());
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

fn draw_events_column(
    display: &mut SimulatorDisplay<Rgb565>,
    stats: &SimStats,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    let x = COL2_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Batt: {}", stats.battery_events);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Link: {}", stats.link_events);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Tick: {}", stats.ticks);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frm:  {}", stats.frames);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

fn draw_date_row(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &DisplayState,
) {
    // The date can run to 17 characters with its label, so it gets a row of
    // its own instead of a column slot.
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let mut s: String<20> = String::new();
    let _ = write!(s, "Date: {}", face.date_text());
    Text::new(&s, Point::new(COL1_X, DATE_ROW_Y), highlight_style)
        .draw(display)
        .ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &EventLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    let skip = log.len().saturating_sub(VISIBLE_LOG_LINES);

    for line in log.iter().skip(skip) {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
