//! Watch face simulator for desktop.
//!
//! Runs the face in a window using the embedded-graphics-simulator crate,
//! with the keyboard standing in for the device's event services. The face
//! only redraws when an event fires; the loop just pushes the framebuffer
//! out every frame.
//!
//! # Keys
//!
//! - `Up` / `Down`: battery level +/- 5%
//! - `C`: toggle the charger
//! - `B`: toggle the phone link
//! - `T`: switch between 12h and 24h readout
//! - `Y`: flip between the face and the debug page
//! - `Esc`: tear the face down and quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod debug_screen;
mod pages;
mod sources;
mod stats;
mod timing;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use watchface_core::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_core::{
    BatteryObserver, ConnectivityObserver, EventLog, LifecycleController, TickObserver,
};

use crate::debug_screen::draw_debug_page;
use crate::pages::Page;
use crate::sources::{SimulatedBattery, SimulatedLink};
use crate::stats::SimStats;
use crate::timing::FRAME_TIME;

fn main() {
    let face_display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut debug_display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    let mut battery = SimulatedBattery::new();
    let mut link = SimulatedLink::new();

    let mut controller = LifecycleController::new(face_display, true);
    let now = Local::now().naive_local();
    controller
        .start(&battery, &link, now)
        .expect("a fresh face starts exactly once");
    window.update(controller.display());

    let mut last_minute = (now.date(), now.hour(), now.minute());
    let mut current_page = Page::default();
    let mut stats = SimStats::new();
    let mut log = EventLog::new();
    log.push("Face started");

    loop {
        let frame_start = Instant::now();
        let now = Local::now().naive_local();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    controller.destroy().ok();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Up => {
                            battery.increase();
                            apply_battery(&mut controller, &battery, &mut stats, &mut log);
                        }
                        Keycode::Down => {
                            battery.decrease();
                            apply_battery(&mut controller, &battery, &mut stats, &mut log);
                        }
                        Keycode::C => {
                            battery.toggle_charging();
                            apply_battery(&mut controller, &battery, &mut stats, &mut log);
                        }
                        Keycode::B => {
                            link.toggle();
                            controller.connection_changed(link.is_connected()).ok();
                            stats.link_events += 1;
                            log.push(if link.is_connected() { "Link up" } else { "Link down" });
                        }
                        Keycode::T => {
                            let to_24h = !controller.use_24h();
                            controller.set_use_24h(to_24h, now).ok();
                            log.push(if to_24h { "Clock: 24h" } else { "Clock: 12h" });
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            log.push(match current_page {
                                Page::Face => "Page: Face",
                                Page::Debug => "Page: Debug",
                            });
                        }
                        Keycode::Escape => {
                            controller.destroy().ok();
                            return;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Dispatch a tick when the wall clock enters a new minute
        let minute_key = (now.date(), now.hour(), now.minute());
        if minute_key != last_minute {
            let day_changed = minute_key.0 != last_minute.0;
            controller.tick(now, day_changed).ok();
            stats.ticks += 1;
            last_minute = minute_key;
        }

        // Push out the page's framebuffer
        match current_page {
            Page::Face => window.update(controller.display()),
            Page::Debug => {
                draw_debug_page(&mut debug_display, controller.state(), &stats, &log);
                window.update(&debug_display);
            }
        }

        stats.frames = stats.frames.wrapping_add(1);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.checked_sub(pre_sleep).unwrap());
        }
    }
}

/// Dispatch the current battery knobs as one battery event and log it.
fn apply_battery(
    controller: &mut LifecycleController<SimulatorDisplay<Rgb565>>,
    battery: &SimulatedBattery,
    stats: &mut SimStats,
    log: &mut EventLog,
) {
    controller
        .battery_changed(battery.percent(), battery.is_charging())
        .ok();
    stats.battery_events += 1;

    let mut line: String<32> = String::new();
    let _ = write!(
        line,
        "Battery {}%{}",
        battery.percent(),
        if battery.is_charging() { " chg" } else { "" }
    );
    log.push(&line);
}
