//! Icon drawing procedures.
//!
//! Each procedure paints one icon at a caller-supplied origin and touches no
//! pixel outside the icon's box. The procedures draw the current state only;
//! clearing whatever was on screen before is the renderer's job.
//!
//! # Icons
//!
//! - `battery`: shell outline, nub, level fill bar, charging bolt
//! - `bluetooth`: the link rune

mod battery;
mod bluetooth;

pub use battery::{draw_battery_bar, draw_battery_shell, draw_charging_bolt};
pub use bluetooth::draw_bluetooth_icon;
