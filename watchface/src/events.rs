//! Event sources and observers.
//!
//! Sources answer one-shot state queries; the controller polls them once at
//! startup to seed the face. Observers are the push side: the host calls the
//! matching method whenever a battery, link or clock event fires. Dispatch is
//! synchronous and returns the lifecycle error when the face is not running,
//! so a late event after teardown is rejected instead of drawing into a dead
//! surface.

use chrono::NaiveDateTime;

use crate::lifecycle::LifecycleError;

/// One battery sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReading {
    /// Charge level in percent. Values above 100 are clamped downstream.
    pub percent: u8,
    /// Whether the charger is plugged in.
    pub charging: bool,
}

/// Answers the current battery state on demand.
pub trait BatterySource {
    fn snapshot(&self) -> BatteryReading;
}

/// Answers whether the phone link is currently up.
pub trait ConnectivitySource {
    fn snapshot(&self) -> bool;
}

/// Receives battery change events.
pub trait BatteryObserver {
    fn battery_changed(&mut self, percent: u8, charging: bool) -> Result<(), LifecycleError>;
}

/// Receives link up/down events.
pub trait ConnectivityObserver {
    fn connection_changed(&mut self, connected: bool) -> Result<(), LifecycleError>;
}

/// Receives minute ticks. `day_changed` is set on the first tick of a new
/// calendar day so the observer can refresh date-dependent content.
pub trait TickObserver {
    fn tick(&mut self, now: NaiveDateTime, day_changed: bool) -> Result<(), LifecycleError>;
}
