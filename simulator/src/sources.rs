//! Simulated event sources.
//!
//! Stand-ins for the device battery service and the phone link; the keyboard
//! drives them. Each one implements the matching source trait so the
//! controller can seed itself from them at startup exactly as it would from
//! real services.

use watchface_core::{BatteryReading, BatterySource, ConnectivitySource};

/// How far one key press moves the battery level, in percent.
const BATTERY_STEP: u8 = 5;

/// Keyboard-driven battery. `Up`/`Down` step the level, `C` flips the
/// charger.
pub struct SimulatedBattery {
    percent: u8,
    charging: bool,
}

impl SimulatedBattery {
    pub const fn new() -> Self {
        Self {
            percent: 80,
            charging: false,
        }
    }

    pub fn increase(&mut self) {
        self.percent = (self.percent + BATTERY_STEP).min(100);
    }

    pub fn decrease(&mut self) {
        self.percent = self.percent.saturating_sub(BATTERY_STEP);
    }

    pub fn toggle_charging(&mut self) {
        self.charging = !self.charging;
    }

    pub const fn percent(&self) -> u8 {
        self.percent
    }

    pub const fn is_charging(&self) -> bool {
        self.charging
    }
}

impl BatterySource for SimulatedBattery {
    fn snapshot(&self) -> BatteryReading {
        BatteryReading {
            percent: self.percent,
            charging: self.charging,
        }
    }
}

/// Keyboard-driven phone link. `B` flips it.
pub struct SimulatedLink {
    connected: bool,
}

impl SimulatedLink {
    pub const fn new() -> Self {
        Self { connected: true }
    }

    pub fn toggle(&mut self) {
        self.connected = !self.connected;
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }
}

impl ConnectivitySource for SimulatedLink {
    fn snapshot(&self) -> bool {
        self.connected
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
