//! Visual elements and redraw diffs.
//!
//! [`Element`] names the seven layers of the face and maps each to its fixed
//! bounding region. [`RedrawDiff`] is the explicit value the state update
//! entry points return to say which elements need redrawing; the renderer
//! consumes it without ever inferring dirtiness on its own.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    BATTERY_BAR_RECT,
    BATTERY_SHELL_RECT,
    BLUETOOTH_ICON_RECT,
    CHARGING_ICON_RECT,
    DATE_RECT,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TIME_RECT,
};

// =============================================================================
// Elements
// =============================================================================

/// One visual layer of the face.
///
/// `Background` and `BatteryShell` are static chrome painted once at window
/// load; the remaining five are dynamic and each redraw is scoped to the
/// element's [`region`](Self::region).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    /// Full-screen black fill behind everything.
    Background,
    /// Battery outline in the top-right corner.
    BatteryShell,
    /// Fill bar inside the battery shell.
    BatteryBar,
    /// Lightning bolt shown while charging.
    ChargingIcon,
    /// Bluetooth rune shown while the link is up.
    BluetoothIcon,
    /// Time readout.
    TimeText,
    /// Date line.
    DateText,
}

impl Element {
    /// The elements that change after the initial paint, in paint order.
    pub const DYNAMIC: [Self; 5] = [
        Self::BatteryBar,
        Self::ChargingIcon,
        Self::BluetoothIcon,
        Self::TimeText,
        Self::DateText,
    ];

    /// Bounding region of the element. Redrawing an element touches no pixel
    /// outside this rectangle.
    pub const fn region(self) -> Rectangle {
        match self {
            Self::Background => Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            Self::BatteryShell => BATTERY_SHELL_RECT,
            Self::BatteryBar => BATTERY_BAR_RECT,
            Self::ChargingIcon => CHARGING_ICON_RECT,
            Self::BluetoothIcon => BLUETOOTH_ICON_RECT,
            Self::TimeText => TIME_RECT,
            Self::DateText => DATE_RECT,
        }
    }
}

// =============================================================================
// Redraw Diff
// =============================================================================

/// Set of dynamic elements that need redrawing after a state update.
///
/// Update entry points return their diff unconditionally, so re-applying an
/// identical update yields a redundant but harmless redraw.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RedrawDiff {
    pub battery_bar: bool,
    pub charging_icon: bool,
    pub bluetooth_icon: bool,
    pub time_text: bool,
    pub date_text: bool,
}

impl RedrawDiff {
    /// Nothing to redraw.
    pub const NONE: Self = Self {
        battery_bar: false,
        charging_icon: false,
        bluetooth_icon: false,
        time_text: false,
        date_text: false,
    };

    /// Battery update: the bar fill plus the charging bolt visibility.
    pub const BATTERY: Self = Self {
        battery_bar: true,
        charging_icon: true,
        ..Self::NONE
    };

    /// Connectivity update: the bluetooth rune only.
    pub const CONNECTION: Self = Self {
        bluetooth_icon: true,
        ..Self::NONE
    };

    /// Time update: the time readout only.
    pub const TIME: Self = Self {
        time_text: true,
        ..Self::NONE
    };

    /// Date update: the date line only.
    pub const DATE: Self = Self {
        date_text: true,
        ..Self::NONE
    };

    /// Union of two diffs. Used when one callback updates several fields
    /// (a tick that also crosses a day boundary).
    pub const fn merge(self, other: Self) -> Self {
        Self {
            battery_bar: self.battery_bar || other.battery_bar,
            charging_icon: self.charging_icon || other.charging_icon,
            bluetooth_icon: self.bluetooth_icon || other.bluetooth_icon,
            time_text: self.time_text || other.time_text,
            date_text: self.date_text || other.date_text,
        }
    }

    /// Check whether the diff names no element at all.
    pub const fn is_empty(self) -> bool {
        !(self.battery_bar || self.charging_icon || self.bluetooth_icon || self.time_text || self.date_text)
    }

    /// Check whether the diff names the given element. Static chrome is never
    /// part of a diff.
    pub const fn contains(self, element: Element) -> bool {
        match element {
            Element::BatteryBar => self.battery_bar,
            Element::ChargingIcon => self.charging_icon,
            Element::BluetoothIcon => self.bluetooth_icon,
            Element::TimeText => self.time_text,
            Element::DateText => self.date_text,
            Element::Background | Element::BatteryShell => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
