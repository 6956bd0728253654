//! Face lifecycle and event dispatch.
//!
//! [`LifecycleController`] owns the display state and the draw target and
//! walks a strictly linear path: `Uninitialized -> Running -> Destroyed`.
//! [`start`](LifecycleController::start) paints chrome, seeds every element
//! from the sources, and renders the first full frame; from then on the
//! observer impls apply events as diff-scoped redraws. After
//! [`destroy`](LifecycleController::destroy) the surface is dead and every
//! dispatch is rejected with [`LifecycleError::NotRunning`].

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::display_state::DisplayState;
use crate::events::{
    BatteryObserver, BatterySource, ConnectivityObserver, ConnectivitySource, TickObserver,
};
use crate::render::{draw_chrome, render_all, render_diff};

// =============================================================================
// Phases and Errors
// =============================================================================

/// Where the face is in its life. The path is linear; there is no way back
/// from `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing drawn yet.
    Uninitialized,
    /// Chrome painted, events being applied.
    Running,
    /// Torn down, all dispatch rejected.
    Destroyed,
}

/// Lifecycle errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// `start` called on a face that already ran
    AlreadyStarted,
    /// Dispatch or teardown outside the `Running` phase
    NotRunning,
}

impl core::error::Error for LifecycleError {}

impl core::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyStarted => write!(f, "Face was already started"),
            Self::NotRunning => write!(f, "Face is not running"),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Owns the face for its whole life: the state, the draw target, and the
/// clock format flag. All drawing goes through here.
pub struct LifecycleController<D> {
    phase: Phase,
    use_24h: bool,
    state: DisplayState,
    display: D,
}

impl<D> LifecycleController<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Take ownership of the draw target. Nothing is drawn until `start`.
    pub fn new(display: D, use_24h: bool) -> Self {
        Self {
            phase: Phase::Uninitialized,
            use_24h,
            state: DisplayState::new(),
            display,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Read access to the current element state.
    pub const fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Read access to the draw target, for hosts that push frames out of it.
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Bring the face up: paint chrome, seed the state from the sources and
    /// the given instant, render the first full frame, then accept events.
    ///
    /// Sources are polled before event dispatch opens, so a state change
    /// landing in that window is only picked up by its next event. The
    /// seeded frame can be stale for that one reading until then.
    pub fn start<B, C>(
        &mut self,
        battery: &B,
        connectivity: &C,
        now: NaiveDateTime,
    ) -> Result<(), LifecycleError>
    where
        B: BatterySource,
        C: ConnectivitySource,
    {
        if self.phase != Phase::Uninitialized {
            return Err(LifecycleError::AlreadyStarted);
        }

        draw_chrome(&mut self.display, &self.state);

        let reading = battery.snapshot();
        self.state.update_battery(reading.percent, reading.charging);
        self.state.update_connection(connectivity.snapshot());
        self.state.update_time(now, self.use_24h);
        self.state.update_date(now);
        render_all(&mut self.display, &self.state);

        self.phase = Phase::Running;
        Ok(())
    }

    /// Tear the face down and blank the surface. The phase flips before the
    /// surface is touched, so any dispatch racing the teardown is already
    /// rejected while the surface is still valid.
    pub fn destroy(&mut self) -> Result<(), LifecycleError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotRunning);
        }
        self.phase = Phase::Destroyed;
        self.display.clear(BLACK).ok();
        Ok(())
    }

    /// Switch between 12h and 24h readouts and redraw the time immediately.
    pub fn set_use_24h(&mut self, use_24h: bool, now: NaiveDateTime) -> Result<(), LifecycleError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotRunning);
        }
        self.use_24h = use_24h;
        let diff = self.state.update_time(now, self.use_24h);
        render_diff(&mut self.display, &self.state, diff);
        Ok(())
    }

    pub const fn use_24h(&self) -> bool {
        self.use_24h
    }

    #[cfg(test)]
    fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

// =============================================================================
// Event Dispatch
// =============================================================================

impl<D> BatteryObserver for LifecycleController<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn battery_changed(&mut self, percent: u8, charging: bool) -> Result<(), LifecycleError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotRunning);
        }
        let diff = self.state.update_battery(percent, charging);
        render_diff(&mut self.display, &self.state, diff);
        Ok(())
    }
}

impl<D> ConnectivityObserver for LifecycleController<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn connection_changed(&mut self, connected: bool) -> Result<(), LifecycleError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotRunning);
        }
        let diff = self.state.update_connection(connected);
        render_diff(&mut self.display, &self.state, diff);
        Ok(())
    }
}

impl<D> TickObserver for LifecycleController<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn tick(&mut self, now: NaiveDateTime, day_changed: bool) -> Result<(), LifecycleError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotRunning);
        }
        let mut diff = self.state.update_time(now, self.use_24h);
        if day_changed {
            diff = diff.merge(self.state.update_date(now));
        }
        render_diff(&mut self.display, &self.state, diff);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::events::BatteryReading;
    use crate::test_support::RecordingDisplay;
    use chrono::NaiveDate;

    struct FixedBattery(BatteryReading);

    impl BatterySource for FixedBattery {
        fn snapshot(&self) -> BatteryReading {
            self.0
        }
    }

    struct FixedLink(bool);

    impl ConnectivitySource for FixedLink {
        fn snapshot(&self) -> bool {
            self.0
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn started() -> LifecycleController<RecordingDisplay> {
        let mut controller = LifecycleController::new(RecordingDisplay::new(), false);
        controller
            .start(
                &FixedBattery(BatteryReading {
                    percent: 80,
                    charging: false,
                }),
                &FixedLink(true),
                at(2024, 6, 1, 9, 41),
            )
            .unwrap();
        controller
    }

    #[test]
    fn test_phases_advance_linearly() {
        let mut controller = started();
        assert_eq!(controller.phase(), Phase::Running);
        assert!(controller.is_running());

        controller.destroy().unwrap();
        assert_eq!(controller.phase(), Phase::Destroyed);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut controller = started();
        let result = controller.start(
            &FixedBattery(BatteryReading {
                percent: 10,
                charging: false,
            }),
            &FixedLink(false),
            at(2024, 6, 1, 9, 42),
        );
        assert_eq!(result, Err(LifecycleError::AlreadyStarted));
    }

    #[test]
    fn test_destroy_before_start_is_rejected() {
        let mut controller = LifecycleController::new(RecordingDisplay::new(), false);
        assert_eq!(controller.destroy(), Err(LifecycleError::NotRunning));
        assert_eq!(controller.phase(), Phase::Uninitialized);
    }

    #[test]
    fn test_destroy_twice_is_rejected() {
        let mut controller = started();
        controller.destroy().unwrap();
        assert_eq!(controller.destroy(), Err(LifecycleError::NotRunning));
    }

    #[test]
    fn test_start_seeds_state_from_sources() {
        let controller = started();
        assert_eq!(controller.state().battery_width(), 8);
        assert!(!controller.state().is_charging());
        assert!(controller.state().is_connected());
        assert_eq!(controller.state().time_text(), "09:41");
        assert_eq!(controller.state().date_text(), "June 1");
        assert!(!controller.display().is_blank());
    }

    #[test]
    fn test_dispatch_before_start_is_rejected() {
        let mut controller = LifecycleController::new(RecordingDisplay::new(), false);
        assert_eq!(
            controller.battery_changed(50, false),
            Err(LifecycleError::NotRunning)
        );
        assert_eq!(
            controller.connection_changed(true),
            Err(LifecycleError::NotRunning)
        );
        assert_eq!(
            controller.tick(at(2024, 6, 1, 9, 41), false),
            Err(LifecycleError::NotRunning)
        );
        assert!(controller.display().is_blank());
    }

    #[test]
    fn test_dispatch_after_destroy_is_rejected() {
        let mut controller = started();
        controller.destroy().unwrap();
        assert_eq!(
            controller.battery_changed(50, true),
            Err(LifecycleError::NotRunning)
        );
        assert_eq!(
            controller.connection_changed(false),
            Err(LifecycleError::NotRunning)
        );
        assert_eq!(
            controller.tick(at(2024, 6, 2, 0, 0), true),
            Err(LifecycleError::NotRunning)
        );
    }

    #[test]
    fn test_battery_event_redraws_bar_and_bolt_only() {
        let mut controller = started();
        controller.display_mut().reset();

        controller.battery_changed(55, true).unwrap();
        assert_eq!(controller.state().battery_width(), 5);
        assert!(controller.state().is_charging());

        let display = controller.display();
        assert!(display.touches(&Element::BatteryBar.region()));
        assert!(display.touches(&Element::ChargingIcon.region()));
        assert!(!display.touches(&Element::TimeText.region()));
        assert!(!display.touches(&Element::DateText.region()));
        assert!(!display.touches(&Element::BluetoothIcon.region()));
    }

    #[test]
    fn test_tick_without_day_change_redraws_time_only() {
        let mut controller = started();
        controller.display_mut().reset();

        controller.tick(at(2024, 6, 1, 9, 42), false).unwrap();
        assert_eq!(controller.state().time_text(), "09:42");

        let display = controller.display();
        assert!(display.touches(&Element::TimeText.region()));
        assert!(!display.touches(&Element::DateText.region()));
    }

    #[test]
    fn test_day_change_tick_refreshes_the_date_too() {
        let mut controller = started();
        controller.display_mut().reset();

        controller.tick(at(2024, 6, 2, 0, 0), true).unwrap();
        assert_eq!(controller.state().time_text(), "12:00");
        assert_eq!(controller.state().date_text(), "June 2");

        let display = controller.display();
        assert!(display.touches(&Element::TimeText.region()));
        assert!(display.touches(&Element::DateText.region()));
    }

    #[test]
    fn test_clock_format_switch_redraws_the_time() {
        let mut controller = started();
        controller.set_use_24h(true, at(2024, 6, 1, 21, 41)).unwrap();
        assert!(controller.use_24h());
        assert_eq!(controller.state().time_text(), "21:41");

        controller.set_use_24h(false, at(2024, 6, 1, 21, 41)).unwrap();
        assert_eq!(controller.state().time_text(), "09:41");
    }

    #[test]
    fn test_destroy_blanks_the_surface() {
        let mut controller = started();
        controller.display_mut().reset();
        controller.destroy().unwrap();
        // Teardown is the only draw after the reset and covers the screen.
        assert_eq!(
            controller.display().touched_region(),
            Element::Background.region()
        );
    }
}
