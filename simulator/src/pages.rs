//! Page navigation for the simulator window.
//!
//! The window shows either the face itself or a debug page; `Y` flips
//! between them.

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The watch face, exactly as a device would show it.
    #[default]
    Face,

    /// Debug page with face state, event counters and the event log.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Face);
    }

    #[test]
    fn test_page_toggle_round_trip() {
        assert_eq!(Page::Face.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::Face);
        assert_eq!(Page::Face.toggle().toggle(), Page::Face);
    }
}
