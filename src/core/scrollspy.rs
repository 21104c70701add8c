// Sticky navigation state derived from the scroll position.

use super::constants::{NAV_PROBE_LINE_PX, NAV_SCROLLED_AFTER_PX};

/// Viewport-relative vertical extent of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Fields that changed on the last update; `None` means unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavChange {
    pub scrolled: Option<bool>,
    pub active: Option<usize>,
}

impl NavChange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scrolled.is_none() && self.active.is_none()
    }
}

/// First section spanning the horizontal probe line.
pub fn section_at_probe(sections: &[SectionBounds], probe_px: f64) -> Option<usize> {
    sections
        .iter()
        .position(|s| s.top <= probe_px && s.bottom >= probe_px)
}

#[derive(Clone, Debug)]
pub struct NavState {
    scrolled: bool,
    active: Option<usize>,
    detached: bool,
}

impl NavState {
    pub fn new(initial_active: Option<usize>) -> Self {
        Self {
            scrolled: false,
            active: initial_active,
            detached: false,
        }
    }

    /// Recompute from the current scroll offset and section rects. The active
    /// section is kept when no section crosses the probe line.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> NavChange {
        let mut change = NavChange::default();
        if self.detached {
            return change;
        }
        let scrolled = scroll_y > NAV_SCROLLED_AFTER_PX;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            change.scrolled = Some(scrolled);
        }
        if let Some(idx) = section_at_probe(sections, NAV_PROBE_LINE_PX) {
            if self.active != Some(idx) {
                self.active = Some(idx);
                change.active = Some(idx);
            }
        }
        change
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Some(0))
    }
}
