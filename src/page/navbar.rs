//! Navigation bar

use std::time::Duration;

/// Scroll offset past which the navbar switches to its compact style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Space left above an anchor target for the fixed navbar
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Smooth scroll duration for anchor links
pub const ANCHOR_SCROLL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navbar {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl Navbar {
    /// Update for the window's current scroll offset
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.scrolled = scroll_top > SCROLL_THRESHOLD;
    }

    /// Mobile menu button
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Scroll position for an in-page anchor whose element starts at `offset_top`
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut nav = Navbar::default();
        nav.on_scroll(50.0);
        assert!(!nav.scrolled);
        nav.on_scroll(50.5);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = Navbar::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_scroll_target(1000.0), 920.0);
    }
}
