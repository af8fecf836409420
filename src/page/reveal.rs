//! Reveal on scroll

/// Vertical extent of an element, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

/// The visible window of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self {
            top: scroll_top,
            bottom: scroll_top + height,
        }
    }

    /// Whether any part of `rect` overlaps the viewport. Touching edges do not count.
    pub fn reveals(&self, rect: Rect) -> bool {
        rect.bottom > self.top && rect.top < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let view = Viewport::new(100.0, 500.0);
        assert!(view.reveals(Rect { top: 550.0, bottom: 700.0 }));
        assert!(view.reveals(Rect { top: 0.0, bottom: 101.0 }));
        assert!(view.reveals(Rect { top: 0.0, bottom: 1000.0 }));
    }

    #[test]
    fn test_edges_are_exclusive() {
        let view = Viewport::new(100.0, 500.0);
        assert!(!view.reveals(Rect { top: 0.0, bottom: 100.0 }));
        assert!(!view.reveals(Rect { top: 600.0, bottom: 800.0 }));
    }
}
