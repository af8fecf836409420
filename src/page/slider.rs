//! Testimonial slider

use std::time::Duration;

/// Auto-rotation period
pub const ROTATE_EVERY: Duration = Duration::from_millis(5000);

/// Index of the visible slide among `total`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    current: usize,
    total: usize,
}

impl Slider {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether there is anything to rotate
    pub fn rotates(&self) -> bool {
        self.total > 0
    }

    /// Advance, wrapping to the first slide. No-op without slides.
    pub fn next(&mut self) -> usize {
        if self.rotates() {
            self.current = (self.current + 1) % self.total;
        }
        self.current
    }

    /// Jump to a slide via its dot. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.total {
            self.current = index;
        }
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.rotates() && index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_around() {
        let mut slider = Slider::new(3);
        assert_eq!(slider.next(), 1);
        assert_eq!(slider.next(), 2);
        assert_eq!(slider.next(), 0);
    }

    #[test]
    fn test_empty_slider_is_inert() {
        let mut slider = Slider::new(0);
        assert!(!slider.rotates());
        assert_eq!(slider.next(), 0);
        assert!(!slider.is_active(0));
    }

    #[test]
    fn test_dot_selection() {
        let mut slider = Slider::new(4);
        assert_eq!(slider.select(2), 2);
        assert!(slider.is_active(2));
        assert_eq!(slider.select(9), 2);
        assert_eq!(slider.next(), 3);
    }
}
