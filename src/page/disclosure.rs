//! Tabs and accordion

/// A tab strip with exactly one active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    ids: Vec<String>,
    active: usize,
}

impl Tabs {
    /// The first tab starts active
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// Activate the tab with `id`; unknown ids leave the strip unchanged
    pub fn activate(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|t| t == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }
}

/// An accordion where at most one item is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on an item header: close everything, then open the clicked
    /// item unless it was the open one.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.open == Some(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_single_active() {
        let mut tabs = Tabs::new(["specs", "reviews", "faq"]);
        assert!(tabs.is_active("specs"));

        assert!(tabs.activate("faq"));
        assert!(tabs.is_active("faq"));
        assert!(!tabs.is_active("specs"));

        assert!(!tabs.activate("missing"));
        assert_eq!(tabs.active(), Some("faq"));
    }

    #[test]
    fn test_empty_tabs() {
        let tabs = Tabs::new(Vec::<String>::new());
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_accordion() {
        let mut acc = Accordion::new();
        acc.toggle(1);
        assert!(acc.is_open(1));

        acc.toggle(2);
        assert!(!acc.is_open(1));
        assert!(acc.is_open(2));

        acc.toggle(2);
        assert_eq!(acc.open_item(), None);
    }
}
