/// Whether the page is scrolled far enough for the solid header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > self.threshold;
        self.scrolled
    }

    #[cfg(test)]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_SCROLL_THRESHOLD;

    #[test]
    fn follows_scroll_positions() {
        let mut flag = ScrollFlag::new(HEADER_SCROLL_THRESHOLD);
        let flags: Vec<bool> = [0.0, 5.0, 11.0, 9.0, 15.0]
            .into_iter()
            .map(|y| flag.update(y))
            .collect();
        assert_eq!(flags, vec![false, false, true, false, true]);
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut flag = ScrollFlag::new(10.0);
        assert!(!flag.is_scrolled());
        assert!(!flag.update(10.0));
        assert!(flag.update(10.5));
        assert!(flag.is_scrolled());
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = ScrollFlag::new(10.0);
        first.update(500.0);
        let second = ScrollFlag::new(10.0);
        assert!(first.is_scrolled());
        assert!(!second.is_scrolled());
    }
}
