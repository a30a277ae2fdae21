use yew::prelude::*;
use std::rc::Rc;

/// The list followed by a second copy of itself. Translating the row by one
/// copy and snapping back to zero is then invisible.
pub fn looped<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

/// Progress through one loop of the marquee.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeClock {
    loop_ms: f64,
    elapsed_ms: f64,
    paused: bool,
}

pub enum MarqueeAction {
    /// Real milliseconds since the previous tick.
    Tick(f64),
    Pause,
    Resume,
}

impl MarqueeClock {
    pub fn new(loop_ms: u32) -> Self {
        Self {
            loop_ms: loop_ms.max(1) as f64,
            elapsed_ms: 0.0,
            paused: false,
        }
    }

    pub fn advance(&mut self, delta_ms: f64) {
        if self.paused || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + delta_ms) % self.loop_ms;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Share of one copy's width already scrolled, in `[0, 1)`.
    pub fn offset_fraction(&self) -> f64 {
        self.elapsed_ms / self.loop_ms
    }

    /// CSS transform for a row holding two copies: one copy is half the row.
    pub fn transform(&self) -> String {
        format!("transform: translate3d(-{:.4}%, 0, 0);", self.offset_fraction() * 50.0)
    }
}

impl Reducible for MarqueeClock {
    type Action = MarqueeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            MarqueeAction::Tick(ms) => next.advance(ms),
            MarqueeAction::Pause => next.pause(),
            MarqueeAction::Resume => next.resume(),
        }
        // Unchanged state keeps the same Rc so hovering doesn't re-render every frame
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Measures wall-clock time between interval ticks, since timers can be
/// delayed or throttled by the browser.
#[derive(Debug, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    /// Milliseconds since the previous lap; the first lap reports zero.
    pub fn lap(&mut self, now_ms: f64) -> f64 {
        let delta = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        delta
    }
}

/// Interval period for a marquee of `len` cards. Zero means no timer.
pub fn tick_interval(len: usize, frame_ms: u32) -> u32 {
    if len == 0 {
        0
    } else {
        frame_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looped_repeats_every_card_once() {
        let cards = ["a", "b", "c"];
        let row = looped(&cards);
        assert_eq!(row.len(), 2 * cards.len());
        for i in 0..cards.len() {
            assert_eq!(row[i], row[i + cards.len()]);
        }
        assert_eq!(row, vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn degenerate_lists() {
        let empty: [u8; 0] = [];
        assert!(looped(&empty).is_empty());
        assert_eq!(tick_interval(0, 16), 0);

        assert_eq!(looped(&["only"]), vec!["only", "only"]);
        assert_eq!(tick_interval(1, 16), 16);
    }

    #[test]
    fn advances_and_wraps() {
        let mut clock = MarqueeClock::new(1_000);
        clock.advance(250.0);
        assert!((clock.offset_fraction() - 0.25).abs() < 1e-9);
        clock.advance(800.0);
        assert!((clock.offset_fraction() - 0.05).abs() < 1e-9);
        clock.advance(950.0);
        assert!(clock.offset_fraction().abs() < 1e-9);
    }

    #[test]
    fn hover_freezes_then_resumes_from_same_offset() {
        let mut clock = MarqueeClock::new(10_000);
        clock.advance(3_000.0);
        let frozen = clock.offset_fraction();

        clock.pause();
        for _ in 0..100 {
            clock.advance(16.0);
            assert_eq!(clock.offset_fraction(), frozen);
        }

        clock.resume();
        clock.advance(16.0);
        assert!(clock.offset_fraction() > frozen);
        assert!((clock.offset_fraction() - 0.3016).abs() < 1e-9);
    }

    #[test]
    fn reducer_applies_actions() {
        let clock = Rc::new(MarqueeClock::new(1_000));
        let clock = clock.reduce(MarqueeAction::Tick(100.0));
        let clock = clock.reduce(MarqueeAction::Pause);
        let clock = clock.reduce(MarqueeAction::Tick(100.0));
        assert!(clock.is_paused());
        assert!((clock.offset_fraction() - 0.1).abs() < 1e-9);
        let clock = clock.reduce(MarqueeAction::Resume);
        let clock = clock.reduce(MarqueeAction::Tick(100.0));
        assert!((clock.offset_fraction() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn transform_moves_by_half_the_row() {
        let mut clock = MarqueeClock::new(1_000);
        assert_eq!(clock.transform(), "transform: translate3d(-0.0000%, 0, 0);");
        clock.advance(500.0);
        assert_eq!(clock.transform(), "transform: translate3d(-25.0000%, 0, 0);");
    }

    #[test]
    fn paused_tick_keeps_the_same_state() {
        let paused = Rc::new(MarqueeClock::new(1_000)).reduce(MarqueeAction::Pause);
        let after_tick = paused.clone().reduce(MarqueeAction::Tick(16.0));
        assert!(Rc::ptr_eq(&paused, &after_tick));

        let paused_again = paused.clone().reduce(MarqueeAction::Pause);
        assert!(Rc::ptr_eq(&paused, &paused_again));

        let running = paused.clone().reduce(MarqueeAction::Resume);
        assert!(!Rc::ptr_eq(&paused, &running));
    }

    #[test]
    fn throttled_ticks_keep_the_loop_duration() {
        let mut timer = FrameTimer::default();
        let mut clock = MarqueeClock::new(40_000);
        assert_eq!(timer.lap(5_000.0), 0.0);

        // Background tabs fire intervals about once a second
        for tick in 1..=10 {
            clock.advance(timer.lap(5_000.0 + tick as f64 * 1_000.0));
        }
        assert!((clock.offset_fraction() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn frame_timer_ignores_clock_going_backwards() {
        let mut timer = FrameTimer::default();
        timer.lap(100.0);
        assert_eq!(timer.lap(116.5), 16.5);
        assert_eq!(timer.lap(90.0), 0.0);
        assert_eq!(timer.lap(100.0), 10.0);
    }
}
