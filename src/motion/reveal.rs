use crate::config;

/// How an element reacts to entering the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Stay visible after the first trigger.
    pub once: bool,
    /// Fraction of the element's area that has to be on screen.
    pub amount: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: true,
            amount: config::DEFAULT_REVEAL_AMOUNT,
        }
    }
}

impl RevealOptions {
    pub fn once(amount: f64) -> Self {
        Self { once: true, amount }
    }

    #[cfg(test)]
    pub fn repeating(amount: f64) -> Self {
        Self { once: false, amount }
    }

    /// Thresholds handed to the browser observer. Besides `amount` itself a
    /// few extra steps make sure a ratio reported just under the threshold
    /// gets a follow-up callback.
    pub fn observer_thresholds(&self) -> Vec<f64> {
        let amount = self.amount.clamp(0.0, 1.0);
        let mut steps = vec![0.0, amount, (amount + 1.0) / 2.0, 1.0];
        steps.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);
        steps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    pub fn class(self) -> &'static str {
        match self {
            Visibility::Hidden => "is-hidden",
            Visibility::Visible => "is-visible",
        }
    }
}

/// Two-state machine driven by intersection ratios.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTrigger {
    options: RevealOptions,
    state: Visibility,
}

impl RevealTrigger {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            state: Visibility::Hidden,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Feeds one observer report and returns the resulting state.
    ///
    /// A zero `amount` is met by any ratio, so it waits for the browser to
    /// report the element as actually intersecting.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> Visibility {
        if self.is_settled() {
            return self.state;
        }
        let reached = if self.options.amount <= 0.0 {
            intersecting
        } else {
            ratio >= self.options.amount
        };
        self.state = if reached {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        self.state
    }

    /// A `once` trigger that already fired no longer needs observing.
    pub fn is_settled(&self) -> bool {
        self.options.once && self.state.is_visible()
    }

    /// Used when the environment cannot report intersections at all.
    pub fn force_visible(&mut self) {
        self.state = Visibility::Visible;
    }
}

/// Entrance style applied to an `AnimatedInView` container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// The container itself fades in and rises into place.
    FadeInUp,
    /// Each child fades in and rises, one after another.
    Stagger,
}

/// Transition delay for the `index`th child of a staggered group.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * config::STAGGER_STEP_SECS
}

pub fn transition_style(delay_secs: f64) -> String {
    format!(
        "transition: opacity {d}s ease-out {delay:.2}s, transform {d}s ease-out {delay:.2}s;",
        d = config::REVEAL_DURATION_SECS,
        delay = delay_secs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let trigger = RevealTrigger::new(RevealOptions::default());
        assert_eq!(trigger.state(), Visibility::Hidden);
        assert!(!trigger.is_settled());
    }

    #[test]
    fn once_stays_visible_after_first_trigger() {
        let mut trigger = RevealTrigger::new(RevealOptions::once(0.3));
        assert_eq!(trigger.observe(0.1, true), Visibility::Hidden);
        assert_eq!(trigger.observe(0.3, true), Visibility::Visible);
        assert!(trigger.is_settled());

        for ratio in [0.0, 0.29, 1.0, 0.0, 0.05] {
            assert_eq!(trigger.observe(ratio, ratio > 0.0), Visibility::Visible);
        }
    }

    #[test]
    fn repeating_follows_the_ratio() {
        let options = RevealOptions::repeating(0.5);
        let mut trigger = RevealTrigger::new(options);
        let ratios = [0.0, 0.2, 0.5, 0.9, 0.49, 0.0, 0.75, 1.0, 0.1];

        for ratio in ratios {
            let state = trigger.observe(ratio, ratio > 0.0);
            assert_eq!(state.is_visible(), ratio >= options.amount, "ratio {ratio}");
            assert!(!trigger.is_settled());
        }
    }

    #[test]
    fn zero_amount_waits_for_intersection() {
        let mut trigger = RevealTrigger::new(RevealOptions::once(0.0));
        // Off-screen element: the first report has ratio 0 and is not intersecting
        assert_eq!(trigger.observe(0.0, false), Visibility::Hidden);
        assert!(!trigger.is_settled());
        // Touching the viewport edge still counts
        assert_eq!(trigger.observe(0.0, true), Visibility::Visible);
        assert!(trigger.is_settled());
    }

    #[test]
    fn zero_amount_repeating_follows_intersection() {
        let mut trigger = RevealTrigger::new(RevealOptions::repeating(0.0));
        assert_eq!(trigger.observe(0.4, true), Visibility::Visible);
        assert_eq!(trigger.observe(0.0, false), Visibility::Hidden);
    }

    #[test]
    fn positive_amount_uses_ratio_alone() {
        let mut trigger = RevealTrigger::new(RevealOptions::repeating(0.3));
        assert_eq!(trigger.observe(0.1, true), Visibility::Hidden);
        assert_eq!(trigger.observe(0.3, true), Visibility::Visible);
    }

    #[test]
    fn forced_visible_for_missing_observer() {
        let mut trigger = RevealTrigger::new(RevealOptions::default());
        trigger.force_visible();
        assert_eq!(trigger.state(), Visibility::Visible);
    }

    #[test]
    fn stagger_delays_grow_linearly() {
        let delays: Vec<f64> = (0..4).map(stagger_delay).collect();
        let expected = [0.0, 0.15, 0.30, 0.45];
        for (got, want) in delays.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn thresholds_cover_amount() {
        assert_eq!(RevealOptions::once(0.5).observer_thresholds(), vec![0.0, 0.5, 0.75, 1.0]);
        assert_eq!(RevealOptions::once(0.0).observer_thresholds(), vec![0.0, 0.5, 1.0]);
        assert_eq!(RevealOptions::once(1.0).observer_thresholds(), vec![0.0, 1.0]);
    }

    #[test]
    fn transition_style_carries_delay() {
        assert_eq!(
            transition_style(0.3),
            "transition: opacity 0.8s ease-out 0.30s, transform 0.8s ease-out 0.30s;"
        );
    }
}
