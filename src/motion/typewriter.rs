use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cycles through phrases: type one character at a time, hold, erase, next.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Delay before `step` should run next, `None` when there is nothing to animate.
    pub fn delay(&self) -> Option<u32> {
        if self.phrases.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => config::TYPE_CHAR_MS,
            Phase::Holding => config::PHRASE_HOLD_MS,
            Phase::Deleting => config::DELETE_CHAR_MS,
        })
    }

    /// Moves one step forward and returns the delay before the following one.
    pub fn step(&mut self) -> Option<u32> {
        if self.phrases.is_empty() {
            return None;
        }
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["AI", "Web"];

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut writer = Typewriter::new(PHRASES);
        assert_eq!(writer.text(), "");
        assert_eq!(writer.delay(), Some(config::TYPE_CHAR_MS));

        assert_eq!(writer.step(), Some(config::TYPE_CHAR_MS));
        assert_eq!(writer.text(), "A");
        assert_eq!(writer.step(), Some(config::PHRASE_HOLD_MS));
        assert_eq!(writer.text(), "AI");
        assert_eq!(writer.phase(), Phase::Holding);

        assert_eq!(writer.step(), Some(config::DELETE_CHAR_MS));
        assert_eq!(writer.text(), "AI");
        assert_eq!(writer.step(), Some(config::DELETE_CHAR_MS));
        assert_eq!(writer.text(), "A");
        assert_eq!(writer.step(), Some(config::TYPE_CHAR_MS));
        assert_eq!(writer.text(), "");
        assert_eq!(writer.phase(), Phase::Typing);

        writer.step();
        assert_eq!(writer.text(), "W");
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut writer = Typewriter::new(PHRASES);
        // "AI": 2 typed + hold + 2 deleted, "Web": 3 typed + hold + 3 deleted
        for _ in 0..(2 + 1 + 2 + 3 + 1 + 3) {
            writer.step();
        }
        assert_eq!(writer.phase(), Phase::Typing);
        writer.step();
        assert_eq!(writer.text(), "A");
    }

    #[test]
    fn counts_characters_not_bytes() {
        const WIDE: &[&str] = &["héllo"];
        let mut writer = Typewriter::new(WIDE);
        writer.step();
        writer.step();
        assert_eq!(writer.text(), "hé");
    }

    #[test]
    fn stepping_a_copy_leaves_the_rendered_state_alone() {
        let shown = Typewriter::new(PHRASES);
        let mut next = shown.clone();
        next.step();
        assert_eq!(shown.text(), "");
        assert_eq!(next.text(), "A");
        assert_ne!(shown, next);
    }

    #[test]
    fn empty_phrase_list_is_idle() {
        let mut writer = Typewriter::new(&[]);
        assert_eq!(writer.delay(), None);
        assert_eq!(writer.step(), None);
        assert_eq!(writer.text(), "");
    }
}
