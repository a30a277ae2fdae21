use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to its solid background past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;

pub const REVEAL_DURATION_SECS: f64 = 0.8;
pub const STAGGER_STEP_SECS: f64 = 0.15;
pub const REVEAL_OFFSET_PX: u32 = 50;
pub const DEFAULT_REVEAL_AMOUNT: f64 = 0.3;

/// Time for the testimonial row to travel one full copy of its cards.
pub const MARQUEE_LOOP_MS: u32 = 40_000;
pub const MARQUEE_FRAME_MS: u32 = 16;

pub const TYPE_CHAR_MS: u32 = 60;
pub const DELETE_CHAR_MS: u32 = 30;
pub const PHRASE_HOLD_MS: u32 = 1_500;
