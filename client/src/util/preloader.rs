//! Splash preloader choreography as a declarative step list.
//!
//! Each step puts the `#preloader` element in one CSS state for a fixed time.
//! `components::preloader` plays the list with a single async driver.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

/// Minimum time the splash stays up before the sequence starts.
pub const MIN_DISPLAY_MS: u32 = 250;
/// Delay between hiding the splash and removing it from the DOM.
pub const REMOVE_DELAY_MS: u32 = 600;
/// Force completion if the sequence has not finished by then.
pub const FALLBACK_MS: u32 = 10_000;

/// Visual state of the logo halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoState {
    /// Halves slide in from the sides.
    In,
    /// Halves collide at the center.
    Collision,
    /// Joined logo fully visible.
    Joined,
    FadeOut,
}

impl LogoState {
    pub fn class(self) -> &'static str {
        match self {
            Self::In => "state-logo-in",
            Self::Collision => "state-logo-collision",
            Self::Joined => "state-logo-joined",
            Self::FadeOut => "state-fadeout",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: LogoState,
    pub duration_ms: u32,
}

pub const SEQUENCE: &[Step] = &[
    Step { state: LogoState::In, duration_ms: 250 },
    Step { state: LogoState::Collision, duration_ms: 200 },
    Step { state: LogoState::Joined, duration_ms: 400 },
    Step { state: LogoState::FadeOut, duration_ms: 200 },
];

/// Lifecycle of the splash element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Mounted, sequence not started yet.
    #[default]
    Waiting,
    Playing(LogoState),
    /// `.hidden` applied, still in the DOM.
    Hidden,
    Removed,
}

impl PreloaderPhase {
    /// Class list for the `#preloader` element.
    pub fn class(self) -> String {
        match self {
            Self::Waiting => "preloader".to_owned(),
            Self::Playing(state) => format!("preloader {}", state.class()),
            Self::Hidden | Self::Removed => "preloader hidden".to_owned(),
        }
    }

    /// Transition to `Hidden`. Returns `false` when already hidden or removed.
    pub fn hide(&mut self) -> bool {
        if matches!(self, Self::Hidden | Self::Removed) {
            return false;
        }
        *self = Self::Hidden;
        true
    }

    pub fn is_done(self) -> bool {
        matches!(self, Self::Hidden | Self::Removed)
    }
}

/// How long to wait before starting, given time already spent loading.
pub fn remaining_min_display(elapsed_ms: u32) -> u32 {
    MIN_DISPLAY_MS.saturating_sub(elapsed_ms)
}

/// Start offset of every step, relative to the sequence start.
pub fn step_offsets(steps: &[Step]) -> Vec<(u32, LogoState)> {
    let mut at = 0_u32;
    steps
        .iter()
        .map(|step| {
            let start = at;
            at = at.saturating_add(step.duration_ms);
            (start, step.state)
        })
        .collect()
}

pub fn total_duration_ms(steps: &[Step]) -> u32 {
    steps
        .iter()
        .fold(0_u32, |acc, step| acc.saturating_add(step.duration_ms))
}

/// Whole milliseconds between two `Date.now()` readings, clamped to `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_ms(since: f64, now: f64) -> u32 {
    let delta = (now - since).floor();
    if delta.is_nan() || delta <= 0.0 {
        0
    } else if delta >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        delta as u32
    }
}
