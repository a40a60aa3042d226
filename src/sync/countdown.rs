//! Countdown engine: the minutes-to-launch counter.
//!
//! The counter is overwritten by every authoritative sync and decays by
//! one minute per tick in between.  Decay is suppressed on the very first
//! tick after start-up so an uninitialised zero is never decremented, and
//! on any tick where the [`SyncPolicy`](super::policy::SyncPolicy) asked
//! for a fresh value instead.

use core::fmt::Write as _;

/// Authoritative minutes-to-launch value plus the first-tick guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    minutes_remaining: i32,
    is_first_tick: bool,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownState {
    pub const fn new() -> Self {
        Self {
            minutes_remaining: 0,
            is_first_tick: true,
        }
    }

    /// Current minutes to launch (server-confirmed or locally decayed).
    pub fn minutes_remaining(&self) -> i32 {
        self.minutes_remaining
    }

    /// `true` until the first tick after start-up has been handled.
    pub fn is_first_tick(&self) -> bool {
        self.is_first_tick
    }

    /// Overwrite the counter with an authoritative value.
    ///
    /// The value is not clamped: the paired device may report a negative
    /// count once the launch time has passed.
    pub fn on_sync(&mut self, minutes: i32) {
        self.minutes_remaining = minutes;
    }

    /// Handle one minute tick.
    ///
    /// `decay_allowed` is `false` on ticks where a re-sync was requested.
    /// Returns `true` when the counter was decremented.
    pub fn on_tick(&mut self, decay_allowed: bool) -> bool {
        if self.is_first_tick {
            self.is_first_tick = false;
            return false;
        }
        if decay_allowed && self.minutes_remaining > 0 {
            self.minutes_remaining -= 1;
            return true;
        }
        false
    }

    /// Render the counter as `T-HH:MM`, or `liftoff_label` at zero and below.
    pub fn display_text(&self, liftoff_label: &str) -> String {
        format_countdown(self.minutes_remaining, liftoff_label)
    }
}

/// Format a minute count as `T-HH:MM`.
///
/// Hours are not wrapped, so counts of 100 hours or more widen the field.
pub fn format_countdown(minutes: i32, liftoff_label: &str) -> String {
    if minutes <= 0 {
        return liftoff_label.to_owned();
    }
    let mut text = String::with_capacity(8);
    // Writing into a String cannot fail.
    let _ = write!(text, "T-{:02}:{:02}", minutes / 60, minutes % 60);
    text
}
