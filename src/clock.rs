//! Clock source: wall-clock time and the once-per-minute tick.
//!
//! The watch only needs hour and minute.  Time display bypasses the sync
//! state machine entirely: every tick re-renders the clock first.

use core::fmt::Write as _;

use heapless::String;
use serde::{Deserialize, Serialize};

/// Hour/minute pair read from the wall clock.  Defaults to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0–59), the input to the sync policy.
    pub fn minute(self) -> u8 {
        self.minute
    }
}

/// 12h / 24h hour rendering.  Pure input; the watch has no policy of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HourStyle {
    #[default]
    H24,
    H12,
}

/// Two-digit hour and minute text, e.g. `("09", "05")`.
pub type ClockText = (String<2>, String<2>);

/// Render `now` as separate hour and minute fields.
///
/// 24h shows `00`–`23`; 12h shows `01`–`12`.
pub fn format_clock(now: WallTime, style: HourStyle) -> ClockText {
    let hour = match style {
        HourStyle::H24 => now.hour,
        HourStyle::H12 => match now.hour % 12 {
            0 => 12,
            h => h,
        },
    };
    (two_digits(hour), two_digits(now.minute))
}

fn two_digits(value: u8) -> String<2> {
    let mut out = String::new();
    // Values are always < 100, so two bytes suffice.
    let _ = write!(out, "{:02}", value);
    out
}

/// Edge detector turning a polled wall clock into one tick per minute.
#[derive(Debug, Clone, Default)]
pub struct MinuteTicker {
    last: Option<WallTime>,
}

impl MinuteTicker {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Seed the ticker so the current minute does not fire.
    pub fn prime(&mut self, now: WallTime) {
        self.last = Some(now);
    }

    /// Returns `Some(now)` the first time a new minute is observed.
    pub fn poll(&mut self, now: WallTime) -> Option<WallTime> {
        if self.last == Some(now) {
            return None;
        }
        self.last = Some(now);
        Some(now)
    }
}
