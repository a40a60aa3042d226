//! System clock adapter.
//!
//! Implements [`ClockPort`] on top of the host's local wall clock via
//! `chrono`.  The hour style is a pure input supplied by the platform;
//! without one the configured style applies.

use chrono::{Local, Timelike};

use crate::app::ports::ClockPort;
use crate::clock::{HourStyle, WallTime};

/// Local wall clock.
#[derive(Debug, Default)]
pub struct SystemClock {
    hour_style: Option<HourStyle>,
}

impl SystemClock {
    /// Clock that reports a fixed user preference.
    pub fn new(hour_style: HourStyle) -> Self {
        Self {
            hour_style: Some(hour_style),
        }
    }

    /// Follow a changed user preference.
    pub fn set_hour_style(&mut self, hour_style: HourStyle) {
        self.hour_style = Some(hour_style);
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        // chrono guarantees hour < 24 and minute < 60.
        WallTime::new(now.hour() as u8, now.minute() as u8).unwrap_or_default()
    }

    fn hour_style(&self) -> Option<HourStyle> {
        self.hour_style
    }
}
