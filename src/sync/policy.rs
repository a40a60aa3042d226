//! Sync policy: decides, once per minute tick, what to ask the paired
//! device for and whether the countdown may decay locally.
//!
//! Evaluation order is fixed:
//!
//! 1. **Weather refresh** on the weather cadence, once weather is enabled.
//!    Additive; never suppresses the rocket check.
//! 2. **Rocket re-sync** on the re-sync cadence, or on every tick while
//!    the countdown is below the threshold.  Suppresses local decay.
//! 3. **Local decay** otherwise.
//!
//! The policy never waits for replies.  A dropped request is simply
//! re-evaluated on the next tick.

use crate::config::WatchConfig;

use super::SyncRequest;

/// Outcome of evaluating one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickPlan {
    pub request_weather: bool,
    pub request_rocket: bool,
    /// Local decay is permitted (mutually exclusive with `request_rocket`).
    pub decay: bool,
}

impl TickPlan {
    /// Outbound requests in issue order (weather before rocket).
    pub fn requests(&self) -> impl Iterator<Item = SyncRequest> {
        let weather = self.request_weather.then_some(SyncRequest::Weather);
        let rocket = self.request_rocket.then_some(SyncRequest::Rocket);
        weather.into_iter().chain(rocket)
    }
}

/// Cadences and threshold the policy evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    resync_interval_min: u8,
    resync_threshold_min: i32,
    weather_refresh_interval_min: u8,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

impl SyncPolicy {
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            resync_interval_min: config.resync_interval_min.max(1),
            resync_threshold_min: config.resync_threshold_min,
            weather_refresh_interval_min: config.weather_refresh_interval_min.max(1),
        }
    }

    /// Evaluate a tick at `minute_of_hour`.
    pub fn evaluate(&self, minute_of_hour: u8, minutes_remaining: i32, weather_enabled: bool) -> TickPlan {
        let request_weather =
            weather_enabled && minute_of_hour % self.weather_refresh_interval_min == 0;
        let request_rocket = minute_of_hour % self.resync_interval_min == 0
            || minutes_remaining < self.resync_threshold_min;

        TickPlan {
            request_weather,
            request_rocket,
            decay: !request_rocket,
        }
    }
}
