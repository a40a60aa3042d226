//! Watchface configuration parameters
//!
//! All tunable parameters for the WristRocket core.
//! Values can be overridden through a [`ConfigPort`](crate::app::ports::ConfigPort)
//! backed by persistent storage.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::clock::HourStyle;

/// Smallest accepted inbox / outbox payload size (bytes).
const MIN_BUFFER_SIZE: u16 = 16;
/// Largest accepted inbox / outbox payload size (bytes).
const MAX_BUFFER_SIZE: u16 = 4096;

/// Core watchface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    // --- Sync policy ---
    /// Rocket re-sync cadence on minute-of-hour (minutes)
    pub resync_interval_min: u8,
    /// Re-sync on every tick while the countdown is below this (minutes)
    pub resync_threshold_min: i32,
    /// Weather refresh cadence on minute-of-hour (minutes)
    pub weather_refresh_interval_min: u8,

    // --- Labels ---
    /// Countdown text once the count reaches zero
    pub liftoff_label: String,
    /// Countdown text before the first sync
    pub countdown_placeholder: String,
    /// Rocket name text before the first sync
    pub name_placeholder: String,

    // --- Messaging ---
    /// Maximum inbound payload size (bytes)
    pub inbox_size: u16,
    /// Maximum outbound payload size (bytes)
    pub outbox_size: u16,

    // --- Clock ---
    /// 12h / 24h hour display, used when the platform clock reports no
    /// preference of its own
    pub hour_style: HourStyle,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            // Sync policy
            resync_interval_min: 15,
            resync_threshold_min: 10,
            weather_refresh_interval_min: 60, // hourly

            // Labels
            liftoff_label: "Lift Off".into(),
            countdown_placeholder: "T-00 00".into(),
            name_placeholder: "Loading...".into(),

            // Messaging
            inbox_size: 256,
            outbox_size: 128,

            // Clock
            hour_style: HourStyle::H24,
        }
    }
}

impl WatchConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60).contains(&self.resync_interval_min) {
            return Err(ConfigError::ValidationFailed(
                "resync_interval_min must be 1–60",
            ));
        }
        if !(1..=60).contains(&self.weather_refresh_interval_min) {
            return Err(ConfigError::ValidationFailed(
                "weather_refresh_interval_min must be 1–60",
            ));
        }
        if self.resync_threshold_min < 1 {
            return Err(ConfigError::ValidationFailed(
                "resync_threshold_min must be positive",
            ));
        }
        if self.liftoff_label.is_empty() {
            return Err(ConfigError::ValidationFailed("liftoff_label must not be empty"));
        }
        if self.countdown_placeholder.is_empty() || self.name_placeholder.is_empty() {
            return Err(ConfigError::ValidationFailed("placeholders must not be empty"));
        }
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&self.inbox_size) {
            return Err(ConfigError::ValidationFailed("inbox_size must be 16–4096"));
        }
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&self.outbox_size) {
            return Err(ConfigError::ValidationFailed("outbox_size must be 16–4096"));
        }
        Ok(())
    }
}
