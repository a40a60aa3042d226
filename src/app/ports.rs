//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ WatchService (domain)
//! ```
//!
//! Driven adapters (display, paired-device link, clock, event sinks,
//! config storage) implement these traits.  The
//! [`WatchService`](super::service::WatchService) consumes them via
//! generics, so the domain core never touches the platform directly.

use crate::clock::{HourStyle, WallTime};
use crate::config::WatchConfig;
use crate::sync::SyncRequest;
use crate::sync::weather::WeatherIcon;

// ───────────────────────────────────────────────────────────────
// Display sink (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// Write-only rendering port.  Holds no state the core depends on.
pub trait DisplaySink {
    /// Countdown line, e.g. `"T-02:05"` or the liftoff label.
    fn set_countdown_text(&mut self, text: &str);

    /// Rocket name line (opaque passthrough).
    fn set_name_text(&mut self, text: &str);

    /// Temperature line, e.g. `"72 °F"`.
    fn set_weather_text(&mut self, text: &str);

    /// Swap the condition icon.
    fn set_weather_icon(&mut self, icon: WeatherIcon);

    /// Show or hide every weather element.  Layouts that reposition the
    /// rocket graphic when weather appears do so here.
    fn set_weather_visible(&mut self, visible: bool);

    /// Clock fields, already formatted for the active hour style.
    fn set_time_text(&mut self, hours: &str, minutes: &str);
}

// ───────────────────────────────────────────────────────────────
// Request port (driven adapter: domain → paired device)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget outbound channel to the paired device.
///
/// A returned error is advisory: the core logs it and relies on the next
/// tick to ask again.
pub trait RequestPort {
    fn send(&mut self, request: SyncRequest) -> Result<(), TransportError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: wall clock → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source.
pub trait ClockPort {
    /// Current local hour and minute.
    fn now(&self) -> WallTime;

    /// The user's 12h / 24h preference, if the platform exposes one.
    /// `None` keeps the style from [`WatchConfig::hour_style`].
    fn hour_style(&self) -> Option<HourStyle>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists watch configuration.
///
/// Implementations MUST call [`WatchConfig::validate`] before persisting.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`WatchConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<WatchConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &WatchConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`RequestPort`] and byte transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No paired device connected.
    Disconnected,
    /// Outbox still busy with a previous message.
    Busy,
    /// Payload rejected (e.g. larger than the outbox).
    Rejected,
    /// Generic I/O failure from the underlying link.
    Io,
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage (first boot).
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "paired device disconnected"),
            Self::Busy => write!(f, "outbox busy"),
            Self::Rejected => write!(f, "payload rejected"),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
