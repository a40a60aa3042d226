//! Synchronization core: pure state, zero I/O.
//!
//! ```text
//!   tick ──▶ SyncPolicy ──▶ TickPlan ──▶ SyncRequest(s) ──▶ RequestPort
//!                               │
//!                               ▼
//!                         CountdownState ◀── inbound minutes_to_launch
//!                         WeatherState   ◀── inbound units / observation
//! ```
//!
//! Every type here is owned by [`WatchService`](crate::app::service::WatchService)
//! and mutated only from the single event-processing actor.

pub mod countdown;
pub mod policy;
pub mod weather;

use core::fmt;

use serde::{Deserialize, Serialize};

/// Outbound request tag sent to the paired device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncRequest {
    /// Ask for a fresh minutes-to-launch value.
    Rocket,
    /// Ask for a fresh temperature / condition observation.
    Weather,
}

impl SyncRequest {
    /// Wire discriminator for the `message_type` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rocket => "rocket",
            Self::Weather => "weather",
        }
    }
}

impl fmt::Display for SyncRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
