//! Outbound application events.
//!
//! The [`WatchService`](super::service::WatchService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::app::ports::TransportError;
use crate::sync::SyncRequest;
use crate::sync::weather::WeatherIcon;

use super::commands::DeliveryReport;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has rendered its start-up screen.
    Started,

    /// A request was handed to the paired-device link.
    RequestIssued(SyncRequest),

    /// The link refused a request; the next tick will ask again.
    RequestFailed {
        request: SyncRequest,
        error: TransportError,
    },

    /// The countdown was overwritten by the paired device.
    CountdownSynced(i32),

    /// The countdown decayed locally to the carried value.
    CountdownDecayed(i32),

    /// The unit label changed; weather was re-requested.
    UnitsChanged(String),

    /// The first observation arrived and weather became visible.
    WeatherRevealed,

    /// The condition icon changed.
    IconChanged(WeatherIcon),

    /// A transport delivery report was received.
    Delivery(DeliveryReport),
}
