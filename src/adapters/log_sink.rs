//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the platform logger.  A future telemetry adapter would implement the
//! same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as a single tagged line.
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u64,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    /// Number of events logged so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        self.emitted += 1;
        match event {
            AppEvent::Started => info!("START | watchface up"),
            AppEvent::RequestIssued(request) => info!("REQ   | {} sent", request),
            AppEvent::RequestFailed { request, error } => {
                info!("REQ   | {} failed: {}", request, error);
            }
            AppEvent::CountdownSynced(minutes) => info!("SYNC  | minutes_to_launch={}", minutes),
            AppEvent::CountdownDecayed(minutes) => info!("DECAY | minutes_to_launch={}", minutes),
            AppEvent::UnitsChanged(units) => info!("WX    | units -> '{}'", units),
            AppEvent::WeatherRevealed => info!("WX    | revealed"),
            AppEvent::IconChanged(icon) => info!("WX    | icon -> {}", icon),
            AppEvent::Delivery(report) => info!("LINK  | {}", report),
        }
    }
}
