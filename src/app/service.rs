//! Watch service: the hexagonal core.
//!
//! [`WatchService`] owns the countdown, the weather state and the sync
//! policy.  It exposes a clean, platform-agnostic API.  All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!   tick / inbound ──▶ ┌──────────────────────────┐ ──▶ DisplaySink
//!                      │       WatchService       │ ──▶ RequestPort
//!                      │ Countdown · Weather ·    │ ──▶ EventSink
//!                      │ SyncPolicy               │
//!                      └──────────────────────────┘
//! ```

use log::{debug, error, info, warn};

use crate::clock::{HourStyle, WallTime, format_clock};
use crate::config::WatchConfig;
use crate::protocol::message::InboundMessage;
use crate::sync::SyncRequest;
use crate::sync::countdown::CountdownState;
use crate::sync::policy::{SyncPolicy, TickPlan};
use crate::sync::weather::WeatherState;

use super::commands::{AppCommand, DeliveryReport};
use super::events::AppEvent;
use super::ports::{DisplaySink, EventSink, RequestPort};

// ───────────────────────────────────────────────────────────────
// WatchService
// ───────────────────────────────────────────────────────────────

/// The watch service orchestrates all domain logic.
pub struct WatchService {
    config: WatchConfig,
    policy: SyncPolicy,
    countdown: CountdownState,
    weather: WeatherState,
    hour_style: HourStyle,
    tick_count: u64,
}

impl WatchService {
    /// Construct the service from configuration.
    ///
    /// Does **not** render anything; call [`start`](Self::start) next.
    pub fn new(config: WatchConfig) -> Self {
        Self {
            policy: SyncPolicy::from_config(&config),
            hour_style: config.hour_style,
            countdown: CountdownState::new(),
            weather: WeatherState::new(),
            tick_count: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Render the start-up screen: clock, placeholders, weather hidden.
    ///
    /// The default icon is pushed here so a first observation that keeps
    /// the default condition still has an icon to reveal.
    pub fn start(&mut self, now: WallTime, display: &mut impl DisplaySink, sink: &mut impl EventSink) {
        self.render_clock(now, display);
        display.set_countdown_text(&self.config.countdown_placeholder);
        display.set_name_text(&self.config.name_placeholder);
        display.set_weather_text("");
        display.set_weather_icon(self.weather.condition());
        display.set_weather_visible(false);
        sink.emit(&AppEvent::Started);
        info!("WatchService started at {:02}:{:02}", now.hour(), now.minute());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one minute tick: clock → policy → requests → local decay.
    pub fn tick(
        &mut self,
        now: WallTime,
        display: &mut impl DisplaySink,
        link: &mut impl RequestPort,
        sink: &mut impl EventSink,
    ) -> TickPlan {
        self.tick_count += 1;

        // 1. Clock display bypasses the state machine
        self.render_clock(now, display);

        // 2. Policy
        let plan = self.policy.evaluate(
            now.minute(),
            self.countdown.minutes_remaining(),
            self.weather.enabled(),
        );

        // 3. Outbound requests, weather first
        for request in plan.requests() {
            Self::issue(request, link, sink);
        }

        // 4. Local decay (suppressed whenever a re-sync is pending)
        if self.countdown.on_tick(plan.decay) {
            let remaining = self.countdown.minutes_remaining();
            display.set_countdown_text(&self.countdown.display_text(&self.config.liftoff_label));
            sink.emit(&AppEvent::CountdownDecayed(remaining));
        }

        plan
    }

    // ── Inbound dispatch ──────────────────────────────────────

    /// Route each present field to its handler, in fixed order:
    /// countdown → name → units → observation.
    pub fn handle_inbound(
        &mut self,
        msg: &InboundMessage,
        display: &mut impl DisplaySink,
        link: &mut impl RequestPort,
        sink: &mut impl EventSink,
    ) {
        if let Some(minutes) = msg.minutes_to_launch {
            self.countdown.on_sync(minutes);
            display.set_countdown_text(&self.countdown.display_text(&self.config.liftoff_label));
            sink.emit(&AppEvent::CountdownSynced(minutes));
        }

        if let Some(name) = &msg.rocket_name {
            display.set_name_text(name);
        }

        if let Some(units) = &msg.units {
            if self.weather.on_units(units) {
                info!("Weather units changed to '{}', re-requesting", units);
                sink.emit(&AppEvent::UnitsChanged(units.clone()));
                Self::issue(SyncRequest::Weather, link, sink);
            }
        }

        if let Some((temperature, condition)) = msg.observation() {
            let outcome = self.weather.on_observation(temperature, condition);
            if outcome.revealed {
                info!("First weather observation, revealing weather");
                display.set_weather_visible(true);
                sink.emit(&AppEvent::WeatherRevealed);
            }
            display.set_weather_text(&outcome.text);
            if let Some(icon) = outcome.icon {
                display.set_weather_icon(icon);
                sink.emit(&AppEvent::IconChanged(icon));
            }
        } else if msg.temperature.is_some() || msg.conditions.is_some() {
            debug!("Ignoring partial weather observation");
        }
    }

    /// Log a transport delivery report.  Never changes state.
    pub fn handle_delivery(&mut self, report: DeliveryReport, sink: &mut impl EventSink) {
        match report {
            DeliveryReport::InboxDropped | DeliveryReport::OutboxFailed => error!("{}!", report),
            DeliveryReport::OutboxSent => info!("{}!", report),
        }
        sink.emit(&AppEvent::Delivery(report));
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one queued command to completion.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        display: &mut impl DisplaySink,
        link: &mut impl RequestPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::Tick(now) => {
                self.tick(now, display, link, sink);
            }
            AppCommand::Inbound(msg) => self.handle_inbound(&msg, display, link, sink),
            AppCommand::Delivery(report) => self.handle_delivery(report, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn countdown(&self) -> &CountdownState {
        &self.countdown
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Total ticks handled since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Apply the platform's current 12h / 24h preference.
    pub fn set_hour_style(&mut self, style: HourStyle) {
        self.hour_style = style;
    }

    // ── Internal ──────────────────────────────────────────────

    fn render_clock(&self, now: WallTime, display: &mut impl DisplaySink) {
        let (hours, minutes) = format_clock(now, self.hour_style);
        display.set_time_text(&hours, &minutes);
    }

    fn issue(request: SyncRequest, link: &mut impl RequestPort, sink: &mut impl EventSink) {
        match link.send(request) {
            Ok(()) => {
                debug!("Requested {} data", request);
                sink.emit(&AppEvent::RequestIssued(request));
            }
            Err(e) => {
                warn!("{} request not sent: {}", request, e);
                sink.emit(&AppEvent::RequestFailed { request, error: e });
            }
        }
    }
}
