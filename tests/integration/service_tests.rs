//! WatchService against mock ports: dispatch order, reveal, re-sync.

use wristrocket::app::events::AppEvent;
use wristrocket::app::ports::TransportError;
use wristrocket::app::service::WatchService;
use wristrocket::clock::WallTime;
use wristrocket::config::WatchConfig;
use wristrocket::protocol::message::InboundMessage;
use wristrocket::sync::SyncRequest;
use wristrocket::sync::weather::WeatherIcon;

use super::mock_ports::{DisplayCall, MockDisplay, MockLink, RecordingSink};

fn at(h: u8, m: u8) -> WallTime {
    WallTime::new(h, m).unwrap()
}

fn started() -> (WatchService, MockDisplay, MockLink, RecordingSink) {
    let mut svc = WatchService::new(WatchConfig::default());
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();
    svc.start(at(12, 0), &mut display, &mut sink);
    display.calls.clear();
    sink.events.clear();
    (svc, display, MockLink::new(), sink)
}

#[test]
fn launch_sync_displays_countdown_and_name() {
    let (mut svc, mut display, mut link, mut sink) = started();
    let msg = InboundMessage {
        minutes_to_launch: Some(125),
        rocket_name: Some("Falcon 9".into()),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    assert_eq!(
        display.calls,
        [
            DisplayCall::Countdown("T-02:05".into()),
            DisplayCall::Name("Falcon 9".into()),
        ]
    );
    assert!(link.sent.is_empty());
}

#[test]
fn zero_sync_shows_liftoff() {
    let (mut svc, mut display, mut link, mut sink) = started();
    let msg = InboundMessage {
        minutes_to_launch: Some(0),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    assert_eq!(display.last_countdown(), Some("Lift Off"));
}

#[test]
fn units_are_applied_before_observation() {
    let (mut svc, mut display, mut link, mut sink) = started();
    let msg = InboundMessage {
        temperature: Some(21),
        conditions: Some(1),
        units: Some("C".into()),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);

    // Units change forces a fresh request in the same event.
    assert_eq!(link.sent, [SyncRequest::Weather]);
    assert_eq!(display.last_weather(), Some("21 \u{00b0}C"));

    let units_at = sink
        .events
        .iter()
        .position(|e| matches!(e, AppEvent::UnitsChanged(_)))
        .unwrap();
    let reveal_at = sink
        .events
        .iter()
        .position(|e| matches!(e, AppEvent::WeatherRevealed))
        .unwrap();
    assert!(units_at < reveal_at);
}

#[test]
fn repeated_units_request_only_once() {
    let (mut svc, mut display, mut link, mut sink) = started();
    let msg = InboundMessage {
        units: Some("F".into()),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    assert_eq!(link.sent, [SyncRequest::Weather]);
}

#[test]
fn first_observation_reveals_exactly_once() {
    let (mut svc, mut display, mut link, mut sink) = started();
    let obs = |t| InboundMessage {
        temperature: Some(t),
        conditions: Some(4),
        ..InboundMessage::default()
    };

    svc.handle_inbound(&obs(72), &mut display, &mut link, &mut sink);
    assert!(svc.weather().enabled());
    assert_eq!(
        display.count(|c| *c == DisplayCall::WeatherVisible(true)),
        1
    );

    display.calls.clear();
    svc.handle_inbound(&obs(73), &mut display, &mut link, &mut sink);
    assert_eq!(display.calls, [DisplayCall::Weather("73 \u{00b0}".into())]);
    assert_eq!(sink.count(|e| *e == AppEvent::WeatherRevealed), 1);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::IconChanged(_))), 0);
}

#[test]
fn default_condition_has_an_icon_when_revealed() {
    let mut svc = WatchService::new(WatchConfig::default());
    let (mut display, mut link, mut sink) =
        (MockDisplay::new(), MockLink::new(), RecordingSink::new());
    svc.start(at(12, 0), &mut display, &mut sink);
    let msg = InboundMessage {
        temperature: Some(72),
        conditions: Some(4),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);

    let icons: Vec<_> = display
        .calls
        .iter()
        .filter_map(|c| match c {
            DisplayCall::Icon(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(icons, [WeatherIcon::Clear]);
    assert_eq!(display.calls.last(), Some(&DisplayCall::Weather("72 \u{00b0}".into())));
    assert!(display.calls.contains(&DisplayCall::WeatherVisible(true)));
}

#[test]
fn icon_pushed_only_on_change() {
    let (mut svc, mut display, mut link, mut sink) = started();
    for (t, c) in [(50, 1), (51, 1), (52, 5), (53, 42)] {
        let msg = InboundMessage {
            temperature: Some(t),
            conditions: Some(c),
            ..InboundMessage::default()
        };
        svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    }
    let icons: Vec<_> = display
        .calls
        .iter()
        .filter_map(|c| match c {
            DisplayCall::Icon(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(icons, [WeatherIcon::Rain, WeatherIcon::Clouds]);
    assert_eq!(svc.weather().condition(), WeatherIcon::Clouds);
    assert_eq!(svc.weather().temperature(), 53);
}

#[test]
fn top_of_hour_requests_weather_then_rocket_without_decay() {
    let (mut svc, mut display, mut link, mut sink) = started();
    svc.tick(at(12, 1), &mut display, &mut link, &mut sink); // first tick
    let setup = InboundMessage {
        minutes_to_launch: Some(500),
        temperature: Some(60),
        conditions: Some(4),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&setup, &mut display, &mut link, &mut sink);
    link.take();

    let plan = svc.tick(at(13, 0), &mut display, &mut link, &mut sink);
    assert!(!plan.decay);
    assert_eq!(link.sent, [SyncRequest::Weather, SyncRequest::Rocket]);
    assert_eq!(svc.countdown().minutes_remaining(), 500);
}

#[test]
fn near_launch_resyncs_every_tick() {
    let (mut svc, mut display, mut link, mut sink) = started();
    svc.tick(at(12, 1), &mut display, &mut link, &mut sink);
    let msg = InboundMessage {
        minutes_to_launch: Some(9),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    link.take();

    svc.tick(at(12, 7), &mut display, &mut link, &mut sink);
    svc.tick(at(12, 8), &mut display, &mut link, &mut sink);
    assert_eq!(link.sent, [SyncRequest::Rocket, SyncRequest::Rocket]);
    assert_eq!(svc.countdown().minutes_remaining(), 9, "stalls until a reply arrives");
}

#[test]
fn quiet_ticks_decay_and_render() {
    let (mut svc, mut display, mut link, mut sink) = started();
    svc.tick(at(12, 1), &mut display, &mut link, &mut sink);
    let msg = InboundMessage {
        minutes_to_launch: Some(100),
        ..InboundMessage::default()
    };
    svc.handle_inbound(&msg, &mut display, &mut link, &mut sink);
    link.take();

    svc.tick(at(12, 2), &mut display, &mut link, &mut sink);
    svc.tick(at(12, 3), &mut display, &mut link, &mut sink);
    assert_eq!(svc.countdown().minutes_remaining(), 98);
    assert_eq!(display.last_countdown(), Some("T-01:38"));
    assert!(link.sent.is_empty());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::CountdownDecayed(_))), 2);
}

#[test]
fn dropped_request_is_asked_again_next_tick() {
    let (mut svc, mut display, mut link, mut sink) = started();
    link.fail_with = Some(TransportError::Disconnected);
    svc.tick(at(12, 15), &mut display, &mut link, &mut sink);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::RequestFailed { .. })),
        1
    );

    link.fail_with = None;
    svc.tick(at(12, 16), &mut display, &mut link, &mut sink);
    // Count is still 0 (< 10), so the policy asks again.
    assert_eq!(link.sent, [SyncRequest::Rocket]);
}

#[test]
fn every_tick_refreshes_clock() {
    let (mut svc, mut display, mut link, mut sink) = started();
    svc.tick(at(7, 9), &mut display, &mut link, &mut sink);
    assert_eq!(display.calls[0], DisplayCall::Time("07".into(), "09".into()));
}
