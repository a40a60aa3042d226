//! WatchRuntime: queueing, FIFO processing, clock polling.

use wristrocket::app::commands::{AppCommand, DeliveryReport};
use wristrocket::app::events::AppEvent;
use wristrocket::app::runtime::{CommandQueue, QUEUE_DEPTH, WatchRuntime, post};
use wristrocket::app::service::WatchService;
use wristrocket::clock::WallTime;
use wristrocket::config::WatchConfig;
use wristrocket::protocol::message::InboundMessage;
use wristrocket::sync::SyncRequest;

use super::mock_ports::{DisplayCall, MockClock, MockDisplay, MockLink, RecordingSink};

fn sync(minutes: i32) -> AppCommand {
    AppCommand::Inbound(InboundMessage {
        minutes_to_launch: Some(minutes),
        ..InboundMessage::default()
    })
}

#[test]
fn start_renders_and_arms_ticker() {
    let queue = CommandQueue::new();
    let clock = MockClock::at(9, 30);
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(WatchConfig::default()),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();
    assert_eq!(rt.display().last_countdown(), Some("T-00 00"));
    assert_eq!(rt.sink().events, [AppEvent::Started]);

    // Same minute as start-up: no tick.
    assert!(!rt.poll_clock());
    clock.set(9, 31);
    assert!(rt.poll_clock());
    assert!(!rt.poll_clock());
    assert_eq!(rt.run_pending(), 1);
    assert_eq!(rt.service().tick_count(), 1);
}

#[test]
fn commands_processed_in_fifo_order() {
    let queue = CommandQueue::new();
    let clock = MockClock::at(10, 0);
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(WatchConfig::default()),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();

    // Tick first (clears the first-tick guard), then a sync, then a quiet tick.
    assert!(post(&queue, AppCommand::Tick(WallTime::new(10, 1).unwrap())));
    assert!(post(&queue, sync(100)));
    assert!(rt.post(AppCommand::Tick(WallTime::new(10, 2).unwrap())));
    assert_eq!(rt.run_pending(), 3);

    assert_eq!(rt.service().countdown().minutes_remaining(), 99);
    assert_eq!(rt.link().sent, [SyncRequest::Rocket]);
}

#[test]
fn full_queue_drops_and_reports() {
    let queue = CommandQueue::new();
    for _ in 0..QUEUE_DEPTH {
        assert!(post(&queue, AppCommand::Delivery(DeliveryReport::OutboxSent)));
    }
    assert!(!post(&queue, AppCommand::Delivery(DeliveryReport::OutboxSent)));
}

#[test]
fn delivery_reports_are_observed_only() {
    let queue = CommandQueue::new();
    let clock = MockClock::at(10, 0);
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(WatchConfig::default()),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();
    rt.post(AppCommand::Delivery(DeliveryReport::InboxDropped));
    rt.run_pending();
    assert_eq!(
        rt.sink().events.last(),
        Some(&AppEvent::Delivery(DeliveryReport::InboxDropped))
    );
    assert!(rt.link().sent.is_empty());
    assert_eq!(rt.service().countdown().minutes_remaining(), 0);
}

#[test]
fn async_run_next_processes_one_command() {
    let queue = CommandQueue::new();
    let clock = MockClock::at(10, 0);
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(WatchConfig::default()),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();
    post(&queue, sync(61));
    post(&queue, sync(62));

    futures_lite::future::block_on(rt.run_next());
    assert_eq!(rt.display().last_countdown(), Some("T-01:01"));

    rt.process_blocking();
    assert_eq!(rt.display().last_countdown(), Some("T-01:02"));
    assert_eq!(rt.run_pending(), 0);
}

#[test]
fn tick_follows_clock_hour_style() {
    use wristrocket::clock::HourStyle;

    let queue = CommandQueue::new();
    let mut clock = MockClock::at(21, 0);
    clock.style = Some(HourStyle::H12);
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(WatchConfig::default()),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();
    assert!(
        rt.display()
            .calls
            .contains(&DisplayCall::Time("09".into(), "00".into()))
    );
}

#[test]
fn configured_hour_style_applies_without_platform_preference() {
    use wristrocket::clock::HourStyle;

    let queue = CommandQueue::new();
    let mut clock = MockClock::at(21, 0);
    clock.style = None;
    let config = WatchConfig {
        hour_style: HourStyle::H12,
        ..WatchConfig::default()
    };
    let mut rt = WatchRuntime::new(
        &queue,
        WatchService::new(config),
        &clock,
        MockDisplay::new(),
        MockLink::new(),
        RecordingSink::new(),
    );
    rt.start();
    clock.set(21, 1);
    rt.poll_clock();
    rt.run_pending();
    assert_eq!(
        rt.display().count(|c| *c == DisplayCall::Time("09".into(), "01".into())),
        1
    );
    assert!(
        rt.display()
            .calls
            .contains(&DisplayCall::Time("09".into(), "00".into()))
    );
}
