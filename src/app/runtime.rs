//! Event-processing actor.
//!
//! One logical actor owns the [`WatchService`] and every port.  Ticks,
//! inbound messages and delivery reports are queued on a bounded
//! `embassy-sync` channel and processed strictly one at a time, to
//! completion, in FIFO order.  No handler ever observes a partial update.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Clock tick  │────▶│              │     │                  │
//! │ Link inbox  │────▶│ CommandQueue │────▶│  WatchRuntime    │
//! │ Delivery    │────▶│  (bounded)   │     │  (single actor)  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! Producers share `&CommandQueue`; the queue is a plain value owned by
//! the platform, not a static.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::clock::MinuteTicker;
use crate::protocol::link::FramedLink;
use crate::protocol::transport::Transport;

use super::commands::AppCommand;
use super::ports::{ClockPort, DisplaySink, EventSink, RequestPort};
use super::service::WatchService;

/// Maximum number of pending commands.
pub const QUEUE_DEPTH: usize = 16;

/// Single-threaded command queue shared by all producers.
pub type CommandQueue = Channel<NoopRawMutex, AppCommand, QUEUE_DEPTH>;

/// Queue a command.  Returns `false` if the queue is full (command dropped).
pub fn post(queue: &CommandQueue, cmd: AppCommand) -> bool {
    match queue.try_send(cmd) {
        Ok(()) => true,
        Err(_) => {
            warn!("Command queue full, dropping command");
            false
        }
    }
}

/// The actor: service + ports + the queue it drains.
pub struct WatchRuntime<'q, C, D, L, E> {
    queue: &'q CommandQueue,
    service: WatchService,
    clock: C,
    display: D,
    link: L,
    sink: E,
    ticker: MinuteTicker,
}

impl<'q, C, D, L, E> WatchRuntime<'q, C, D, L, E>
where
    C: ClockPort,
    D: DisplaySink,
    L: RequestPort,
    E: EventSink,
{
    pub fn new(
        queue: &'q CommandQueue,
        service: WatchService,
        clock: C,
        display: D,
        link: L,
        sink: E,
    ) -> Self {
        Self {
            queue,
            service,
            clock,
            display,
            link,
            sink,
            ticker: MinuteTicker::new(),
        }
    }

    /// Render the start-up screen and arm the minute ticker.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.follow_clock_style();
        self.service.start(now, &mut self.display, &mut self.sink);
        self.ticker.prime(now);
    }

    /// Queue a command on this runtime's queue.
    pub fn post(&self, cmd: AppCommand) -> bool {
        post(self.queue, cmd)
    }

    /// Sample the clock and queue a tick if a new minute has begun.
    pub fn poll_clock(&mut self) -> bool {
        match self.ticker.poll(self.clock.now()) {
            Some(now) => post(self.queue, AppCommand::Tick(now)),
            None => false,
        }
    }

    /// Process every queued command.  Returns how many were handled.
    pub fn run_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(cmd) = self.queue.try_receive() {
            self.dispatch(cmd);
            handled += 1;
        }
        handled
    }

    /// Wait for the next command and process it.
    pub async fn run_next(&mut self) {
        let cmd = self.queue.receive().await;
        self.dispatch(cmd);
    }

    /// Block the calling thread until one command has been processed.
    pub fn process_blocking(&mut self) {
        futures_lite::future::block_on(self.run_next());
    }

    pub fn service(&self) -> &WatchService {
        &self.service
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Platform preference wins; otherwise the configured style stays.
    fn follow_clock_style(&mut self) {
        if let Some(style) = self.clock.hour_style() {
            self.service.set_hour_style(style);
        }
    }

    fn dispatch(&mut self, cmd: AppCommand) {
        if matches!(cmd, AppCommand::Tick(_)) {
            self.follow_clock_style();
        }
        self.service
            .handle_command(cmd, &mut self.display, &mut self.link, &mut self.sink);
    }
}

impl<C, D, T, E> WatchRuntime<'_, C, D, FramedLink<T>, E>
where
    C: ClockPort,
    D: DisplaySink,
    T: Transport,
    E: EventSink,
{
    /// Pull decoded messages off the link and queue them.
    /// Returns how many were queued.
    pub fn poll_link(&mut self) -> usize {
        let mut queued = 0;
        for msg in self.link.poll_inbound() {
            if post(self.queue, AppCommand::Inbound(msg)) {
                queued += 1;
            }
        }
        queued
    }
}
