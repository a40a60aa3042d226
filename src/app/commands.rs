//! Inbound commands to the watch service.
//!
//! Everything the outside world can hand the core: minute ticks from the
//! clock, messages from the paired device, and delivery reports from the
//! transport.  The [`WatchRuntime`](super::runtime::WatchRuntime) queues
//! these and processes them one at a time.

use core::fmt;

use crate::clock::WallTime;
use crate::protocol::message::InboundMessage;

/// Commands that adapters send into the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Once-per-minute tick carrying the current wall time.
    Tick(WallTime),

    /// A message delivered by the paired device.
    Inbound(InboundMessage),

    /// Advisory delivery report from the transport.
    Delivery(DeliveryReport),
}

/// Transport delivery outcomes.  Logged only; never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryReport {
    /// An inbound message was dropped before reaching the core.
    InboxDropped,
    /// An outbound request could not be delivered.
    OutboxFailed,
    /// An outbound request was acknowledged.
    OutboxSent,
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InboxDropped => write!(f, "message dropped"),
            Self::OutboxFailed => write!(f, "outbox send failed"),
            Self::OutboxSent => write!(f, "outbox send success"),
        }
    }
}
