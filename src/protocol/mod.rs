//! Paired-device messaging.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Messaging Stack                        │
//! │                                                            │
//! │  ┌───────────┐   ┌──────────┐   ┌───────────────────────┐  │
//! │  │ Transport │──▶│  Codec   │──▶│  Message (JSON)       │  │
//! │  │ (trait)   │   │ (framing)│   │  → InboundMessage     │  │
//! │  └───────────┘   └──────────┘   └───────────────────────┘  │
//! │        ▲                                                   │
//! │        │          FramedLink (RequestPort)                 │
//! │        └──────────── SyncRequest → {"message_type":..}     │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod codec;
pub mod link;
pub mod message;
pub mod transport;
