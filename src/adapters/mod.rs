//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                |
//! |----------------|--------------|----------------------------|
//! | `log_display`  | DisplaySink  | Logger (headless screen)   |
//! | `log_sink`     | EventSink    | Logger                     |
//! | `memory_store` | ConfigPort   | postcard blob in RAM       |
//! | `time`         | ClockPort    | Host local wall clock      |
//!
//! The paired-device link is [`FramedLink`](crate::protocol::link::FramedLink),
//! which implements `RequestPort` over any byte transport.

pub mod log_display;
pub mod log_sink;
pub mod memory_store;
pub mod time;
