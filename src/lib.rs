//! WristRocket watchface core.
//!
//! Tracks a countdown to the next launch, reconciles it against the
//! paired device, and shows weather once the device starts sending it.
//! Rendering and platform bootstrap live outside this crate behind the
//! port traits in [`app::ports`].
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LogDisplay      LogEventSink     MemoryConfigStore            │
//! │  (DisplaySink)   (EventSink)      (ConfigPort)                 │
//! │  SystemClock     FramedLink<T: Transport>                      │
//! │  (ClockPort)     (RequestPort + inbound frames)                │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │        WatchRuntime (single event-processing actor)    │    │
//! │  │   WatchService · CountdownState · WeatherState ·       │    │
//! │  │   SyncPolicy                                           │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod clock;
pub mod companion;
pub mod config;
pub mod error;
pub mod protocol;
pub mod sync;
