//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the watchface: the watch
//! service, its event-processing actor and the commands/events crossing
//! the boundary.  All interaction with the platform happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without a real screen or paired device.

pub mod commands;
pub mod events;
pub mod ports;
pub mod runtime;
pub mod service;
