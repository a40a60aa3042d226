//! Companion side: what the paired device sends back.
//!
//! The phone answers every request by fetching the next launch from its
//! feed and replying with the minutes remaining and the rocket name.
//! These helpers build those replies so tests and bench tools can play
//! the paired device without a phone.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::protocol::message::{CodecError, InboundMessage};

const MS_PER_MINUTE: i64 = 60_000;

#[derive(Deserialize)]
struct LaunchFeed {
    #[serde(default)]
    documents: Option<Vec<LaunchDocument>>,
}

#[derive(Deserialize)]
struct LaunchDocument {
    /// No-earlier-than launch time, RFC 3339.
    net: String,
    rocket: String,
}

/// Whole minutes from `now` until `net`, rounding halves upwards.
///
/// Negative once the launch time has passed.
pub fn minutes_until(net: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    let ms = (net - now).num_milliseconds();
    let minutes = (ms + MS_PER_MINUTE / 2).div_euclid(MS_PER_MINUTE);
    minutes.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Launch sync reply: countdown plus rocket name.
pub fn launch_sync(net: DateTime<Utc>, now: DateTime<Utc>, rocket: &str) -> InboundMessage {
    InboundMessage {
        minutes_to_launch: Some(minutes_until(net, now)),
        rocket_name: Some(rocket.to_owned()),
        ..InboundMessage::default()
    }
}

/// Weather reply: units plus a complete observation.
pub fn weather_report(temperature: i32, conditions: i32, units: &str) -> InboundMessage {
    InboundMessage {
        temperature: Some(temperature),
        conditions: Some(conditions),
        units: Some(units.to_owned()),
        ..InboundMessage::default()
    }
}

/// Turn a launch feed response into a sync reply for its first launch.
///
/// Feed shape: `{"documents":[{"net":"<RFC 3339>","rocket":"..."}]}`.
/// Returns `Ok(None)` when the feed lists no launch.
pub fn parse_launch_feed(json: &str, now: DateTime<Utc>) -> Result<Option<InboundMessage>> {
    let feed: LaunchFeed = serde_json::from_str(json).map_err(|_| CodecError::Malformed)?;
    let Some(doc) = feed.documents.as_deref().and_then(<[LaunchDocument]>::first) else {
        return Ok(None);
    };
    let net = DateTime::parse_from_rfc3339(&doc.net)
        .map_err(|_| CodecError::Malformed)?
        .with_timezone(&Utc);
    Ok(Some(launch_sync(net, now, &doc.rocket)))
}
