//! Fuzz target: `InboundMessage::decode`
//!
//! Any payload either fails with a typed error or yields a message that
//! re-encodes and decodes to itself.
//!
//! cargo fuzz run fuzz_inbound_message

#![no_main]

use libfuzzer_sys::fuzz_target;
use wristrocket::protocol::message::InboundMessage;

fuzz_target!(|data: &[u8]| {
    let Ok(msg) = InboundMessage::decode(data) else {
        return;
    };
    if msg.observation().is_some() {
        assert!(msg.temperature.is_some() && msg.conditions.is_some());
    }
    if let Ok(bytes) = msg.encode() {
        assert_eq!(InboundMessage::decode(&bytes), Ok(msg));
    }
});
