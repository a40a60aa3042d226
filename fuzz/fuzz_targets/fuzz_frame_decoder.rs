//! Fuzz target: `FrameDecoder::feed`
//!
//! Drives arbitrary byte sequences through the streaming frame decoder,
//! including every remainder left after a completed frame.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use wristrocket::protocol::codec::{FrameDecoder, MAX_FRAME_SIZE};

fuzz_target!(|data: &[u8]| {
    let mut decoder = FrameDecoder::with_limit(256);

    let mut pos = 0;
    while pos < data.len() {
        let (used, payload) = decoder.feed(&data[pos..]);
        if let Some(payload) = payload {
            assert!(payload.len() <= 256, "payload exceeds configured limit");
            assert!(!payload.is_empty(), "decoder must not yield empty payload");
        }
        assert!(used > 0, "decoder must make progress");
        pos += used;
    }

    decoder.reset();
    let (used, payload) = decoder.feed(data);
    assert!(used <= data.len());
    assert!(payload.is_none_or(|p| p.len() <= MAX_FRAME_SIZE));
});
