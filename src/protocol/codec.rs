//! Length-prefix frame codec for byte-oriented links.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────────┐
//! │ Length (4B)│ JSON payload (N B)       │
//! │ LE u32     │                          │
//! └────────────┴──────────────────────────┘
//! ```
//!
//! The decoder accumulates incoming bytes and yields complete payloads.
//! A single `Transport::read` may return part of the header, part of the
//! payload, or several frames back to back.

/// Hard ceiling on any frame payload (matches the largest accepted inbox).
pub const MAX_FRAME_SIZE: usize = 4096;

/// Frame header size (4-byte little-endian length).
pub const HEADER_SIZE: usize = 4;

enum DecoderState {
    ReadingHeader { collected: usize },
    ReadingPayload { expected: usize, collected: usize },
    /// Draining the payload of an oversize frame.
    Skipping { remaining: usize },
}

/// Streaming frame decoder.
pub struct FrameDecoder {
    state: DecoderState,
    limit: usize,
    header_buf: [u8; HEADER_SIZE],
    payload_buf: [u8; MAX_FRAME_SIZE],
    discarded: u32,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::with_limit(MAX_FRAME_SIZE)
    }

    /// Decoder that discards frames larger than `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            state: DecoderState::ReadingHeader { collected: 0 },
            limit: limit.clamp(1, MAX_FRAME_SIZE),
            header_buf: [0; HEADER_SIZE],
            payload_buf: [0; MAX_FRAME_SIZE],
            discarded: 0,
        }
    }

    /// Feed bytes into the decoder.
    ///
    /// Returns the number of bytes consumed and, when a frame completed,
    /// its payload.  Bytes after a completed frame are left unconsumed so
    /// the caller can feed them again.
    pub fn feed<'a>(&'a mut self, data: &[u8]) -> (usize, Option<&'a [u8]>) {
        let mut offset = 0;

        while offset < data.len() {
            match &mut self.state {
                DecoderState::ReadingHeader { collected } => {
                    let to_copy = (HEADER_SIZE - *collected).min(data.len() - offset);
                    self.header_buf[*collected..*collected + to_copy]
                        .copy_from_slice(&data[offset..offset + to_copy]);
                    *collected += to_copy;
                    offset += to_copy;

                    if *collected == HEADER_SIZE {
                        let expected = u32::from_le_bytes(self.header_buf) as usize;
                        if expected == 0 {
                            self.discarded = self.discarded.saturating_add(1);
                            self.state = DecoderState::ReadingHeader { collected: 0 };
                            continue;
                        }
                        if expected > self.limit {
                            // Oversize: drop its payload, then resync on the next header.
                            self.discarded = self.discarded.saturating_add(1);
                            self.state = DecoderState::Skipping { remaining: expected };
                            continue;
                        }
                        self.state = DecoderState::ReadingPayload {
                            expected,
                            collected: 0,
                        };
                    }
                }

                DecoderState::Skipping { remaining } => {
                    let to_skip = (*remaining).min(data.len() - offset);
                    *remaining -= to_skip;
                    offset += to_skip;
                    if *remaining == 0 {
                        self.state = DecoderState::ReadingHeader { collected: 0 };
                    }
                }

                DecoderState::ReadingPayload { expected, collected } => {
                    let to_copy = (*expected - *collected).min(data.len() - offset);
                    self.payload_buf[*collected..*collected + to_copy]
                        .copy_from_slice(&data[offset..offset + to_copy]);
                    *collected += to_copy;
                    offset += to_copy;

                    if *collected == *expected {
                        let len = *expected;
                        self.state = DecoderState::ReadingHeader { collected: 0 };
                        return (offset, Some(&self.payload_buf[..len]));
                    }
                }
            }
        }

        (offset, None)
    }

    /// Reset decoder state (e.g. after the paired device reconnects).
    pub fn reset(&mut self) {
        self.state = DecoderState::ReadingHeader { collected: 0 };
    }

    /// Headers rejected as zero-length or oversize since creation.
    pub fn discarded(&self) -> u32 {
        self.discarded
    }
}

/// Encode a payload into a length-prefixed frame.
///
/// Writes `[LE-u32 length][payload]` into `out_buf`.
/// Returns the total number of bytes written.
pub fn encode_frame(payload: &[u8], out_buf: &mut [u8]) -> Option<usize> {
    let total = HEADER_SIZE + payload.len();
    if total > out_buf.len() || payload.is_empty() || payload.len() > MAX_FRAME_SIZE {
        return None;
    }

    let len_bytes = (payload.len() as u32).to_le_bytes();
    out_buf[..HEADER_SIZE].copy_from_slice(&len_bytes);
    out_buf[HEADER_SIZE..total].copy_from_slice(payload);

    Some(total)
}
