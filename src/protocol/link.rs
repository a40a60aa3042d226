//! Framed link: JSON payloads over any byte [`Transport`].
//!
//! Outbound: request → JSON → length-prefix frame → transport.
//! Inbound:  transport → frame decoder → JSON → [`InboundMessage`].
//!
//! Malformed inbound frames are logged and skipped; the link itself
//! never retries a failed write.

use log::{debug, warn};

use crate::app::ports::{RequestPort, TransportError};
use crate::config::WatchConfig;
use crate::error::Result;
use crate::sync::SyncRequest;

use super::codec::{FrameDecoder, HEADER_SIZE, encode_frame};
use super::message::{CodecError, InboundMessage, encode_request};
use super::transport::Transport;

const READ_CHUNK: usize = 256;

/// A paired-device link carrying framed JSON payloads.
pub struct FramedLink<T: Transport> {
    transport: T,
    decoder: FrameDecoder,
    outbox_size: usize,
    rx_buf: [u8; READ_CHUNK],
}

impl<T: Transport> FramedLink<T> {
    /// Link sized from the configured inbox / outbox.
    pub fn new(transport: T, config: &WatchConfig) -> Self {
        Self {
            transport,
            decoder: FrameDecoder::with_limit(config.inbox_size as usize),
            outbox_size: config.outbox_size as usize,
            rx_buf: [0; READ_CHUNK],
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Frame and write one payload.
    pub fn send_payload(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > self.outbox_size {
            return Err(CodecError::FrameTooLarge.into());
        }
        let mut frame = vec![0u8; HEADER_SIZE + payload.len()];
        let len = encode_frame(payload, &mut frame).ok_or(CodecError::FrameTooLarge)?;

        let mut written = 0;
        while written < len {
            let n = self.transport.write(&frame[written..len])?;
            if n == 0 {
                return Err(TransportError::Io.into());
            }
            written += n;
        }
        self.transport.flush()?;
        Ok(())
    }

    /// Read whatever the transport has and decode every complete frame.
    pub fn poll_inbound(&mut self) -> Vec<InboundMessage> {
        let mut messages = Vec::new();
        while self.transport.available() {
            let len = match self.transport.read(&mut self.rx_buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    warn!("link: read failed: {}", e);
                    break;
                }
            };

            let mut pos = 0;
            while pos < len {
                let (used, frame) = self.decoder.feed(&self.rx_buf[pos..len]);
                pos += used;
                if let Some(payload) = frame {
                    match InboundMessage::decode(payload) {
                        Ok(msg) => messages.push(msg),
                        Err(e) => warn!("link: dropping inbound frame: {}", e),
                    }
                }
            }
        }
        messages
    }

    /// Drop any partially received frame (e.g. after reconnect).
    pub fn reset(&mut self) {
        self.decoder.reset();
    }
}

impl<T: Transport> RequestPort for FramedLink<T> {
    fn send(&mut self, request: SyncRequest) -> core::result::Result<(), TransportError> {
        let payload = encode_request(request).map_err(|_| TransportError::Rejected)?;
        debug!("link: sending {} request ({} bytes)", request, payload.len());
        self.send_payload(&payload).map_err(|e| match e {
            crate::error::Error::Transport(t) => t,
            _ => TransportError::Rejected,
        })
    }
}
