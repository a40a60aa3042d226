//! Transport abstraction: any byte-oriented channel to the paired device.
//!
//! Concrete implementations live with the platform:
//! - BLE characteristic (write + notify)
//! - UART / USB CDC (bench testing)
//! - In-memory loopback (tests)
//!
//! [`FramedLink`](super::link::FramedLink) is generic over `Transport`,
//! so adding a new link requires zero changes to the framing logic.

use crate::app::ports::TransportError;

/// Byte-oriented transport channel.
pub trait Transport {
    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, TransportError>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), TransportError>;

    /// Check if data is available for reading.
    fn available(&self) -> bool;
}

/// A transport with no paired device: writes fail, reads are empty.
pub struct NullTransport;

impl Transport for NullTransport {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, TransportError> {
        Ok(0)
    }

    fn write(&mut self, _data: &[u8]) -> Result<usize, TransportError> {
        Err(TransportError::Disconnected)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn available(&self) -> bool {
        false
    }
}
