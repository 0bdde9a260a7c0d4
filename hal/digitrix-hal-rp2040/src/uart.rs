//! Polled UART receive
//!
//! The board's buffered UART fills a ring buffer from its interrupt; this
//! adapter drains it one byte at a time without ever waiting.

use embedded_io::{Error as _, ErrorKind, Read, ReadReady};

/// UART receive failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Receive FIFO or ring buffer overflowed
    Overrun,
    /// Framing, parity or break condition
    Line,
    Other,
}

impl From<ErrorKind> for UartError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::OutOfMemory => UartError::Overrun,
            ErrorKind::InvalidData => UartError::Line,
            _ => UartError::Other,
        }
    }
}

/// Non-blocking byte source over a buffered reader
pub struct PolledRx<R> {
    rx: R,
}

impl<R: Read + ReadReady> PolledRx<R> {
    pub fn new(rx: R) -> Self {
        Self { rx }
    }
}

impl<R: Read + ReadReady> digitrix_hal::UartRx for PolledRx<R> {
    type Error = UartError;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let ready = self.rx.read_ready().map_err(|e| UartError::from(e.kind()))?;
        if !ready {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(e) => Err(UartError::from(e.kind())),
        }
    }
}
