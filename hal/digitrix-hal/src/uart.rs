//! UART serial receive abstraction
//!
//! The firmware only ever consumes single characters and must never block
//! waiting for one, so the receive side is expressed as a poll.

/// Non-blocking UART receiver
pub trait UartRx {
    /// Error type for receive operations (overrun, framing, ...)
    type Error;

    /// Take one received byte if one is available
    ///
    /// Returns `Ok(None)` immediately when nothing has been received.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted<'a> {
        bytes: &'a [u8],
    }

    impl UartRx for Scripted<'_> {
        type Error = ();

        fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
            match self.bytes.split_first() {
                Some((&b, rest)) => {
                    self.bytes = rest;
                    Ok(Some(b))
                }
                None => Ok(None),
            }
        }
    }

    #[test]
    fn test_poll_drains_then_idles() {
        let mut rx = Scripted { bytes: b"7x" };
        assert_eq!(rx.try_read_byte(), Ok(Some(b'7')));
        assert_eq!(rx.try_read_byte(), Ok(Some(b'x')));
        assert_eq!(rx.try_read_byte(), Ok(None));
        assert_eq!(rx.try_read_byte(), Ok(None));
    }
}
