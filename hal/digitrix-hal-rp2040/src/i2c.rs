//! Blocking I2C master adapter
//!
//! Wraps any `embedded-hal` I2C master (embassy-rp's blocking `I2c` on the
//! board) so the display driver can use it through `digitrix_hal::I2cBus`.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

/// I2C transfer failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge its address
    AddressNack,
    /// Device stopped acknowledging data
    DataNack,
    /// Lost arbitration or bus error
    Bus,
    /// Anything else reported by the peripheral
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cBusError::AddressNack,
            ErrorKind::NoAcknowledge(_) => I2cBusError::DataNack,
            ErrorKind::Bus | ErrorKind::ArbitrationLoss => I2cBusError::Bus,
            _ => I2cBusError::Other,
        }
    }
}

/// Blocking I2C master
pub struct BlockingI2c<I> {
    i2c: I,
}

impl<I: I2c> BlockingI2c<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }
}

impl<I: I2c> digitrix_hal::I2cBus for BlockingI2c<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
