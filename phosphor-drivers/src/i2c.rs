//! I2C display transport
//!
//! SSD1306 modules on I2C frame every byte as a two-byte write: a control
//! byte selecting command (0x00) or data (0x40) mode, then the byte itself.
//! The device address is 0x3C on most breakouts, 0x3D on parts with the
//! address strap pulled high.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use phosphor_core::{ByteKind, DisplayTransport, TransportError};

/// I2C address of most SSD1306 modules
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command byte
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a data byte
const CONTROL_DATA: u8 = 0x40;

/// [`DisplayTransport`] over a blocking I2C bus
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C> {
    /// Create a transport to a display at the default address (0x3C)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a transport to a display at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the underlying bus handle
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayTransport for I2cTransport<I2C> {
    fn write_byte(&mut self, byte: u8, kind: ByteKind) -> Result<(), TransportError> {
        let control = match kind {
            ByteKind::Command => CONTROL_COMMAND,
            ByteKind::Data => CONTROL_DATA,
        };
        self.i2c
            .write(self.address, &[control, byte])
            .map_err(|e| match e.kind() {
                ErrorKind::NoAcknowledge(_) => TransportError::Nack,
                _ => TransportError::Bus,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug)]
    struct MockError(ErrorKind);

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// I2C bus that logs writes, optionally failing every transaction
    #[derive(Default)]
    struct MockBus {
        writes: heapless::Vec<(u8, heapless::Vec<u8, 4>), 8>,
        fail_with: Option<ErrorKind>,
    }

    impl ErrorType for MockBus {
        type Error = MockError;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail_with {
                return Err(MockError(kind));
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes
                        .push((address, heapless::Vec::from_slice(*bytes).unwrap()))
                        .unwrap();
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_command_bytes_get_control_prefix() {
        let mut transport = I2cTransport::new(MockBus::default());
        transport.write_byte(0xAE, ByteKind::Command).unwrap();
        let bus = transport.free();
        assert_eq!(bus.writes.len(), 1);
        assert_eq!(bus.writes[0].0, DEFAULT_ADDRESS);
        assert_eq!(bus.writes[0].1.as_slice(), &[0x00, 0xAE]);
    }

    #[test]
    fn test_data_bytes_get_control_prefix() {
        let mut transport = I2cTransport::new(MockBus::default());
        transport.write_byte(0x55, ByteKind::Data).unwrap();
        let bus = transport.free();
        assert_eq!(bus.writes[0].1.as_slice(), &[0x40, 0x55]);
    }

    #[test]
    fn test_alternate_address() {
        let mut transport = I2cTransport::with_address(MockBus::default(), 0x3D);
        transport.write_command(0xAF).unwrap();
        let bus = transport.free();
        assert_eq!(bus.writes[0].0, 0x3D);
    }

    #[test]
    fn test_bus_errors_map_to_transport_errors() {
        let nack = MockBus {
            fail_with: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            ..Default::default()
        };
        let mut transport = I2cTransport::new(nack);
        assert_eq!(
            transport.write_byte(0x00, ByteKind::Command),
            Err(TransportError::Nack)
        );

        let fault = MockBus {
            fail_with: Some(ErrorKind::ArbitrationLoss),
            ..Default::default()
        };
        let mut transport = I2cTransport::new(fault);
        assert_eq!(
            transport.write_byte(0x00, ByteKind::Data),
            Err(TransportError::Bus)
        );
    }
}
