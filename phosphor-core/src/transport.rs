//! Byte-oriented display transport trait
//!
//! Page-addressed OLED controllers accept a stream of single bytes, each
//! tagged as either a command (addressing, configuration) or data (pixel
//! content). This module defines that channel as a trait so the renderer
//! can be driven over any bus an implementation provides.

/// Tag distinguishing controller command bytes from pixel data bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKind {
    /// Configuration or addressing byte
    Command,
    /// Display RAM content byte
    Data,
}

/// Errors that can occur while delivering a byte to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Device did not acknowledge the byte
    Nack,
    /// Bus-level fault (arbitration loss, line stuck, controller error)
    Bus,
    /// Transaction did not complete in time
    Timeout,
}

/// Single-byte channel to a display controller
///
/// Implementations must deliver bytes to the device in the exact order they
/// are submitted. A failed write leaves the controller's addressing state
/// unknown; callers are expected to re-run the display init sequence before
/// trusting further output.
///
/// Transports are not safe for concurrent use against one physical display.
/// If several execution contexts share a display, wrap the renderer in an
/// external mutual-exclusion guard or confine all drawing to one task.
pub trait DisplayTransport {
    /// Send one byte, tagged as command or data
    fn write_byte(&mut self, byte: u8, kind: ByteKind) -> Result<(), TransportError>;

    /// Send one command byte
    fn write_command(&mut self, byte: u8) -> Result<(), TransportError> {
        self.write_byte(byte, ByteKind::Command)
    }

    /// Send one data byte
    fn write_data(&mut self, byte: u8) -> Result<(), TransportError> {
        self.write_byte(byte, ByteKind::Data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockTransport {
        log: heapless::Vec<(u8, ByteKind), 16>,
    }

    impl DisplayTransport for MockTransport {
        fn write_byte(&mut self, byte: u8, kind: ByteKind) -> Result<(), TransportError> {
            self.log
                .push((byte, kind))
                .map_err(|_| TransportError::Bus)
        }
    }

    #[test]
    fn test_helpers_tag_bytes() {
        let mut t = MockTransport::default();
        t.write_command(0xAE).unwrap();
        t.write_data(0x55).unwrap();
        assert_eq!(
            t.log.as_slice(),
            &[(0xAE, ByteKind::Command), (0x55, ByteKind::Data)]
        );
    }

    #[test]
    fn test_errors_propagate_from_write() {
        struct DeadBus;
        impl DisplayTransport for DeadBus {
            fn write_byte(&mut self, _byte: u8, _kind: ByteKind) -> Result<(), TransportError> {
                Err(TransportError::Nack)
            }
        }

        let mut t = DeadBus;
        assert_eq!(t.write_command(0xAE), Err(TransportError::Nack));
        assert_eq!(t.write_data(0x00), Err(TransportError::Nack));
    }
}
