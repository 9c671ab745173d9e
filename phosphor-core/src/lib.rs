//! Transport contract for the Phosphor OLED stack
//!
//! This crate defines the byte-oriented channel between a display renderer
//! and the physical display controller:
//!
//! - `DisplayTransport` trait - delivers single command/data bytes in order
//! - `ByteKind` - the controller-level command vs. data distinction
//! - `TransportError` - the failure taxonomy surfaced to renderer callers
//!
//! Renderers stay independent of the bus (I2C, SPI, bit-banged GPIO); bus
//! setup itself is the platform's responsibility and happens before the
//! renderer is handed its transport.

#![no_std]
#![deny(unsafe_code)]

pub mod transport;

pub use transport::{ByteKind, DisplayTransport, TransportError};
