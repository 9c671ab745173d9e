//! Transport implementations for the Phosphor OLED stack
//!
//! This crate provides concrete [`phosphor_core::DisplayTransport`]
//! implementations for the buses these panels actually hang off:
//!
//! - I2C (the common 4-pin breakout modules)
//!
//! Bus bring-up (clocks, pull-ups, speed) stays with the platform; a
//! transport is handed an already-working bus handle.

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::I2cTransport;
