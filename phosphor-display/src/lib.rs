//! SSD1306 OLED text renderer for the Phosphor stack
//!
//! This crate provides:
//! - `Ssd1306` - renderer translating drawing requests (clear, character,
//!   string, number, wide symbol) into the controller's command/data stream
//! - Compiled-in 6x8 and 8x16 ASCII fonts plus a 16x16 symbol table
//!
//! # Architecture
//!
//! The renderer is generic over [`phosphor_core::DisplayTransport`] and owns
//! no frame buffer: each drawing call positions the controller's write
//! cursor and streams glyph columns directly, so a call's cost is exactly
//! the bytes of its own region. Transport failures propagate to the caller
//! unretried; after one, re-run [`Ssd1306::init`] before trusting output.

#![no_std]
#![deny(unsafe_code)]

pub mod fonts;
pub mod ssd1306;

pub use ssd1306::{FontSize, Ssd1306, PAGES, WIDTH};
