//! SSD1306 OLED display renderer
//!
//! Text and glyph renderer for 128x64 SSD1306-based OLED panels, driven
//! through a [`DisplayTransport`]. The controller's RAM is addressed in
//! eight 8-pixel-tall pages; every drawing operation positions the write
//! cursor itself and streams the glyph columns straight to the device.
//! Nothing is buffered on the host side.
//!
//! The renderer holds no drawing state between calls: coordinates are
//! passed explicitly each time, and interleaving calls from several
//! execution contexts will corrupt the addressing protocol. Serialize
//! access externally if the display is shared.

use phosphor_core::{DisplayTransport, TransportError};

use crate::fonts;

/// Display width in pixel columns
pub const WIDTH: u8 = 128;

/// Number of 8-pixel-tall pages
pub const PAGES: u8 = 8;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_AREA_COLOR: u8 = 0xD8;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Character cell height in pixels
///
/// Large glyphs span two pages (8x16 font), small glyphs one page
/// (6x8 font).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 6x8 font, one page tall
    Small,
    /// 8x16 font, two pages tall
    Large,
}

impl FontSize {
    /// Cell height in pixel rows
    pub const fn height(self) -> u8 {
        match self {
            FontSize::Small => 8,
            FontSize::Large => 16,
        }
    }
}

/// 10^n for the decimal digit extraction in [`Ssd1306::show_number`]
fn pow10(n: u8) -> u32 {
    let mut result = 1;
    for _ in 0..n {
        result *= 10;
    }
    result
}

/// SSD1306 renderer over a byte transport
pub struct Ssd1306<T> {
    transport: T,
}

impl<T: DisplayTransport> Ssd1306<T> {
    /// Create a renderer over the given transport
    ///
    /// The bus behind the transport must already be initialized; call
    /// [`init`](Self::init) once before any drawing operation.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Release the underlying transport
    pub fn free(self) -> T {
        self.transport
    }

    /// Initialize the display controller
    ///
    /// Emits the fixed configuration sequence (display off, addressing,
    /// contrast, scan direction, multiplex ratio, oscillator and charge
    /// pump setup, display on) and clears the screen. Every drawing call
    /// assumes this has completed once; a transport failure here leaves
    /// the controller unconfigured and must not be ignored.
    pub fn init(&mut self) -> Result<(), TransportError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_LOW_COLUMN | 0x00,
            cmd::SET_HIGH_COLUMN | 0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_PAGE_ADDR,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::SET_SEG_REMAP, // Flip horizontally
            cmd::SET_NORMAL,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_AREA_COLOR,
            0x05,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.transport.write_command(c)?;
        }

        self.clear()
    }

    /// Set the write cursor to pixel column `x` on page `y`
    ///
    /// Emits exactly the three addressing commands the controller expects:
    /// page select, then the column address split into its high and low
    /// nibbles. Coordinates are not range checked; out-of-range values
    /// produce undefined addressing on the device.
    pub fn set_position(&mut self, x: u8, y: u8) -> Result<(), TransportError> {
        self.transport.write_command(cmd::SET_PAGE_ADDR + y)?;
        self.transport
            .write_command(((x & 0xF0) >> 4) | cmd::SET_HIGH_COLUMN)?;
        self.transport.write_command(x & 0x0F)
    }

    /// Blank the entire display
    ///
    /// Walks all eight pages and writes 128 zero bytes into each.
    pub fn clear(&mut self) -> Result<(), TransportError> {
        for page in 0..PAGES {
            self.set_position(0, page)?;
            for _ in 0..WIDTH {
                self.transport.write_data(0x00)?;
            }
        }
        Ok(())
    }

    /// Draw one character at pixel column `x`, page `y`
    ///
    /// `ch` must be printable ASCII (`' '..='~'`); anything else is out of
    /// contract. Large glyphs occupy pages `y` and `y + 1`, so `y` should
    /// step in twos for that size. If `x` is past the right edge the glyph
    /// wraps to column 0 two pages down.
    pub fn show_char(
        &mut self,
        mut x: u8,
        mut y: u8,
        ch: u8,
        size: FontSize,
    ) -> Result<(), TransportError> {
        let index = (ch - b' ') as usize;
        if x > WIDTH - 1 {
            x = 0;
            y += 2;
        }
        match size {
            FontSize::Large => {
                let glyph = &fonts::FONT_8X16[index];
                self.set_position(x, y)?;
                for &b in &glyph[..8] {
                    self.transport.write_data(b)?;
                }
                self.set_position(x, y + 1)?;
                for &b in &glyph[8..] {
                    self.transport.write_data(b)?;
                }
            }
            FontSize::Small => {
                self.set_position(x, y)?;
                for &b in &fonts::FONT_6X8[index] {
                    self.transport.write_data(b)?;
                }
            }
        }
        Ok(())
    }

    /// Draw a string starting at pixel column `x`, page `y`
    ///
    /// Characters advance by 8 pixel columns each; past column 120 the
    /// cursor wraps to the start of the row two pages down. The caller
    /// keeps its own cursor if it needs to continue after the last glyph.
    pub fn show_string(
        &mut self,
        mut x: u8,
        mut y: u8,
        text: &str,
        size: FontSize,
    ) -> Result<(), TransportError> {
        for ch in text.bytes() {
            self.show_char(x, y, ch, size)?;
            x += 8;
            if x > 120 {
                x = 0;
                y += 2;
            }
        }
        Ok(())
    }

    /// Draw a 16x16 symbol from the wide-glyph table
    ///
    /// `index` addresses the table ([`fonts::wide`] names the shipped
    /// symbols), not a character code. The symbol occupies pages `y` and
    /// `y + 1`.
    pub fn show_wide_glyph(&mut self, x: u8, y: u8, index: u8) -> Result<(), TransportError> {
        let base = 2 * index as usize;
        self.set_position(x, y)?;
        for &b in &fonts::WIDE_16X16[base] {
            self.transport.write_data(b)?;
        }
        self.set_position(x, y + 1)?;
        for &b in &fonts::WIDE_16X16[base + 1] {
            self.transport.write_data(b)?;
        }
        Ok(())
    }

    /// Draw an unsigned decimal number in a fixed-width field
    ///
    /// Renders exactly `width` digit positions starting at `x`, each
    /// advanced by half the cell height. Leading zeros render as blanks,
    /// except the final position which always shows a digit - a zero value
    /// in a width-4 field reads `"   0"`. High-order digits that do not
    /// fit in `width` are dropped by the per-digit modular extraction.
    pub fn show_number(
        &mut self,
        x: u8,
        y: u8,
        value: u32,
        width: u8,
        size: FontSize,
    ) -> Result<(), TransportError> {
        let step = size.height() / 2;
        let mut leading = true;
        for t in 0..width {
            let digit = ((value / pow10(width - t - 1)) % 10) as u8;
            if leading && t < width - 1 {
                if digit == 0 {
                    self.show_char(x + step * t, y, b' ', size)?;
                    continue;
                }
                leading = false;
            }
            self.show_char(x + step * t, y, b'0' + digit, size)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), TransportError> {
        self.transport.write_command(cmd::SET_CONTRAST)?;
        self.transport.write_command(contrast)
    }

    /// Turn the panel on or off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), TransportError> {
        if on {
            self.transport.write_command(cmd::DISPLAY_ON)
        } else {
            self.transport.write_command(cmd::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), TransportError> {
        if inverted {
            self.transport.write_command(cmd::SET_INVERSE)
        } else {
            self.transport.write_command(cmd::SET_NORMAL)
        }
    }
}
