//! Compiled-in bitmap fonts
//!
//! Glyph data is stored the way the controller consumes it: column bytes in
//! page format, bit 0 at the top pixel row of the page. The ASCII tables
//! cover the printable range and are indexed by `byte - b' '`.

/// 6x8 ASCII font, printable range `' '..='~'` (95 glyphs).
///
/// Each glyph is 6 column bytes in page format: bit 0 is the top
/// pixel row, bit 7 the bottom.
pub const FONT_6X8: [[u8; 6]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x06, 0x5F, 0x5F, 0x06], // '!'
    [0x00, 0x03, 0x03, 0x00, 0x03, 0x03], // '"'
    [0x14, 0x7F, 0x7F, 0x14, 0x7F, 0x7F], // '#'
    [0x24, 0x2E, 0x6B, 0x6B, 0x3A, 0x12], // '$'
    [0x46, 0x66, 0x30, 0x18, 0x0C, 0x66], // '%'
    [0x30, 0x7A, 0x4F, 0x5D, 0x37, 0x7A], // '&'
    [0x04, 0x07, 0x03, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x3E, 0x63, 0x41, 0x00], // '('
    [0x00, 0x41, 0x63, 0x3E, 0x1C, 0x00], // ')'
    [0x08, 0x2A, 0x3E, 0x1C, 0x1C, 0x3E], // '*'
    [0x08, 0x08, 0x3E, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x80, 0xE0, 0x60, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03], // '/'
    [0x3E, 0x7F, 0x71, 0x59, 0x4D, 0x7F], // '0'
    [0x40, 0x42, 0x7F, 0x7F, 0x40, 0x40], // '1'
    [0x62, 0x73, 0x59, 0x49, 0x6F, 0x66], // '2'
    [0x22, 0x63, 0x49, 0x49, 0x7F, 0x36], // '3'
    [0x18, 0x1C, 0x16, 0x53, 0x7F, 0x7F], // '4'
    [0x27, 0x67, 0x45, 0x45, 0x7D, 0x39], // '5'
    [0x3C, 0x7E, 0x4B, 0x49, 0x79, 0x30], // '6'
    [0x03, 0x03, 0x71, 0x79, 0x0F, 0x07], // '7'
    [0x36, 0x7F, 0x49, 0x49, 0x7F, 0x36], // '8'
    [0x06, 0x4F, 0x49, 0x69, 0x3F, 0x1E], // '9'
    [0x00, 0x00, 0x66, 0x66, 0x00, 0x00], // ':'
    [0x00, 0x80, 0xE6, 0x66, 0x00, 0x00], // ';'
    [0x08, 0x1C, 0x36, 0x63, 0x41, 0x00], // '<'
    [0x24, 0x24, 0x24, 0x24, 0x24, 0x24], // '='
    [0x00, 0x41, 0x63, 0x36, 0x1C, 0x08], // '>'
    [0x02, 0x03, 0x51, 0x59, 0x0F, 0x06], // '?'
    [0x3E, 0x7F, 0x41, 0x5D, 0x5D, 0x1F], // '@'
    [0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C], // 'A'
    [0x41, 0x7F, 0x7F, 0x49, 0x49, 0x7F], // 'B'
    [0x1C, 0x3E, 0x63, 0x41, 0x41, 0x63], // 'C'
    [0x41, 0x7F, 0x7F, 0x41, 0x63, 0x3E], // 'D'
    [0x41, 0x7F, 0x7F, 0x49, 0x5D, 0x41], // 'E'
    [0x41, 0x7F, 0x7F, 0x49, 0x1D, 0x01], // 'F'
    [0x1C, 0x3E, 0x63, 0x41, 0x51, 0x73], // 'G'
    [0x7F, 0x7F, 0x08, 0x08, 0x7F, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x7F, 0x41, 0x00], // 'I'
    [0x30, 0x70, 0x40, 0x41, 0x7F, 0x3F], // 'J'
    [0x41, 0x7F, 0x7F, 0x08, 0x1C, 0x77], // 'K'
    [0x41, 0x7F, 0x7F, 0x41, 0x40, 0x60], // 'L'
    [0x7F, 0x7F, 0x0E, 0x1C, 0x0E, 0x7F], // 'M'
    [0x7F, 0x7F, 0x06, 0x0C, 0x18, 0x7F], // 'N'
    [0x1C, 0x3E, 0x63, 0x41, 0x63, 0x3E], // 'O'
    [0x41, 0x7F, 0x7F, 0x49, 0x09, 0x0F], // 'P'
    [0x1E, 0x3F, 0x21, 0x71, 0x7F, 0x5E], // 'Q'
    [0x41, 0x7F, 0x7F, 0x09, 0x19, 0x7F], // 'R'
    [0x26, 0x6F, 0x4D, 0x59, 0x73, 0x32], // 'S'
    [0x03, 0x41, 0x7F, 0x7F, 0x41, 0x03], // 'T'
    [0x7F, 0x7F, 0x40, 0x40, 0x7F, 0x7F], // 'U'
    [0x1F, 0x3F, 0x60, 0x60, 0x3F, 0x1F], // 'V'
    [0x7F, 0x7F, 0x30, 0x18, 0x30, 0x7F], // 'W'
    [0x43, 0x67, 0x3C, 0x18, 0x3C, 0x67], // 'X'
    [0x07, 0x4F, 0x78, 0x78, 0x4F, 0x07], // 'Y'
    [0x47, 0x63, 0x71, 0x59, 0x4D, 0x67], // 'Z'
    [0x00, 0x7F, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x01, 0x03, 0x06, 0x0C, 0x18, 0x30], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x7F, 0x00], // ']'
    [0x08, 0x0C, 0x06, 0x03, 0x06, 0x0C], // '^'
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80], // '_'
    [0x00, 0x00, 0x03, 0x07, 0x04, 0x00], // '`'
    [0x20, 0x74, 0x54, 0x54, 0x3C, 0x78], // 'a'
    [0x41, 0x7F, 0x3F, 0x48, 0x48, 0x78], // 'b'
    [0x38, 0x7C, 0x44, 0x44, 0x6C, 0x28], // 'c'
    [0x30, 0x78, 0x48, 0x49, 0x3F, 0x7F], // 'd'
    [0x38, 0x7C, 0x54, 0x54, 0x5C, 0x18], // 'e'
    [0x48, 0x7E, 0x7F, 0x49, 0x03, 0x02], // 'f'
    [0x98, 0xBC, 0xA4, 0xA4, 0xF8, 0x7C], // 'g'
    [0x41, 0x7F, 0x7F, 0x08, 0x04, 0x7C], // 'h'
    [0x00, 0x44, 0x7D, 0x7D, 0x40, 0x00], // 'i'
    [0x60, 0xE0, 0x80, 0x80, 0xFD, 0x7D], // 'j'
    [0x41, 0x7F, 0x7F, 0x10, 0x38, 0x6C], // 'k'
    [0x00, 0x41, 0x7F, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x7C, 0x18, 0x38, 0x1C, 0x7C], // 'm'
    [0x7C, 0x7C, 0x04, 0x04, 0x7C, 0x78], // 'n'
    [0x38, 0x7C, 0x44, 0x44, 0x7C, 0x38], // 'o'
    [0x84, 0xFC, 0xF8, 0xA4, 0x24, 0x3C], // 'p'
    [0x18, 0x3C, 0x24, 0xA4, 0xF8, 0xFC], // 'q'
    [0x44, 0x7C, 0x78, 0x4C, 0x04, 0x1C], // 'r'
    [0x48, 0x5C, 0x54, 0x54, 0x74, 0x24], // 's'
    [0x00, 0x04, 0x3E, 0x7F, 0x44, 0x24], // 't'
    [0x3C, 0x7C, 0x40, 0x40, 0x3C, 0x7C], // 'u'
    [0x1C, 0x3C, 0x60, 0x60, 0x3C, 0x1C], // 'v'
    [0x3C, 0x7C, 0x70, 0x38, 0x70, 0x7C], // 'w'
    [0x44, 0x6C, 0x38, 0x10, 0x38, 0x6C], // 'x'
    [0x9C, 0xBC, 0xA0, 0xA0, 0xFC, 0x7C], // 'y'
    [0x4C, 0x64, 0x74, 0x5C, 0x4C, 0x64], // 'z'
    [0x08, 0x08, 0x3E, 0x77, 0x41, 0x41], // '{'
    [0x00, 0x00, 0x00, 0x77, 0x77, 0x00], // '|'
    [0x41, 0x41, 0x77, 0x3E, 0x08, 0x08], // '}'
    [0x02, 0x03, 0x01, 0x03, 0x02, 0x03], // '~'
];

/// 8x16 ASCII font, printable range `' '..='~'` (95 glyphs).
///
/// Each glyph spans two display pages: bytes 0..8 are the column
/// data for the top page, bytes 8..16 for the page below it.
pub const FONT_8X16: [[u8; 16]; 95] = [
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x3C, 0xFF, 0xFF, 0x3C, 0x00, 0x00, // '!'
        0x00, 0x00, 0x00, 0x33, 0x33, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x0F, 0x0F, 0x00, 0x0F, 0x0F, 0x00, 0x00, // '"'
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x30, 0xFF, 0xFF, 0x30, 0xFF, 0xFF, 0x30, 0x00, // '#'
        0x03, 0x3F, 0x3F, 0x03, 0x3F, 0x3F, 0x03, 0x00,
    ],
    [
        0x30, 0xFC, 0xCF, 0xCF, 0xCC, 0x0C, 0x00, 0x00, // '$'
        0x0C, 0x0C, 0x3C, 0x3C, 0x0F, 0x03, 0x00, 0x00,
    ],
    [
        0x3C, 0x3C, 0x00, 0xC0, 0xF0, 0x3C, 0x0C, 0x00, // '%'
        0x30, 0x3C, 0x0F, 0x03, 0x00, 0x3C, 0x3C, 0x00,
    ],
    [
        0x00, 0xCC, 0xFF, 0xF3, 0x3F, 0xCC, 0xC0, 0x00, // '&'
        0x0F, 0x3F, 0x30, 0x33, 0x0F, 0x3F, 0x30, 0x00,
    ],
    [
        0x30, 0x3F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0xF0, 0xFC, 0x0F, 0x03, 0x00, 0x00, 0x00, // '('
        0x00, 0x03, 0x0F, 0x3C, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x03, 0x0F, 0xFC, 0xF0, 0x00, 0x00, 0x00, // ')'
        0x00, 0x30, 0x3C, 0x0F, 0x03, 0x00, 0x00, 0x00,
    ],
    [
        0xC0, 0xCC, 0xFC, 0xF0, 0xF0, 0xFC, 0xCC, 0xC0, // '*'
        0x00, 0x0C, 0x0F, 0x03, 0x03, 0x0F, 0x0C, 0x00,
    ],
    [
        0xC0, 0xC0, 0xFC, 0xFC, 0xC0, 0xC0, 0x00, 0x00, // '+'
        0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ','
        0x00, 0xC0, 0xFC, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, // '-'
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '.'
        0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x00, // '/'
        0x3C, 0x0F, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xFC, 0xFF, 0x03, 0xC3, 0xF3, 0xFF, 0xFC, 0x00, // '0'
        0x0F, 0x3F, 0x3F, 0x33, 0x30, 0x3F, 0x0F, 0x00,
    ],
    [
        0x00, 0x0C, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // '1'
        0x30, 0x30, 0x3F, 0x3F, 0x30, 0x30, 0x00, 0x00,
    ],
    [
        0x0C, 0x0F, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, 0x00, // '2'
        0x3C, 0x3F, 0x33, 0x30, 0x3C, 0x3C, 0x00, 0x00,
    ],
    [
        0x0C, 0x0F, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, 0x00, // '3'
        0x0C, 0x3C, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0xC0, 0xF0, 0x3C, 0x0F, 0xFF, 0xFF, 0x00, 0x00, // '4'
        0x03, 0x03, 0x03, 0x33, 0x3F, 0x3F, 0x33, 0x00,
    ],
    [
        0x3F, 0x3F, 0x33, 0x33, 0xF3, 0xC3, 0x00, 0x00, // '5'
        0x0C, 0x3C, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0xF0, 0xFC, 0xCF, 0xC3, 0xC3, 0x00, 0x00, 0x00, // '6'
        0x0F, 0x3F, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0x0F, 0x0F, 0x03, 0xC3, 0xFF, 0x3F, 0x00, 0x00, // '7'
        0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x3C, 0xFF, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, 0x00, // '8'
        0x0F, 0x3F, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0x3C, 0xFF, 0xC3, 0xC3, 0xFF, 0xFC, 0x00, 0x00, // '9'
        0x00, 0x30, 0x30, 0x3C, 0x0F, 0x03, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, // ':'
        0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, // ';'
        0x00, 0xC0, 0xFC, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x00, 0x00, 0x00, // '<'
        0x00, 0x03, 0x0F, 0x3C, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, // '='
        0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x00, 0x00,
    ],
    [
        0x00, 0x03, 0x0F, 0x3C, 0xF0, 0xC0, 0x00, 0x00, // '>'
        0x00, 0x30, 0x3C, 0x0F, 0x03, 0x00, 0x00, 0x00,
    ],
    [
        0x0C, 0x0F, 0x03, 0xC3, 0xFF, 0x3C, 0x00, 0x00, // '?'
        0x00, 0x00, 0x33, 0x33, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xFC, 0xFF, 0x03, 0xF3, 0xF3, 0xFF, 0xFC, 0x00, // '@'
        0x0F, 0x3F, 0x30, 0x33, 0x33, 0x03, 0x03, 0x00,
    ],
    [
        0xF0, 0xFC, 0x0F, 0x0F, 0xFC, 0xF0, 0x00, 0x00, // 'A'
        0x3F, 0x3F, 0x03, 0x03, 0x3F, 0x3F, 0x00, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, // 'B'
        0x30, 0x3F, 0x3F, 0x30, 0x30, 0x3F, 0x0F, 0x00,
    ],
    [
        0xF0, 0xFC, 0x0F, 0x03, 0x03, 0x0F, 0x0C, 0x00, // 'C'
        0x03, 0x0F, 0x3C, 0x30, 0x30, 0x3C, 0x0C, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0x03, 0x0F, 0xFC, 0xF0, 0x00, // 'D'
        0x30, 0x3F, 0x3F, 0x30, 0x3C, 0x0F, 0x03, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC3, 0xF3, 0x03, 0x0F, 0x00, // 'E'
        0x30, 0x3F, 0x3F, 0x30, 0x33, 0x30, 0x3C, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC3, 0xF3, 0x03, 0x0F, 0x00, // 'F'
        0x30, 0x3F, 0x3F, 0x30, 0x03, 0x00, 0x00, 0x00,
    ],
    [
        0xF0, 0xFC, 0x0F, 0x03, 0x03, 0x0F, 0x0C, 0x00, // 'G'
        0x03, 0x0F, 0x3C, 0x30, 0x33, 0x3F, 0x3F, 0x00,
    ],
    [
        0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0x00, 0x00, // 'H'
        0x3F, 0x3F, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00,
    ],
    [
        0x00, 0x03, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, // 'I'
        0x00, 0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0x03, 0x00, // 'J'
        0x0F, 0x3F, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC0, 0xF0, 0x3F, 0x0F, 0x00, // 'K'
        0x30, 0x3F, 0x3F, 0x00, 0x03, 0x3F, 0x3C, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, 0x00, // 'L'
        0x30, 0x3F, 0x3F, 0x30, 0x30, 0x3C, 0x3F, 0x00,
    ],
    [
        0xFF, 0xFF, 0xFC, 0xF0, 0xFC, 0xFF, 0xFF, 0x00, // 'M'
        0x3F, 0x3F, 0x00, 0x03, 0x00, 0x3F, 0x3F, 0x00,
    ],
    [
        0xFF, 0xFF, 0x3C, 0xF0, 0xC0, 0xFF, 0xFF, 0x00, // 'N'
        0x3F, 0x3F, 0x00, 0x00, 0x03, 0x3F, 0x3F, 0x00,
    ],
    [
        0xF0, 0xFC, 0x0F, 0x03, 0x0F, 0xFC, 0xF0, 0x00, // 'O'
        0x03, 0x0F, 0x3C, 0x30, 0x3C, 0x0F, 0x03, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, // 'P'
        0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xFC, 0xFF, 0x03, 0x03, 0xFF, 0xFC, 0x00, 0x00, // 'Q'
        0x03, 0x0F, 0x0C, 0x3F, 0x3F, 0x33, 0x00, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0x3C, 0x00, // 'R'
        0x30, 0x3F, 0x3F, 0x00, 0x03, 0x3F, 0x3C, 0x00,
    ],
    [
        0x3C, 0xFF, 0xF3, 0xC3, 0x0F, 0x0C, 0x00, 0x00, // 'S'
        0x0C, 0x3C, 0x30, 0x33, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0x0F, 0x03, 0xFF, 0xFF, 0x03, 0x0F, 0x00, 0x00, // 'T'
        0x00, 0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, // 'U'
        0x3F, 0x3F, 0x30, 0x30, 0x3F, 0x3F, 0x00, 0x00,
    ],
    [
        0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, // 'V'
        0x03, 0x0F, 0x3C, 0x3C, 0x0F, 0x03, 0x00, 0x00,
    ],
    [
        0xFF, 0xFF, 0x00, 0xC0, 0x00, 0xFF, 0xFF, 0x00, // 'W'
        0x3F, 0x3F, 0x0F, 0x03, 0x0F, 0x3F, 0x3F, 0x00,
    ],
    [
        0x0F, 0x3F, 0xF0, 0xC0, 0xF0, 0x3F, 0x0F, 0x00, // 'X'
        0x30, 0x3C, 0x0F, 0x03, 0x0F, 0x3C, 0x30, 0x00,
    ],
    [
        0x3F, 0xFF, 0xC0, 0xC0, 0xFF, 0x3F, 0x00, 0x00, // 'Y'
        0x00, 0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x3F, 0x0F, 0x03, 0xC3, 0xF3, 0x3F, 0x0F, 0x00, // 'Z'
        0x30, 0x3C, 0x3F, 0x33, 0x30, 0x3C, 0x3F, 0x00,
    ],
    [
        0x00, 0xFF, 0xFF, 0x03, 0x03, 0x00, 0x00, 0x00, // '['
        0x00, 0x3F, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x03, 0x0F, 0x3C, 0xF0, 0xC0, 0x00, 0x00, 0x00, // '\\'
        0x00, 0x00, 0x00, 0x00, 0x03, 0x0F, 0x3C, 0x00,
    ],
    [
        0x00, 0x03, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, // ']'
        0x00, 0x30, 0x30, 0x3F, 0x3F, 0x00, 0x00, 0x00,
    ],
    [
        0xC0, 0xF0, 0x3C, 0x0F, 0x3C, 0xF0, 0xC0, 0x00, // '^'
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '_'
        0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    ],
    [
        0x00, 0x00, 0x0F, 0x3F, 0x30, 0x00, 0x00, 0x00, // '`'
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x30, 0x30, 0x30, 0xF0, 0xC0, 0x00, 0x00, // 'a'
        0x0C, 0x3F, 0x33, 0x33, 0x0F, 0x3F, 0x30, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0x00, 0x00, // 'b'
        0x30, 0x3F, 0x0F, 0x30, 0x30, 0x3F, 0x0F, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0xF0, 0xC0, 0x00, 0x00, // 'c'
        0x0F, 0x3F, 0x30, 0x30, 0x3C, 0x0C, 0x00, 0x00,
    ],
    [
        0x00, 0xC0, 0xC0, 0xC3, 0xFF, 0xFF, 0x00, 0x00, // 'd'
        0x0F, 0x3F, 0x30, 0x30, 0x0F, 0x3F, 0x30, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0xF0, 0xC0, 0x00, 0x00, // 'e'
        0x0F, 0x3F, 0x33, 0x33, 0x33, 0x03, 0x00, 0x00,
    ],
    [
        0xC0, 0xFC, 0xFF, 0xC3, 0x0F, 0x0C, 0x00, 0x00, // 'f'
        0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0xC0, 0xF0, 0x30, 0x00, // 'g'
        0xC3, 0xCF, 0xCC, 0xCC, 0xFF, 0x3F, 0x00, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0xC0, 0x30, 0xF0, 0xC0, 0x00, // 'h'
        0x30, 0x3F, 0x3F, 0x00, 0x00, 0x3F, 0x3F, 0x00,
    ],
    [
        0x00, 0x30, 0xF3, 0xF3, 0x00, 0x00, 0x00, 0x00, // 'i'
        0x00, 0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0xF3, 0xF3, 0x00, 0x00, // 'j'
        0x3C, 0xFC, 0xC0, 0xC0, 0xFF, 0x3F, 0x00, 0x00,
    ],
    [
        0x03, 0xFF, 0xFF, 0x00, 0xC0, 0xF0, 0x30, 0x00, // 'k'
        0x30, 0x3F, 0x3F, 0x03, 0x0F, 0x3C, 0x30, 0x00,
    ],
    [
        0x00, 0x03, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // 'l'
        0x00, 0x30, 0x3F, 0x3F, 0x30, 0x00, 0x00, 0x00,
    ],
    [
        0xF0, 0xF0, 0xC0, 0xC0, 0xF0, 0xF0, 0xC0, 0x00, // 'm'
        0x3F, 0x3F, 0x03, 0x0F, 0x03, 0x3F, 0x3F, 0x00,
    ],
    [
        0xF0, 0xF0, 0x30, 0x30, 0xF0, 0xC0, 0x00, 0x00, // 'n'
        0x3F, 0x3F, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0xF0, 0xC0, 0x00, 0x00, // 'o'
        0x0F, 0x3F, 0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00,
    ],
    [
        0x30, 0xF0, 0xC0, 0x30, 0x30, 0xF0, 0xC0, 0x00, // 'p'
        0xC0, 0xFF, 0xFF, 0xCC, 0x0C, 0x0F, 0x03, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0xC0, 0xF0, 0x30, 0x00, // 'q'
        0x03, 0x0F, 0x0C, 0xCC, 0xFF, 0xFF, 0xC0, 0x00,
    ],
    [
        0x30, 0xF0, 0xC0, 0xF0, 0x30, 0xF0, 0xC0, 0x00, // 'r'
        0x30, 0x3F, 0x3F, 0x30, 0x00, 0x03, 0x03, 0x00,
    ],
    [
        0xC0, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, // 's'
        0x30, 0x33, 0x33, 0x33, 0x3F, 0x0C, 0x00, 0x00,
    ],
    [
        0x00, 0x30, 0xFC, 0xFF, 0x30, 0x30, 0x00, 0x00, // 't'
        0x00, 0x00, 0x0F, 0x3F, 0x30, 0x0C, 0x00, 0x00,
    ],
    [
        0xF0, 0xF0, 0x00, 0x00, 0xF0, 0xF0, 0x00, 0x00, // 'u'
        0x0F, 0x3F, 0x30, 0x30, 0x0F, 0x3F, 0x30, 0x00,
    ],
    [
        0xF0, 0xF0, 0x00, 0x00, 0xF0, 0xF0, 0x00, 0x00, // 'v'
        0x03, 0x0F, 0x3C, 0x3C, 0x0F, 0x03, 0x00, 0x00,
    ],
    [
        0xF0, 0xF0, 0x00, 0xC0, 0x00, 0xF0, 0xF0, 0x00, // 'w'
        0x0F, 0x3F, 0x3F, 0x0F, 0x3F, 0x3F, 0x0F, 0x00,
    ],
    [
        0x30, 0xF0, 0xC0, 0x00, 0xC0, 0xF0, 0x30, 0x00, // 'x'
        0x30, 0x3C, 0x0F, 0x03, 0x0F, 0x3C, 0x30, 0x00,
    ],
    [
        0xF0, 0xF0, 0x00, 0x00, 0xF0, 0xF0, 0x00, 0x00, // 'y'
        0xC3, 0xCF, 0xCC, 0xCC, 0xFF, 0x3F, 0x00, 0x00,
    ],
    [
        0xF0, 0x30, 0x30, 0xF0, 0xF0, 0x30, 0x00, 0x00, // 'z'
        0x30, 0x3C, 0x3F, 0x33, 0x30, 0x3C, 0x00, 0x00,
    ],
    [
        0xC0, 0xC0, 0xFC, 0x3F, 0x03, 0x03, 0x00, 0x00, // '{'
        0x00, 0x00, 0x0F, 0x3F, 0x30, 0x30, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x00, // '|'
        0x00, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x00,
    ],
    [
        0x03, 0x03, 0x3F, 0xFC, 0xC0, 0xC0, 0x00, 0x00, // '}'
        0x30, 0x30, 0x3F, 0x0F, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x0C, 0x0F, 0x03, 0x0F, 0x0C, 0x0F, 0x03, 0x00, // '~'
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];

/// 16x16 symbol glyphs in stacked page-row format.
///
/// Entry `2 * i` holds the 16 column bytes of the top page row for
/// symbol `i`, entry `2 * i + 1` the row below it.
pub const WIDE_16X16: [[u8; 16]; 8] = [
    // degree Celsius
    [0x07, 0x05, 0xE7, 0xF8, 0x1C, 0x06, 0x02, 0x02, 0x02, 0x06, 0x0C, 0x08, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x03, 0x0F, 0x1C, 0x30, 0x20, 0x20, 0x20, 0x30, 0x18, 0x08, 0x00, 0x00, 0x00, 0x00],
    // ohm
    [0x00, 0xF0, 0xF8, 0x0C, 0x06, 0x02, 0x02, 0x02, 0x02, 0x02, 0x06, 0x0C, 0xF8, 0xF0, 0x00, 0x00],
    [0x00, 0x21, 0x23, 0x26, 0x3C, 0x38, 0x00, 0x00, 0x00, 0x38, 0x3C, 0x26, 0x23, 0x21, 0x00, 0x00],
    // up arrow
    [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0x78, 0x7C, 0xFE, 0xFE, 0x7C, 0x78, 0xF0, 0xE0, 0xC0, 0x80, 0x00],
    [0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x7F, 0x7F, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x00],
    // down arrow
    [0x00, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0xFE, 0xFE, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x00],
    [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1E, 0x3E, 0x7F, 0x7F, 0x3E, 0x1E, 0x0F, 0x07, 0x03, 0x01, 0x00],
];

/// Indices into [`WIDE_16X16`], one per 16x16 symbol
pub mod wide {
    /// Degree-Celsius sign
    pub const DEGREE_C: u8 = 0;
    /// Ohm sign
    pub const OHM: u8 = 1;
    /// Upward arrow
    pub const ARROW_UP: u8 = 2;
    /// Downward arrow
    pub const ARROW_DOWN: u8 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_printable_ascii() {
        assert_eq!(FONT_6X8.len(), 95);
        assert_eq!(FONT_8X16.len(), 95);
        // Space renders blank in both sizes
        assert_eq!(FONT_6X8[0], [0u8; 6]);
        assert_eq!(FONT_8X16[0], [0u8; 16]);
    }

    #[test]
    fn test_wide_table_has_two_rows_per_symbol() {
        assert_eq!(WIDE_16X16.len() % 2, 0);
        assert_eq!(WIDE_16X16.len() / 2, 4);
        // Every shipped symbol has at least one lit pixel in each half
        for pair in WIDE_16X16.chunks(2) {
            assert!(pair[0].iter().any(|&b| b != 0));
            assert!(pair[1].iter().any(|&b| b != 0));
        }
    }

    #[test]
    fn test_digit_glyphs_are_distinct() {
        let zero = (b'0' - b' ') as usize;
        for i in zero..zero + 10 {
            for j in i + 1..zero + 10 {
                assert_ne!(FONT_8X16[i], FONT_8X16[j]);
                assert_ne!(FONT_6X8[i], FONT_6X8[j]);
            }
        }
    }
}
