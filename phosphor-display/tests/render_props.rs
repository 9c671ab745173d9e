//! Host-side property tests for the renderer's addressing and layout math.

use phosphor_core::{ByteKind, DisplayTransport, TransportError};
use phosphor_display::{FontSize, Ssd1306};
use proptest::prelude::*;

#[derive(Default)]
struct Recorder {
    log: Vec<(u8, ByteKind)>,
}

impl DisplayTransport for Recorder {
    fn write_byte(&mut self, byte: u8, kind: ByteKind) -> Result<(), TransportError> {
        self.log.push((byte, kind));
        Ok(())
    }
}

fn traffic<F>(draw: F) -> Vec<(u8, ByteKind)>
where
    F: FnOnce(&mut Ssd1306<Recorder>),
{
    let mut display = Ssd1306::new(Recorder::default());
    draw(&mut display);
    display.free().log
}

/// The characters a fixed-width decimal field renders, derived with host
/// string formatting rather than the driver's own digit loop.
fn expected_field(value: u32, width: usize) -> Vec<u8> {
    let truncated = value % 10u32.pow(width as u32);
    let mut out = format!("{:0width$}", truncated, width = width).into_bytes();
    for i in 0..width - 1 {
        if out[i] != b'0' {
            break;
        }
        out[i] = b' ';
    }
    out
}

proptest! {
    #[test]
    fn set_position_encodes_page_and_column_nibbles(x in 0u8..=127, y in 0u8..=7) {
        let log = traffic(|d| d.set_position(x, y).unwrap());
        prop_assert_eq!(
            log,
            vec![
                (0xB0 + y, ByteKind::Command),
                (0x10 | ((x & 0xF0) >> 4), ByteKind::Command),
                (x & 0x0F, ByteKind::Command),
            ]
        );
    }

    #[test]
    fn number_fields_match_string_formatting(value in 0u32..=9_999_999, width in 1usize..=7) {
        let chars = expected_field(value, width);
        let number = traffic(|d| {
            d.show_number(0, 0, value, width as u8, FontSize::Large).unwrap()
        });
        let composed = traffic(|d| {
            for (t, &ch) in chars.iter().enumerate() {
                d.show_char(8 * t as u8, 0, ch, FontSize::Large).unwrap();
            }
        });
        prop_assert_eq!(number, composed);
    }

    #[test]
    fn strings_lay_out_as_individual_chars(text in "[ -~]{0,40}", size_large in any::<bool>()) {
        let size = if size_large { FontSize::Large } else { FontSize::Small };
        let string = traffic(|d| d.show_string(0, 0, &text, size).unwrap());
        let composed = traffic(|d| {
            let (mut x, mut y) = (0u8, 0u8);
            for &ch in text.as_bytes() {
                d.show_char(x, y, ch, size).unwrap();
                x += 8;
                if x > 120 {
                    x = 0;
                    y += 2;
                }
            }
        });
        prop_assert_eq!(string, composed);
    }

    #[test]
    fn right_edge_wrap_lands_two_pages_down(x in 128u8..=247, y in 0u8..=5) {
        let wrapped = traffic(|d| d.show_char(x, y, b'#', FontSize::Large).unwrap());
        let direct = traffic(|d| d.show_char(0, y + 2, b'#', FontSize::Large).unwrap());
        prop_assert_eq!(wrapped, direct);
    }
}
