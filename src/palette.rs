//! Fixed display palette for the pocketpad LCD.
//!
//! All colors are RGB565, the packed 16-bit pixel format the display
//! controller consumes natively:
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! The component values below are raw 5/6/5 channel values, not 8-bit RGB
//! (to convert from 8-bit RGB: R>>3, G>>2, B>>3). Each constant documents
//! the packed value it occupies in the framebuffer.

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Grayscale
// ============================================================================

/// Pure black (packed `0x0000`)
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Dark gray (packed `0x2124`) - for subtle shading
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 9, 4);

/// Medium gray (packed `0x39E7`)
pub const GRAY: Rgb565 = Rgb565::new(7, 15, 7);

/// Light gray (packed `0x7BEF`) - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(15, 31, 15);

/// Pure white (packed `0xFFFF`) - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

// ============================================================================
// Colors
// ============================================================================

/// Pure red (packed `0xF800`)
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);

/// Pure green (packed `0x07E0`)
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0);

/// Muted olive-green (packed `0x4444`)
pub const DARK_GREEN: Rgb565 = Rgb565::new(8, 34, 4);

/// Pure blue (packed `0x001F`)
pub const BLUE: Rgb565 = Rgb565::new(0, 0, 31);

/// Cyan (packed `0x07FF`)
pub const CYAN: Rgb565 = Rgb565::new(0, 63, 31);

/// Magenta (packed `0xF81F`)
pub const MAGENTA: Rgb565 = Rgb565::new(31, 0, 31);

/// Yellow (packed `0xFFE0`)
pub const YELLOW: Rgb565 = Rgb565::new(31, 63, 0);

// ============================================================================
// Palette
// ============================================================================

/// Every named color in the palette, in declaration order.
pub const PALETTE: [Rgb565; 12] = [
    BLACK, DARK_GRAY, GRAY, LIGHT_GRAY, WHITE, RED, GREEN, DARK_GREEN, BLUE, CYAN, MAGENTA, YELLOW,
];

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_packed_values() {
        let expected: [(Rgb565, u16, &str); 12] = [
            (BLACK, 0x0000, "BLACK"),
            (DARK_GRAY, 0x2124, "DARK_GRAY"),
            (GRAY, 0x39E7, "GRAY"),
            (LIGHT_GRAY, 0x7BEF, "LIGHT_GRAY"),
            (WHITE, 0xFFFF, "WHITE"),
            (RED, 0xF800, "RED"),
            (GREEN, 0x07E0, "GREEN"),
            (DARK_GREEN, 0x4444, "DARK_GREEN"),
            (BLUE, 0x001F, "BLUE"),
            (CYAN, 0x07FF, "CYAN"),
            (MAGENTA, 0xF81F, "MAGENTA"),
            (YELLOW, 0xFFE0, "YELLOW"),
        ];

        for (color, packed, name) in expected {
            assert_eq!(
                color.into_storage(),
                packed,
                "{name} must pack to {packed:#06X}"
            );
        }
    }

    #[test]
    fn test_white_saturates_every_channel() {
        assert_eq!(WHITE.r(), Rgb565::MAX_R);
        assert_eq!(WHITE.g(), Rgb565::MAX_G);
        assert_eq!(WHITE.b(), Rgb565::MAX_B);
    }

    #[test]
    fn test_palette_covers_every_named_color() {
        assert_eq!(PALETTE.len(), 12, "palette must list all twelve colors");
    }
}
