//! Color type for the monochrome panel
//!
//! The PCD8544 drives a 1-bit-per-pixel LCD: a set bit darkens the
//! crystal, a clear bit leaves it transparent.
//!
//! | Color | Framebuffer bit |
//! |-------|-----------------|
//! | Black | 1               |
//! | White | 0               |
//!
//! ## Example
//!
//! ```
//! use pcd8544::Color;
//!
//! assert_eq!(Color::Black.fill_byte(), 0xFF);
//! assert_eq!(Color::White.fill_byte(), 0x00);
//! ```

/// Pixel colors of the monochrome LCD
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Dark pixel (bit set)
    Black,
    /// Clear pixel (bit cleared)
    White,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

impl Color {
    /// Byte value that fills a whole framebuffer column slice with this color
    ///
    /// - Black: 0xFF (all 8 pixels of the bank dark)
    /// - White: 0x00 (all 8 pixels clear)
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0xFF,
            Self::White => 0x00,
        }
    }

    /// Whether this color sets the pixel bit
    ///
    /// ## Example
    ///
    /// ```
    /// use pcd8544::Color;
    ///
    /// assert!(Color::Black.is_on());
    /// assert!(!Color::White.is_on());
    /// ```
    pub fn is_on(self) -> bool {
        matches!(self, Self::Black)
    }

    /// The opposite color
    pub fn invert(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}
