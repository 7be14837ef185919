//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! for [`Framebuffer`], so the embedded-graphics primitives, fonts and
//! image decoders can render alongside (or instead of) the built-in
//! rasterizer. Drawing stays entirely in memory; push the result with
//! [`Display::flush`](crate::display::Display::flush) as usual.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use pcd8544::{Color, Framebuffer};
//!
//! let mut frame = Framebuffer::new();
//!
//! let _ = Rectangle::new(Point::new(4, 4), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Color::Black))
//!     .draw(&mut frame);
//!
//! let _ = Circle::new(Point::new(50, 10), 24)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
//!     .draw(&mut frame);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

impl DrawTarget for Framebuffer {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // set_pixel clips; filtering here just skips the bounds math
            if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
                continue;
            }
            self.set_pixel(x, y, color);
        }

        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_6X10},
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::Text,
    };

    #[test]
    fn test_size_is_panel_resolution() {
        let frame = Framebuffer::new();
        assert_eq!(frame.size(), Size::new(84, 48));
    }

    #[test]
    fn test_filled_rectangle_sets_pixels() {
        let mut frame = Framebuffer::new();
        Rectangle::new(Point::new(2, 3), Size::new(4, 5))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut frame)
            .unwrap();

        for y in 3..8 {
            for x in 2..6 {
                assert_eq!(frame.pixel(x, y), Some(Color::Black));
            }
        }
        assert_eq!(frame.pixel(6, 3), Some(Color::White));
        assert_eq!(frame.pixel(2, 8), Some(Color::White));
    }

    #[test]
    fn test_eg_horizontal_line_matches_builtin_rasterizer() {
        let mut via_eg = Framebuffer::new();
        Line::new(Point::new(0, 10), Point::new(83, 10))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut via_eg)
            .unwrap();

        let mut via_builtin = Framebuffer::new();
        via_builtin.draw_line(0, 10, 83, 10, Color::Black);

        assert_eq!(via_eg.data(), via_builtin.data());
    }

    #[test]
    fn test_negative_coordinates_are_skipped() {
        let mut frame = Framebuffer::new();
        Rectangle::new(Point::new(-10, -10), Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame, Framebuffer::new());
    }

    #[test]
    fn test_mono_font_text_draws() {
        let mut frame = Framebuffer::new();
        Text::new(
            "Hi",
            Point::new(0, 8),
            MonoTextStyle::new(&FONT_6X10, Color::Black),
        )
        .draw(&mut frame)
        .unwrap();
        assert!(frame.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_white_drawing_erases() {
        let mut frame = Framebuffer::new();
        frame.fill(Color::Black);
        Rectangle::new(Point::new(0, 0), Size::new(84, 8))
            .into_styled(PrimitiveStyle::with_fill(Color::White))
            .draw(&mut frame)
            .unwrap();
        for x in 0..84 {
            assert_eq!(frame.pixel(x, 0), Some(Color::White));
            assert_eq!(frame.pixel(x, 8), Some(Color::Black));
        }
    }
}
