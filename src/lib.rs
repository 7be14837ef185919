//! PCD8544 LCD Driver
//!
//! A driver for the PCD8544 dot-matrix LCD controller behind the 84x48
//! monochrome panels of Nokia 3310/5110 phones and hobby display modules.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (bit-banged 5-wire hookup out of the box)
//! - In-memory framebuffer with pixel, line, rectangle, circle, 5x7
//!   font text and bitmap primitives
//! - Single address-set + 504-byte full-frame flush using the
//!   controller's address auto-increment
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Host system statistics and the reference status screen
//!   (with `std` feature, Linux)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use pcd8544::{Builder, Color, Display, Framebuffer, Interface};
//! # use core::convert::Infallible;
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (clk, din, dc, ce, rst) = (MockPin, MockPin, MockPin, MockPin, MockPin);
//! # let delay = MockDelay;
//! let interface = Interface::new(clk, din, dc, ce, rst, delay);
//! let config = match Builder::new().contrast(60).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init();
//!
//! let mut frame = Framebuffer::new();
//! frame.draw_string(0, 0, "Hello, LCD!", Color::Black);
//! frame.draw_line(0, 10, 83, 10, Color::Black);
//! let _ = display.flush(&frame);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Color type for the monochrome panel
pub mod color;
/// PCD8544 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x7 bitmap font
pub mod font;
/// In-memory framebuffer and drawing primitives
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Built-in splash bitmap
pub mod logo;
/// System statistics and the reference status screen
pub mod monitor;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Bias, Builder, Config, DisplayMode, TemperatureCoefficient};
pub use display::Display;
pub use error::{BuilderError, Error, MAX_CONTRAST};
pub use framebuffer::{BANKS, BUFFER_SIZE, Framebuffer, HEIGHT, WIDTH};
pub use interface::{DEFAULT_CLOCK_PULSE_NS, DisplayInterface, Interface, InterfaceError};
pub use monitor::{StatsSnapshot, StatusScreen};

#[cfg(feature = "std")]
pub use monitor::{StatsError, SystemStats};
