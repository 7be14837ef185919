//! PCD8544 command definitions
//!
//! This module defines the command bytes used to control the PCD8544
//! dot-matrix LCD controller. Commands are shifted out with the DC pin
//! low; display data is shifted out with the DC pin high.
//!
//! ## Command Structure
//!
//! The PCD8544 has two instruction pages selected by the H bit of the
//! function-set command:
//!
//! - **Basic** (H=0): display control and X/Y RAM addressing
//! - **Extended** (H=1): analog tuning (temperature coefficient, bias, Vop)
//!
//! All commands are a single byte; the operand is OR'd into the low bits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pcd8544::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut interface = Interface::new(MockPin, MockPin, MockPin, MockPin, MockPin, MockDelay);
//! // Address column 0, bank 0
//! let _ = interface.send_command(command::SET_X_ADDRESS);
//! let _ = interface.send_command(command::SET_Y_ADDRESS);
//!
//! // Stream framebuffer bytes
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

// Basic instruction set (H=0)

/// Function set command (0x20)
///
/// Selects chip mode and instruction page. OR with:
/// - [`POWER_DOWN`] (0x04): enter power-down mode
/// - [`VERTICAL_ADDRESSING`] (0x02): Y-first address auto-increment
/// - [`EXTENDED_INSTRUCTION`] (0x01): switch to the extended page
pub const FUNCTION_SET: u8 = 0x20;

/// Power-down bit for [`FUNCTION_SET`]
pub const POWER_DOWN: u8 = 0x04;

/// Vertical addressing bit for [`FUNCTION_SET`]
///
/// When set, the address counter increments Y (bank) first. This driver
/// uses the default horizontal mode: X increments, wrapping into the
/// next bank after column 83.
pub const VERTICAL_ADDRESSING: u8 = 0x02;

/// Extended instruction set bit for [`FUNCTION_SET`]
pub const EXTENDED_INSTRUCTION: u8 = 0x01;

/// Display control command (0x08)
///
/// OR with one of the mode patterns below (D and E bits).
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Display control mode: blank (D=0, E=0)
pub const DISPLAY_BLANK: u8 = 0b000;

/// Display control mode: normal video (D=1, E=0)
pub const DISPLAY_NORMAL: u8 = 0b100;

/// Display control mode: all segments on (D=0, E=1)
pub const DISPLAY_ALL_ON: u8 = 0b001;

/// Display control mode: inverse video (D=1, E=1)
pub const DISPLAY_INVERTED: u8 = 0b101;

/// Set Y address of RAM command (0x40)
///
/// OR with the bank number (0..=5). Each bank is a horizontal strip of
/// 8 pixel rows, one byte per column.
pub const SET_Y_ADDRESS: u8 = 0x40;

/// Set X address of RAM command (0x80)
///
/// OR with the column number (0..=83).
pub const SET_X_ADDRESS: u8 = 0x80;

// Extended instruction set (H=1)

/// Temperature coefficient command (0x04)
///
/// OR with a 2-bit coefficient (0..=3).
pub const SET_TEMP_COEFF: u8 = 0x04;

/// Bias system command (0x10)
///
/// OR with a 3-bit bias level (0..=7). Selects the voltage divider ratio
/// for the multiplexing rate; 1:40 suits the 48-row panel.
pub const SET_BIAS: u8 = 0x10;

/// Set Vop (operating voltage / contrast) command (0x80)
///
/// OR with a 7-bit Vop value (0..=127). Usable contrast for most panels
/// is roughly 30..=90. The operand must be masked to 7 bits so it cannot
/// disturb the command bit.
pub const SET_VOP: u8 = 0x80;

/// No operation (0x00)
pub const NOP: u8 = 0x00;
