//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use pcd8544::{Builder, BuilderError};
//!
//! // Contrast is a 7-bit Vop value
//! let result = Builder::new().contrast(200).build();
//! assert!(matches!(result, Err(BuilderError::InvalidContrast { value: 200 })));
//! ```

use crate::interface::DisplayInterface;

/// Maximum contrast (Vop) value accepted by the controller
///
/// The Vop command carries a 7-bit operand. Values are masked to this
/// range before being OR'd into the command byte so an oversized value
/// can never disturb the command bit.
pub const MAX_CONTRAST: u8 = 0x7F;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The controller has not been initialized
    ///
    /// [`Display::init`](crate::display::Display::init) must run the reset
    /// and command programming sequence before any addressing, data write,
    /// or mode change is meaningful.
    NotInitialized,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display has not been initialized"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Contrast value outside the 7-bit Vop range
    ///
    /// See [`MAX_CONTRAST`]. Usable panel contrast is roughly 30..=90.
    InvalidContrast {
        /// The rejected contrast value
        value: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidContrast { value } => {
                write!(f, "Invalid contrast {value} (max {MAX_CONTRAST})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
