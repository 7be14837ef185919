//! Core display operations
//!
//! [`Display`] owns the hardware interface and the configuration, runs
//! the controller's reset and command programming sequence, and pushes
//! whole framebuffers to the panel.
//!
//! The controller auto-increments its RAM address after every data
//! byte, wrapping from column 83 into the next bank. A full-frame
//! [`flush`](Display::flush) therefore costs one X/Y address command
//! pair plus 504 data bytes, never 504 addressed writes.

use log::{debug, trace};

use crate::command::{
    DISPLAY_CONTROL, EXTENDED_INSTRUCTION, FUNCTION_SET, POWER_DOWN, SET_BIAS, SET_TEMP_COEFF,
    SET_VOP, SET_X_ADDRESS, SET_Y_ADDRESS,
};
use crate::config::{Config, DisplayMode};
use crate::error::{Error, MAX_CONTRAST};
use crate::framebuffer::{BANKS, Framebuffer, WIDTH};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the PCD8544
///
/// Construct with [`new`](Self::new), then call [`init`](Self::init)
/// once before any other operation. The configuration is immutable for
/// the life of the driver; runtime adjustments (contrast, display mode,
/// power-down) go through their own methods.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Whether the init sequence has completed
    initialized: bool,
    /// Whether the controller is in power-down mode
    powered_down: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            initialized: false,
            powered_down: false,
        }
    }

    /// Perform hardware reset and program the controller
    ///
    /// Pulses the RST line, then issues the fixed bring-up sequence:
    /// switch to the extended instruction page, set bias, set the
    /// temperature coefficient, set Vop (contrast), return to the basic
    /// page, and select the configured display mode.
    pub fn init(&mut self) -> DisplayResult<I> {
        self.interface.reset();
        self.powered_down = false;

        self.send_command(FUNCTION_SET | EXTENDED_INSTRUCTION)?;
        self.send_command(SET_BIAS | self.config.bias as u8)?;
        self.send_command(SET_TEMP_COEFF | self.config.temperature_coefficient as u8)?;
        self.send_command(SET_VOP | (self.config.contrast & MAX_CONTRAST))?;
        self.send_command(FUNCTION_SET)?;
        self.send_command(DISPLAY_CONTROL | self.config.display_mode as u8)?;

        self.initialized = true;
        debug!(
            "PCD8544 initialized: contrast={} bias={:?}",
            self.config.contrast, self.config.bias
        );
        Ok(())
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Set the RAM address counter
    ///
    /// Issues the X-address and Y-address command pair. Values are
    /// clamped to the valid range (column 0..=83, bank 0..=5) before
    /// encoding so they cannot disturb the command bits.
    pub fn set_address(&mut self, column: u8, bank: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let column = column.min(WIDTH as u8 - 1);
        let bank = bank.min(BANKS as u8 - 1);
        self.send_command(SET_X_ADDRESS | column)?;
        self.send_command(SET_Y_ADDRESS | bank)
    }

    /// Write raw display data at the current RAM address
    ///
    /// The controller advances its address counter after every byte, so
    /// sequential writes need no re-addressing.
    pub fn write_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_data(data)
    }

    /// Push a full frame to the panel
    ///
    /// Addresses (0,0) once, then streams all 6 banks of 84 columns in
    /// ascending order. Every flush rewrites the complete 504 bytes of
    /// display RAM; flushing an unchanged framebuffer emits an identical
    /// byte stream.
    pub fn flush(&mut self, frame: &Framebuffer) -> DisplayResult<I> {
        self.set_address(0, 0)?;
        for bank in frame.data().chunks_exact(WIDTH) {
            self.send_data(bank)?;
        }
        trace!("flushed full frame");
        Ok(())
    }

    /// Select the display mode (blank, normal, all-on, inverse)
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(DISPLAY_CONTROL | mode as u8)
    }

    /// Re-program the contrast (Vop) value
    ///
    /// The value is masked to 7 bits; the extended instruction page is
    /// entered and left around the Vop write.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.function_set(true)?;
        self.send_command(SET_VOP | (contrast & MAX_CONTRAST))?;
        self.function_set(false)
    }

    /// Enter or leave power-down mode
    ///
    /// Display RAM is retained; a flush after wake-up restores the image.
    pub fn set_power_down(&mut self, enable: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.powered_down = enable;
        self.function_set(false)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue a function-set command reflecting the power-down state
    fn function_set(&mut self, extended: bool) -> DisplayResult<I> {
        let mut command = FUNCTION_SET;
        if self.powered_down {
            command |= POWER_DOWN;
        }
        if extended {
            command |= EXTENDED_INSTRUCTION;
        }
        self.send_command(command)
    }

    fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
