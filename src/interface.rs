//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for communicating with the PCD8544 controller over its serial bus.
//!
//! ## Hardware Requirements
//!
//! The PCD8544 hookup uses 5 GPIO outputs:
//! - **CLK**: serial clock
//! - **DIN**: serial data in
//! - **DC**: Data/Command select (low=command, high=data)
//! - **CE**: Chip enable (active low, asserted per byte)
//! - **RST**: Reset (active low)
//!
//! The bus is write-only; the controller offers no acknowledgment or
//! status channel, so the only observable failures are GPIO errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use pcd8544::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! // Create interface with GPIO pins and a delay source
//! let mut interface = Interface::new(MockPin, MockPin, MockPin, MockPin, MockPin, MockDelay);
//!
//! // Pulse the reset line
//! interface.reset();
//!
//! // Send a command
//! let _ = interface.send_command(0x21); // Function set, extended page
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the PCD8544 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// byte-level transport.
///
/// ## Implementing
///
/// For the reference 5-wire bit-banged hookup, use the provided
/// [`Interface`] struct. If the panel hangs off a hardware SPI
/// peripheral (MOSI=DIN, SCK=CLK, with DC/CE/RST as GPIOs), implement
/// this trait on your own type over an `SpiDevice`.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Shift the byte out most-significant-bit first
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Shift each byte out most-significant-bit first
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must pulse the RST pin low for at least the
    /// controller's minimum reset width, then release it and allow the
    /// chip to settle.
    fn reset(&mut self);
}

/// Errors that can occur at the interface level
///
/// Generic over the GPIO error type.
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Default serial clock half-period in nanoseconds
///
/// 0 means no explicit delay: the clock runs as fast as the GPIO layer
/// toggles, which is well inside the controller's 4 MHz limit on the
/// platforms the reference wiring targets.
pub const DEFAULT_CLOCK_PULSE_NS: u32 = 0;

/// Bit-banged hardware interface for the PCD8544
///
/// Implements [`DisplayInterface`] over five embedded-hal v1.0
/// [`OutputPin`]s plus a [`DelayNs`] source for bus timing.
///
/// ## Type Parameters
///
/// * `CLK` - Serial clock pin
/// * `DIN` - Serial data pin
/// * `DC` - Data/Command pin (low=command, high=data)
/// * `CE` - Chip enable pin (active low)
/// * `RST` - Reset pin (active low)
/// * `D` - Delay implementation
///
/// ## Example
///
/// ```rust,no_run
/// use pcd8544::Interface;
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// let interface = Interface::new(
///     MockPin,   // CLK
///     MockPin,   // DIN
///     MockPin,   // DC
///     MockPin,   // CE
///     MockPin,   // RST
///     MockDelay, // DelayNs
/// );
/// ```
pub struct Interface<CLK, DIN, DC, CE, RST, D> {
    /// Serial clock pin
    clk: CLK,
    /// Serial data pin
    din: DIN,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Chip enable pin (active low)
    ce: CE,
    /// Reset pin (active low)
    rst: RST,
    /// Delay source for bus timing
    delay: D,
    /// Serial clock half-period in nanoseconds (0 = no explicit delay)
    clock_pulse_ns: u32,
}

impl<CLK, DIN, DC, CE, RST, D> Interface<CLK, DIN, DC, CE, RST, D>
where
    CLK: OutputPin,
    DIN: OutputPin,
    DC: OutputPin,
    CE: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `clk` - Serial clock pin
    /// * `din` - Serial data pin
    /// * `dc` - Data/Command pin (low=command, high=data)
    /// * `ce` - Chip enable pin (active low)
    /// * `rst` - Reset pin (active low)
    /// * `delay` - Delay implementation for bus timing
    pub fn new(clk: CLK, din: DIN, dc: DC, ce: CE, rst: RST, delay: D) -> Self {
        Self {
            clk,
            din,
            dc,
            ce,
            rst,
            delay,
            clock_pulse_ns: DEFAULT_CLOCK_PULSE_NS,
        }
    }

    /// Set the serial clock half-period in nanoseconds
    ///
    /// Default is 0 (no explicit delay). Raise this when the GPIO layer
    /// toggles faster than the controller's 4 MHz serial clock limit.
    pub fn set_clock_pulse_ns(&mut self, pulse_ns: u32) -> &mut Self {
        self.clock_pulse_ns = pulse_ns;
        self
    }

    /// Get the current serial clock half-period in nanoseconds
    pub fn clock_pulse_ns(&self) -> u32 {
        self.clock_pulse_ns
    }

    fn half_bit_delay(&mut self) {
        if self.clock_pulse_ns > 0 {
            self.delay.delay_ns(self.clock_pulse_ns);
        }
    }
}

impl<CLK, DIN, DC, CE, RST, D, PinErr> Interface<CLK, DIN, DC, CE, RST, D>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CE: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    /// Shift one byte out MSB-first with CE asserted for its duration
    fn write_byte(&mut self, value: u8) -> InterfaceResult<(), InterfaceError<PinErr>> {
        let mut value = value;
        self.ce.set_low().map_err(InterfaceError::Pin)?;
        for _ in 0..8 {
            if value & 0x80 != 0 {
                self.din.set_high().map_err(InterfaceError::Pin)?;
            } else {
                self.din.set_low().map_err(InterfaceError::Pin)?;
            }
            self.clk.set_high().map_err(InterfaceError::Pin)?;
            self.half_bit_delay();
            self.clk.set_low().map_err(InterfaceError::Pin)?;
            self.half_bit_delay();
            value <<= 1;
        }
        self.ce.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

impl<CLK, DIN, DC, CE, RST, D, PinErr> DisplayInterface for Interface<CLK, DIN, DC, CE, RST, D>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CE: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.write_byte(command)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        for byte in data {
            self.write_byte(*byte)?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        // Idle the bus, then pulse RST: LOW -> wait 10ms -> HIGH -> wait 10ms
        let _ = self.ce.set_high();
        let _ = self.clk.set_low();
        let _ = self.rst.set_low();
        self.delay.delay_ms(10);
        let _ = self.rst.set_high();
        self.delay.delay_ms(10);
    }
}
