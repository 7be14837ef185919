//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_CONTRAST};

/// Bias system (voltage divider ratio)
///
/// Selects the drive ratio for the panel's multiplex rate. The 1:48
/// multiplexing of the 84x48 panel wants [`Bias::OneTo40`], which is
/// what the reference wiring uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Bias {
    /// 1:100 ratio
    OneTo100 = 0,
    /// 1:80 ratio
    OneTo80 = 1,
    /// 1:65 ratio
    OneTo65 = 2,
    /// 1:48 ratio
    OneTo48 = 3,
    /// 1:40 ratio (recommended for the 84x48 panel)
    #[default]
    OneTo40 = 4,
    /// 1:24 ratio
    OneTo24 = 5,
    /// 1:18 ratio
    OneTo18 = 6,
    /// 1:10 ratio
    OneTo10 = 7,
}

/// Temperature coefficient
///
/// Compensates the LCD supply voltage against ambient temperature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TemperatureCoefficient {
    /// Coefficient 0 (controller reset default)
    #[default]
    Tc0 = 0,
    /// Coefficient 1
    Tc1 = 1,
    /// Coefficient 2
    Tc2 = 2,
    /// Coefficient 3
    Tc3 = 3,
}

/// Display mode (D and E bits of the display-control command)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// All pixels off regardless of RAM contents
    Blank = 0b000,
    /// Normal video
    #[default]
    Normal = 0b100,
    /// All pixels on regardless of RAM contents
    AllSegmentsOn = 0b001,
    /// Inverse video
    InverseVideo = 0b101,
}

/// Display configuration
///
/// Holds the analog tuning and initial mode programmed by
/// [`Display::init`](crate::display::Display::init). Use [`Builder`] to
/// create a Config; it is immutable afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    /// Contrast (Vop) value, 7-bit
    pub contrast: u8,
    /// Bias system value
    pub bias: Bias,
    /// Temperature coefficient
    pub temperature_coefficient: TemperatureCoefficient,
    /// Display mode programmed at the end of initialization
    pub display_mode: DisplayMode,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use pcd8544::{Bias, Builder};
///
/// let config = match Builder::new().contrast(60).bias(Bias::OneTo40).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Contrast (Vop) value
    contrast: u8,
    /// Bias system value
    bias: Bias,
    /// Temperature coefficient
    temperature_coefficient: TemperatureCoefficient,
    /// Display mode programmed at the end of initialization
    display_mode: DisplayMode,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Mid-range contrast; most panels read well between 30 and 90
            contrast: 60,
            bias: Bias::OneTo40,
            temperature_coefficient: TemperatureCoefficient::Tc0,
            display_mode: DisplayMode::Normal,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contrast (Vop) value
    ///
    /// Valid range is 0..=127; usable panel contrast is roughly 30..=90.
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the bias system value
    pub fn bias(mut self, value: Bias) -> Self {
        self.bias = value;
        self
    }

    /// Set the temperature coefficient
    pub fn temperature_coefficient(mut self, value: TemperatureCoefficient) -> Self {
        self.temperature_coefficient = value;
        self
    }

    /// Set the display mode programmed at initialization
    pub fn display_mode(mut self, value: DisplayMode) -> Self {
        self.display_mode = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidContrast` if the contrast exceeds the
    /// 7-bit Vop range.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.contrast > MAX_CONTRAST {
            return Err(BuilderError::InvalidContrast {
                value: self.contrast,
            });
        }
        Ok(Config {
            contrast: self.contrast,
            bias: self.bias,
            temperature_coefficient: self.temperature_coefficient,
            display_mode: self.display_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.contrast, 60);
        assert_eq!(config.bias, Bias::OneTo40);
        assert_eq!(
            config.temperature_coefficient,
            TemperatureCoefficient::Tc0
        );
        assert_eq!(config.display_mode, DisplayMode::Normal);
    }

    #[test]
    fn test_builder_rejects_oversized_contrast() {
        let result = Builder::new().contrast(128).build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidContrast { value: 128 })
        ));
    }

    #[test]
    fn test_builder_accepts_max_contrast() {
        let config = Builder::new().contrast(MAX_CONTRAST).build().unwrap();
        assert_eq!(config.contrast, 0x7F);
    }

    #[test]
    fn test_bias_encoding() {
        assert_eq!(Bias::OneTo100 as u8, 0);
        assert_eq!(Bias::OneTo40 as u8, 4);
        assert_eq!(Bias::OneTo10 as u8, 7);
    }

    #[test]
    fn test_display_mode_encoding() {
        assert_eq!(DisplayMode::Blank as u8, 0b000);
        assert_eq!(DisplayMode::Normal as u8, 0b100);
        assert_eq!(DisplayMode::AllSegmentsOn as u8, 0b001);
        assert_eq!(DisplayMode::InverseVideo as u8, 0b101);
    }
}
