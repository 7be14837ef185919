//! System statistics and the reference status screen
//!
//! The reference wiring for this panel is a little system monitor: a
//! title line, a separator, then uptime, CPU load, free RAM and CPU
//! temperature, repainted once a second. This module provides the two
//! halves of that screen:
//!
//! - [`StatsSnapshot`] and [`StatusScreen`]: plain data plus a pure
//!   renderer into a [`Framebuffer`], usable on any target.
//! - [`SystemStats`] (feature `std`, Linux): reads the snapshot from
//!   `/proc` and `/sys`.
//!
//! The polling loop itself stays with the caller, so a host harness can
//! tick it, cancel it, or drive it from a timer:
//!
//! ```rust,ignore
//! let screen = StatusScreen::new();
//! let stats = SystemStats::new();
//! let mut frame = Framebuffer::new();
//! while running.load(Ordering::Relaxed) {
//!     screen.render(&mut frame, &stats.snapshot()?);
//!     display.flush(&frame)?;
//!     std::thread::sleep(Duration::from_secs(1));
//! }
//! ```

use core::fmt::Write;

use crate::color::Color;
use crate::framebuffer::Framebuffer;

#[cfg(feature = "std")]
pub use self::sys::{StatsError, SystemStats};

/// Title shown by the reference status screen
pub const DEFAULT_TITLE: &str = "SunFounder.com";

/// One reading of the host statistics
///
/// A `None` temperature means the sensor was unreadable; the screen
/// shows a placeholder instead of failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsSnapshot {
    /// Uptime in whole minutes
    pub uptime_minutes: u64,
    /// 1-minute load average as a percentage of one core
    pub cpu_load_percent: u32,
    /// Free RAM in megabytes
    pub free_ram_mb: u64,
    /// CPU temperature in degrees Celsius, if readable
    pub cpu_temp_c: Option<f32>,
}

/// Renders a [`StatsSnapshot`] in the reference layout
///
/// Title at the top, separator line across row 10, one statistic per
/// 8-pixel text row below. Rendering the same snapshot twice produces
/// identical framebuffers.
pub struct StatusScreen {
    /// Title drawn on the first text row
    title: &'static str,
}

impl Default for StatusScreen {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
        }
    }
}

impl StatusScreen {
    /// Create a screen with the default title
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a screen with a custom title
    pub fn with_title(title: &'static str) -> Self {
        Self { title }
    }

    /// Clear the framebuffer and draw the full status screen into it
    pub fn render(&self, frame: &mut Framebuffer, stats: &StatsSnapshot) {
        frame.clear();
        frame.draw_string(0, 0, self.title, Color::Black);
        frame.draw_line(0, 10, 83, 10, Color::Black);

        frame.set_cursor(0, 12);
        let _ = write!(frame, "Uptime {} min.", stats.uptime_minutes);
        frame.set_cursor(0, 20);
        let _ = write!(frame, "CPU  {}%", stats.cpu_load_percent);
        frame.set_cursor(0, 28);
        let _ = write!(frame, "RAM  {} MB", stats.free_ram_mb);
        frame.set_cursor(0, 36);
        match stats.cpu_temp_c {
            Some(temp) => {
                let _ = write!(frame, "TEMP {:.2} C", temp);
            }
            None => {
                let _ = write!(frame, "TEMP --.-- C");
            }
        }
    }
}

#[cfg(feature = "std")]
mod sys {
    //! Linux statistic sources
    //!
    //! Reads `/proc/uptime`, `/proc/loadavg`, `/proc/meminfo`, and the
    //! thermal zone's millidegree temperature file.

    use std::fs;
    use std::io;
    use std::path::PathBuf;

    use log::warn;

    use super::StatsSnapshot;

    const UPTIME_PATH: &str = "/proc/uptime";
    const LOADAVG_PATH: &str = "/proc/loadavg";
    const MEMINFO_PATH: &str = "/proc/meminfo";
    const THERMAL_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

    /// Errors reading or interpreting a statistic source
    #[derive(Debug)]
    pub enum StatsError {
        /// The source file could not be read
        Io(io::Error),
        /// The source file did not contain the expected field
        Parse {
            /// The field that failed to parse
            what: &'static str,
        },
    }

    impl From<io::Error> for StatsError {
        fn from(err: io::Error) -> Self {
            Self::Io(err)
        }
    }

    impl core::fmt::Display for StatsError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                Self::Io(err) => write!(f, "Statistic source unreadable: {err}"),
                Self::Parse { what } => write!(f, "Statistic source malformed: {what}"),
            }
        }
    }

    impl std::error::Error for StatsError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Io(err) => Some(err),
                Self::Parse { .. } => None,
            }
        }
    }

    /// Reader for the host statistics shown on the status screen
    ///
    /// Paths default to the standard Linux locations. The thermal zone
    /// differs between boards, so it can be overridden.
    pub struct SystemStats {
        uptime_path: PathBuf,
        loadavg_path: PathBuf,
        meminfo_path: PathBuf,
        thermal_path: PathBuf,
    }

    impl Default for SystemStats {
        fn default() -> Self {
            Self {
                uptime_path: PathBuf::from(UPTIME_PATH),
                loadavg_path: PathBuf::from(LOADAVG_PATH),
                meminfo_path: PathBuf::from(MEMINFO_PATH),
                thermal_path: PathBuf::from(THERMAL_PATH),
            }
        }
    }

    impl SystemStats {
        /// Create a reader with the default Linux paths
        pub fn new() -> Self {
            Self::default()
        }

        /// Override the thermal zone temperature file
        ///
        /// Useful on boards where the CPU sensor is not `thermal_zone0`.
        pub fn thermal_path(mut self, path: impl Into<PathBuf>) -> Self {
            self.thermal_path = path.into();
            self
        }

        /// Uptime in whole minutes
        pub fn uptime_minutes(&self) -> Result<u64, StatsError> {
            parse_uptime_minutes(&fs::read_to_string(&self.uptime_path)?)
        }

        /// 1-minute load average as a percentage of one core
        pub fn cpu_load_percent(&self) -> Result<u32, StatsError> {
            parse_load_percent(&fs::read_to_string(&self.loadavg_path)?)
        }

        /// Free RAM in megabytes
        pub fn free_ram_mb(&self) -> Result<u64, StatsError> {
            parse_free_ram_mb(&fs::read_to_string(&self.meminfo_path)?)
        }

        /// CPU temperature in degrees Celsius
        pub fn cpu_temperature_c(&self) -> Result<f32, StatsError> {
            parse_temperature_c(&fs::read_to_string(&self.thermal_path)?)
        }

        /// Read all statistics
        ///
        /// An unreadable temperature is reported as `None` so the
        /// display keeps running; the other sources propagate errors.
        pub fn snapshot(&self) -> Result<StatsSnapshot, StatsError> {
            let cpu_temp_c = match self.cpu_temperature_c() {
                Ok(temp) => Some(temp),
                Err(err) => {
                    warn!("CPU temperature unreadable: {err}");
                    None
                }
            };
            Ok(StatsSnapshot {
                uptime_minutes: self.uptime_minutes()?,
                cpu_load_percent: self.cpu_load_percent()?,
                free_ram_mb: self.free_ram_mb()?,
                cpu_temp_c,
            })
        }
    }

    fn parse_uptime_minutes(contents: &str) -> Result<u64, StatsError> {
        let seconds: f64 = contents
            .split_whitespace()
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or(StatsError::Parse {
                what: "uptime seconds",
            })?;
        Ok((seconds / 60.0) as u64)
    }

    fn parse_load_percent(contents: &str) -> Result<u32, StatsError> {
        let load1: f64 = contents
            .split_whitespace()
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or(StatsError::Parse {
                what: "1-minute load average",
            })?;
        Ok((load1 * 100.0).round() as u32)
    }

    fn parse_free_ram_mb(contents: &str) -> Result<u64, StatsError> {
        for line in contents.lines() {
            if let Some(rest) = line.strip_prefix("MemFree:") {
                let kb: u64 = rest
                    .split_whitespace()
                    .next()
                    .and_then(|field| field.parse().ok())
                    .ok_or(StatsError::Parse { what: "MemFree kB" })?;
                return Ok(kb / 1024);
            }
        }
        Err(StatsError::Parse {
            what: "MemFree line",
        })
    }

    fn parse_temperature_c(contents: &str) -> Result<f32, StatsError> {
        let millidegrees: i64 = contents.trim().parse().map_err(|_| StatsError::Parse {
            what: "millidegree temperature",
        })?;
        Ok(millidegrees as f32 / 1000.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_uptime_minutes() {
            assert_eq!(parse_uptime_minutes("8129.47 30132.28\n").unwrap(), 135);
            assert_eq!(parse_uptime_minutes("59.99 120.00\n").unwrap(), 0);
        }

        #[test]
        fn test_parse_uptime_rejects_garbage() {
            assert!(matches!(
                parse_uptime_minutes("not-a-number\n"),
                Err(StatsError::Parse { .. })
            ));
            assert!(matches!(
                parse_uptime_minutes(""),
                Err(StatsError::Parse { .. })
            ));
        }

        #[test]
        fn test_parse_load_percent() {
            assert_eq!(
                parse_load_percent("0.42 0.33 0.25 1/123 4567\n").unwrap(),
                42
            );
            assert_eq!(parse_load_percent("2.00 1.50 1.00 2/99 100\n").unwrap(), 200);
            assert_eq!(parse_load_percent("0.004 0.0 0.0 1/1 1\n").unwrap(), 0);
        }

        #[test]
        fn test_parse_free_ram_mb() {
            let meminfo = "MemTotal:        945512 kB\n\
                           MemFree:         398244 kB\n\
                           Buffers:          33788 kB\n";
            assert_eq!(parse_free_ram_mb(meminfo).unwrap(), 388);
        }

        #[test]
        fn test_parse_free_ram_requires_memfree_line() {
            assert!(matches!(
                parse_free_ram_mb("MemTotal: 945512 kB\n"),
                Err(StatsError::Parse { .. })
            ));
        }

        #[test]
        fn test_parse_temperature_c() {
            let temp = parse_temperature_c("47774\n").unwrap();
            assert!((temp - 47.774).abs() < 1e-4);
        }

        #[test]
        fn test_parse_temperature_rejects_garbage() {
            assert!(matches!(
                parse_temperature_c("cool\n"),
                Err(StatsError::Parse { .. })
            ));
        }

        #[test]
        fn test_missing_file_is_io_error() {
            let stats = SystemStats::new().thermal_path("/nonexistent/thermal/temp");
            assert!(matches!(
                stats.cpu_temperature_c(),
                Err(StatsError::Io(_))
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::WIDTH;

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            uptime_minutes: 135,
            cpu_load_percent: 42,
            free_ram_mb: 388,
            cpu_temp_c: Some(47.77),
        }
    }

    #[test]
    fn test_render_draws_separator_across_row_10() {
        let mut frame = Framebuffer::new();
        StatusScreen::new().render(&mut frame, &snapshot());
        for x in 0..WIDTH as i32 {
            assert_eq!(frame.pixel(x, 10), Some(Color::Black));
        }
    }

    #[test]
    fn test_render_matches_manual_drawing() {
        let mut rendered = Framebuffer::new();
        StatusScreen::new().render(&mut rendered, &snapshot());

        let mut manual = Framebuffer::new();
        manual.draw_string(0, 0, "SunFounder.com", Color::Black);
        manual.draw_line(0, 10, 83, 10, Color::Black);
        manual.draw_string(0, 12, "Uptime 135 min.", Color::Black);
        manual.draw_string(0, 20, "CPU  42%", Color::Black);
        manual.draw_string(0, 28, "RAM  388 MB", Color::Black);
        manual.draw_string(0, 36, "TEMP 47.77 C", Color::Black);

        assert_eq!(rendered.data(), manual.data());
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut first = Framebuffer::new();
        let mut second = Framebuffer::new();
        let screen = StatusScreen::new();
        screen.render(&mut first, &snapshot());
        screen.render(&mut second, &snapshot());
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut frame = Framebuffer::new();
        frame.fill(Color::Black);
        StatusScreen::new().render(&mut frame, &snapshot());
        // Row 47 is below every text row and must be clear again
        for x in 0..WIDTH as i32 {
            assert_eq!(frame.pixel(x, 47), Some(Color::White));
        }
    }

    #[test]
    fn test_render_with_unknown_temperature_shows_placeholder() {
        let mut with_none = Framebuffer::new();
        StatusScreen::new().render(
            &mut with_none,
            &StatsSnapshot {
                cpu_temp_c: None,
                ..snapshot()
            },
        );

        let mut manual = Framebuffer::new();
        manual.draw_string(0, 0, "SunFounder.com", Color::Black);
        manual.draw_line(0, 10, 83, 10, Color::Black);
        manual.draw_string(0, 12, "Uptime 135 min.", Color::Black);
        manual.draw_string(0, 20, "CPU  42%", Color::Black);
        manual.draw_string(0, 28, "RAM  388 MB", Color::Black);
        manual.draw_string(0, 36, "TEMP --.-- C", Color::Black);

        assert_eq!(with_none.data(), manual.data());
    }

    #[test]
    fn test_custom_title() {
        let mut frame = Framebuffer::new();
        StatusScreen::with_title("Raspberry Pi:").render(&mut frame, &snapshot());

        let mut manual = Framebuffer::new();
        manual.draw_string(0, 0, "Raspberry Pi:", Color::Black);
        assert_eq!(&frame.data()[..78], &manual.data()[..78]);
    }
}
