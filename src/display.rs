use log::info;
use macroquad::prelude::{request_new_screen_size, set_fullscreen};
use std::fmt;
use std::str::FromStr;

use crate::config::Settings;
use crate::error::DisplayModeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Window size for `Conf`. A side too large for the window system falls
    /// back to the default size.
    pub fn window_size(&self) -> (i32, i32) {
        match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                let fallback = Self::default();
                (fallback.width as i32, fallback.height as i32)
            }
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Parses `"WIDTHxHEIGHT"`, both parts positive integers.
impl FromStr for Resolution {
    type Err = DisplayModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_error = || DisplayModeError::Parse(input.to_string());

        let (w_str, h_str) = input.trim().split_once('x').ok_or_else(parse_error)?;
        let width = w_str.trim().parse::<u32>().map_err(|_| parse_error())?;
        let height = h_str.trim().parse::<u32>().map_err(|_| parse_error())?;

        if width == 0 || height == 0 {
            return Err(DisplayModeError::ZeroSize { width, height });
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Something that can be switched to a new size and window mode.
pub trait DisplaySurface {
    fn set_mode(
        &mut self,
        resolution: Resolution,
        fullscreen: bool,
    ) -> Result<(), DisplayModeError>;
}

/// The real macroquad window.
pub struct WindowSurface;

impl DisplaySurface for WindowSurface {
    fn set_mode(
        &mut self,
        resolution: Resolution,
        fullscreen: bool,
    ) -> Result<(), DisplayModeError> {
        set_fullscreen(fullscreen);
        if !fullscreen {
            request_new_screen_size(resolution.width_f32(), resolution.height_f32());
        }
        Ok(())
    }
}

/// Switches `surface` to the mode described by `settings`. On error nothing
/// has been changed and the caller keeps its previous resolution.
pub fn apply_display_mode(
    settings: &Settings,
    surface: &mut impl DisplaySurface,
) -> Result<Resolution, DisplayModeError> {
    let resolution: Resolution = settings.resolution.parse()?;
    surface.set_mode(resolution, settings.fullscreen)?;
    info!(
        "Display mode set to {} ({})",
        resolution,
        if settings.fullscreen { "fullscreen" } else { "windowed" }
    );
    Ok(resolution)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every mode switch; can be told to fail.
    #[derive(Default)]
    pub struct FakeSurface {
        pub modes: Vec<(Resolution, bool)>,
        pub fail: bool,
    }

    impl DisplaySurface for FakeSurface {
        fn set_mode(
            &mut self,
            resolution: Resolution,
            fullscreen: bool,
        ) -> Result<(), DisplayModeError> {
            if self.fail {
                return Err(DisplayModeError::ModeSwitch("no such mode".to_string()));
            }
            self.modes.push((resolution, fullscreen));
            Ok(())
        }
    }

    #[test]
    fn parses_width_and_height() {
        assert_eq!("1280x720".parse::<Resolution>(), Ok(Resolution::new(1280, 720)));
        assert_eq!(Resolution::new(1024, 768).to_string(), "1024x768");
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["abc", "1280", "1280x", "x720", "12.5x720", "-1x5"] {
            assert!(
                matches!(bad.parse::<Resolution>(), Err(DisplayModeError::Parse(_))),
                "{bad} should not parse"
            );
        }
        assert_eq!(
            "0x600".parse::<Resolution>(),
            Err(DisplayModeError::ZeroSize { width: 0, height: 600 })
        );
    }

    #[test]
    fn oversized_saved_resolution_opens_at_default_size() {
        let huge: Resolution = "4000000000x600".parse().unwrap();
        assert_eq!(huge.window_size(), (800, 600));
        assert_eq!(Resolution::new(1920, 1080).window_size(), (1920, 1080));
    }

    #[test]
    fn apply_switches_surface() {
        let settings = Settings {
            resolution: "1920x1080".to_string(),
            fullscreen: true,
            ..Settings::default()
        };
        let mut surface = FakeSurface::default();

        let applied = apply_display_mode(&settings, &mut surface).unwrap();

        assert_eq!(applied, Resolution::new(1920, 1080));
        assert_eq!(surface.modes, vec![(Resolution::new(1920, 1080), true)]);
    }

    #[test]
    fn bad_resolution_never_reaches_the_surface() {
        let settings = Settings {
            resolution: "1280".to_string(),
            ..Settings::default()
        };
        let mut surface = FakeSurface::default();

        assert!(apply_display_mode(&settings, &mut surface).is_err());
        assert!(surface.modes.is_empty());
    }
}
