//! Display styles and the desktop seam the daily run goes through.

use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, warn};

use crate::error::{ApplyFailure, ERROR_FILE_NOT_FOUND, WallpaperError};

/// Preference holding the style code.
pub const STYLE_PREFERENCE: &str = "WallpaperStyle";
/// Preference holding the tiling flag.
pub const TILE_PREFERENCE: &str = "TileWallpaper";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleMode {
    Fill,
    Fit,
    Stretch,
    Center,
    Span,
}

impl StyleMode {
    pub fn label(&self) -> &'static str {
        match self {
            StyleMode::Fill => "Fill",
            StyleMode::Fit => "Fit",
            StyleMode::Stretch => "Stretch",
            StyleMode::Center => "Center",
            StyleMode::Span => "Span",
        }
    }

    /// Windows `WallpaperStyle` value.
    pub fn code(&self) -> &'static str {
        match self {
            StyleMode::Fill => "10",
            StyleMode::Fit => "6",
            StyleMode::Stretch => "2",
            StyleMode::Center => "0",
            StyleMode::Span => "22",
        }
    }
}

/// The two things the program needs from a desktop environment.
pub trait DesktopBackend {
    /// Persist a named user preference.
    fn write_preference(&mut self, name: &str, value: &str) -> Result<(), WallpaperError>;

    /// Set, persist and broadcast a new desktop background.
    fn apply_background(&mut self, path: &Path) -> Result<(), WallpaperError>;
}

pub fn set_display_style(
    backend: &mut dyn DesktopBackend,
    mode: StyleMode,
) -> Result<(), WallpaperError> {
    debug!(style = mode.label(), code = mode.code(), "writing wallpaper style");
    backend.write_preference(STYLE_PREFERENCE, mode.code())?;
    // Tiling stays off for every supported style.
    backend.write_preference(TILE_PREFERENCE, "0")?;
    Ok(())
}

pub fn apply_wallpaper(backend: &mut dyn DesktopBackend, path: &Path) -> Result<(), WallpaperError> {
    if !path.is_file() {
        warn!(path = %path.display(), "wallpaper file does not exist");
        return Err(WallpaperError::Apply {
            code: ERROR_FILE_NOT_FOUND,
            reason: ApplyFailure::FileNotFound,
        });
    }
    backend.apply_background(path)
}
