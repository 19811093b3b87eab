//! Failure taxonomy shared by the wallpaper helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Win32 `ERROR_FILE_NOT_FOUND`.
pub const ERROR_FILE_NOT_FOUND: i32 = 2;
/// Win32 `ERROR_PATH_NOT_FOUND`.
pub const ERROR_PATH_NOT_FOUND: i32 = 3;
/// Win32 `ERROR_ACCESS_DENIED`.
pub const ERROR_ACCESS_DENIED: i32 = 5;
/// Win32 `ERROR_INVALID_PARAMETER`.
pub const ERROR_INVALID_PARAMETER: i32 = 87;

/// Coarse reason attached to a failed wallpaper apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyFailure {
    FileNotFound,
    AccessDenied,
    InvalidParameter,
    Other,
}

impl ApplyFailure {
    /// Classify a Win32 error code.
    pub fn from_win32(code: i32) -> Self {
        match code {
            ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => ApplyFailure::FileNotFound,
            ERROR_ACCESS_DENIED => ApplyFailure::AccessDenied,
            ERROR_INVALID_PARAMETER => ApplyFailure::InvalidParameter,
            _ => ApplyFailure::Other,
        }
    }

    /// Classify an I/O error raised by a non-Windows adapter.
    #[cfg_attr(windows, allow(dead_code))]
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ApplyFailure::FileNotFound,
            io::ErrorKind::PermissionDenied => ApplyFailure::AccessDenied,
            io::ErrorKind::InvalidInput => ApplyFailure::InvalidParameter,
            _ => ApplyFailure::Other,
        }
    }

    /// Console hint printed after the error code.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ApplyFailure::FileNotFound => Some("The specified file was not found."),
            ApplyFailure::AccessDenied => {
                Some("Access denied. Check if you have the necessary permissions.")
            }
            ApplyFailure::InvalidParameter => {
                Some("Invalid parameter. The file might not be a valid image format.")
            }
            ApplyFailure::Other => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum WallpaperError {
    /// No `<day>.{jpg,png,bmp}` exists in the wallpaper directory.
    #[error("Wallpaper file not found for {day} in any supported format.")]
    FileNotFound { day: String, dir: PathBuf },

    /// The preference store could not be opened or written.
    #[error("Failed to write {name}.  Error code: {code}")]
    PreferenceWrite { name: String, code: i32 },

    /// The desktop refused the new background.
    #[error("Failed to set wallpaper. Error code: {code}")]
    Apply { code: i32, reason: ApplyFailure },
}

impl WallpaperError {
    /// Build a preference error from the I/O error a store returned.
    pub fn preference(name: impl Into<String>, err: &io::Error) -> Self {
        WallpaperError::PreferenceWrite {
            name: name.into(),
            code: err.raw_os_error().unwrap_or(-1),
        }
    }

    /// Build an apply error from a Win32 code.
    #[cfg_attr(not(windows), allow(dead_code))]
    pub fn apply_win32(code: i32) -> Self {
        WallpaperError::Apply {
            code,
            reason: ApplyFailure::from_win32(code),
        }
    }

    /// Build an apply error from an I/O error.
    #[cfg_attr(windows, allow(dead_code))]
    pub fn apply_io(err: &io::Error) -> Self {
        WallpaperError::Apply {
            code: err.raw_os_error().unwrap_or(-1),
            reason: ApplyFailure::from_io(err),
        }
    }
}
