//! GNOME adapter driving `gsettings`.
//!
//! The Windows style codes written by the flow are translated into
//! `org.gnome.desktop.background picture-options`.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};
use url::Url;

use crate::error::{ApplyFailure, ERROR_INVALID_PARAMETER, WallpaperError};
use crate::wallpaper::{DesktopBackend, STYLE_PREFERENCE, TILE_PREFERENCE};

const SCHEMA: &str = "org.gnome.desktop.background";

#[derive(Debug)]
pub struct GnomeDesktop {
    program: OsString,
}

impl Default for GnomeDesktop {
    fn default() -> Self {
        Self {
            program: OsString::from("gsettings"),
        }
    }
}

impl GnomeDesktop {
    #[cfg(test)]
    fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `gsettings set <schema> <key> <value>`, returning the exit code on failure.
    fn set(&self, key: &str, value: &str) -> std::io::Result<Result<(), i32>> {
        debug!(key, value, "gsettings set");
        let status = Command::new(&self.program)
            .args(["set", SCHEMA, key, value])
            .status()?;
        if status.success() {
            Ok(Ok(()))
        } else {
            Ok(Err(status.code().unwrap_or(-1)))
        }
    }
}

impl DesktopBackend for GnomeDesktop {
    fn write_preference(&mut self, name: &str, value: &str) -> Result<(), WallpaperError> {
        let option = match name {
            STYLE_PREFERENCE => picture_option(value),
            TILE_PREFERENCE if value == "0" => return Ok(()),
            TILE_PREFERENCE => Some("wallpaper"),
            _ => None,
        };
        let Some(option) = option else {
            warn!(name, value, "no GNOME equivalent for preference");
            return Err(WallpaperError::PreferenceWrite {
                name: name.to_string(),
                code: ERROR_INVALID_PARAMETER,
            });
        };
        match self.set("picture-options", option) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(code)) => Err(WallpaperError::PreferenceWrite {
                name: name.to_string(),
                code,
            }),
            Err(err) => Err(WallpaperError::preference(name, &err)),
        }
    }

    fn apply_background(&mut self, path: &Path) -> Result<(), WallpaperError> {
        let absolute = path
            .canonicalize()
            .map_err(|err| WallpaperError::apply_io(&err))?;
        let uri = file_uri(&absolute).ok_or(WallpaperError::Apply {
            code: ERROR_INVALID_PARAMETER,
            reason: ApplyFailure::InvalidParameter,
        })?;
        for key in ["picture-uri", "picture-uri-dark"] {
            match self.set(key, &uri) {
                Ok(Ok(())) => {}
                Ok(Err(code)) => {
                    return Err(WallpaperError::Apply {
                        code,
                        reason: ApplyFailure::Other,
                    });
                }
                // gsettings could not be started; the image itself is fine.
                Err(err) => {
                    warn!(%err, "failed to run gsettings");
                    return Err(WallpaperError::Apply {
                        code: err.raw_os_error().unwrap_or(-1),
                        reason: ApplyFailure::Other,
                    });
                }
            }
        }
        Ok(())
    }
}

/// GNOME `picture-options` value for a Windows `WallpaperStyle` code.
fn picture_option(code: &str) -> Option<&'static str> {
    match code {
        "10" => Some("zoom"),
        "6" => Some("scaled"),
        "2" => Some("stretched"),
        "0" => Some("centered"),
        "22" => Some("spanned"),
        _ => None,
    }
}

/// `file://` URI for an absolute path.
fn file_uri(path: &Path) -> Option<String> {
    Url::from_file_path(path).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::wallpaper::StyleMode;

    #[test]
    fn every_style_has_a_picture_option() {
        assert_eq!(picture_option(StyleMode::Fit.code()), Some("scaled"));
        assert_eq!(picture_option(StyleMode::Fill.code()), Some("zoom"));
        assert_eq!(picture_option(StyleMode::Stretch.code()), Some("stretched"));
        assert_eq!(picture_option(StyleMode::Center.code()), Some("centered"));
        assert_eq!(picture_option(StyleMode::Span.code()), Some("spanned"));
        assert_eq!(picture_option("7"), None);
    }

    #[test]
    fn uri_escapes_spaces() {
        assert_eq!(
            file_uri(Path::new("/home/me/My Pictures/monday.jpg")).as_deref(),
            Some("file:///home/me/My%20Pictures/monday.jpg")
        );
    }

    #[test]
    fn uri_escapes_reserved_and_non_ascii() {
        assert_eq!(
            file_uri(Path::new("/home/me/café #1/50%?.jpg")).as_deref(),
            Some("file:///home/me/caf%C3%A9%20%231/50%25%3F.jpg")
        );
    }

    #[cfg(unix)]
    #[test]
    fn uri_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/walls/\xffmonday.jpg"));
        assert_eq!(file_uri(path).as_deref(), Some("file:///walls/%FFmonday.jpg"));
    }

    #[test]
    fn relative_path_has_no_uri() {
        assert_eq!(file_uri(Path::new("walls/monday.jpg")), None);
    }

    #[test]
    fn tile_off_is_a_no_op() {
        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        assert!(desktop.write_preference(TILE_PREFERENCE, "0").is_ok());
    }

    #[test]
    fn unknown_style_code_is_rejected() {
        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        let err = desktop.write_preference(STYLE_PREFERENCE, "99").unwrap_err();
        assert!(matches!(err, WallpaperError::PreferenceWrite { code: 87, .. }));
    }

    #[test]
    fn missing_gsettings_is_a_preference_error() {
        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        let err = desktop.write_preference(STYLE_PREFERENCE, "6").unwrap_err();
        assert!(matches!(err, WallpaperError::PreferenceWrite { ref name, .. } if name == STYLE_PREFERENCE));
    }

    #[test]
    fn missing_gsettings_does_not_blame_the_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monday.jpg");
        std::fs::write(&path, b"img").unwrap();

        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        let err = desktop.apply_background(&path).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::Apply { code: 2, reason: ApplyFailure::Other }
        ));
    }

    #[test]
    fn missing_image_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        let err = desktop.apply_background(&dir.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::Apply { reason: ApplyFailure::FileNotFound, .. }
        ));
    }

    #[test]
    fn missing_gsettings_run_prints_no_not_found_hint() {
        use chrono::Weekday;

        use crate::app::{self, Outcome, RunOptions};
        use crate::notify::tests::RecordingNotifier;

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("wednesday.png"), b"img").unwrap();
        let options = RunOptions {
            day: Weekday::Wed,
            wallpaper_dir: dir.path().to_path_buf(),
            style: StyleMode::Fit,
            notify_success: false,
        };

        let mut desktop = GnomeDesktop::with_program("weekday-wallpaper-missing-gsettings");
        let mut notifier = RecordingNotifier::default();
        let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
        let outcome = app::run(&options, &mut desktop, &mut notifier, &mut out, &mut err).unwrap();

        assert_eq!(outcome, Outcome::Failed);
        let stderr = String::from_utf8_lossy(&err);
        assert!(stderr.contains("Failed to set wallpaper."));
        assert!(!stderr.contains("The specified file was not found."));
    }
}
