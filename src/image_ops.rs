//! Locating the wallpaper file for a given day.

use std::path::{Path, PathBuf};

use anyhow::Result;
#[cfg(not(windows))]
use anyhow::anyhow;
#[cfg(not(windows))]
use directories::ProjectDirs;
use tracing::debug;

use crate::error::WallpaperError;

/// Extensions probed, highest priority first.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "png", "bmp"];

/// Fixed wallpaper folder used on Windows.
#[cfg(windows)]
const WINDOWS_WALLPAPER_DIR: &str = r"C:\Users\Public\wallpaper-changer\wallpapers";

/// Return `<dir>/<day>.<ext>` for the first extension that names a regular file.
pub fn resolve_wallpaper_path(dir: &Path, day: &str) -> Result<PathBuf, WallpaperError> {
    for ext in SUPPORTED_EXTENSIONS {
        let candidate = dir.join(format!("{day}.{ext}"));
        let is_file = candidate.is_file();
        debug!(path = %candidate.display(), found = is_file, "probing wallpaper");
        if is_file {
            return Ok(candidate);
        }
    }
    Err(WallpaperError::FileNotFound {
        day: day.to_string(),
        dir: dir.to_path_buf(),
    })
}

/// Resolve the folder wallpapers are read from when none is given.
#[cfg(windows)]
pub fn default_wallpaper_dir() -> Result<PathBuf> {
    Ok(PathBuf::from(WINDOWS_WALLPAPER_DIR))
}

/// Resolve the folder wallpapers are read from when none is given.
#[cfg(not(windows))]
pub fn default_wallpaper_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "wallpaper-changer", "wallpaper-changer")
        .ok_or_else(|| anyhow!("cannot determine data directory"))?;
    Ok(dirs.data_dir().join("wallpapers"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"img").unwrap();
    }

    #[test]
    fn jpg_wins_over_png_and_bmp() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "monday.bmp");
        touch(&dir, "monday.png");
        touch(&dir, "monday.jpg");

        let path = resolve_wallpaper_path(dir.path(), "monday").unwrap();
        assert_eq!(path, dir.path().join("monday.jpg"));
    }

    #[test]
    fn png_wins_over_bmp() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "tuesday.bmp");
        touch(&dir, "tuesday.png");

        let path = resolve_wallpaper_path(dir.path(), "tuesday").unwrap();
        assert_eq!(path, dir.path().join("tuesday.png"));
    }

    #[test]
    fn falls_back_to_bmp() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "sunday.bmp");

        let path = resolve_wallpaper_path(dir.path(), "sunday").unwrap();
        assert_eq!(path, dir.path().join("sunday.bmp"));
    }

    #[test]
    fn missing_day_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "thursday.jpg");
        touch(&dir, "friday.gif");

        let err = resolve_wallpaper_path(dir.path(), "friday").unwrap_err();
        match err {
            WallpaperError::FileNotFound { day, dir: searched } => {
                assert_eq!(day, "friday");
                assert_eq!(searched, dir.path());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directories_are_not_wallpapers() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("saturday.jpg")).unwrap();
        touch(&dir, "saturday.png");

        let path = resolve_wallpaper_path(dir.path(), "saturday").unwrap();
        assert_eq!(path, dir.path().join("saturday.png"));
    }

    #[test]
    fn search_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("monday.jpg"), b"img").unwrap();

        assert!(resolve_wallpaper_path(dir.path(), "monday").is_err());
    }

    #[test]
    fn default_dir_ends_in_wallpapers() {
        let dir = default_wallpaper_dir().unwrap();
        assert!(dir.ends_with("wallpapers"));
    }
}
