//! Windows adapter: `HKCU\Control Panel\Desktop` values and `SystemParametersInfoW`.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use tracing::{debug, warn};
use windows::Win32::UI::WindowsAndMessaging::{
    SPI_SETDESKWALLPAPER, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SystemParametersInfoW,
};
use windows::core::HRESULT;
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};

use crate::error::WallpaperError;
use crate::wallpaper::DesktopBackend;

/// Per-user desktop settings key.
const DESKTOP_KEY: &str = "Control Panel\\Desktop";

/// Registry plus `SystemParametersInfoW`.
#[derive(Debug, Default)]
pub struct WindowsDesktop;

impl DesktopBackend for WindowsDesktop {
    fn write_preference(&mut self, name: &str, value: &str) -> Result<(), WallpaperError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        // The key handle closes on drop, on every return path.
        let desktop = hkcu
            .open_subkey_with_flags(DESKTOP_KEY, KEY_SET_VALUE)
            .map_err(|err| {
                warn!(key = DESKTOP_KEY, %err, "failed to open registry key");
                WallpaperError::preference(DESKTOP_KEY, &err)
            })?;
        debug!(name, value, "writing registry value");
        desktop
            .set_value(name, &value)
            .map_err(|err| WallpaperError::preference(name, &err))
    }

    fn apply_background(&mut self, path: &Path) -> Result<(), WallpaperError> {
        let wide_path = to_wide_null(path);
        unsafe {
            SystemParametersInfoW(
                SPI_SETDESKWALLPAPER,
                0,
                Some(wide_path.as_ptr() as *mut _),
                SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
            )
        }
        .map_err(|err| {
            warn!(%err, "SystemParametersInfoW failed");
            WallpaperError::apply_win32(win32_code(err.code()))
        })
    }
}

/// Recover the Win32 error code wrapped in an `HRESULT_FROM_WIN32` value.
fn win32_code(hr: HRESULT) -> i32 {
    let raw = hr.0 as u32;
    if raw & 0xFFFF_0000 == 0x8007_0000 {
        (raw & 0xFFFF) as i32
    } else {
        hr.0
    }
}

fn to_wide_null(path: &Path) -> Vec<u16> {
    OsStr::new(path)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
