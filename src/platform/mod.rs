//! Native desktop adapters.

#[cfg(not(windows))]
mod gnome;
#[cfg(windows)]
mod win32;

use tracing::debug;

use crate::wallpaper::DesktopBackend;

/// Backend for the platform this binary was built for.
#[cfg(windows)]
pub fn native() -> Box<dyn DesktopBackend> {
    debug!("using Windows desktop backend");
    Box::new(win32::WindowsDesktop)
}

/// Backend for the platform this binary was built for.
#[cfg(not(windows))]
pub fn native() -> Box<dyn DesktopBackend> {
    debug!("using GNOME desktop backend");
    Box::new(gnome::GnomeDesktop::default())
}
