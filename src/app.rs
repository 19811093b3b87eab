//! The daily run: style, resolve, apply, report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Weekday;
use tracing::{info, warn};

use crate::error::WallpaperError;
use crate::image_ops::resolve_wallpaper_path;
use crate::notify::Notifier;
use crate::wallpaper::{DesktopBackend, StyleMode, apply_wallpaper, set_display_style};
use crate::weekday::day_name;

/// Inputs for one run, resolved by `main`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub day: Weekday,
    pub wallpaper_dir: PathBuf,
    pub style: StyleMode,
    pub notify_success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Applied => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

/// Run the flow, writing status lines to `out` and failures to `err`.
///
/// A style failure is reported and the run continues; a missing or rejected
/// wallpaper ends it with [`Outcome::Failed`].
pub fn run(
    options: &RunOptions,
    backend: &mut dyn DesktopBackend,
    notifier: &mut dyn Notifier,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Outcome> {
    let day = day_name(options.day);
    writeln!(out, "Today is {day}")?;

    if let Err(style_err) = set_display_style(backend, options.style) {
        warn!(error = %style_err, "wallpaper style not applied");
        let message = format!("Failed to set wallpaper style. {style_err}");
        notifier.error(&message);
        writeln!(err, "{message}")?;
    }

    let path = match resolve_wallpaper_path(&options.wallpaper_dir, day) {
        Ok(path) => path,
        Err(resolve_err) => {
            warn!(dir = %options.wallpaper_dir.display(), day, "no wallpaper for today");
            let message = resolve_err.to_string();
            notifier.error(&message);
            writeln!(err, "{message}")?;
            return Ok(Outcome::Failed);
        }
    };

    writeln!(out, "Attempting to set wallpaper: {}", path.display())?;
    if let Err(apply_err) = apply_wallpaper(backend, &path) {
        warn!(error = %apply_err, path = %path.display(), "wallpaper not applied");
        let message = apply_err.to_string();
        notifier.error(&message);
        writeln!(err, "{message}")?;
        if let WallpaperError::Apply { reason, .. } = &apply_err {
            if let Some(hint) = reason.hint() {
                writeln!(err, "{hint}")?;
            }
        }
        return Ok(Outcome::Failed);
    }

    writeln!(out, "Wallpaper set to: {}", path.display())?;
    info!(path = %path.display(), "wallpaper applied");
    if options.notify_success {
        notifier.info(&format!("Wallpaper set to: {}", path.display()));
    }
    Ok(Outcome::Applied)
}
