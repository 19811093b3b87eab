//! Command-line options.

use std::path::PathBuf;

use chrono::Weekday;
use clap::Parser;

use crate::wallpaper::StyleMode;
use crate::weekday::parse_weekday;

#[derive(Debug, Parser)]
#[command(
    name = "weekday-wallpaper",
    version,
    about = "Set the desktop wallpaper for the current day of the week"
)]
pub struct Cli {
    /// Folder holding `<weekday>.jpg|png|bmp` images.
    #[arg(long, env = "WEEKDAY_WALLPAPER_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Serve this weekday instead of today.
    #[arg(long, value_name = "NAME", value_parser = parse_weekday)]
    pub day: Option<Weekday>,

    /// How the image is scaled on the desktop.
    #[arg(long, value_enum, default_value_t = StyleMode::Fit)]
    pub style: StyleMode,

    /// Report failures on the console only.
    #[arg(long)]
    pub no_popups: bool,

    /// Show an information popup once the wallpaper is set.
    #[arg(long, conflicts_with = "no_popups")]
    pub notify_success: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
