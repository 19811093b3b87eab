mod app;
mod cli;
mod error;
mod image_ops;
mod logging;
mod notify;
mod platform;
mod wallpaper;
mod weekday;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app::RunOptions;
use crate::cli::Cli;
use crate::notify::Notifier;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut notifier = notify::for_session(!cli.no_popups);
    match run(&cli, notifier.as_mut()) {
        Ok(code) => code,
        Err(err) => {
            let message = format!("{err:#}");
            notifier.error(&message);
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, notifier: &mut dyn Notifier) -> Result<ExitCode> {
    let wallpaper_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => image_ops::default_wallpaper_dir()
            .context("failed to resolve the wallpaper directory")?,
    };
    let options = RunOptions {
        day: cli.day.unwrap_or_else(weekday::today),
        wallpaper_dir,
        style: cli.style,
        notify_success: cli.notify_success,
    };

    let mut backend = platform::native();
    let outcome = app::run(
        &options,
        backend.as_mut(),
        notifier,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("failed to write console output")?;
    Ok(outcome.exit_code())
}
