//! Modal popups for the interactive session.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::debug;

const ERROR_TITLE: &str = "Error from Wallpaper Changer";
const INFO_TITLE: &str = "Information from Wallpaper Changer";

pub trait Notifier {
    fn error(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

/// Native message boxes.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl DialogNotifier {
    fn show(level: MessageLevel, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Notifier for DialogNotifier {
    fn error(&mut self, message: &str) {
        Self::show(MessageLevel::Error, ERROR_TITLE, message);
    }

    fn info(&mut self, message: &str) {
        Self::show(MessageLevel::Info, INFO_TITLE, message);
    }
}

/// Drops popups; used with `--no-popups`.
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn error(&mut self, message: &str) {
        debug!(message, "popup suppressed");
    }

    fn info(&mut self, message: &str) {
        debug!(message, "popup suppressed");
    }
}

pub fn for_session(popups: bool) -> Box<dyn Notifier> {
    if popups {
        Box::new(DialogNotifier)
    } else {
        Box::new(SilentNotifier)
    }
}
