//! Transient user notifications.
//!
//! Every surfaced outcome goes to stderr. With desktop notifications enabled
//! it is also raised through the system notification daemon; failing to do so
//! is logged and otherwise ignored.

use std::fmt::Display;

use tracing::{debug, warn};

const APP_NAME: &str = "StoreDesk";

/// Outcome kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Failure,
}

impl Level {
    const fn marker(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failure => "✗",
        }
    }
}

/// Surfaces operation outcomes to the user.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    desktop: bool,
}

impl Notifier {
    pub const fn new(desktop: bool) -> Self {
        Self { desktop }
    }

    pub fn success(&self, message: impl Display) {
        self.show(Level::Success, &message.to_string());
    }

    pub fn failure(&self, summary: &str, error: impl Display) {
        warn!("{summary}: {error}");
        self.show(Level::Failure, &format!("{summary}: {error}"));
    }

    fn show(&self, level: Level, text: &str) {
        eprintln!("{}", format_line(level, text));

        if self.desktop {
            let result = notify_rust::Notification::new()
                .appname(APP_NAME)
                .summary(APP_NAME)
                .body(text)
                .show();
            match result {
                Ok(_) => debug!("Desktop notification raised"),
                Err(e) => warn!("Could not raise desktop notification: {e}"),
            }
        }
    }
}

/// One notification line as printed to the terminal.
pub fn format_line(level: Level, text: &str) -> String {
    format!("{} {text}", level.marker())
}
