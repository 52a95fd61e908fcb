//! Terminal implementations of the flow's notifier and navigator.

use url::Url;

use crate::flow::{NotificationKind, Navigator, Notifier};

/// Prints notifications as single status lines.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        tracing::debug!(%kind, "notification: {message}");
        match kind {
            NotificationKind::Success => println!("✓ {message}"),
            NotificationKind::Error => eprintln!("✗ {message}"),
        }
    }
}

/// Sends the user to the console in their browser.
pub struct BrowserNavigator {
    open_browser: bool,
}

impl BrowserNavigator {
    /// With `open_browser` unset the URL is only printed.
    #[must_use]
    pub const fn new(open_browser: bool) -> Self {
        Self { open_browser }
    }
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &Url) {
        if self.open_browser {
            match open::that(url.as_str()) {
                Ok(()) => {
                    println!("Opened {url}");
                    return;
                }
                Err(e) => tracing::debug!("could not open browser: {e}"),
            }
        }
        println!("Continue in the console: {url}");
    }
}
