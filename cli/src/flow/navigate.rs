//! Navigation capability.

use url::Url;

use crate::config::ConsoleConfig;

/// Full navigation to an absolute URL, discarding any cached state.
pub trait Navigator {
    /// Navigates to `url`.
    fn redirect(&self, url: &Url);
}

/// Where the flow navigates after a mutation.
///
/// Switching keeps the app's base path; creating and deleting go to the bare
/// origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTargets {
    /// Origin plus base path, used after a switch.
    pub app_root: Url,
    /// Bare origin, used after create and delete.
    pub origin_root: Url,
}

impl From<&ConsoleConfig> for NavigationTargets {
    fn from(console: &ConsoleConfig) -> Self {
        Self {
            app_root: console.app_root(),
            origin_root: console.origin_root(),
        }
    }
}
