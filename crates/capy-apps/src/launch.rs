//! Shell command construction for launching apps.
//!
//! Only builds strings. Spawning belongs to the caller.

use crate::desktop_entry::DesktopApp;

/// Appended inside terminal commands so the window keeps a usable shell.
pub const SHELL_PERSIST_SUFFIX: &str = "; exec $SHELL";

/// A finished command ready for the process spawner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Record id, for diagnostics.
    pub app_id: String,
    pub command: String,
}

impl LaunchRequest {
    pub fn new(app: &DesktopApp, terminal_emulator: &str) -> Self {
        Self {
            app_id: app.id.clone(),
            command: build_command(app, terminal_emulator),
        }
    }
}

/// Escape `s` for use between single quotes.
#[inline]
pub fn shell_quote(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Build the shell command for `app`.
///
/// Terminal apps run as `<terminal> -e sh -c '<exec>; exec $SHELL'`;
/// everything else as `sh -c '<exec>'`.
pub fn build_command(app: &DesktopApp, terminal_emulator: &str) -> String {
    let escaped = shell_quote(&app.exec);

    if app.terminal {
        format!("{terminal_emulator} -e sh -c '{escaped}{SHELL_PERSIST_SUFFIX}'")
    } else {
        format!("sh -c '{escaped}'")
    }
}
